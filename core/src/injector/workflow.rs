use super::files::LogicalFile;
use super::guard::{self, GuardVerdict};
use super::ids::{IdAllocator, IdSource};
use super::regions::Region;
use super::splice::splice_region;
use crate::config::InjectConfig;
use crate::error::AppResult;
use crate::report::{InjectionOutcome, InjectionReport};

/// Registers `names` in the project document held by `document`.
///
/// 1. Validates the names and the config. Nothing is touched on failure.
/// 2. Stops with `AlreadyApplied` if the first name already appears in the document.
/// 3. Mints a reference and a membership identifier per file.
/// 4. Splices every region in [`Region::ORDER`], each against the buffer left by the previous one.
///    Regions that cannot be located are skipped and reported; the others still go in.
pub fn inject_files<S: AsRef<str>>(
    document: &mut String,
    names: &[S],
    config: &InjectConfig,
    ids: impl IdSource,
) -> AppResult<InjectionOutcome> {
    // 1. Validate
    let files = LogicalFile::parse_list(names)?;
    config.validate()?;

    // 2. Guard
    let first = &files[0];
    if guard::check(document, first) == GuardVerdict::AlreadyPresent {
        tracing::info!(marker = %first, "files already registered, nothing to do");
        return Ok(InjectionOutcome::AlreadyApplied {
            marker: first.name().to_string(),
        });
    }

    // 3. Allocate
    let plan = IdAllocator::new(ids).plan(&files);

    // 4. Splice sequentially
    let mut regions = Vec::with_capacity(Region::ORDER.len());
    for region in Region::ORDER {
        regions.push(splice_region(document, region, &plan, config)?);
    }

    Ok(InjectionOutcome::Applied(InjectionReport {
        files: plan,
        regions,
    }))
}
