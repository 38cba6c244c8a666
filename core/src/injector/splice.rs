//! Splices rendered entries into a single region of the live buffer.

use super::entries::{line_ending, render};
use super::ids::PlannedFile;
use super::regions::{locate, Region};
use crate::config::InjectConfig;
use crate::error::{AppError, AppResult};
use crate::report::RegionReport;

/// Locates `region` in the current `document` and inserts one entry per planned file.
///
/// A region that cannot be located is reported as skipped and the document is
/// left untouched. Only unexpected failures (an unusable group pattern) are errors.
pub fn splice_region(
    document: &mut String,
    region: Region,
    plan: &[PlannedFile],
    config: &InjectConfig,
) -> AppResult<RegionReport> {
    let anchor = match locate(region, document, config) {
        Ok(anchor) => anchor,
        Err(err @ AppError::RegionNotFound(_)) => {
            tracing::warn!(%region, "region not found, skipping");
            return Ok(RegionReport::skipped(region, err.to_string()));
        }
        Err(err) => return Err(err),
    };

    tracing::debug!(
        %region,
        start = anchor.span.start,
        end = anchor.span.end,
        insert_at = anchor.insert_at,
        "located region"
    );

    let patch = render(
        region,
        plan,
        &anchor,
        &config.phase_label,
        line_ending(document),
    );
    document.insert_str(anchor.insert_at, &patch);

    tracing::info!(%region, entries = plan.len(), "inserted entries");
    Ok(RegionReport::inserted(region, plan.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::injector::files::LogicalFile;
    use crate::injector::ids::{IdAllocator, SequentialIds};
    use crate::report::RegionStatus;
    use pretty_assertions::assert_eq;

    const DOC: &str = "head\n\
/* Begin PBXBuildFile section */\n\
/* End PBXBuildFile section */\n\
middle\n\
/* Begin PBXFileReference section */\n\
/* End PBXFileReference section */\n\
tail\n";

    fn plan() -> Vec<PlannedFile> {
        let files = LogicalFile::parse_list(&["Alpha.x", "Beta.x"]).unwrap();
        IdAllocator::new(SequentialIds::starting_at(1)).plan(&files)
    }

    #[test]
    fn test_splice_only_touches_its_region() {
        let mut doc = DOC.to_string();
        let report =
            splice_region(&mut doc, Region::FileReference, &plan(), &InjectConfig::default())
                .unwrap();
        assert!(report.is_inserted());

        let begin = "/* Begin PBXFileReference section */";
        let end = "/* End PBXFileReference section */";
        let (before_old, rest_old) = DOC.split_once(begin).unwrap();
        let (before_new, rest_new) = doc.split_once(begin).unwrap();
        assert_eq!(before_new, before_old);
        assert_eq!(
            rest_new.split_once(end).unwrap().1,
            rest_old.split_once(end).unwrap().1
        );
    }

    #[test]
    fn test_splice_keeps_input_order() {
        let mut doc = DOC.to_string();
        splice_region(&mut doc, Region::BuildFile, &plan(), &InjectConfig::default()).unwrap();
        let alpha = doc.find("Alpha.x in Sources").unwrap();
        let beta = doc.find("Beta.x in Sources").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_missing_region_leaves_document_alone() {
        let mut doc = DOC.to_string();
        let report =
            splice_region(&mut doc, Region::SourcesPhase, &plan(), &InjectConfig::default())
                .unwrap();
        assert_eq!(doc, DOC);
        assert_eq!(
            report.status,
            RegionStatus::Skipped {
                reason: "Region not found: PBXSourcesBuildPhase files list".into()
            }
        );
    }

    #[test]
    fn test_preserves_crlf() {
        let mut doc = DOC.replace('\n', "\r\n");
        splice_region(&mut doc, Region::FileReference, &plan(), &InjectConfig::default())
            .unwrap();
        assert_eq!(doc.matches("\r\n").count(), doc.matches('\n').count());
    }
}
