#![deny(missing_docs)]

//! # Inject Command
//!
//! Registers source files in the project document.
//!
//! 1. Prints whether each file exists under the source directory (advisory).
//! 2. Runs the injection engine against the project document.
//! 3. Prints one line per region, or the JSON outcome with `--json`.

use crate::args::{presence_lines, ProjectArgs};
use crate::error::CliResult;
use std::path::Path;
use xcinject_core::{
    inject_into_project, InjectConfig, InjectionOutcome, InjectionReport, RandomIds, Region,
    RegionReport, RegionStatus,
};

/// Arguments for the inject command.
#[derive(clap::Args, Debug, Clone)]
pub struct InjectArgs {
    #[clap(flatten)]
    pub project: ProjectArgs,

    /// Object identifier of the group that lists the new files.
    #[clap(
        long,
        env = "XCINJECT_GROUP_ID",
        default_value = xcinject_core::config::DEFAULT_GROUP_ID
    )]
    pub group_id: String,

    /// Name of that group, used in progress output.
    #[clap(long, default_value = xcinject_core::config::DEFAULT_GROUP_NAME)]
    pub group_name: String,

    /// Build phase name written into build file comments.
    #[clap(long, default_value = xcinject_core::config::DEFAULT_PHASE_LABEL)]
    pub phase_label: String,

    /// Print the outcome as JSON instead of progress lines.
    #[clap(long)]
    pub json: bool,
}

/// Executes the injection.
pub fn execute(args: &InjectArgs) -> CliResult<InjectionOutcome> {
    let config = InjectConfig::default()
        .with_group(&args.group_id, &args.group_name)
        .with_phase_label(&args.phase_label);
    let files = args.project.files.as_slice();

    tracing::debug!(
        project = %args.project.project.display(),
        files = ?files,
        group = %config.group_id,
        "resolved inject arguments"
    );

    if !args.json {
        println!("=== Adding Source Files to Xcode Project ===\n");
        for line in presence_lines(&args.project.source_dir, files) {
            println!("{}", line);
        }
        println!();
        println!("{}", adding_line(files.len(), &args.project.project));
    }

    let outcome = inject_into_project(&args.project.project, files, &config, RandomIds)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(outcome);
    }

    match &outcome {
        InjectionOutcome::AlreadyApplied { marker } => {
            println!("✓ Source files already in project! ({} found)", marker);
        }
        InjectionOutcome::Applied(report) => {
            for region in &report.regions {
                println!("{}", progress_line(region, &config));
            }
            println!();
            println!("{}", summary_line(report));
        }
    }

    Ok(outcome)
}

/// Announces the run before the project is touched.
pub fn adding_line(count: usize, project: &Path) -> String {
    format!("Adding {} source files to {}...", count, project.display())
}

/// Human readable result for one region.
pub fn progress_line(report: &RegionReport, config: &InjectConfig) -> String {
    match &report.status {
        RegionStatus::Inserted { entries } => match report.region {
            Region::FileReference => format!("✓ Added {} PBXFileReference entries", entries),
            Region::BuildFile => format!("✓ Added {} PBXBuildFile entries", entries),
            Region::GroupChildren => format!("✓ Added files to {} group", config.group_name),
            Region::SourcesPhase => "✓ Added files to compile sources".to_string(),
        },
        RegionStatus::Skipped { reason } => format!("✗ Skipped {}: {}", report.region, reason),
    }
}

/// Closing line for an applied run.
pub fn summary_line(report: &InjectionReport) -> String {
    if report.is_complete() {
        "✅ Successfully added source files to Xcode project!".to_string()
    } else if report.is_modified() {
        format!(
            "⚠️  Partially applied: {} of {} regions skipped",
            report.missing_regions().len(),
            report.regions.len()
        )
    } else {
        "⚠️  No region matched; project file left unchanged".to_string()
    }
}
