#![deny(missing_docs)]

//! # Check Command
//!
//! Read-only report: is each file on disk, and is it already mentioned in the project?

use crate::args::{presence_lines, ProjectArgs};
use crate::error::CliResult;
use xcinject_core::{inspect_project, FileRegistration};

/// Arguments for the check command.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    #[clap(flatten)]
    pub project: ProjectArgs,
}

/// Executes the check. Never writes to the project.
pub fn execute(args: &CheckArgs) -> CliResult<Vec<FileRegistration>> {
    let files = args.project.files.as_slice();

    println!("=== Source files ===");
    for line in presence_lines(&args.project.source_dir, files) {
        println!("{}", line);
    }

    tracing::debug!(
        project = %args.project.project.display(),
        files = ?files,
        "checking project"
    );
    let registrations = inspect_project(&args.project.project, files)?;

    println!("\n=== Project {:?} ===", args.project.project);
    for entry in &registrations {
        if entry.registered {
            println!("✓ {} already in project", entry.name);
        } else {
            println!("✗ {} not in project", entry.name);
        }
    }

    Ok(registrations)
}
