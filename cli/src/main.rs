#![deny(missing_docs)]

//! # xcinject CLI
//!
//! Registers source files in an Xcode project without opening Xcode.
//!
//! Supported Commands:
//! - `inject`: Adds file references, build files, group children and compile sources.
//! - `check`: Reports which files exist on disk and which are already in the project.

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod args;
mod check;
mod error;
mod inject;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Xcode project source injector")]
struct Cli {
    /// Log diagnostics at debug level (overridden by RUST_LOG).
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register source files in the project document.
    Inject(inject::InjectArgs),
    /// Report which source files are present on disk and in the project.
    Check(check::CheckArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match &cli.command {
        Commands::Inject(args) => {
            inject::execute(args)?;
        }
        Commands::Check(args) => {
            check::execute(args)?;
        }
    }

    Ok(())
}
