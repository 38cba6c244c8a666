#![deny(missing_docs)]

//! # xcinject Core
//!
//! Registers source files in an Xcode `project.pbxproj` without opening Xcode.
//!
//! A run loads the document, checks that the files are not already there,
//! mints identifiers, splices entries into the file reference, build file,
//! group and sources phase regions, then writes the document back once.

/// Shared error types.
pub mod error;

/// Injection settings.
pub mod config;

/// Loading and persisting project documents.
pub mod document;

/// Region location, identifier minting and splicing.
pub mod injector;

/// Run outcomes.
pub mod report;

pub use config::InjectConfig;
pub use document::{inject_into_project, inspect_project, ProjectDocument};
pub use error::{AppError, AppResult};
pub use injector::{
    inject_files, FileRegistration, IdSource, LogicalFile, RandomIds, Region, SequentialIds,
    SourceKind,
};
pub use report::{InjectionOutcome, InjectionReport, RegionReport, RegionStatus};
