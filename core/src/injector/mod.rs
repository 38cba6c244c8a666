#![deny(missing_docs)]

//! # Project File Injection
//!
//! Registers source files in an Xcode `project.pbxproj` by splicing text into
//! four regions of the document without parsing the whole format.
//!
//! - **files**: Validated file names and their declared kinds.
//! - **guard**: The idempotency check run before any mutation.
//! - **ids**: Identifier minting.
//! - **regions**: Pattern-based region location.
//! - **entries**: Rendering of the spliced text.
//! - **splice**: Applying one region's entries to the live buffer.
//! - **workflow**: The whole run, region by region.

/// Entry rendering.
pub mod entries;

/// Logical files and source kinds.
pub mod files;

/// Idempotency guard.
pub mod guard;

/// Identifier allocation.
pub mod ids;

/// Region location.
pub mod regions;

/// Single-region splicing.
pub mod splice;

/// Whole-document injection.
pub mod workflow;

pub use files::{LogicalFile, SourceKind};
pub use guard::{registered_files, FileRegistration, GuardVerdict};
pub use ids::{IdAllocator, IdSource, Identifier, PlannedFile, RandomIds, SequentialIds};
pub use regions::Region;
pub use splice::splice_region;
pub use workflow::inject_files;
