//! Idempotency guard.
//!
//! Insertion is not idempotent on its own, so a run is only allowed when the
//! first file's name does not already appear anywhere in the document. A name
//! mentioned in an unrelated comment makes the run a no-op, which is a safe miss.

use super::files::LogicalFile;
use serde::Serialize;

/// Decision taken before any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    /// The marker name is present; the run must not touch the document.
    AlreadyPresent,
    /// Safe to insert.
    Proceed,
}

/// Checks whether `first` is already mentioned in `document`.
pub fn check(document: &str, first: &LogicalFile) -> GuardVerdict {
    if document.contains(first.name()) {
        GuardVerdict::AlreadyPresent
    } else {
        GuardVerdict::Proceed
    }
}

/// Whether a single file is already mentioned in the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRegistration {
    /// File name.
    pub name: String,
    /// The name appears in the document.
    pub registered: bool,
}

/// Per-file presence, in input order. Informational only, it never gates a run.
pub fn registered_files(document: &str, files: &[LogicalFile]) -> Vec<FileRegistration> {
    files
        .iter()
        .map(|f| FileRegistration {
            name: f.name().to_string(),
            registered: document.contains(f.name()),
        })
        .collect()
}
