#![deny(missing_docs)]

//! # Project Document
//!
//! Loads a `project.pbxproj` into memory once and writes it back once.
//! The file on disk is not touched until every region has been attempted.

use crate::config::InjectConfig;
use crate::error::{AppError, AppResult};
use crate::injector::guard::{registered_files, FileRegistration};
use crate::injector::ids::IdSource;
use crate::injector::{inject_files, LogicalFile};
use crate::report::InjectionOutcome;
use std::fs;
use std::path::{Path, PathBuf};

/// An in-memory copy of a project document.
#[derive(Debug, Clone)]
pub struct ProjectDocument {
    path: PathBuf,
    original: String,
    content: String,
}

impl ProjectDocument {
    /// Reads the whole file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|source| AppError::FileAccess {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "loaded project document");
        Ok(Self {
            path,
            original: content.clone(),
            content,
        })
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current buffer.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Mutable access to the buffer.
    pub fn content_mut(&mut self) -> &mut String {
        &mut self.content
    }

    /// Whether the buffer differs from what was loaded.
    pub fn is_modified(&self) -> bool {
        self.content != self.original
    }

    /// Overwrites the file with the current buffer.
    pub fn save(&self) -> AppResult<()> {
        fs::write(&self.path, &self.content).map_err(|source| AppError::FileAccess {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = self.content.len(), "wrote project document");
        Ok(())
    }
}

/// Loads the project at `path`, registers `names` and writes the result back.
///
/// The write is skipped when the guard short-circuits or when no region could be
/// located, so the file stays byte-identical in those cases.
pub fn inject_into_project<S: AsRef<str>>(
    path: impl AsRef<Path>,
    names: &[S],
    config: &InjectConfig,
    ids: impl IdSource,
) -> AppResult<InjectionOutcome> {
    let mut document = ProjectDocument::load(path)?;
    let outcome = inject_files(document.content_mut(), names, config, ids)?;

    if document.is_modified() {
        document.save()?;
    } else {
        tracing::debug!(path = %document.path().display(), "document unchanged, not writing");
    }

    Ok(outcome)
}

/// Reports which of `names` are already mentioned in the project at `path`.
pub fn inspect_project<S: AsRef<str>>(
    path: impl AsRef<Path>,
    names: &[S],
) -> AppResult<Vec<FileRegistration>> {
    let document = ProjectDocument::load(path)?;
    let files = LogicalFile::parse_list(names)?;
    Ok(registered_files(document.content(), &files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::injector::RandomIds;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_file_access_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        let err = inject_into_project(&path, &["A.swift"], &InjectConfig::default(), RandomIds)
            .unwrap_err();
        match err {
            AppError::FileAccess { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected FileAccess, got {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_document_is_not_rewritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        fs::write(&path, "// !$*UTF8*$!\n{ objects = { }; }\n").unwrap();

        let outcome =
            inject_into_project(&path, &["A.swift"], &InjectConfig::default(), RandomIds).unwrap();
        let InjectionOutcome::Applied(report) = outcome else {
            panic!("expected Applied");
        };
        assert!(!report.is_modified());
        assert_eq!(report.missing_regions().len(), 4);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "// !$*UTF8*$!\n{ objects = { }; }\n"
        );
    }

    #[test]
    fn test_failed_write_is_file_access_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        fs::write(&path, "abc").unwrap();

        let mut doc = ProjectDocument::load(&path).unwrap();
        doc.content_mut().push('d');

        // A directory now sits where the file was, so the overwrite cannot succeed.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        match doc.save().unwrap_err() {
            AppError::FileAccess { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected FileAccess, got {:?}", other),
        }
        assert!(path.is_dir());
    }

    #[test]
    fn test_inspect_project() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        fs::write(&path, "path = AppDelegate.swift;").unwrap();

        let found = inspect_project(&path, &["AppDelegate.swift", "New.swift"]).unwrap();
        assert!(found[0].registered);
        assert!(!found[1].registered);
    }

    #[test]
    fn test_modified_tracking() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        fs::write(&path, "abc").unwrap();

        let mut doc = ProjectDocument::load(&path).unwrap();
        assert!(!doc.is_modified());
        doc.content_mut().push('d');
        assert!(doc.is_modified());
        doc.save().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "abcd");
    }
}
