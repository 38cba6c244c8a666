//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use crate::injector::regions::Region;
use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The project document could not be read or written.
    #[from(ignore)]
    #[display("Cannot access project file {}: {source}", path.display())]
    FileAccess {
        /// Path of the project document.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// A region anchor did not match the document.
    /// Recoverable: the splicer reports the region as skipped.
    #[from(ignore)]
    #[display("Region not found: {_0}")]
    RegionNotFound(Region),

    /// Rejected caller input (empty file list, unembeddable file name, bad config).
    #[from(ignore)]
    #[display("Invalid input: {_0}")]
    InvalidInput(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) | AppError::FileAccess { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_file_access_display_and_source() {
        let err = AppError::FileAccess {
            path: PathBuf::from("macos/Runner.xcodeproj/project.pbxproj"),
            source: Error::new(ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot access project file macos/Runner.xcodeproj/project.pbxproj: no such file"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_region_not_found_display() {
        let err = AppError::RegionNotFound(Region::SourcesPhase);
        assert_eq!(
            err.to_string(),
            "Region not found: PBXSourcesBuildPhase files list"
        );
        assert!(err.source().is_none());
    }
}
