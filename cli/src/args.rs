#![deny(missing_docs)]

//! Arguments shared by every command.

use std::path::{Path, PathBuf};

/// Files registered when none are given on the command line.
pub const DEFAULT_FILES: [&str; 3] = [
    "NativeInputController.swift",
    "ScreenInfoProvider.swift",
    "AccessibilityManager.swift",
];

/// Where the project lives and which files to register.
#[derive(clap::Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Path to the Xcode project document.
    #[clap(
        long,
        env = "XCINJECT_PROJECT",
        default_value = "macos/Runner.xcodeproj/project.pbxproj"
    )]
    pub project: PathBuf,

    /// Directory holding the source files, used for the on-disk presence check.
    #[clap(long, env = "XCINJECT_SOURCE_DIR", default_value = "macos/Runner")]
    pub source_dir: PathBuf,

    /// File names to register, in order.
    #[clap(default_values = DEFAULT_FILES)]
    pub files: Vec<String>,
}

/// `✓ Found: <path>` / `✗ Missing: <path>` for each file under `source_dir`.
///
/// Advisory only: a missing file does not stop the project from being updated.
pub fn presence_lines(source_dir: &Path, files: &[String]) -> Vec<String> {
    files
        .iter()
        .map(|name| {
            let path = source_dir.join(name);
            if path.exists() {
                format!("✓ Found: {}", path.display())
            } else {
                format!("✗ Missing: {}", path.display())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_presence_lines() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Here.swift"), "").unwrap();

        let lines = presence_lines(dir.path(), &["Here.swift".into(), "Gone.swift".into()]);
        assert!(lines[0].starts_with("✓ Found: "));
        assert!(lines[0].ends_with("Here.swift"));
        assert!(lines[1].starts_with("✗ Missing: "));
    }
}
