//! # Injection Settings
//!
//! Identifies the project group that receives the new file references.
//! Defaults match the `Runner` group of a Flutter macOS project.

use crate::error::{AppError, AppResult};

/// Object identifier of the `Runner` group in the Flutter macOS template.
pub const DEFAULT_GROUP_ID: &str = "33CC10E92044A3C60003C045";

/// Display name of the default group.
pub const DEFAULT_GROUP_NAME: &str = "Runner";

/// Build phase name Xcode writes into build file comments (`Foo.swift in Sources`).
pub const DEFAULT_PHASE_LABEL: &str = "Sources";

/// Settings for one injection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectConfig {
    /// Object identifier of the group whose `children` list receives the file references.
    pub group_id: String,
    /// Human readable group name, used in progress output only.
    pub group_name: String,
    /// Build phase name written into build file comments.
    pub phase_label: String,
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            group_id: DEFAULT_GROUP_ID.to_string(),
            group_name: DEFAULT_GROUP_NAME.to_string(),
            phase_label: DEFAULT_PHASE_LABEL.to_string(),
        }
    }
}

impl InjectConfig {
    /// Targets a different group.
    pub fn with_group(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.group_id = id.into();
        self.group_name = name.into();
        self
    }

    /// Changes the build phase name written into build file comments.
    pub fn with_phase_label(mut self, label: impl Into<String>) -> Self {
        self.phase_label = label.into();
        self
    }

    /// Checks that the group identifier is a plain pbxproj object id and that
    /// the phase label can sit inside a `/* ... */` comment.
    pub fn validate(&self) -> AppResult<()> {
        if self.group_id.is_empty() || !self.group_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::InvalidInput(format!(
                "Group identifier '{}' must be a non-empty alphanumeric object id",
                self.group_id
            )));
        }
        if self.phase_label.trim().is_empty()
            || self
                .phase_label
                .chars()
                .any(|c| matches!(c, '*' | '/' | '\n' | '\r'))
        {
            return Err(AppError::InvalidInput(format!(
                "Phase label '{}' cannot be written into a comment",
                self.phase_label.escape_debug()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_runner_group() {
        let config = InjectConfig::default();
        assert_eq!(config.group_id, "33CC10E92044A3C60003C045");
        assert_eq!(config.group_name, "Runner");
        assert_eq!(config.phase_label, "Sources");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_alphanumeric_group() {
        let config = InjectConfig::default().with_group("33CC /* x */", "Broken");
        assert!(matches!(
            config.validate(),
            Err(AppError::InvalidInput(_))
        ));

        let empty = InjectConfig::default().with_group("", "Empty");
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_phase_label_setter_and_validation() {
        let config = InjectConfig::default().with_phase_label("Compile");
        assert_eq!(config.phase_label, "Compile");
        assert!(config.validate().is_ok());

        let broken = InjectConfig::default().with_phase_label("Sources */ junk");
        assert!(matches!(broken.validate(), Err(AppError::InvalidInput(_))));
        assert!(InjectConfig::default()
            .with_phase_label("")
            .validate()
            .is_err());
    }
}
