//! Logical files and the pbxproj file types derived from their extensions.

use crate::error::{AppError, AppResult};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Display;

/// The `lastKnownFileType` declared for a file reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceKind {
    /// Swift source.
    #[serde(rename = "sourcecode.swift")]
    Swift,
    /// Objective-C source.
    #[serde(rename = "sourcecode.c.objc")]
    ObjC,
    /// Objective-C++ source.
    #[serde(rename = "sourcecode.cpp.objcpp")]
    ObjCpp,
    /// C source.
    #[serde(rename = "sourcecode.c.c")]
    C,
    /// C++ source.
    #[serde(rename = "sourcecode.cpp.cpp")]
    Cpp,
    /// C family header.
    #[serde(rename = "sourcecode.c.h")]
    Header,
    /// Metal shader source.
    #[serde(rename = "sourcecode.metal")]
    Metal,
    /// Anything else.
    #[serde(rename = "text")]
    Text,
}

impl SourceKind {
    /// Derives the kind from the extension of `name`.
    pub fn from_name(name: &str) -> Self {
        let ext = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
            _ => return SourceKind::Text,
        };
        match ext.as_str() {
            "swift" => SourceKind::Swift,
            "m" => SourceKind::ObjC,
            "mm" => SourceKind::ObjCpp,
            "c" => SourceKind::C,
            "cpp" | "cc" | "cxx" => SourceKind::Cpp,
            "h" => SourceKind::Header,
            "metal" => SourceKind::Metal,
            _ => SourceKind::Text,
        }
    }

    /// The value written into `lastKnownFileType`.
    pub fn as_pbx_type(&self) -> &'static str {
        match self {
            SourceKind::Swift => "sourcecode.swift",
            SourceKind::ObjC => "sourcecode.c.objc",
            SourceKind::ObjCpp => "sourcecode.cpp.objcpp",
            SourceKind::C => "sourcecode.c.c",
            SourceKind::Cpp => "sourcecode.cpp.cpp",
            SourceKind::Header => "sourcecode.c.h",
            SourceKind::Metal => "sourcecode.metal",
            SourceKind::Text => "text",
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_pbx_type())
    }
}

/// One source artifact to register in the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LogicalFile {
    name: String,
}

impl LogicalFile {
    /// Validates a bare file name.
    ///
    /// The name ends up inside `/* ... */` comments and `path = ...;` values, so
    /// path separators, `*`, `;` and line breaks are rejected.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::InvalidInput("File name must not be empty".into()));
        }
        if name
            .chars()
            .any(|c| matches!(c, '/' | '*' | ';' | '\n' | '\r'))
        {
            return Err(AppError::InvalidInput(format!(
                "File name '{}' contains characters that cannot be written into a project file",
                name.escape_debug()
            )));
        }
        Ok(Self { name })
    }

    /// Validates an ordered list of names, keeping the order.
    ///
    /// A name listed twice is rejected: Xcode flags duplicate build files.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> AppResult<Vec<Self>> {
        if names.is_empty() {
            return Err(AppError::InvalidInput("No files to add".into()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        names
            .iter()
            .map(|n| {
                let file = Self::new(n.as_ref())?;
                if !seen.insert(file.name.clone()) {
                    return Err(AppError::InvalidInput(format!(
                        "File '{}' is listed more than once",
                        file.name
                    )));
                }
                Ok(file)
            })
            .collect()
    }

    /// The file name as written into the project.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared source kind.
    pub fn kind(&self) -> SourceKind {
        SourceKind::from_name(&self.name)
    }
}

impl Display for LogicalFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
