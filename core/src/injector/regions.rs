#![deny(missing_docs)]

//! # Region Location
//!
//! Finds the four zones of a `project.pbxproj` that receive new entries.
//!
//! - **Sections** (`PBXFileReference`, `PBXBuildFile`) are bounded by
//!   `/* Begin X section */` and `/* End X section */` comments. New entries go
//!   on their own lines right before the end marker.
//! - **Lists** (group `children`, sources phase `files`) are `key = ( ... );`
//!   lists nested in one object block. New entries are appended after the last
//!   existing entry, leaving the closing indentation and `);` untouched.
//!
//! Every lookup runs against the buffer it is given, so callers must locate a
//! region again after any earlier splice has shifted offsets.

use crate::config::InjectConfig;
use crate::error::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::fmt::Display;
use std::ops::Range;
use std::sync::OnceLock;

const DEFAULT_SECTION_INDENT: &str = "\t\t";
const DEFAULT_LIST_INDENT: &str = "\t\t\t\t";

/// One of the zones the splicer writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    /// The `PBXFileReference` section.
    FileReference,
    /// The `PBXBuildFile` section.
    BuildFile,
    /// The `children` list of the configured group.
    GroupChildren,
    /// The `files` list of the `PBXSourcesBuildPhase`.
    SourcesPhase,
}

impl Region {
    /// Splice order. References come first so every later entry points at something declared.
    pub const ORDER: [Region; 4] = [
        Region::FileReference,
        Region::BuildFile,
        Region::GroupChildren,
        Region::SourcesPhase,
    ];

    /// Whether the region is a nested `( ... )` list rather than a whole section.
    pub fn is_list(&self) -> bool {
        matches!(self, Region::GroupChildren | Region::SourcesPhase)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Region::FileReference => "PBXFileReference section",
            Region::BuildFile => "PBXBuildFile section",
            Region::GroupChildren => "PBXGroup children list",
            Region::SourcesPhase => "PBXSourcesBuildPhase files list",
        };
        f.write_str(label)
    }
}

/// Where a region accepts new entries in the current buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Byte span of the whole match, markers included.
    pub span: Range<usize>,
    /// Byte offset at which rendered entries are inserted.
    pub insert_at: usize,
    /// Leading whitespace for each new entry.
    pub indent: String,
    /// Section regions only: the insertion point is the start of the end marker's line.
    pub at_line_start: bool,
    /// List regions only: the last existing entry lacks its trailing comma.
    pub needs_comma: bool,
}

/// Locates `region` in `document`.
///
/// Returns `AppError::RegionNotFound` if the anchor pattern does not match.
pub fn locate(region: Region, document: &str, config: &InjectConfig) -> AppResult<Anchor> {
    let anchor = match region {
        Region::FileReference => locate_section(file_reference_re(), document),
        Region::BuildFile => locate_section(build_file_re(), document),
        Region::GroupChildren => locate_list(&group_children_re(&config.group_id)?, document),
        Region::SourcesPhase => locate_list(sources_phase_re(), document),
    };
    anchor.ok_or(AppError::RegionNotFound(region))
}

// --- Patterns ---

fn section_pattern(isa: &str) -> String {
    format!(
        r"(?s)/\*\s*Begin {isa} section\s*\*/(.*?)/\*\s*End {isa} section\s*\*/",
        isa = isa
    )
}

fn file_reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&section_pattern("PBXFileReference")).expect("Invalid regex"))
}

fn build_file_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&section_pattern("PBXBuildFile")).expect("Invalid regex"))
}

/// The first block whose `isa` is `PBXSourcesBuildPhase`, then its `files` list.
/// `[^{}]` keeps the match inside a single object block.
fn sources_phase_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\{[^{}]*?\bisa\s*=\s*PBXSourcesBuildPhase\s*;[^{}]*?\bfiles\s*=\s*\(([^{}]*?)\)\s*;",
        )
        .expect("Invalid regex")
    })
}

/// The block defined as `<id> /* comment */ = { ... }`, then its `children` list.
fn group_children_re(group_id: &str) -> AppResult<Regex> {
    let pattern = format!(
        r"\b{}\s*(?:/\*.*?\*/\s*)?=\s*\{{[^{{}}]*?\bchildren\s*=\s*\(([^{{}}]*?)\)\s*;",
        regex::escape(group_id)
    );
    Regex::new(&pattern)
        .map_err(|e| AppError::General(format!("Invalid group pattern for '{}': {}", group_id, e)))
}

// --- Locators ---

fn locate_section(re: &Regex, document: &str) -> Option<Anchor> {
    let caps = re.captures(document)?;
    let whole = caps.get(0)?;
    let body = caps.get(1)?;

    // The end marker starts where the body stops.
    let marker_start = body.end();
    let line_start = document[..marker_start].rfind('\n').map_or(0, |i| i + 1);
    let at_line_start =
        line_start >= body.start() && document[line_start..marker_start].trim().is_empty();

    let insert_at = if at_line_start { line_start } else { marker_start };
    let indent = detect_indent(body.as_str()).unwrap_or_else(|| DEFAULT_SECTION_INDENT.into());

    Some(Anchor {
        span: whole.range(),
        insert_at,
        indent,
        at_line_start,
        needs_comma: false,
    })
}

fn locate_list(re: &Regex, document: &str) -> Option<Anchor> {
    let caps = re.captures(document)?;
    let whole = caps.get(0)?;
    let list = caps.get(1)?;

    let content = list.as_str();
    let trimmed = content.trim_end();
    let insert_at = list.start() + trimmed.len();
    let needs_comma = !trimmed.trim_start().is_empty() && !trimmed.ends_with(',');

    let indent = detect_indent(content)
        .or_else(|| closing_indent(content).map(|ws| format!("{}\t", ws)))
        .unwrap_or_else(|| DEFAULT_LIST_INDENT.into());

    Some(Anchor {
        span: whole.range(),
        insert_at,
        indent,
        at_line_start: false,
        needs_comma,
    })
}

/// Leading whitespace of the first line that has content, if that line starts on its own.
fn detect_indent(body: &str) -> Option<String> {
    // The first segment shares a line with the opening marker, so skip it.
    let line = body
        .split('\n')
        .skip(1)
        .find(|line| !line.trim().is_empty())?;
    let content_len = line.trim_start().len();
    Some(line[..line.len() - content_len].to_string())
}

/// Whitespace on the line holding the list's closing parenthesis.
fn closing_indent(content: &str) -> Option<&str> {
    let (_, last) = content.rsplit_once('\n')?;
    if last.trim().is_empty() {
        Some(last.trim_end_matches('\r'))
    } else {
        None
    }
}
