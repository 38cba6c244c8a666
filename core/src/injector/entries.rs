//! Renders the text spliced into each region.

use super::ids::PlannedFile;
use super::regions::{Anchor, Region};
use std::borrow::Cow;

/// The line ending used by the document: `\r\n` if it has any, `\n` otherwise.
pub fn line_ending(document: &str) -> &'static str {
    if document.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Quotes a value unless it only holds characters pbxproj leaves bare.
pub fn pbx_string(value: &str) -> Cow<'_, str> {
    let bare = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '/' | ':' | '.' | '-'));
    if bare {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Renders the entries for every planned file, in plan order, shaped for `anchor`.
///
/// `phase_label` is the build phase name written into build file comments (`in Sources`).
pub fn render(
    region: Region,
    plan: &[PlannedFile],
    anchor: &Anchor,
    phase_label: &str,
    newline: &str,
) -> String {
    let mut patch = String::new();

    if region.is_list() {
        if anchor.needs_comma {
            patch.push(',');
        }
        for planned in plan {
            patch.push_str(newline);
            patch.push_str(&anchor.indent);
            patch.push_str(&entry(region, planned, phase_label));
        }
        return patch;
    }

    if !anchor.at_line_start {
        patch.push_str(newline);
    }
    for planned in plan {
        patch.push_str(&anchor.indent);
        patch.push_str(&entry(region, planned, phase_label));
        patch.push_str(newline);
    }
    patch
}

fn entry(region: Region, planned: &PlannedFile, phase_label: &str) -> String {
    let name = planned.file.name();
    match region {
        Region::FileReference => format!(
            "{} /* {} */ = {{isa = PBXFileReference; lastKnownFileType = {}; path = {}; sourceTree = \"<group>\"; }};",
            planned.reference,
            name,
            planned.kind,
            pbx_string(name)
        ),
        Region::BuildFile => format!(
            "{} /* {} in {} */ = {{isa = PBXBuildFile; fileRef = {} /* {} */; }};",
            planned.membership, name, phase_label, planned.reference, name
        ),
        Region::GroupChildren => format!("{} /* {} */,", planned.reference, name),
        Region::SourcesPhase => {
            format!("{} /* {} in {} */,", planned.membership, name, phase_label)
        }
    }
}
