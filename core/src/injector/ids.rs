#![deny(missing_docs)]

//! # Identifier Allocation
//!
//! Every file registered in a project needs two object identifiers: one for its
//! `PBXFileReference` and one for its `PBXBuildFile`. Identifiers are 24
//! uppercase hexadecimal characters, the same shape Xcode writes.
//!
//! Tokens come from an [`IdSource`]. The allocator remembers every token it
//! handed out during the run and redraws on repeats, so two files never share
//! an identifier even when the source misbehaves. Identifiers already present
//! in the document are not consulted.

use super::files::LogicalFile;
use super::files::SourceKind;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Display;
use uuid::Uuid;

/// Length of a pbxproj object identifier.
pub const ID_LEN: usize = 24;

/// An object identifier minted for this run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supplies candidate tokens of [`ID_LEN`] uppercase alphanumeric characters.
pub trait IdSource {
    /// Returns the next candidate token.
    fn next_token(&mut self) -> String;
}

/// Random tokens cut from a version 4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_token(&mut self) -> String {
        let mut token = Uuid::new_v4().simple().to_string().to_ascii_uppercase();
        token.truncate(ID_LEN);
        token
    }
}

/// Deterministic tokens counting up from a seed. Produces reproducible documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Starts counting at `seed`.
    pub fn starting_at(seed: u64) -> Self {
        Self { next: seed }
    }
}

impl IdSource for SequentialIds {
    fn next_token(&mut self) -> String {
        let token = format!("{:0width$X}", self.next, width = ID_LEN);
        self.next = self.next.wrapping_add(1);
        token
    }
}

/// A logical file together with the identifiers minted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    /// The file being registered.
    pub file: LogicalFile,
    /// Declared file type.
    pub kind: SourceKind,
    /// Identifier of the `PBXFileReference` object.
    pub reference: Identifier,
    /// Identifier of the `PBXBuildFile` object. Points at `reference`.
    pub membership: Identifier,
}

/// Mints identifiers that are unique for the lifetime of the allocator.
pub struct IdAllocator<S: IdSource> {
    source: S,
    minted: HashSet<String>,
}

impl<S: IdSource> IdAllocator<S> {
    /// Wraps a token source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            minted: HashSet::new(),
        }
    }

    /// Returns a token not handed out before by this allocator.
    pub fn mint(&mut self) -> Identifier {
        loop {
            let token = self.source.next_token();
            if self.minted.insert(token.clone()) {
                return Identifier(token);
            }
            tracing::debug!(%token, "discarding repeated identifier");
        }
    }

    /// Mints the reference and membership identifiers for every file, in input order.
    pub fn plan(&mut self, files: &[LogicalFile]) -> Vec<PlannedFile> {
        files
            .iter()
            .map(|file| {
                let reference = self.mint();
                let membership = self.mint();
                tracing::debug!(
                    file = %file,
                    %reference,
                    %membership,
                    "allocated identifiers"
                );
                PlannedFile {
                    file: file.clone(),
                    kind: file.kind(),
                    reference,
                    membership,
                }
            })
            .collect()
    }

    /// Number of identifiers minted so far.
    pub fn minted_count(&self) -> usize {
        self.minted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of tokens, then counts.
    struct Scripted {
        tokens: Vec<&'static str>,
        fallback: SequentialIds,
    }

    impl IdSource for Scripted {
        fn next_token(&mut self) -> String {
            if self.tokens.is_empty() {
                self.fallback.next_token()
            } else {
                self.tokens.remove(0).to_string()
            }
        }
    }

    #[test]
    fn test_random_ids_shape() {
        let mut source = RandomIds;
        for _ in 0..32 {
            let token = source.next_token();
            assert_eq!(token.len(), ID_LEN);
            assert!(token
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_sequential_ids_are_padded() {
        let mut source = SequentialIds::starting_at(0xAB);
        assert_eq!(source.next_token(), "0000000000000000000000AB");
        assert_eq!(source.next_token(), "0000000000000000000000AC");
    }

    #[test]
    fn test_allocator_redraws_repeats() {
        let source = Scripted {
            tokens: vec![
                "AAAAAAAAAAAAAAAAAAAAAAAA",
                "AAAAAAAAAAAAAAAAAAAAAAAA",
                "BBBBBBBBBBBBBBBBBBBBBBBB",
            ],
            fallback: SequentialIds::starting_at(1),
        };
        let mut allocator = IdAllocator::new(source);
        let first = allocator.mint();
        let second = allocator.mint();
        assert_eq!(first.as_str(), "AAAAAAAAAAAAAAAAAAAAAAAA");
        assert_eq!(second.as_str(), "BBBBBBBBBBBBBBBBBBBBBBBB");
        assert_eq!(allocator.minted_count(), 2);
    }

    #[test]
    fn test_plan_mints_distinct_ids_in_order() {
        let files = LogicalFile::parse_list(&["Alpha.x", "Beta.x", "Gamma.swift"]).unwrap();
        let mut allocator = IdAllocator::new(RandomIds);
        let plan = allocator.plan(&files);

        let names: Vec<&str> = plan.iter().map(|p| p.file.name()).collect();
        assert_eq!(names, vec!["Alpha.x", "Beta.x", "Gamma.swift"]);
        assert_eq!(plan[2].kind, SourceKind::Swift);

        let all: HashSet<&str> = plan
            .iter()
            .flat_map(|p| [p.reference.as_str(), p.membership.as_str()])
            .collect();
        assert_eq!(all.len(), 6);
    }
}
