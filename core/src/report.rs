#![deny(missing_docs)]

//! # Injection Reports
//!
//! Describes what a run did: either nothing (the files were already there) or
//! a per-region account of inserted and skipped regions.

use crate::injector::ids::PlannedFile;
use crate::injector::regions::Region;
use serde::Serialize;

/// What happened to one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RegionStatus {
    /// Entries were spliced in.
    Inserted {
        /// Number of entries added.
        entries: usize,
    },
    /// The region could not be located; nothing was written to it.
    Skipped {
        /// Why the region was skipped.
        reason: String,
    },
}

/// Outcome for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionReport {
    /// The region.
    pub region: Region,
    /// What happened to it.
    #[serde(flatten)]
    pub status: RegionStatus,
}

impl RegionReport {
    /// A region that received `entries` new entries.
    pub fn inserted(region: Region, entries: usize) -> Self {
        Self {
            region,
            status: RegionStatus::Inserted { entries },
        }
    }

    /// A region that was skipped.
    pub fn skipped(region: Region, reason: impl Into<String>) -> Self {
        Self {
            region,
            status: RegionStatus::Skipped {
                reason: reason.into(),
            },
        }
    }

    /// Whether entries were written.
    pub fn is_inserted(&self) -> bool {
        matches!(self.status, RegionStatus::Inserted { .. })
    }
}

/// Everything a run that passed the idempotency guard did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectionReport {
    /// The files with their minted identifiers, in input order.
    pub files: Vec<PlannedFile>,
    /// One report per region, in splice order.
    pub regions: Vec<RegionReport>,
}

impl InjectionReport {
    /// True when every region received its entries.
    pub fn is_complete(&self) -> bool {
        self.regions.iter().all(RegionReport::is_inserted)
    }

    /// True when at least one region received entries.
    pub fn is_modified(&self) -> bool {
        self.regions.iter().any(RegionReport::is_inserted)
    }

    /// Regions that could not be located.
    pub fn missing_regions(&self) -> Vec<Region> {
        self.regions
            .iter()
            .filter(|r| !r.is_inserted())
            .map(|r| r.region)
            .collect()
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum InjectionOutcome {
    /// The guard found the first file's name in the document. Nothing was changed.
    AlreadyApplied {
        /// The name that was found.
        marker: String,
    },
    /// Regions were spliced (possibly only some of them).
    Applied(InjectionReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial() -> InjectionReport {
        InjectionReport {
            files: vec![],
            regions: vec![
                RegionReport::inserted(Region::FileReference, 2),
                RegionReport::inserted(Region::BuildFile, 2),
                RegionReport::inserted(Region::GroupChildren, 2),
                RegionReport::skipped(Region::SourcesPhase, "Region not found"),
            ],
        }
    }

    #[test]
    fn test_partial_report() {
        let report = partial();
        assert!(!report.is_complete());
        assert!(report.is_modified());
        assert_eq!(report.missing_regions(), vec![Region::SourcesPhase]);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(InjectionOutcome::Applied(partial())).unwrap();
        assert_eq!(json["outcome"], "applied");
        assert_eq!(json["regions"][0]["region"], "FileReference");
        assert_eq!(json["regions"][0]["status"], "inserted");
        assert_eq!(json["regions"][0]["entries"], 2);
        assert_eq!(json["regions"][3]["status"], "skipped");

        let json = serde_json::to_value(InjectionOutcome::AlreadyApplied {
            marker: "Alpha.x".into(),
        })
        .unwrap();
        assert_eq!(json["outcome"], "already_applied");
        assert_eq!(json["marker"], "Alpha.x");
    }
}
