// Validation results

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Per-row validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    Ok,
    Missing,
    Empty,
    Unknown,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Ok => "OK",
            EntryStatus::Missing => "MISSING",
            EntryStatus::Empty => "EMPTY",
            EntryStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryFinding {
    pub row: usize,
    pub code: String,
    pub blockname: String,
    pub status: EntryStatus,
}

/// Outcome of validating a catalog against a block library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResults {
    pub total: usize,
    pub valid: Vec<EntryFinding>,
    pub missing: Vec<EntryFinding>,
    pub empty_blockname: Vec<EntryFinding>,
    /// Codes found on more than one row, sorted by code
    pub duplicates: BTreeMap<String, Vec<usize>>,
}

impl ValidationResults {
    pub fn has_issues(&self) -> bool {
        !self.empty_blockname.is_empty() || !self.missing.is_empty() || !self.duplicates.is_empty()
    }

    /// Status keyed by catalog row number
    pub fn status_by_row(&self) -> HashMap<usize, EntryStatus> {
        self.valid
            .iter()
            .chain(&self.missing)
            .chain(&self.empty_blockname)
            .map(|f| (f.row, f.status))
            .collect()
    }

    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            total: self.total,
            valid: self.valid.len(),
            missing: self.missing.len(),
            empty_names: self.empty_blockname.len(),
            duplicate_codes: self.duplicates.len(),
        }
    }
}

/// Counts only, for console and JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub missing: usize,
    pub empty_names: usize,
    pub duplicate_codes: usize,
}
