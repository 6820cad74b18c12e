// Catalog classification

use std::collections::BTreeMap;

use crate::domain::{BlockLibrary, CatalogEntry, EntryFinding, EntryStatus, ValidationResults};

/// Blocknames that mean "no block assigned"
const PLACEHOLDER_BLOCKNAMES: [&str; 3] = ["NULL", "UNDEFINED", "N/A"];

/// Shown in findings for a blank blockname
pub const EMPTY_BLOCKNAME_LABEL: &str = "(empty)";

/// `blockname` is expected upper-cased
pub fn is_placeholder_blockname(blockname: &str) -> bool {
    blockname.is_empty() || PLACEHOLDER_BLOCKNAMES.contains(&blockname)
}

/// Classify every entry against the library and collect repeated codes.
///
/// Every row counts toward duplicate detection, empty ones included.
pub fn validate_entries(entries: &[CatalogEntry], library: &BlockLibrary) -> ValidationResults {
    let mut results = ValidationResults::default();
    let mut rows_by_code: BTreeMap<String, Vec<usize>> = BTreeMap::new();

    for entry in entries {
        results.total += 1;
        rows_by_code
            .entry(entry.code.clone())
            .or_default()
            .push(entry.row);

        if is_placeholder_blockname(&entry.blockname) {
            let shown = if entry.blockname.is_empty() {
                EMPTY_BLOCKNAME_LABEL.to_string()
            } else {
                entry.blockname.clone()
            };
            results
                .empty_blockname
                .push(finding(entry, shown, EntryStatus::Empty));
            continue;
        }

        if library.contains(&entry.blockname) {
            results
                .valid
                .push(finding(entry, entry.blockname.clone(), EntryStatus::Ok));
        } else {
            results
                .missing
                .push(finding(entry, entry.blockname.clone(), EntryStatus::Missing));
        }
    }

    rows_by_code.retain(|_, rows| rows.len() > 1);
    results.duplicates = rows_by_code;
    results
}

fn finding(entry: &CatalogEntry, blockname: String, status: EntryStatus) -> EntryFinding {
    EntryFinding {
        row: entry.row,
        code: entry.code.clone(),
        blockname,
        status,
    }
}
