// Annotated catalog (input CSV + ValidationStatus column)

use crate::domain::catalog::{FIRST_DATA_ROW, STATUS_COLUMN};
use crate::domain::{CatalogTable, EntryStatus, ValidationResults};

/// Copy `table`, appending each record's status.
///
/// Rows the results do not cover are marked `UNKNOWN`. A catalog without a
/// header row comes back empty.
pub fn annotate_catalog(table: &CatalogTable, results: &ValidationResults) -> CatalogTable {
    if table.headers.is_empty() {
        return CatalogTable::default();
    }

    let lookup = results.status_by_row();

    let mut headers = table.headers.clone();
    headers.push(STATUS_COLUMN.to_string());

    let records = table
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let status = lookup
                .get(&(i + FIRST_DATA_ROW))
                .copied()
                .unwrap_or(EntryStatus::Unknown);
            let mut record = record.clone();
            record.push(status.to_string());
            record
        })
        .collect();

    CatalogTable::new(headers, records)
}
