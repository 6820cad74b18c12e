// Description-keys catalog (CSV contents)

/// Column holding the description key code
pub const CODE_COLUMN: &str = "Code";

/// Column holding the referenced block name
pub const BLOCKNAME_COLUMN: &str = "Blockname";

/// Column appended to the annotated catalog
pub const STATUS_COLUMN: &str = "ValidationStatus";

/// Row number of the first data record (row 1 is the header)
pub const FIRST_DATA_ROW: usize = 2;

/// Raw catalog: header plus records, kept verbatim for re-emission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

/// One catalog row as seen by validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub row: usize,
    /// Trimmed `Code` value
    pub code: String,
    /// Trimmed, upper-cased `Blockname` value
    pub blockname: String,
}

impl CatalogTable {
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    /// Index of a header; the last one wins if a name repeats
    fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .rposition(|h| h.trim_start_matches('\u{feff}') == name)
    }

    /// Project every record into a `CatalogEntry`.
    ///
    /// Missing columns and short records read as empty strings.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        let code_idx = self.column(CODE_COLUMN);
        let block_idx = self.column(BLOCKNAME_COLUMN);

        let cell = |record: &Vec<String>, idx: Option<usize>| -> String {
            idx.and_then(|i| record.get(i))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| CatalogEntry {
                row: i + FIRST_DATA_ROW,
                code: cell(record, code_idx),
                blockname: cell(record, block_idx).to_uppercase(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_entries_trim_and_uppercase() {
        let table = CatalogTable::new(
            strings(&["Code", "Description", "Blockname"]),
            vec![
                strings(&[" TREE ", "Tree", " oak-01 "]),
                strings(&["MH", "Manhole", "mh_std"]),
            ],
        );

        let entries = table.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].row, 2);
        assert_eq!(entries[0].code, "TREE");
        assert_eq!(entries[0].blockname, "OAK-01");
        assert_eq!(entries[1].row, 3);
        assert_eq!(entries[1].blockname, "MH_STD");
    }

    #[test]
    fn test_missing_column_and_short_record_read_empty() {
        let table = CatalogTable::new(
            strings(&["Code", "Blockname"]),
            vec![strings(&["ONLY_CODE"])],
        );
        let entries = table.entries();
        assert_eq!(entries[0].code, "ONLY_CODE");
        assert_eq!(entries[0].blockname, "");

        let no_block_col = CatalogTable::new(strings(&["Code"]), vec![strings(&["A"])]);
        assert_eq!(no_block_col.entries()[0].blockname, "");
    }

    #[test]
    fn test_bom_on_first_header_is_ignored() {
        let table = CatalogTable::new(
            strings(&["\u{feff}Code", "Blockname"]),
            vec![strings(&["A", "b"])],
        );
        assert_eq!(table.entries()[0].code, "A");
    }
}
