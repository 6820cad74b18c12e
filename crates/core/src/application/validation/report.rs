// Text report rendering

use std::fmt::{self, Write};

use tracing::warn;

use crate::domain::{EntryFinding, ValidationResults};

const WIDTH: usize = 80;

/// Render the full validation report
pub fn render_report(results: &ValidationResults, csv_file: &str, block_library: &str) -> String {
    let mut report = String::new();
    // fmt::Write into a String only fails if a Display impl does
    if let Err(e) = write_report(&mut report, results, csv_file, block_library) {
        warn!(error = %e, "Report rendering stopped early");
    }
    report
}

fn write_report(
    r: &mut String,
    results: &ValidationResults,
    csv_file: &str,
    block_library: &str,
) -> fmt::Result {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);

    writeln!(r, "{heavy}")?;
    writeln!(r, "IPB BLOCK VALIDATION REPORT")?;
    writeln!(r, "{heavy}\n")?;

    section(r, "CONFIGURATION", &light)?;
    writeln!(r, "CSV File:       {csv_file}")?;
    writeln!(r, "Block Library:  {block_library}")?;
    writeln!(r)?;

    let summary = results.summary();
    section(r, "SUMMARY", &light)?;
    writeln!(r, "Total Entries:       {}", summary.total)?;
    writeln!(r, "Valid Blocks:        {}", summary.valid)?;
    writeln!(r, "Missing Blocks:      {}", summary.missing)?;
    writeln!(r, "Empty Block Names:   {}", summary.empty_names)?;
    writeln!(r, "Duplicate Codes:     {}", summary.duplicate_codes)?;
    writeln!(r)?;

    if !results.empty_blockname.is_empty() {
        section(r, "EMPTY BLOCK NAMES", &light)?;
        write_findings(r, &results.empty_blockname)?;
        writeln!(r)?;
    }

    if !results.missing.is_empty() {
        section(r, "MISSING BLOCKS", &light)?;
        writeln!(
            r,
            "These blocks are referenced in the CSV but not found in the library:\n"
        )?;
        write_findings(r, &results.missing)?;
        writeln!(r)?;
    }

    if !results.duplicates.is_empty() {
        section(r, "DUPLICATE CODES", &light)?;
        writeln!(r, "These codes appear multiple times (may be intentional):\n")?;
        for (code, rows) in &results.duplicates {
            let rows: Vec<String> = rows.iter().map(|n| n.to_string()).collect();
            writeln!(r, "{code:<20}: Found on rows {}", rows.join(", "))?;
        }
        writeln!(r)?;
    }

    section(r, "RECOMMENDATIONS", &light)?;
    if !results.empty_blockname.is_empty() {
        writeln!(r, "• Fix empty block names - assign proper block references")?;
    }
    if !results.missing.is_empty() {
        writeln!(
            r,
            "• Create missing blocks in AutoCAD or update CSV to use existing blocks"
        )?;
    }
    if !results.duplicates.is_empty() {
        writeln!(r, "• Review duplicate codes - consolidate if unintentional")?;
    }
    if !results.has_issues() {
        writeln!(r, "✅ No issues found! Your IPB configuration looks great.")?;
    }
    writeln!(r)?;

    writeln!(r, "{heavy}")?;
    writeln!(r, "Report complete!")
}

fn section(r: &mut String, title: &str, rule: &str) -> fmt::Result {
    writeln!(r, "{title}")?;
    writeln!(r, "{rule}")
}

fn write_findings(r: &mut String, findings: &[EntryFinding]) -> fmt::Result {
    for item in findings {
        writeln!(
            r,
            "Row {:>4}: {:<20} → {}",
            item.row, item.code, item.blockname
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryStatus;
    use std::collections::BTreeMap;

    fn finding(row: usize, code: &str, blockname: &str, status: EntryStatus) -> EntryFinding {
        EntryFinding {
            row,
            code: code.to_string(),
            blockname: blockname.to_string(),
            status,
        }
    }

    #[test]
    fn test_clean_report() {
        let results = ValidationResults {
            total: 1,
            valid: vec![finding(2, "A", "B", EntryStatus::Ok)],
            ..Default::default()
        };
        let report = render_report(&results, "keys.csv", "/lib");

        assert!(report.starts_with(&format!("{}\nIPB BLOCK VALIDATION REPORT\n", "=".repeat(80))));
        assert!(report.contains("CSV File:       keys.csv\n"));
        assert!(report.contains("Block Library:  /lib\n"));
        assert!(report.contains("Total Entries:       1\n"));
        assert!(report.contains("✅ No issues found!"));
        assert!(!report.contains("MISSING BLOCKS"));
        assert!(!report.contains("EMPTY BLOCK NAMES"));
        assert!(!report.contains("DUPLICATE CODES"));
        assert!(report.ends_with("Report complete!\n"));
    }

    #[test]
    fn test_issue_sections_and_row_format() {
        let mut duplicates = BTreeMap::new();
        duplicates.insert("DUP".to_string(), vec![2, 9]);

        let results = ValidationResults {
            total: 3,
            valid: vec![],
            missing: vec![finding(12, "TREE", "OAK", EntryStatus::Missing)],
            empty_blockname: vec![finding(3, "MH", "(empty)", EntryStatus::Empty)],
            duplicates,
        };
        let report = render_report(&results, "k.csv", "lib");

        assert!(report.contains(&format!("Row   12: {:<20} → OAK\n", "TREE")));
        assert!(report.contains(&format!("Row    3: {:<20} → (empty)\n", "MH")));
        assert!(report.contains(&format!("{:<20}: Found on rows 2, 9\n", "DUP")));
        assert!(report.contains("• Fix empty block names"));
        assert!(report.contains("• Create missing blocks in AutoCAD"));
        assert!(report.contains("• Review duplicate codes"));
        assert!(!report.contains("No issues found"));

        let empty = report.find("EMPTY BLOCK NAMES").unwrap();
        let missing = report.find("MISSING BLOCKS").unwrap();
        let dup = report.find("DUPLICATE CODES").unwrap();
        let recs = report.find("RECOMMENDATIONS").unwrap();
        assert!(empty < missing && missing < dup && dup < recs);
    }
}
