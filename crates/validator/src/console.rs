// Console walkthrough for interactive runs
//
// Everything here is skipped in `--json` mode so stdout stays machine-readable.

use std::path::Path;

use colored::Colorize;

use ipb_core::application::validation::ValidationRequest;
use ipb_core::domain::config::PRESET_CSV;
use ipb_core::domain::{BlockLibrary, EntryFinding, ValidationResults};

/// Subfolders listed after a scan
const SUBFOLDER_PREVIEW: usize = 10;

/// Sample rows listed in the final summary
const SAMPLE_SIZE: usize = 5;

pub struct Console {
    enabled: bool,
}

impl Console {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn line(&self, text: impl AsRef<str>) {
        if self.enabled {
            println!("{}", text.as_ref());
        }
    }

    pub fn blank(&self) {
        self.line("");
    }

    /// Errors always show, on stderr in JSON mode
    pub fn error(&self, text: impl AsRef<str>) {
        if self.enabled {
            println!("{}", text.as_ref().yellow());
        } else {
            eprintln!("{}", text.as_ref());
        }
    }

    /// Shown when the catalog does not exist
    pub fn missing_catalog_usage(&self) {
        self.blank();
        self.line("Usage: ipb-validate [csv_file] [block_folder]");
        self.line(format!("Default CSV: {}", PRESET_CSV));
    }

    pub fn header(&self, request: &ValidationRequest) {
        let rule = "=".repeat(80);
        self.blank();
        self.line(&rule);
        self.line("IPB BLOCK VALIDATION".bold().to_string());
        self.line(&rule);
        self.blank();
        self.line(format!("CSV File:      {}", request.csv_file.display()));
        self.line(format!("Block Folder:  {}", request.block_library.display()));
        self.blank();
    }

    pub fn library(&self, library: &BlockLibrary) {
        self.line(format!("✅ Found {} block files", library.block_files()));

        let subfolders = library.subfolders();
        if subfolders.is_empty() {
            return;
        }
        self.line(format!(
            "📁 Scanned {} subfolders containing blocks:",
            subfolders.len()
        ));
        for folder in subfolders.iter().take(SUBFOLDER_PREVIEW) {
            self.line(format!("   - {}", folder));
        }
        if subfolders.len() > SUBFOLDER_PREVIEW {
            self.line(format!(
                "   ... and {} more",
                subfolders.len() - SUBFOLDER_PREVIEW
            ));
        }
    }

    pub fn summary(&self, results: &ValidationResults, report_file: &Path) {
        let rule = "=".repeat(80);
        let summary = results.summary();

        self.line(&rule);
        self.line("VALIDATION COMPLETE".bold().to_string());
        self.line(&rule);
        self.line(format!("✅ Valid:          {}", summary.valid.to_string().green()));
        self.line(format!("❌ Missing:        {}", count(summary.missing)));
        self.line(format!("⚠️  Empty Names:    {}", count(summary.empty_names)));
        self.line(format!("⚠️  Duplicates:     {}", count(summary.duplicate_codes)));
        self.blank();

        if !results.missing.is_empty() {
            self.line("Sample missing blocks:");
            self.samples(&results.missing, |item| format!("  - {}", item.blockname));
        }

        if !results.empty_blockname.is_empty() {
            self.line("\nEntries with empty block names:");
            self.samples(&results.empty_blockname, |item| {
                format!("  - Row {}: Code {}", item.row, item.code)
            });
        }

        self.line(format!(
            "\n📄 Review '{}' for complete details",
            report_file.display()
        ));
    }

    fn samples(&self, items: &[EntryFinding], render: impl Fn(&EntryFinding) -> String) {
        for item in items.iter().take(SAMPLE_SIZE) {
            self.line(render(item));
        }
        if items.len() > SAMPLE_SIZE {
            self.line(format!(
                "  ... and {} more (see report)",
                items.len() - SAMPLE_SIZE
            ));
        }
    }
}

fn count(n: usize) -> String {
    if n == 0 {
        n.to_string().green().to_string()
    } else {
        n.to_string().red().to_string()
    }
}
