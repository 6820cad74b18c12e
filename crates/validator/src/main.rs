//! IPB Block Validator - CLI Entry Point
//!
//! Checks every `Blockname` in the description-keys CSV against the `.dwg`
//! files found under the block library, then writes a text report and an
//! annotated copy of the CSV.

mod console;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;

use ipb_core::application::validation::ValidationRequest;
use ipb_core::application::ValidationService;
use ipb_core::domain::config::{
    DEFAULT_REPORT_FILE, DEFAULT_VALIDATED_CSV, PRESET_BLOCK_LIBRARY, PRESET_CSV,
};
use ipb_core::AppError;
use ipb_infra_system::{init_logging, CsvCatalogStore, FsBlockScanner};

use console::Console;

#[derive(Parser)]
#[command(name = "ipb-validate")]
#[command(about = "Validate IPB description keys against a DWG block library", long_about = None)]
#[command(version)]
struct Cli {
    /// Description-keys CSV (default: preset catalog)
    csv_file: Option<PathBuf>,

    /// Block library root, scanned recursively (default: preset library)
    block_folder: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    _extra: Vec<String>,

    /// Where to write the text report
    #[arg(long, default_value = DEFAULT_REPORT_FILE)]
    report: PathBuf,

    /// Where to write the CSV with the ValidationStatus column
    #[arg(long, default_value = DEFAULT_VALIDATED_CSV)]
    validated_csv: PathBuf,

    /// Print a JSON summary instead of the console walkthrough
    #[arg(long)]
    json: bool,
}

/// Which inputs came from the command line
fn path_mode(cli: &Cli) -> &'static str {
    match (&cli.csv_file, &cli.block_folder) {
        (None, _) => "Using preset configuration",
        (Some(_), None) => "Using custom CSV with preset block folder",
        (Some(_), Some(_)) => "Using custom paths",
    }
}

fn build_request(cli: &Cli) -> ValidationRequest {
    ValidationRequest {
        csv_file: cli
            .csv_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(PRESET_CSV)),
        block_library: cli
            .block_folder
            .clone()
            .unwrap_or_else(|| PathBuf::from(PRESET_BLOCK_LIBRARY)),
        report_file: cli.report.clone(),
        validated_csv: cli.validated_csv.clone(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging().context("Failed to initialize logging")?;

    let console = Console::new(!cli.json);
    let request = build_request(&cli);
    info!(csv = %request.csv_file.display(), library = %request.block_library.display(), "Validation requested");

    let service = ValidationService::new(
        Arc::new(FsBlockScanner::new()),
        Arc::new(CsvCatalogStore::new()),
    );

    console.line(format!("📌 {}", path_mode(&cli)));

    if let Err(e) = service.ensure_catalog(&request).await {
        console.error(format!("⚠️  Error: {}", error_message(&e)));
        console.missing_catalog_usage();
        return Ok(ExitCode::FAILURE);
    }

    console.header(&request);

    // Step 1
    console.line("Step 1: Scanning block library (including all subfolders)...");
    if !request.block_library.is_dir() {
        console.error(format!(
            "⚠️  Error: Block folder not found: {}",
            request.block_library.display()
        ));
    } else {
        console.line(format!(
            "🔍 Scanning recursively: {}",
            request.block_library.display()
        ));
        console.line("   (This may take a moment for large libraries...)");
    }
    let library = match service.scan_library(&request).await {
        Ok(library) => library,
        Err(AppError::Validation(_)) => {
            console.error("⚠️  No blocks found. Check folder path.");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("Block library scan failed"),
    };
    console.library(&library);
    console.blank();

    // Step 2
    console.line("Step 2: Validating CSV entries...");
    let validated = service
        .validate_catalog(&request, &library)
        .await
        .context("Failed to read CSV catalog")?;
    console.line(format!("✅ Validated {} entries", validated.results.total));
    console.blank();

    // Step 3
    console.line("Step 3: Generating reports...");
    service
        .write_outputs(&request, &validated)
        .await
        .context("Failed to write validation outputs")?;
    console.line(format!("📄 Report saved: {}", request.report_file.display()));
    console.line(format!(
        "💾 Validated CSV saved: {}",
        request.validated_csv.display()
    ));

    if cli.json {
        let out = json!({
            "csv_file": request.csv_file.display().to_string(),
            "block_library": request.block_library.display().to_string(),
            "report_file": request.report_file.display().to_string(),
            "validated_csv": request.validated_csv.display().to_string(),
            "summary": validated.results.summary(),
            "results": &validated.results,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        console.blank();
        console.summary(&validated.results, &request.report_file);
    }

    Ok(ExitCode::SUCCESS)
}

/// Error text without the variant prefix
fn error_message(e: &AppError) -> String {
    match e {
        AppError::NotFound(msg) => msg.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("ipb-validate").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_args_uses_presets() {
        let cli = parse(&[]);
        let request = build_request(&cli);

        assert_eq!(path_mode(&cli), "Using preset configuration");
        assert_eq!(request.csv_file, PathBuf::from(PRESET_CSV));
        assert_eq!(request.block_library, PathBuf::from(PRESET_BLOCK_LIBRARY));
        assert_eq!(request.report_file, PathBuf::from("validation_report.txt"));
        assert_eq!(
            request.validated_csv,
            PathBuf::from("IPB-DescriptionKeys-Validated.csv")
        );
    }

    #[test]
    fn test_custom_csv_keeps_preset_library() {
        let cli = parse(&["/tmp/test.csv"]);
        let request = build_request(&cli);

        assert_eq!(path_mode(&cli), "Using custom CSV with preset block folder");
        assert_eq!(request.csv_file, PathBuf::from("/tmp/test.csv"));
        assert_eq!(request.block_library, PathBuf::from(PRESET_BLOCK_LIBRARY));
    }

    #[test]
    fn test_custom_paths() {
        let cli = parse(&["a.csv", "/cad/blocks", "--report", "r.txt"]);
        let request = build_request(&cli);

        assert_eq!(path_mode(&cli), "Using custom paths");
        assert_eq!(request.block_library, PathBuf::from("/cad/blocks"));
        assert_eq!(request.report_file, PathBuf::from("r.txt"));
    }

    #[test]
    fn test_extra_positionals_are_ignored() {
        let cli = parse(&["a.csv", "/cad/blocks", "leftover", "more"]);
        let request = build_request(&cli);

        assert_eq!(path_mode(&cli), "Using custom paths");
        assert_eq!(request.csv_file, PathBuf::from("a.csv"));
        assert_eq!(request.block_library, PathBuf::from("/cad/blocks"));
    }
}
