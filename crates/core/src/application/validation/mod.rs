// Validation Service - catalog vs. block library

pub mod annotate;
pub mod classify;
pub mod report;

pub use annotate::annotate_catalog;
pub use classify::validate_entries;
pub use report::render_report;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{BlockLibrary, CatalogTable, ValidationResults};
use crate::error::{AppError, Result};
use crate::port::{BlockScanner, CatalogStore};

/// Inputs and outputs of one validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub csv_file: PathBuf,
    pub block_library: PathBuf,
    pub report_file: PathBuf,
    pub validated_csv: PathBuf,
}

/// Validated catalog, ready to be written out
#[derive(Debug, Clone)]
pub struct ValidatedCatalog {
    pub table: CatalogTable,
    pub results: ValidationResults,
}

pub struct ValidationService {
    scanner: Arc<dyn BlockScanner>,
    store: Arc<dyn CatalogStore>,
}

impl ValidationService {
    pub fn new(scanner: Arc<dyn BlockScanner>, store: Arc<dyn CatalogStore>) -> Self {
        Self { scanner, store }
    }

    /// Fail early when the catalog is not there
    pub async fn ensure_catalog(&self, request: &ValidationRequest) -> Result<()> {
        if self.store.exists(&request.csv_file).await {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "CSV file not found: {}",
                request.csv_file.display()
            )))
        }
    }

    /// Step 1: scan the block library
    ///
    /// # Errors
    /// - AppError::Validation if no blocks were found
    pub async fn scan_library(&self, request: &ValidationRequest) -> Result<BlockLibrary> {
        let library = self.scanner.scan(&request.block_library).await?;

        if library.is_empty() {
            warn!(root = %request.block_library.display(), "No blocks found");
            return Err(AppError::Validation(
                "No blocks found. Check folder path.".to_string(),
            ));
        }

        info!(
            block_files = library.block_files(),
            distinct = library.len(),
            subfolders = library.subfolders().len(),
            "Block library scanned"
        );
        Ok(library)
    }

    /// Step 2: read and classify the catalog
    pub async fn validate_catalog(
        &self,
        request: &ValidationRequest,
        library: &BlockLibrary,
    ) -> Result<ValidatedCatalog> {
        let table = self.store.read_catalog(&request.csv_file).await?;
        let results = validate_entries(&table.entries(), library);

        info!(
            total = results.total,
            valid = results.valid.len(),
            missing = results.missing.len(),
            empty = results.empty_blockname.len(),
            duplicates = results.duplicates.len(),
            "Catalog validated"
        );
        Ok(ValidatedCatalog { table, results })
    }

    /// Step 3: write the text report and the annotated catalog
    pub async fn write_outputs(
        &self,
        request: &ValidationRequest,
        validated: &ValidatedCatalog,
    ) -> Result<()> {
        let report = render_report(
            &validated.results,
            &request.csv_file.display().to_string(),
            &request.block_library.display().to_string(),
        );
        self.store.write_report(&request.report_file, &report).await?;
        info!(path = %request.report_file.display(), "Report saved");

        let annotated = annotate_catalog(&validated.table, &validated.results);
        self.store
            .write_catalog(&request.validated_csv, &annotated)
            .await?;
        info!(path = %request.validated_csv.display(), "Validated CSV saved");

        Ok(())
    }

    /// All steps in order
    pub async fn run(&self, request: &ValidationRequest) -> Result<ValidationResults> {
        self.ensure_catalog(request).await?;
        let library = self.scan_library(request).await?;
        let validated = self.validate_catalog(request, &library).await?;
        self.write_outputs(request, &validated).await?;
        Ok(validated.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::block_scanner::mocks::StaticBlockScanner;
    use crate::port::catalog_store::mocks::InMemoryCatalogStore;

    fn request() -> ValidationRequest {
        ValidationRequest {
            csv_file: PathBuf::from("keys.csv"),
            block_library: PathBuf::from("lib"),
            report_file: PathBuf::from("report.txt"),
            validated_csv: PathBuf::from("validated.csv"),
        }
    }

    fn catalog() -> CatalogTable {
        let row = |a: &str, b: &str| vec![a.to_string(), b.to_string()];
        CatalogTable::new(
            row("Code", "Blockname"),
            vec![row("T", "tree"), row("G", "ghost"), row("T", "")],
        )
    }

    #[tokio::test]
    async fn test_run_writes_both_outputs() {
        let store = Arc::new(InMemoryCatalogStore::with_catalog("keys.csv", catalog()));
        let service = ValidationService::new(
            Arc::new(StaticBlockScanner::with_names(&["TREE"])),
            store.clone(),
        );

        let results = service.run(&request()).await.unwrap();

        assert_eq!(results.total, 3);
        assert_eq!(results.valid.len(), 1);
        assert_eq!(results.missing.len(), 1);
        assert_eq!(results.empty_blockname.len(), 1);
        assert_eq!(results.duplicates["T"], vec![2, 4]);

        let report = store.report(&PathBuf::from("report.txt")).unwrap();
        assert!(report.contains("CSV File:       keys.csv"));

        let annotated = store.catalog(&PathBuf::from("validated.csv")).unwrap();
        let statuses: Vec<&str> = annotated
            .records
            .iter()
            .map(|r| r.last().unwrap().as_str())
            .collect();
        assert_eq!(statuses, vec!["OK", "MISSING", "EMPTY"]);
    }

    #[tokio::test]
    async fn test_missing_catalog() {
        let service = ValidationService::new(
            Arc::new(StaticBlockScanner::with_names(&["TREE"])),
            Arc::new(InMemoryCatalogStore::new()),
        );
        let err = service.run(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("keys.csv"));
    }

    #[tokio::test]
    async fn test_empty_library_is_rejected() {
        let store = Arc::new(InMemoryCatalogStore::with_catalog("keys.csv", catalog()));
        let service =
            ValidationService::new(Arc::new(StaticBlockScanner::with_names(&[])), store.clone());

        let err = service.run(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.report(&PathBuf::from("report.txt")).is_none());
    }
}
