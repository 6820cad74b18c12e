// Catalog Store Port
// Reads the description-keys CSV and writes validation artifacts

use crate::domain::CatalogTable;
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Whether a catalog exists at `path`
    async fn exists(&self, path: &Path) -> bool;

    /// Read the whole catalog
    ///
    /// # Errors
    /// - AppError::NotFound if the file does not exist
    /// - AppError::Csv if the file is not valid CSV
    async fn read_catalog(&self, path: &Path) -> Result<CatalogTable>;

    /// Write a catalog (header first, then records)
    async fn write_catalog(&self, path: &Path, table: &CatalogTable) -> Result<()>;

    /// Write the text report
    async fn write_report(&self, path: &Path, contents: &str) -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// In-memory catalog store
    #[derive(Default)]
    pub struct InMemoryCatalogStore {
        catalogs: Arc<Mutex<HashMap<PathBuf, CatalogTable>>>,
        reports: Arc<Mutex<HashMap<PathBuf, String>>>,
    }

    impl InMemoryCatalogStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_catalog(path: impl Into<PathBuf>, table: CatalogTable) -> Self {
            let store = Self::new();
            store.catalogs.lock().unwrap().insert(path.into(), table);
            store
        }

        pub fn catalog(&self, path: &Path) -> Option<CatalogTable> {
            self.catalogs.lock().unwrap().get(path).cloned()
        }

        pub fn report(&self, path: &Path) -> Option<String> {
            self.reports.lock().unwrap().get(path).cloned()
        }
    }

    #[async_trait]
    impl CatalogStore for InMemoryCatalogStore {
        async fn exists(&self, path: &Path) -> bool {
            self.catalogs.lock().unwrap().contains_key(path)
        }

        async fn read_catalog(&self, path: &Path) -> Result<CatalogTable> {
            self.catalog(path)
                .ok_or_else(|| AppError::NotFound(path.display().to_string()))
        }

        async fn write_catalog(&self, path: &Path, table: &CatalogTable) -> Result<()> {
            self.catalogs
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), table.clone());
            Ok(())
        }

        async fn write_report(&self, path: &Path, contents: &str) -> Result<()> {
            self.reports
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }
    }
}
