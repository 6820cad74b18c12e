// CSV catalog store
// reason: csv crate for quoting rules; file I/O on the blocking pool
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use ipb_core::domain::CatalogTable;
use ipb_core::port::CatalogStore;
use ipb_core::{AppError, Result};

/// Reads and writes catalogs as UTF-8 CSV files
#[derive(Debug, Default, Clone)]
pub struct CsvCatalogStore;

impl CsvCatalogStore {
    pub fn new() -> Self {
        Self
    }

    fn read_sync(path: &Path) -> Result<CatalogTable> {
        if !path.is_file() {
            return Err(AppError::NotFound(format!(
                "CSV file not found: {}",
                path.display()
            )));
        }

        // Records may be ragged; missing cells read as empty
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(csv_error)?;

        let mut rows = reader.records();
        let headers = match rows.next() {
            Some(record) => to_strings(&record.map_err(csv_error)?),
            None => return Ok(CatalogTable::default()),
        };

        let records = rows
            .map(|r| r.map(|record| to_strings(&record)).map_err(csv_error))
            .collect::<Result<Vec<_>>>()?;

        Ok(CatalogTable::new(headers, records))
    }

    fn write_sync(path: &Path, table: &CatalogTable) -> Result<()> {
        // CRLF like spreadsheet tools expect
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::CRLF)
            .from_path(path)
            .map_err(csv_error)?;

        if !table.headers.is_empty() {
            writer.write_record(&table.headers).map_err(csv_error)?;
        }
        for record in &table.records {
            writer.write_record(record).map_err(csv_error)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn to_strings(record: &csv::StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Csv(e.to_string())
}

async fn blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("catalog I/O task failed: {}", e)))?
}

#[async_trait]
impl CatalogStore for CsvCatalogStore {
    async fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    async fn read_catalog(&self, path: &Path) -> Result<CatalogTable> {
        let path: PathBuf = path.to_path_buf();
        blocking(move || Self::read_sync(&path)).await
    }

    async fn write_catalog(&self, path: &Path, table: &CatalogTable) -> Result<()> {
        let path: PathBuf = path.to_path_buf();
        let table = table.clone();
        blocking(move || Self::write_sync(&path, &table)).await
    }

    async fn write_report(&self, path: &Path, contents: &str) -> Result<()> {
        let path: PathBuf = path.to_path_buf();
        let contents = contents.to_string();
        blocking(move || fs::write(&path, contents).map_err(AppError::from)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_quoted_and_ragged() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keys.csv");
        fs::write(
            &path,
            "Code,Description,Blockname\nTREE,\"Tree, deciduous\",oak\nMH,Manhole\n",
        )
        .unwrap();

        let table = CsvCatalogStore::new().read_catalog(&path).await.unwrap();

        assert_eq!(table.headers, vec!["Code", "Description", "Blockname"]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0][1], "Tree, deciduous");
        assert_eq!(table.records[1].len(), 2);

        let entries = table.entries();
        assert_eq!(entries[0].blockname, "OAK");
        assert_eq!(entries[1].blockname, "");
    }

    #[tokio::test]
    async fn test_empty_file_has_no_rows() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.csv");
        fs::write(&path, "").unwrap();

        let table = CsvCatalogStore::new().read_catalog(&path).await.unwrap();
        assert!(table.headers.is_empty());
        assert!(table.entries().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let store = CsvCatalogStore::new();
        let path = tmp.path().join("missing.csv");

        assert!(!store.exists(&path).await);
        let err = store.read_catalog(&path).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_write_preserves_quoting() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let table = CatalogTable::new(
            vec!["Code".into(), "Note".into(), "ValidationStatus".into()],
            vec![vec!["A".into(), "has, comma".into(), "OK".into()]],
        );

        let store = CsvCatalogStore::new();
        store.write_catalog(&path, &table).await.unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Code,Note,ValidationStatus\r\nA,\"has, comma\",OK\r\n"
        );
        assert_eq!(store.read_catalog(&path).await.unwrap(), table);
    }

    #[tokio::test]
    async fn test_empty_catalog_writes_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");

        CsvCatalogStore::new()
            .write_catalog(&path, &CatalogTable::default())
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_write_report() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.txt");
        CsvCatalogStore::new()
            .write_report(&path, "Report complete!\n")
            .await
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Report complete!\n");
    }
}
