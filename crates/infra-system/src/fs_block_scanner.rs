// Filesystem block scanner
// reason: directory walk is blocking I/O, so it runs on tokio's blocking pool
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use ipb_core::domain::BlockLibrary;
use ipb_core::port::BlockScanner;
use ipb_core::{AppError, Result};

/// Block file extension, compared case-insensitively
const BLOCK_EXTENSION: &str = "dwg";

/// Walks a library tree and collects `.dwg` stems
#[derive(Debug, Default, Clone)]
pub struct FsBlockScanner;

impl FsBlockScanner {
    pub fn new() -> Self {
        Self
    }

    fn is_block_file(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(BLOCK_EXTENSION))
    }

    /// Depth-first walk; symlinked directories are not followed
    fn walk(root: &Path) -> BlockLibrary {
        let mut library = BlockLibrary::new();
        let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "Skipping unreadable folder");
                    continue;
                }
            };

            for entry in entries.flatten() {
                let path = entry.path();
                let Ok(file_type) = entry.file_type() else {
                    continue;
                };

                if file_type.is_dir() {
                    pending.push(path);
                } else if Self::is_block_file(&path) {
                    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                        debug!(path = %path.display(), "Skipping non UTF-8 file name");
                        continue;
                    };
                    let relative = dir
                        .strip_prefix(root)
                        .ok()
                        .map(|p| p.display().to_string());
                    library.insert(stem, relative.as_deref());
                }
            }
        }

        library
    }
}

#[async_trait]
impl BlockScanner for FsBlockScanner {
    async fn scan(&self, root: &Path) -> Result<BlockLibrary> {
        if !root.is_dir() {
            warn!(root = %root.display(), "Block folder not found");
            return Ok(BlockLibrary::new());
        }

        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || Self::walk(&root))
            .await
            .map_err(|e| AppError::Internal(format!("block scan task failed: {}", e)))
    }
}
