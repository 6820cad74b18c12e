// Block Scanner Port
// Discovers block names in a DWG library tree

use crate::domain::BlockLibrary;
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait BlockScanner: Send + Sync {
    /// Scan `root` recursively for `.dwg` files.
    ///
    /// A missing root yields an empty library rather than an error; callers
    /// decide what an empty library means.
    async fn scan(&self, root: &Path) -> Result<BlockLibrary>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;

    /// Returns a fixed library for any root
    pub struct StaticBlockScanner {
        library: BlockLibrary,
    }

    impl StaticBlockScanner {
        pub fn new(library: BlockLibrary) -> Self {
            Self { library }
        }

        pub fn with_names(names: &[&str]) -> Self {
            Self::new(names.iter().copied().collect())
        }
    }

    #[async_trait]
    impl BlockScanner for StaticBlockScanner {
        async fn scan(&self, _root: &Path) -> Result<BlockLibrary> {
            Ok(self.library.clone())
        }
    }
}
