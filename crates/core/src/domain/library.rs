// Block library (set of available DWG block names)

use std::collections::{BTreeSet, HashSet};

/// Block names discovered under a library root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockLibrary {
    names: HashSet<String>,
    block_files: usize,
    subfolders: BTreeSet<String>,
}

impl BlockLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one block file.
    ///
    /// `stem` is upper-cased. `subfolder` is the file's directory relative to
    /// the library root; `None` or an empty string means the root itself.
    pub fn insert(&mut self, stem: &str, subfolder: Option<&str>) {
        self.names.insert(stem.to_uppercase());
        self.block_files += 1;

        if let Some(dir) = subfolder.filter(|d| !d.is_empty()) {
            self.subfolders.insert(dir.to_string());
        }
    }

    pub fn contains(&self, blockname: &str) -> bool {
        self.names.contains(blockname)
    }

    /// Distinct block names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Block files seen, counting the same name in several folders separately
    pub fn block_files(&self) -> usize {
        self.block_files
    }

    /// Relative subfolders containing at least one block, sorted
    pub fn subfolders(&self) -> &BTreeSet<String> {
        &self.subfolders
    }
}

impl<'a> FromIterator<&'a str> for BlockLibrary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut library = BlockLibrary::new();
        for stem in iter {
            library.insert(stem, None);
        }
        library
    }
}
