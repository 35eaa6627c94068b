use crate::error::{AssetError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// An entry offered to a [`FileScanning`] predicate
#[derive(Debug, Clone, Copy)]
pub struct ScannedEntry<'a> {
    pub path: &'a Path,
    pub is_dir: bool,
}

impl<'a> ScannedEntry<'a> {
    pub fn extension(&self) -> Option<&'a str> {
        self.path.extension().and_then(|e| e.to_str())
    }
}

/// Recursive directory listing with exclusion
pub trait FileScanning: Send + Sync {
    /// Every entry below `root` (root excluded) accepted by `predicate`,
    /// skipping hidden entries and excluded directories.
    fn find_files(
        &self,
        root: &Path,
        predicate: &dyn Fn(&ScannedEntry) -> bool,
        excluded_directories: &HashSet<String>,
    ) -> Result<Vec<PathBuf>>;
}

/// Whether `path` lies inside one of the excluded directories.
///
/// This is a containment test on `/<name>/`, not a segment comparison: the
/// directory entry itself passes, everything below it is rejected.
pub fn is_excluded(path: &Path, excluded_directories: &HashSet<String>) -> bool {
    let path_str = path.to_string_lossy();
    excluded_directories
        .iter()
        .any(|dir| path_str.contains(&format!("/{}/", dir)))
}

/// Hidden entries start with a dot
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Filesystem scanner backed by walkdir
#[derive(Debug, Default, Clone, Copy)]
pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }
}

impl FileScanning for FileScanner {
    fn find_files(
        &self,
        root: &Path,
        predicate: &dyn Fn(&ScannedEntry) -> bool,
        excluded_directories: &HashSet<String>,
    ) -> Result<Vec<PathBuf>> {
        let mut matches = Vec::new();

        let mut walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));

        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| AssetError::from_walk(root, e))?;
            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_dir();

            if is_excluded(path, excluded_directories) {
                trace!("Excluding: {}", path.display());
                if is_dir {
                    walker.skip_current_dir();
                }
                continue;
            }

            if predicate(&ScannedEntry { path, is_dir }) {
                matches.push(path.to_path_buf());
            }
        }

        Ok(matches)
    }
}
