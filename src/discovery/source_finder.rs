use super::file_scanner::{FileScanner, FileScanning};
use crate::error::{AssetError, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A source file with its contents loaded
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the file
    pub path: PathBuf,

    /// File contents, decoded lossily when not valid UTF-8
    pub contents: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Read a file from disk
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| AssetError::io(path, e))?;
        let contents = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        Ok(Self::new(path, contents))
    }
}

/// Finds the project files that may reference assets
pub struct SourceFinder {
    scanner: Box<dyn FileScanning>,
    excluded_directories: HashSet<String>,
    extensions: HashSet<String>,
}

impl SourceFinder {
    pub fn new(excluded_directories: HashSet<String>, extensions: HashSet<String>) -> Self {
        Self::with_scanner(Box::new(FileScanner::new()), excluded_directories, extensions)
    }

    pub fn with_scanner(
        scanner: Box<dyn FileScanning>,
        excluded_directories: HashSet<String>,
        extensions: HashSet<String>,
    ) -> Self {
        Self {
            scanner,
            excluded_directories,
            extensions,
        }
    }

    /// Files below `root` whose extension is a configured source extension
    pub fn find_source_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        debug!("Scanning for source files in: {}", root.display());

        let files = self.scanner.find_files(
            root,
            &|entry| {
                !entry.is_dir
                    && entry
                        .extension()
                        .is_some_and(|ext| self.extensions.contains(ext))
            },
            &self.excluded_directories,
        )?;

        debug!("Found {} source files", files.len());
        Ok(files)
    }

    /// Read every file once; any unreadable file aborts the load
    pub fn load_sources(&self, files: &[PathBuf]) -> Result<Vec<SourceFile>> {
        files.par_iter().map(|path| SourceFile::read(path)).collect()
    }
}
