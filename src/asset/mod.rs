mod asset_type;

pub use asset_type::{
    determine_asset_type, AssetType, CATALOG_EXTENSION, COLOR_SET_EXTENSION, DATA_SET_EXTENSION,
    IMAGE_SET_EXTENSION, MANIFEST_BASE_NAME, MANIFEST_FILE_NAME,
};

use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Occurrences of an asset reference inside one source file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetUsage {
    /// Source file the references were found in
    pub file_path: PathBuf,
    /// Number of matches, always positive
    pub occurrences: usize,
}

impl AssetUsage {
    pub fn new(file_path: impl Into<PathBuf>, occurrences: usize) -> Self {
        Self {
            file_path: file_path.into(),
            occurrences,
        }
    }
}

/// An asset declared in a catalog.
///
/// Identity is the path: two records with the same path are the same asset,
/// whatever their usage state.
#[derive(Debug, Clone)]
pub struct Asset {
    /// Lookup name (the set name for image and color sets)
    pub name: String,

    /// Path of the underlying file or directory
    pub path: PathBuf,

    pub asset_type: AssetType,

    /// Size in bytes, summed over every file of a composite asset
    pub size: u64,

    pub last_modified: SystemTime,

    /// Whether any source file references this asset
    pub is_used: bool,

    /// Per-file reference counts, in source walk order
    pub usage_details: Vec<AssetUsage>,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        asset_type: AssetType,
        size: u64,
        last_modified: SystemTime,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            asset_type,
            size,
            last_modified,
            is_used: false,
            usage_details: Vec::new(),
        }
    }

    /// Attach usage details; the asset counts as used iff there are any
    pub fn with_usage(mut self, usage_details: Vec<AssetUsage>) -> Self {
        self.is_used = !usage_details.is_empty();
        self.usage_details = usage_details;
        self
    }

    pub fn with_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = asset_type;
        self
    }

    /// Sum of occurrences over every usage record
    pub fn total_usage_count(&self) -> usize {
        self.usage_details.iter().map(|u| u.occurrences).sum()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}
