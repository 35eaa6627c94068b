use crate::asset::{determine_asset_type, Asset, AssetType, COLOR_SET_EXTENSION};
use crate::error::{AssetError, Result};
use std::fs;
use std::path::Path;
use tracing::trace;
use walkdir::WalkDir;

/// Builds asset records from catalog entries
pub trait AssetCreating: Send + Sync {
    /// Create an asset for `path`, named `override_name` or after the file
    /// stem. Returns `None` when the entry carries no modification time.
    fn create_asset(&self, path: &Path, override_name: Option<&str>) -> Result<Option<Asset>>;

    fn determine_asset_type(&self, path: &Path) -> AssetType {
        determine_asset_type(path)
    }
}

/// Asset factory reading sizes and timestamps from the filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct AssetFactory;

impl AssetFactory {
    pub fn new() -> Self {
        Self
    }
}

impl AssetCreating for AssetFactory {
    fn create_asset(&self, path: &Path, override_name: Option<&str>) -> Result<Option<Asset>> {
        let metadata = fs::metadata(path).map_err(|e| AssetError::io(path, e))?;
        let Ok(last_modified) = metadata.modified() else {
            trace!("No modification time for {}", path.display());
            return Ok(None);
        };

        let asset_type = self.determine_asset_type(path);
        let name = match override_name {
            Some(name) => name.to_string(),
            None => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .ok_or_else(|| AssetError::InvalidPath(path.to_path_buf()))?,
        };

        let parent_is_color_set = path
            .parent()
            .and_then(|p| p.extension())
            .is_some_and(|ext| ext == COLOR_SET_EXTENSION);

        let size = if asset_type == AssetType::Color && parent_is_color_set {
            // A color counts every file of its set
            path.parent().map(shallow_size).transpose()?.unwrap_or(0)
        } else if metadata.is_dir() {
            deep_size(path)
        } else {
            metadata.len()
        };

        Ok(Some(Asset::new(name, path, asset_type, size, last_modified)))
    }
}

/// Total size of the regular files directly inside `dir`.
///
/// Listing the directory must succeed; entries whose size cannot be read
/// contribute nothing.
fn shallow_size(dir: &Path) -> Result<u64> {
    let entries = fs::read_dir(dir).map_err(|e| AssetError::io(dir, e))?;
    Ok(entries
        .flatten()
        .filter_map(|entry| entry.metadata().ok())
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.len())
        .sum())
}

/// Total size of every regular file below `dir`, unreadable entries skipped
fn deep_size(dir: &Path) -> u64 {
    WalkDir::new(dir)
        .into_iter()
        .flatten()
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}
