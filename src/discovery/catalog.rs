use super::factory::{AssetCreating, AssetFactory};
use super::file_scanner::{FileScanner, FileScanning};
use crate::asset::{
    Asset, AssetType, CATALOG_EXTENSION, COLOR_SET_EXTENSION, IMAGE_SET_EXTENSION,
    MANIFEST_BASE_NAME, MANIFEST_FILE_NAME,
};
use crate::error::{AssetError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Locates asset catalogs and turns their contents into assets
pub trait CatalogScanning: Send + Sync {
    /// Every `.xcassets` directory below `project_root`
    fn find_asset_catalogs(&self, project_root: &Path) -> Result<Vec<PathBuf>>;

    /// Every asset declared inside `catalog`, walking group folders
    fn process_asset_catalog(&self, catalog: &Path) -> Result<Vec<Asset>>;
}

/// Catalog walker over the real filesystem
pub struct AssetCatalogScanner {
    scanner: Box<dyn FileScanning>,
    factory: Box<dyn AssetCreating>,
    excluded_directories: HashSet<String>,
    include_system_files: bool,
}

impl AssetCatalogScanner {
    pub fn new(excluded_directories: HashSet<String>, include_system_files: bool) -> Self {
        Self::with_components(
            Box::new(FileScanner::new()),
            Box::new(AssetFactory::new()),
            excluded_directories,
            include_system_files,
        )
    }

    pub fn with_components(
        scanner: Box<dyn FileScanning>,
        factory: Box<dyn AssetCreating>,
        excluded_directories: HashSet<String>,
        include_system_files: bool,
    ) -> Self {
        Self {
            scanner,
            factory,
            excluded_directories,
            include_system_files,
        }
    }

    /// Image set: one asset per image file, all named after the set
    fn process_image_set(&self, image_set: &Path, assets: &mut Vec<Asset>) -> Result<()> {
        let name = base_name(image_set)?;

        for entry in list_directory(image_set)? {
            if entry.is_dir || file_name(&entry.path) == MANIFEST_FILE_NAME {
                continue;
            }
            let is_image = entry
                .path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| {
                    AssetType::Image
                        .extensions()
                        .contains(&ext.to_lowercase().as_str())
                });
            if !is_image {
                continue;
            }
            if let Some(asset) = self.factory.create_asset(&entry.path, Some(&name))? {
                assets.push(asset);
            }
        }

        Ok(())
    }

    /// Color set: a single asset built from its manifest
    fn process_color_set(&self, color_set: &Path, assets: &mut Vec<Asset>) -> Result<()> {
        let name = base_name(color_set)?;

        let manifest = list_directory(color_set)?
            .into_iter()
            .find(|entry| !entry.is_dir && file_name(&entry.path) == MANIFEST_FILE_NAME);

        if let Some(manifest) = manifest {
            if let Some(asset) = self.factory.create_asset(&manifest.path, Some(&name))? {
                assets.push(asset.with_type(AssetType::Color));
            }
        } else {
            trace!("Color set without manifest: {}", color_set.display());
        }

        Ok(())
    }

    fn is_system_asset(asset: &Asset) -> bool {
        asset.name.starts_with('.')
            || asset.name == MANIFEST_BASE_NAME
            || asset.path.to_string_lossy().contains("/.")
    }
}

impl CatalogScanning for AssetCatalogScanner {
    fn find_asset_catalogs(&self, project_root: &Path) -> Result<Vec<PathBuf>> {
        let catalogs = self.scanner.find_files(
            project_root,
            &|entry| entry.extension() == Some(CATALOG_EXTENSION),
            &self.excluded_directories,
        )?;
        debug!("Found {} asset catalogs", catalogs.len());
        Ok(catalogs)
    }

    fn process_asset_catalog(&self, catalog: &Path) -> Result<Vec<Asset>> {
        let mut assets = Vec::new();

        for entry in list_directory(catalog)? {
            let extension = entry
                .path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();

            match (entry.is_dir, extension.as_str()) {
                (true, IMAGE_SET_EXTENSION) => self.process_image_set(&entry.path, &mut assets)?,
                (true, COLOR_SET_EXTENSION) => self.process_color_set(&entry.path, &mut assets)?,
                (true, "") => assets.extend(self.process_asset_catalog(&entry.path)?),
                (_, "") => {}
                _ => {
                    if let Some(asset) = self.factory.create_asset(&entry.path, None)? {
                        assets.push(asset);
                    }
                }
            }
        }

        if !self.include_system_files {
            assets.retain(|asset| !Self::is_system_asset(asset));
        }

        trace!("{} assets in {}", assets.len(), catalog.display());
        Ok(assets)
    }
}

struct DirEntryInfo {
    path: PathBuf,
    is_dir: bool,
}

/// Children of `dir`, sorted by name
fn list_directory(dir: &Path) -> Result<Vec<DirEntryInfo>> {
    let read_dir = fs::read_dir(dir).map_err(|e| AssetError::io(dir, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| AssetError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| AssetError::io(&path, e))?;
        entries.push(DirEntryInfo {
            path,
            is_dir: file_type.is_dir(),
        });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Directory name without its set suffix
fn base_name(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| AssetError::InvalidPath(path.to_path_buf()))
}
