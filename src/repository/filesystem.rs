use super::AssetRepository;
use crate::analysis::UsageResolver;
use crate::asset::{Asset, COLOR_SET_EXTENSION, DATA_SET_EXTENSION, IMAGE_SET_EXTENSION};
use crate::config::Config;
use crate::discovery::{AssetCatalogScanner, CatalogScanning, SourceFinder};
use crate::error::{AssetError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Repository over a project directory on disk
pub struct FileSystemAssetRepository {
    project_path: PathBuf,
    catalog_scanner: Box<dyn CatalogScanning>,
    source_finder: SourceFinder,
    resolver: UsageResolver,
}

impl FileSystemAssetRepository {
    pub fn new(project_path: impl Into<PathBuf>, config: &Config) -> Self {
        let excluded = config.excluded_directory_set();
        Self::with_components(
            project_path,
            Box::new(AssetCatalogScanner::new(
                excluded.clone(),
                config.include_system_files,
            )),
            SourceFinder::new(excluded, config.source_extension_set()),
            UsageResolver::new().with_parallel(config.parallel),
        )
    }

    pub fn with_components(
        project_path: impl Into<PathBuf>,
        catalog_scanner: Box<dyn CatalogScanning>,
        source_finder: SourceFinder,
        resolver: UsageResolver,
    ) -> Self {
        Self {
            project_path: project_path.into(),
            catalog_scanner,
            source_finder,
            resolver,
        }
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Project path made absolute, so exclusion checks see leading slashes
    fn project_root(&self) -> Result<PathBuf> {
        std::path::absolute(&self.project_path).map_err(|e| AssetError::io(&self.project_path, e))
    }
}

impl AssetRepository for FileSystemAssetRepository {
    fn find_all_assets(&self) -> Result<Vec<Asset>> {
        let root = self.project_root()?;
        let catalogs = self.catalog_scanner.find_asset_catalogs(&root)?;

        let mut assets = Vec::new();
        for catalog in &catalogs {
            let found = self.catalog_scanner.process_asset_catalog(catalog)?;
            debug!("{}: {} assets", catalog.display(), found.len());
            assets.extend(found);
        }

        info!(
            "Found {} assets in {} catalogs",
            assets.len(),
            catalogs.len()
        );
        Ok(assets)
    }

    fn analyze_asset_usage(&self, assets: Vec<Asset>) -> Result<Vec<Asset>> {
        let root = self.project_root()?;
        let files = self.source_finder.find_source_files(&root)?;
        let sources = self.source_finder.load_sources(&files)?;
        info!("Checking {} assets against {} source files", assets.len(), sources.len());
        Ok(self.resolver.resolve(assets, &sources))
    }

    fn delete_assets(&self, assets: &[Asset]) -> Result<()> {
        let mut removed: HashSet<PathBuf> = HashSet::new();

        for asset in assets {
            let target = deletion_target(&asset.path);
            // Variants of one image set share their container
            if removed.contains(&target) {
                continue;
            }

            remove_path(&target).map_err(|source| AssetError::DeletionFailed {
                path: asset.path.clone(),
                source,
            })?;
            info!("Deleted {}", target.display());
            removed.insert(target);
        }

        Ok(())
    }
}

/// The path to remove for an asset: its composite container when it lives
/// in one, the asset path itself otherwise
pub fn deletion_target(asset_path: &Path) -> PathBuf {
    let composite_suffixes = [IMAGE_SET_EXTENSION, COLOR_SET_EXTENSION, DATA_SET_EXTENSION];

    match asset_path.parent() {
        Some(parent)
            if parent.file_name().is_some_and(|name| {
                let name = name.to_string_lossy();
                composite_suffixes
                    .iter()
                    .any(|suffix| name.contains(&format!(".{}", suffix)))
            }) =>
        {
            parent.to_path_buf()
        }
        _ => asset_path.to_path_buf(),
    }
}

fn remove_path(path: &Path) -> std::io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
