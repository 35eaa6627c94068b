//! Storage-facing contract consumed by the analyzer

mod filesystem;

pub use filesystem::FileSystemAssetRepository;

use crate::asset::Asset;
use crate::error::Result;

/// Source of assets and their usage
pub trait AssetRepository {
    /// Every asset in every catalog of the project
    fn find_all_assets(&self) -> Result<Vec<Asset>>;

    /// Annotate `assets` with their usage in the project's sources
    fn analyze_asset_usage(&self, assets: Vec<Asset>) -> Result<Vec<Asset>>;

    /// Remove `assets`; the first failure aborts the batch
    fn delete_assets(&self, assets: &[Asset]) -> Result<()>;

    /// Assets no source file references
    fn find_unused_assets(&self) -> Result<Vec<Asset>> {
        let assets = self.find_all_assets()?;
        Ok(self
            .analyze_asset_usage(assets)?
            .into_iter()
            .filter(|asset| !asset.is_used)
            .collect())
    }
}
