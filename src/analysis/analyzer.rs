use super::report::AnalysisReport;
use crate::asset::{Asset, AssetType};
use crate::error::Result;
use crate::repository::AssetRepository;
use tracing::info;

/// Runs analysis passes and cleanups over a repository
pub struct AssetAnalyzer<R: AssetRepository> {
    repository: R,
}

impl<R: AssetRepository> AssetAnalyzer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Discover every asset, resolve usage and summarize
    pub fn analyze_assets(&self) -> Result<AnalysisReport> {
        let assets = self.repository.find_all_assets()?;
        let analyzed = self.repository.analyze_asset_usage(assets)?;
        let report = AnalysisReport::from_assets(analyzed);

        info!(
            "{} assets, {} unused ({} of {} bytes)",
            report.total_assets,
            report.unused_count(),
            report.unused_size,
            report.total_size
        );
        Ok(report)
    }

    /// Delete every unused asset, optionally restricted to one type.
    /// Returns the assets that were deleted.
    pub fn clean_unused_assets(&self, asset_type: Option<AssetType>) -> Result<Vec<Asset>> {
        let mut unused = self.repository.find_unused_assets()?;
        if let Some(asset_type) = asset_type {
            unused.retain(|asset| asset.asset_type == asset_type);
        }
        self.repository.delete_assets(&unused)?;
        Ok(unused)
    }

    /// Delete exactly the unused assets listed in `report`
    pub fn delete_unused(&self, report: &AnalysisReport) -> Result<()> {
        self.repository.delete_assets(&report.unused_assets)
    }
}
