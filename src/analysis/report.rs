use crate::asset::{Asset, AssetType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordering applied to report asset lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Lexicographic by name
    Name,
    /// Largest first
    Size,
    /// Most referenced first
    Usage,
}

impl SortOption {
    /// Stable sort: equal keys keep their relative order
    pub fn sort(&self, assets: &mut [Asset]) {
        match self {
            SortOption::Name => assets.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOption::Size => assets.sort_by(|a, b| b.size.cmp(&a.size)),
            SortOption::Usage => {
                assets.sort_by(|a, b| b.total_usage_count().cmp(&a.total_usage_count()))
            }
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortOption::Name),
            "size" => Ok(SortOption::Size),
            "usage" => Ok(SortOption::Usage),
            other => Err(format!("unknown sort option '{}' (expected name, size or usage)", other)),
        }
    }
}

/// Result of one analysis pass.
///
/// Totals are always derived from the asset lists they describe; every
/// transformation returns a new report.
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    pub total_assets: usize,
    pub unused_assets: Vec<Asset>,
    pub total_size: u64,
    pub unused_size: u64,
    pub all_assets: Vec<Asset>,
}

impl AnalysisReport {
    /// Build a report from analyzed assets
    pub fn from_assets(all_assets: Vec<Asset>) -> Self {
        let unused_assets = all_assets.iter().filter(|a| !a.is_used).cloned().collect();
        Self::from_parts(all_assets, unused_assets)
    }

    fn from_parts(all_assets: Vec<Asset>, unused_assets: Vec<Asset>) -> Self {
        Self {
            total_assets: all_assets.len(),
            total_size: all_assets.iter().map(|a| a.size).sum(),
            unused_size: unused_assets.iter().map(|a| a.size).sum(),
            unused_assets,
            all_assets,
        }
    }

    /// Keep only assets of `asset_type`
    pub fn filtered_by_type(&self, asset_type: AssetType) -> Self {
        self.filtered(|a| a.asset_type == asset_type)
    }

    /// Keep only assets of at least `min_size` bytes
    pub fn filtered_by_min_size(&self, min_size: u64) -> Self {
        self.filtered(|a| a.size >= min_size)
    }

    fn filtered(&self, keep: impl Fn(&Asset) -> bool) -> Self {
        Self::from_parts(
            self.all_assets.iter().filter(|a| keep(a)).cloned().collect(),
            self.unused_assets.iter().filter(|a| keep(a)).cloned().collect(),
        )
    }

    /// Sort both asset lists; totals are unchanged
    pub fn sorted(&self, option: SortOption) -> Self {
        let mut sorted = self.clone();
        option.sort(&mut sorted.all_assets);
        option.sort(&mut sorted.unused_assets);
        sorted
    }

    pub fn unused_count(&self) -> usize {
        self.unused_assets.len()
    }
}
