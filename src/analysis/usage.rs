use crate::asset::{Asset, AssetUsage};
use crate::discovery::SourceFile;
use crate::matching::{PatternMatcher, PatternMatching};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Cross-references assets against source files
pub struct UsageResolver {
    matcher: Box<dyn PatternMatching>,
    parallel: bool,
}

impl UsageResolver {
    pub fn new() -> Self {
        Self::with_matcher(Box::new(PatternMatcher::new()))
    }

    pub fn with_matcher(matcher: Box<dyn PatternMatching>) -> Self {
        Self {
            matcher,
            parallel: true,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Annotate every asset with its usage. Output order matches input order.
    pub fn resolve(&self, assets: Vec<Asset>, sources: &[SourceFile]) -> Vec<Asset> {
        debug!(
            "Resolving usage of {} assets across {} source files",
            assets.len(),
            sources.len()
        );

        if self.parallel {
            assets
                .into_par_iter()
                .map(|asset| self.resolve_asset(asset, sources))
                .collect()
        } else {
            assets
                .into_iter()
                .map(|asset| self.resolve_asset(asset, sources))
                .collect()
        }
    }

    /// Count references to one asset in every source file
    pub fn resolve_asset(&self, asset: Asset, sources: &[SourceFile]) -> Asset {
        // `icon.large` and `iconlarge` are looked up the same way
        let match_name = asset.name.replace('.', "");
        let patterns = asset.asset_type.search_patterns(&match_name);

        let usage: Vec<AssetUsage> = sources
            .iter()
            .filter_map(|source| {
                let occurrences: usize = patterns
                    .iter()
                    .map(|pattern| self.matcher.count_matches(pattern, &source.contents))
                    .sum();
                (occurrences > 0).then(|| AssetUsage::new(&source.path, occurrences))
            })
            .collect();

        trace!(
            "{} ({}): {} referencing files",
            asset.name,
            asset.asset_type,
            usage.len()
        );
        asset.with_usage(usage)
    }
}

impl Default for UsageResolver {
    fn default() -> Self {
        Self::new()
    }
}
