//! Usage resolution and the reports built from it

mod analyzer;
mod report;
mod usage;

pub use analyzer::AssetAnalyzer;
pub use report::{AnalysisReport, SortOption};
pub use usage::UsageResolver;
