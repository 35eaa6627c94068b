//! AssetOrganizer - Find unused assets in Xcode asset catalogs
//!
//! This library discovers the images, colors and data sets declared in
//! `.xcassets` catalogs and counts how often source files refer to them.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **Catalog Discovery** - Find `.xcassets` containers and enumerate their assets
//! 2. **Source Discovery** - Find and read the project's source and interface files
//! 3. **Usage Resolution** - Match per-type search patterns against every source
//! 4. **Reporting** - Summarize, filter and sort, then render for the console, Markdown or JSON
//! 5. **Cleanup** - Delete the unused assets of a report

pub mod analysis;
pub mod asset;
pub mod cleanup;
pub mod config;
pub mod discovery;
pub mod error;
pub mod matching;
pub mod report;
pub mod repository;

pub use analysis::{AnalysisReport, AssetAnalyzer, SortOption, UsageResolver};
pub use asset::{Asset, AssetType, AssetUsage};
pub use cleanup::SafeDeleter;
pub use config::Config;
pub use error::{AssetError, Result};
pub use report::{ReportFormat, Reporter};
pub use repository::{AssetRepository, FileSystemAssetRepository};
