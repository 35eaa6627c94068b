//! Filesystem discovery: asset catalogs and the source files that reference them

mod catalog;
mod factory;
mod file_scanner;
mod source_finder;

pub use catalog::{AssetCatalogScanner, CatalogScanning};
pub use factory::{AssetCreating, AssetFactory};
pub use file_scanner::{is_excluded, is_hidden, FileScanner, FileScanning, ScannedEntry};
pub use source_finder::{SourceFile, SourceFinder};
