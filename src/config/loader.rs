use crate::analysis::SortOption;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Configuration for an asset analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory names whose contents are never scanned
    pub excluded_directories: Vec<String>,

    /// Extensions of files searched for asset references
    pub source_extensions: Vec<String>,

    /// Keep dot-files and catalog manifests in the results
    pub include_system_files: bool,

    /// Resolve usage on all cores
    pub parallel: bool,

    /// Report configuration
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Show paths and per-file usage in console output
    pub show_detail: bool,

    /// Default ordering of report lists
    pub sort_by: Option<SortOption>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_directories: ["Pods", "Carthage", ".build", "build", "DerivedData"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            source_extensions: ["swift", "m", "h", "mm", "cpp", "c", "hpp", "xib", "storyboard"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            include_system_files: false,
            parallel: true,
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".assetorganizer.yml",
            ".assetorganizer.yaml",
            ".assetorganizer.toml",
            "assetorganizer.yml",
            "assetorganizer.yaml",
            "assetorganizer.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn excluded_directory_set(&self) -> HashSet<String> {
        self.excluded_directories.iter().cloned().collect()
    }

    pub fn source_extension_set(&self) -> HashSet<String> {
        self.source_extensions.iter().cloned().collect()
    }
}
