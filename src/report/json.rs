use crate::analysis::AnalysisReport;
use crate::asset::Asset;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

/// JSON renderer for programmatic output
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, report: &AnalysisReport) -> Result<String> {
        serde_json::to_string_pretty(&JsonReport::from_report(report)).into_diagnostic()
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of an analysis report.
///
/// Fields are declared in the sorted order of their serialized keys so the
/// output has stable, sorted keys.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub assets: Vec<JsonAsset>,
    pub summary: JsonSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSummary {
    pub total_assets: usize,
    pub total_size: u64,
    pub unused_assets: usize,
    pub unused_size: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAsset {
    pub is_used: bool,
    pub name: String,
    pub path: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub asset_type: &'static str,
    pub usage_count: usize,
    pub usage_details: Vec<JsonUsage>,
}

#[derive(Debug, Serialize)]
pub struct JsonUsage {
    pub file: String,
    pub occurrences: usize,
}

impl JsonReport {
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            assets: report.all_assets.iter().map(JsonAsset::from_asset).collect(),
            summary: JsonSummary {
                total_assets: report.total_assets,
                total_size: report.total_size,
                unused_assets: report.unused_count(),
                unused_size: report.unused_size,
            },
        }
    }
}

impl JsonAsset {
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            is_used: asset.is_used,
            name: asset.name.clone(),
            path: asset.path.to_string_lossy().to_string(),
            size: asset.size,
            asset_type: asset.asset_type.as_str(),
            usage_count: asset.total_usage_count(),
            usage_details: asset
                .usage_details
                .iter()
                .map(|usage| JsonUsage {
                    file: usage.file_path.to_string_lossy().to_string(),
                    occurrences: usage.occurrences,
                })
                .collect(),
        }
    }
}
