mod json;
mod markdown;
mod size;
mod terminal;

pub use json::{JsonAsset, JsonReport, JsonReporter, JsonSummary, JsonUsage};
pub use markdown::MarkdownReporter;
pub use size::{format_bytes, parse_size};
pub use terminal::TerminalReporter;

use crate::analysis::AnalysisReport;
use crate::asset::{Asset, AssetType};
use colored::Colorize;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Markdown,
    Json,
}

/// Reporter for asset analysis results.
///
/// Renders to stdout in `format`, and additionally saves a Markdown or JSON
/// copy when an output path is given.
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    show_detail: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>, show_detail: bool) -> Self {
        Self {
            format,
            output_path,
            show_detail,
        }
    }

    pub fn report(&self, report: &AnalysisReport) -> Result<()> {
        match self.format {
            ReportFormat::Terminal => TerminalReporter::new()
                .with_detail(self.show_detail)
                .report(report),
            ReportFormat::Markdown => println!("{}", MarkdownReporter::new().render(report)),
            ReportFormat::Json => println!("{}", JsonReporter::new().render(report)?),
        }

        if let Some(path) = &self.output_path {
            let (path, format) = resolve_output_path(path);
            let contents = match format {
                ReportFormat::Json => JsonReporter::new().render(report)?,
                _ => MarkdownReporter::new().render(report),
            };
            std::fs::write(&path, contents)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!(
                "{} Report saved to {}",
                "✓".green(),
                path.display().to_string().cyan()
            );
        }

        Ok(())
    }
}

/// Normalise a report file path and pick its format.
///
/// A path without a `.` gets `.md` appended; `.json` and `.md` are kept; any
/// other extension is replaced by `.md`. Only `.json` yields JSON.
pub fn resolve_output_path(path: &Path) -> (PathBuf, ReportFormat) {
    let has_dot = path.to_string_lossy().contains('.');
    if !has_dot {
        let mut raw = path.as_os_str().to_owned();
        raw.push(".md");
        return (PathBuf::from(raw), ReportFormat::Markdown);
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => (path.to_path_buf(), ReportFormat::Json),
        Some("md") => (path.to_path_buf(), ReportFormat::Markdown),
        _ => (path.with_extension("md"), ReportFormat::Markdown),
    }
}

/// Group assets by type, ordered by type name
pub(crate) fn group_by_type(assets: &[Asset]) -> Vec<(AssetType, Vec<&Asset>)> {
    let mut groups: BTreeMap<&'static str, (AssetType, Vec<&Asset>)> = BTreeMap::new();
    for asset in assets {
        groups
            .entry(asset.asset_type.as_str())
            .or_insert_with(|| (asset.asset_type, Vec::new()))
            .1
            .push(asset);
    }
    groups.into_values().collect()
}
