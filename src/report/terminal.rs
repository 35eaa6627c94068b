use super::group_by_type;
use super::size::format_bytes;
use crate::analysis::AnalysisReport;
use crate::asset::Asset;
use colored::Colorize;
use std::fmt::Write;

/// Terminal reporter with colored output
pub struct TerminalReporter {
    /// Show paths and per-file usage for every asset
    show_detail: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { show_detail: false }
    }

    pub fn with_detail(mut self, show: bool) -> Self {
        self.show_detail = show;
        self
    }

    pub fn report(&self, report: &AnalysisReport) {
        print!("{}", self.render(report));
    }

    pub fn render(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();

        self.write_summary(&mut out, report);

        for (asset_type, assets) in group_by_type(&report.all_assets) {
            let _ = writeln!(
                out,
                "{}",
                format!("{} Assets ({})", asset_type.display_name(), assets.len())
                    .cyan()
                    .bold()
            );
            for asset in assets {
                self.write_asset(&mut out, asset);
            }
            let _ = writeln!(out);
        }

        self.write_unused(&mut out, report);
        out
    }

    fn write_summary(&self, out: &mut String, report: &AnalysisReport) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "Asset Analysis Summary".bold());
        let _ = writeln!(out, "{}", "─".repeat(60).dimmed());
        let _ = writeln!(out, "  Total assets:  {}", report.total_assets);
        let _ = writeln!(
            out,
            "  Unused assets: {}",
            report.unused_count().to_string().yellow()
        );
        let _ = writeln!(out, "  Total size:    {}", format_bytes(report.total_size));
        let _ = writeln!(
            out,
            "  Unused size:   {}",
            format_bytes(report.unused_size).yellow()
        );
        let _ = writeln!(out);
    }

    fn write_asset(&self, out: &mut String, asset: &Asset) {
        let marker = if asset.is_used {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };

        let _ = writeln!(
            out,
            "  {} {} {} {}",
            marker,
            asset.name.white(),
            format!("({})", format_bytes(asset.size)).dimmed(),
            format!("{} uses", asset.total_usage_count()).dimmed()
        );

        if !self.show_detail {
            return;
        }

        let status = if asset.is_used {
            "used".green()
        } else {
            "unused".red()
        };
        let _ = writeln!(out, "    {} {}", "path:".dimmed(), asset.path.display());
        let _ = writeln!(out, "    {} {}", "status:".dimmed(), status);

        let mut usages: Vec<_> = asset.usage_details.iter().collect();
        usages.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        for usage in usages {
            let _ = writeln!(
                out,
                "    {} {} ({})",
                "→".dimmed(),
                usage.file_path.display(),
                usage.occurrences
            );
        }
    }

    fn write_unused(&self, out: &mut String, report: &AnalysisReport) {
        let _ = writeln!(out, "{}", "─".repeat(60).dimmed());

        if report.unused_assets.is_empty() {
            let _ = writeln!(out, "{}", "No unused assets found!".green().bold());
            return;
        }

        let _ = writeln!(
            out,
            "{}",
            format!(
                "Found {} unused assets ({})",
                report.unused_count(),
                format_bytes(report.unused_size)
            )
            .yellow()
            .bold()
        );
        for asset in &report.unused_assets {
            let _ = writeln!(
                out,
                "  {} {} {}",
                "•".yellow(),
                asset.name,
                asset.path.display().to_string().dimmed()
            );
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
