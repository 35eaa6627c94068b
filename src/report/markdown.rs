use super::group_by_type;
use super::size::format_bytes;
use crate::analysis::AnalysisReport;
use crate::asset::Asset;

/// Markdown renderer for saved reports
pub struct MarkdownReporter;

impl MarkdownReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, report: &AnalysisReport) -> String {
        let mut lines = vec![
            "# Asset Analysis Report".to_string(),
            String::new(),
            "## 📊 Summary".to_string(),
            String::new(),
            "| Metric | Value |".to_string(),
            "|--------|--------|".to_string(),
            format!("| Total Assets | {} |", report.total_assets),
            format!("| Unused Assets | {} |", report.unused_count()),
            format!("| Total Size | {} |", format_bytes(report.total_size)),
            format!("| Size of Unused Assets | {} |", format_bytes(report.unused_size)),
            String::new(),
            "## 📋 Asset Details".to_string(),
            String::new(),
        ];

        for (asset_type, assets) in group_by_type(&report.all_assets) {
            lines.push(format!("### {} Assets", asset_type.display_name()));
            lines.push(String::new());
            lines.extend(asset_table(&assets));
            lines.push(String::new());

            let used: Vec<&Asset> = assets.iter().copied().filter(|a| a.is_used).collect();
            lines.extend(usage_details(&used));
        }

        if !report.unused_assets.is_empty() {
            lines.extend(unused_summary(&report.unused_assets));
        }

        lines.join("\n")
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn asset_table(assets: &[&Asset]) -> Vec<String> {
    let mut lines = vec![
        "| Asset | Size | Status | Usage Count |".to_string(),
        "|-------|------|--------|-------------|".to_string(),
    ];
    for asset in assets {
        let status = if asset.is_used { "✅ Used" } else { "❌ Unused" };
        lines.push(format!(
            "| {} | {} | {} | {} |",
            asset.name,
            format_bytes(asset.size),
            status,
            asset.total_usage_count()
        ));
    }
    lines
}

fn usage_details(assets: &[&Asset]) -> Vec<String> {
    if assets.is_empty() {
        return Vec::new();
    }

    let mut lines = vec!["#### Usage Details".to_string(), String::new()];
    for asset in assets {
        lines.push("<details>".to_string());
        lines.push(format!(
            "<summary><b>{}</b> ({} occurrences)</summary>",
            asset.name,
            asset.total_usage_count()
        ));
        lines.push(String::new());
        lines.push("| File | Occurrences |".to_string());
        lines.push("|------|-------------|".to_string());

        let mut usages: Vec<_> = asset.usage_details.iter().collect();
        usages.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        for usage in usages {
            lines.push(format!(
                "| {} | {} |",
                usage.file_path.display(),
                usage.occurrences
            ));
        }

        lines.push(String::new());
        lines.push("</details>".to_string());
        lines.push(String::new());
    }
    lines
}

fn unused_summary(assets: &[Asset]) -> Vec<String> {
    let mut lines = vec![
        "## ⚠️ Unused Assets Summary".to_string(),
        String::new(),
        "| Asset | Size | Path |".to_string(),
        "|-------|------|------|".to_string(),
    ];
    for asset in assets {
        lines.push(format!(
            "| {} | {} | {} |",
            asset.name,
            format_bytes(asset.size),
            asset.path.display()
        ));
    }
    lines
}
