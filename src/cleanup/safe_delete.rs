use crate::analysis::{AnalysisReport, AssetAnalyzer};
use crate::report::format_bytes;
use crate::repository::AssetRepository;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};
use miette::{IntoDiagnostic, Result, WrapErr};

/// Deletes the unused assets of a report after confirmation
pub struct SafeDeleter {
    force: bool,
    dry_run: bool,
}

impl SafeDeleter {
    pub fn new(force: bool, dry_run: bool) -> Self {
        Self { force, dry_run }
    }

    /// Delete exactly `report.unused_assets`.
    ///
    /// Returns how many assets were removed; zero for a dry run or when the
    /// user declines.
    pub fn delete<R: AssetRepository>(
        &self,
        analyzer: &AssetAnalyzer<R>,
        report: &AnalysisReport,
    ) -> Result<usize> {
        let unused = &report.unused_assets;
        if unused.is_empty() {
            println!("{}", "No unused assets to delete.".green());
            return Ok(0);
        }

        if self.dry_run {
            println!();
            println!("{}", "Dry run - would delete:".yellow().bold());
            for asset in unused {
                println!(
                    "  {} {} at {}",
                    asset.asset_type.display_name(),
                    asset.name.white(),
                    asset.path.display()
                );
            }
            println!();
            println!(
                "{}",
                format!(
                    "Total: {} assets would be deleted ({})",
                    unused.len(),
                    format_bytes(report.unused_size)
                )
                .dimmed()
            );
            return Ok(0);
        }

        if !self.force && !self.confirm(report)? {
            println!("{}", "Deletion cancelled.".yellow());
            return Ok(0);
        }

        println!();
        println!("{}", "Deleting unused assets...".cyan().bold());

        analyzer
            .delete_unused(report)
            .into_diagnostic()
            .wrap_err("Asset deletion stopped early")?;

        for asset in unused {
            println!(
                "  {} Deleted {} '{}'",
                "✓".green(),
                asset.asset_type.display_name(),
                asset.name
            );
        }
        println!();
        println!(
            "{}",
            format!(
                "Removed {} assets, freed {}",
                unused.len(),
                format_bytes(report.unused_size)
            )
            .green()
            .bold()
        );

        Ok(unused.len())
    }

    fn confirm(&self, report: &AnalysisReport) -> Result<bool> {
        println!();
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Delete {} unused assets ({})?",
                report.unused_count(),
                format_bytes(report.unused_size)
            ))
            .default(false)
            .interact()
            .into_diagnostic()
    }
}
