use assetorganizer::analysis::{AnalysisReport, AssetAnalyzer, SortOption};
use assetorganizer::asset::AssetType;
use assetorganizer::cleanup::SafeDeleter;
use assetorganizer::config::Config;
use assetorganizer::report::{self, parse_size, Reporter, TerminalReporter};
use assetorganizer::repository::FileSystemAssetRepository;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// AssetOrganizer - Find unused assets in Xcode asset catalogs
#[derive(Parser, Debug)]
#[command(name = "asset-organizer")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    analyze: AnalyzeArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze asset usage and print a report (default)
    Analyze(AnalyzeArgs),

    /// Delete unused assets
    Clean(CleanArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Path to the project directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show paths and per-file usage for every asset
    #[arg(short = 'd', long)]
    show_detail: bool,

    /// Include hidden files and catalog manifests
    #[arg(short, long)]
    include_system: bool,

    /// Only consider assets of this type
    #[arg(short = 't', long = "type", value_enum)]
    asset_type: Option<TypeArg>,

    /// Only consider assets at least this large (e.g. 512, 100KB, 2MB)
    #[arg(short, long, value_parser = parse_min_size)]
    min_size: Option<u64>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory names to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Save the report to a file (.json for JSON, Markdown otherwise)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sort assets by name, size or usage
    #[arg(short, long, value_enum)]
    sort_by: Option<SortArg>,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct CleanArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    force: bool,

    /// Show what would be deleted without making changes
    #[arg(short = 'n', long)]
    dry_run: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum TypeArg {
    Image,
    Color,
    Data,
}

impl From<TypeArg> for AssetType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Image => AssetType::Image,
            TypeArg::Color => AssetType::Color,
            TypeArg::Data => AssetType::Data,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Name,
    Size,
    Usage,
}

impl From<SortArg> for SortOption {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortOption::Name,
            SortArg::Size => SortOption::Size,
            SortArg::Usage => SortOption::Usage,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Markdown,
    Json,
}

impl From<OutputFormat> for report::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => report::ReportFormat::Terminal,
            OutputFormat::Markdown => report::ReportFormat::Markdown,
            OutputFormat::Json => report::ReportFormat::Json,
        }
    }
}

fn parse_min_size(value: &str) -> std::result::Result<u64, String> {
    parse_size(value).ok_or_else(|| {
        format!(
            "invalid size '{}' (expected <integer><B|KB|MB|GB>, e.g. 100KB)",
            value
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze(args)) => run_analyze(&args),
        Some(Commands::Clean(args)) => run_clean(&args),
        None => run_analyze(&cli.analyze),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Reports own stdout
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(common: &CommonArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &common.config {
        Config::from_file(config_path)?
    } else {
        // Try to load from default locations
        Config::from_default_locations(&common.path)?
    };

    // Override with CLI arguments
    if !common.exclude.is_empty() {
        config.excluded_directories.extend(common.exclude.clone());
    }
    if common.include_system {
        config.include_system_files = true;
    }
    if common.show_detail {
        config.report.show_detail = true;
    }

    Ok(config)
}

/// Initialise logging, load config and run one analysis pass with the
/// common filters applied
fn analyze(
    common: &CommonArgs,
    sort_by: Option<SortOption>,
) -> Result<(AssetAnalyzer<FileSystemAssetRepository>, AnalysisReport, Config)> {
    init_logging(common.verbose, common.quiet);
    info!("AssetOrganizer v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(common)?;
    let start_time = Instant::now();

    let analyzer = AssetAnalyzer::new(FileSystemAssetRepository::new(&common.path, &config));

    let spinner = if common.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .into_diagnostic()?,
    );
    spinner.set_message("Analyzing assets...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = analyzer.analyze_assets();
    spinner.finish_and_clear();

    let mut report = result
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to analyze {}", common.path.display()))?;

    info!(
        "Analyzed {} assets in {:.2}s",
        report.total_assets,
        start_time.elapsed().as_secs_f64()
    );

    if let Some(asset_type) = common.asset_type {
        report = report.filtered_by_type(asset_type.into());
    }
    if let Some(min_size) = common.min_size {
        report = report.filtered_by_min_size(min_size);
    }
    if let Some(option) = sort_by.or(config.report.sort_by) {
        report = report.sorted(option);
    }

    Ok((analyzer, report, config))
}

fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let (_, report, config) = analyze(&args.common, args.sort_by.map(Into::into))?;

    let reporter = Reporter::new(
        args.format.into(),
        args.output.clone(),
        config.report.show_detail,
    );
    reporter.report(&report)
}

fn run_clean(args: &CleanArgs) -> Result<()> {
    let (analyzer, report, config) = analyze(&args.common, None)?;

    TerminalReporter::new()
        .with_detail(config.report.show_detail)
        .report(&report);

    let deleted = SafeDeleter::new(args.force, args.dry_run).delete(&analyzer, &report)?;
    if deleted > 0 {
        info!("Deleted {} assets", deleted);
    } else if args.dry_run {
        println!("{}", "Dry run complete - no files were changed.".dimmed());
    }

    Ok(())
}
