use analytics::{AnalysisOptions, SalesAnalyticsEngine, SellerReport};
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::Config;
use core_types::SalesData;
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;
use strategies::{create_bonus_strategy, create_revenue_strategy};
use tracing_subscriber::EnvFilter;

/// The main entry point for the salesboard application.
fn main() {
    // Initialize logging; verbosity is controlled via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => {
            if let Err(e) = handle_analyze(args) {
                eprintln!("Error during analysis: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Per-seller sales performance analytics: revenue, profit, rank-based
/// bonuses, and top products from a JSON sales dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a sales dataset and print the ranked seller report.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the JSON dataset (sellers, products, purchase_records).
    #[arg(long)]
    input: PathBuf,

    /// Optional path to a config.toml overriding strategy parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of top products reported per seller.
    #[arg(long)]
    top: Option<usize>,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Handles the orchestration of the analysis: load config and dataset,
/// build the strategies, run the engine, render the report.
fn handle_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => configuration::load_config_from(
            path.to_str()
                .context("config path is not valid UTF-8")?,
        )
        .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read dataset from {}", args.input.display()))?;
    let data: SalesData = serde_json::from_str(&raw).context("failed to parse dataset JSON")?;

    tracing::info!(
        "Loaded dataset: {} sellers, {} products, {} purchase records",
        data.sellers.len(),
        data.products.len(),
        data.purchase_records.len()
    );

    let revenue = create_revenue_strategy(config.strategies.revenue_rule, &config)?;
    let bonus = create_bonus_strategy(config.strategies.bonus_rule, &config)?;
    let options = AnalysisOptions::new(revenue, bonus)
        .with_top_products_limit(args.top.unwrap_or(config.analysis.top_products_limit));

    let reports = SalesAnalyticsEngine::new().analyze(&data, &options)?;

    print_report(&reports);
    Ok(())
}

/// Renders the ranked seller report as a terminal table, with dataset-wide
/// totals underneath.
fn print_report(reports: &[SellerReport]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#", "Seller", "Revenue", "Profit", "Sales", "Bonus", "Top product",
    ]);

    for (rank, report) in reports.iter().enumerate() {
        let top = report
            .top_products
            .first()
            .map(|p| format!("{} ({})", p.sku, p.quantity))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            (rank + 1).to_string(),
            report.name.clone(),
            report.revenue.to_string(),
            report.profit.to_string(),
            report.sales_count.to_string(),
            report.bonus.to_string(),
            top,
        ]);
    }

    println!("{table}");

    let total_revenue: Decimal = reports.iter().map(|r| r.revenue).sum();
    let total_bonus: Decimal = reports.iter().map(|r| r.bonus).sum();
    println!("Total revenue: {total_revenue}  Total bonuses: {total_bonus}");
}
