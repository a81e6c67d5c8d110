use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use super::render;
use crate::catalog::{CatalogFile, ListingSource};
use crate::dashboard::{AlertThresholds, load_admin_stats, load_merchant_stats, merchant_alerts};
use crate::filters::{FilterCriteria, apply, count_in_category};
use crate::models::CategorySelection;
use crate::utils::{default_catalog_path, format_path_with_tilde};

#[derive(Parser)]
#[command(name = "marketplace-filter")]
#[command(version = "0.1.0")]
#[command(about = "Browse a marketplace catalog and dashboard statistics", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog products matching a category and search text
    Browse {
        /// Catalog file (defaults to $MARKETPLACE_DATA_DIR/catalog.jsonl)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Category id, or "all"
        #[arg(long, default_value = "all")]
        category: String,
        /// Case-insensitive text matched against product and store names
        #[arg(long)]
        search: Option<String>,
        /// Print the matching listings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the category selector options
    Categories {
        /// Also count catalog products per category
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Show dashboard statistics
    Stats {
        #[command(subcommand)]
        dashboard: StatsCommand,
    },
}

#[derive(Subcommand)]
pub enum StatsCommand {
    /// Platform-wide statistics
    Admin {
        /// JSON stats document
        #[arg(long)]
        file: PathBuf,
    },
    /// Store statistics and alerts
    Merchant {
        /// JSON stats document
        #[arg(long)]
        file: PathBuf,
        /// Raise the pending-orders alert above this count
        #[arg(long, default_value_t = 0)]
        pending_threshold: u64,
        /// Raise the low-stock alert above this count
        #[arg(long, default_value_t = 0)]
        low_stock_threshold: u64,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Some(Commands::Browse { catalog, category, search, json }) => {
            let criteria = FilterCriteria::new(category, search.unwrap_or_default());
            browse(catalog, &criteria, json)?;
        }
        Some(Commands::Categories { catalog }) => {
            show_categories(catalog)?;
        }
        Some(Commands::Stats { dashboard }) => match dashboard {
            StatsCommand::Admin { file } => show_admin_stats(file)?,
            StatsCommand::Merchant { file, pending_threshold, low_stock_threshold } => {
                let thresholds =
                    AlertThresholds { pending_orders: pending_threshold, low_stock: low_stock_threshold };
                show_merchant_stats(file, &thresholds)?;
            }
        },
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn open_catalog(catalog: Option<PathBuf>) -> Result<CatalogFile> {
    let path = match catalog {
        Some(path) => path,
        None => default_catalog_path()?,
    };
    Ok(CatalogFile::new(path))
}

fn browse(catalog: Option<PathBuf>, criteria: &FilterCriteria, json: bool) -> Result<()> {
    // Reject a bad category before touching the catalog
    criteria.selection()?;

    let source = open_catalog(catalog)?;
    let snapshot = source.fetch()?;
    info!(
        "Loaded {} listings from {}",
        snapshot.len(),
        format_path_with_tilde(source.path())
    );

    let visible = apply(&snapshot.listings, criteria)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!("{} products available", visible.len());
    for listing in &visible {
        println!("  {}", render::format_listing(listing));
    }

    Ok(())
}

fn show_categories(catalog: Option<PathBuf>) -> Result<()> {
    let snapshot = catalog.map(|path| CatalogFile::new(path).fetch()).transpose()?;

    println!("Categories");
    println!("==========");
    for option in CategorySelection::options() {
        let count = snapshot.as_ref().map(|s| count_in_category(&s.listings, option));
        println!("  {}", render::format_category_option(option, count));
    }

    Ok(())
}

fn show_admin_stats(file: PathBuf) -> Result<()> {
    let stats = load_admin_stats(&file)?;

    println!("Admin Dashboard");
    println!("===============");
    println!("Users: {}", stats.total_users);
    println!("Stores: {}", stats.total_stores);
    println!("Products: {}", stats.total_products);
    println!("Orders: {}", stats.total_orders);
    println!("Monthly revenue: {}", render::format_price(stats.monthly_revenue));
    println!("Active users now: {}", stats.active_users);

    Ok(())
}

fn show_merchant_stats(file: PathBuf, thresholds: &AlertThresholds) -> Result<()> {
    let stats = load_merchant_stats(&file)?;

    println!("Merchant Dashboard");
    println!("==================");
    println!("Products: {}", stats.total_products);
    println!("Orders: {}", stats.total_orders);
    println!("Views: {}", stats.total_views);
    println!("Monthly revenue: {}", render::format_price(stats.monthly_revenue));

    let alerts = merchant_alerts(&stats, thresholds);
    if !alerts.is_empty() {
        println!();
        println!("Alerts:");
        for alert in &alerts {
            println!("  ! {}", alert.message());
        }
    }

    Ok(())
}
