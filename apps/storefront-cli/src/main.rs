//! # storefront: Catalog Browser
//!
//! Terminal front end for the product catalog. Each invocation loads the
//! catalog from the chosen source, applies the requested stimuli in order,
//! and prints the resulting snapshot.
//!
//! ## Invocation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CLI Invocation                                  │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter (stderr)                       │
//! │     • Default: info,storefront=debug; override with RUST_LOG            │
//! │                                                                         │
//! │  2. Resolve Configuration ────────────────────────────────────────────► │
//! │     • defaults → storefront.toml → STOREFRONT_* → flags                 │
//! │                                                                         │
//! │  3. Drive the Controller ─────────────────────────────────────────────► │
//! │     • load_initial → select_category → toggle_sort → load_more → search │
//! │                                                                         │
//! │  4. Render ───────────────────────────────────────────────────────────► │
//! │     • Snapshot to stdout; non-zero exit when it carries an error        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storefront_client::{CatalogConfig, LoadMoreOutcome, ProductCatalogController};
use storefront_core::{CatalogCommand, DataSource, ProductId};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Browse the product catalog", version)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data source: remote or local
    #[arg(long, global = true)]
    source: Option<DataSource>,

    /// Local dataset file
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Listing API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List products
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// Sort by price, highest first (remote only)
        #[arg(long)]
        desc: bool,
        /// Number of pages to load (remote only)
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// List categories
    Categories,
    /// Show one product
    Show { id: ProductId },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let source = config.source.default;
    let catalog = ProductCatalogController::from_config(&config)
        .context("failed to build catalog controller")?;

    info!(%source, "Starting storefront");
    let snapshot = catalog.load_initial(source).await;

    match cli.command {
        Command::List {
            category,
            search,
            desc,
            pages,
        } => {
            if let Some(category) = category {
                catalog.select_category(&category).await?;
            }
            if desc {
                catalog.toggle_sort().await;
            }
            for _ in 1..pages {
                match catalog.load_more().await {
                    LoadMoreOutcome::Appended(count) => debug!(count, "Loaded another page"),
                    outcome => {
                        debug!(?outcome, "Stopped paging");
                        break;
                    }
                }
            }
            let snapshot = match search {
                Some(query) => catalog.search(&query),
                None => catalog.snapshot(),
            };

            print!("{}", render::render_list(&snapshot));
            if let Some(error) = snapshot.error {
                bail!(error);
            }
        }
        Command::Categories => {
            if let Some(error) = snapshot.error {
                bail!(error);
            }
            for category in &snapshot.categories {
                println!("{}", category);
            }
        }
        Command::Show { id } => {
            if let Some(CatalogCommand::ShowProductDetail { product }) = catalog.open_product(id) {
                debug!(id, title = %product.title, "Opening product from list");
            }
            let product = catalog
                .product_detail(id)
                .await
                .with_context(|| format!("product #{} is not available", id))?;
            print!("{}", render::render_detail(&product));
        }
    }

    catalog.dispose();
    Ok(())
}

/// Loads file and environment configuration, then applies flags on top.
fn resolve_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = CatalogConfig::load(cli.config.clone()).context("failed to load config")?;

    if let Some(source) = cli.source {
        config.source.default = source;
    }
    if let Some(path) = &cli.dataset {
        config.source.dataset_path = Some(path.clone());
    }
    if let Some(url) = &cli.api_url {
        config.source.api_url = url.clone();
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so rendered output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
