use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vcat_core::PriceStrategy;
use vcat_scraper::{run_pipeline, CatalogClient, FetchSession, Termination};

mod report;

#[derive(Debug, Parser)]
#[command(name = "vcat")]
#[command(about = "Extracts a storefront catalog into CSV/JSON")]
struct Cli {
    /// Storefront origin, e.g. https://www.portsaid.com.ar
    #[arg(long, env = "VCAT_BASE_URL")]
    base_url: Option<String>,

    /// Output directory (overrides VCAT_OUTPUT_DIR)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Hard pagination ceiling for unattended runs
    #[arg(long)]
    max_pages: Option<u32>,

    /// Skip size collection from skuSpecifications
    #[arg(long)]
    no_sizes: bool,

    /// Price source: "offer-chain" or "price-range-only"
    #[arg(long)]
    price_strategy: Option<PriceStrategy>,

    /// Maximum description length in characters
    #[arg(long)]
    truncate: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = vcat_core::load_app_config_from_env()?;
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if let Some(max_pages) = cli.max_pages {
        config.max_pages = Some(max_pages);
    }
    if cli.no_sizes {
        config.include_sizes = false;
    }
    if let Some(strategy) = cli.price_strategy {
        config.price_strategy = strategy;
    }
    if let Some(truncate) = cli.truncate {
        config.description_truncate_chars = truncate;
    }
    let base_url = config
        .resolve_base_url(cli.base_url)
        .context("no storefront configured: set VCAT_BASE_URL or pass --base-url")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(base_url = %base_url, endpoint = %config.search_endpoint, "starting extraction");
    let started = Instant::now();

    let client = CatalogClient::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )?;
    let session = FetchSession::new(
        &client,
        &base_url,
        &config.search_endpoint,
        config.request_delay_ms,
        config.max_pages,
    );
    let options = config.normalize_options();

    let outcome = run_pipeline(session, &base_url, &options).await;

    // An aborted run still exports its partial catalog; the non-zero
    // exit happens below, after the files are on disk.
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("failed to create output directory {}", config.output_dir.display())
    })?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let csv_path = config.output_dir.join(format!("vcat_catalog_{stamp}.csv"));
    let sheets_path = config
        .output_dir
        .join(format!("vcat_catalog_sheets_{stamp}.csv"));
    let json_path = config.output_dir.join(format!("vcat_catalog_{stamp}.json"));

    vcat_export::write_csv(&csv_path, &outcome.products)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;
    vcat_export::write_sheets_csv(&sheets_path, &outcome.products)
        .with_context(|| format!("failed to write {}", sheets_path.display()))?;
    vcat_export::write_json_snapshot(&json_path, &outcome.products)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    println!("{}", report::format_summary(&outcome, started.elapsed()));
    println!("files:");
    for path in [&csv_path, &sheets_path, &json_path] {
        println!("  {}", path.display());
    }

    if let Termination::Aborted(err) = outcome.termination {
        return Err(anyhow::Error::new(err).context("run aborted before catalog exhaustion"));
    }
    Ok(())
}
