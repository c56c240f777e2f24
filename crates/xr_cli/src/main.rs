use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xr_core::NewsConfig;
use xr_sources::{create_enricher, ArticleManager, EnrichMode, NewsApiClient};
use xr_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serves this week's XR/AI news as JSON", long_about = None)]
pub struct Cli {
    /// Address or hostname to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,
    /// How article content is filled in: summary (search API text) or scrape (full page)
    #[arg(long, env = "XRNEWS_ENRICHMENT", default_value = "summary")]
    enrichment: EnrichMode,
    /// Base URL of the news search API
    #[arg(long, env = "NEWS_API_BASE_URL")]
    api_base_url: Option<String>,
    /// Per-page timeout when scraping articles, in seconds
    #[arg(long, env = "XRNEWS_SCRAPE_TIMEOUT_SECS", default_value_t = 15)]
    scrape_timeout_secs: u64,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

/// `--api-base-url` / `NEWS_API_BASE_URL` is only read here, by clap.
fn apply_overrides(cli: &Cli, config: NewsConfig) -> NewsConfig {
    match &cli.api_base_url {
        Some(url) => config.with_base_url(url.clone()),
        None => config,
    }
}

fn build_state(cli: &Cli, config: NewsConfig) -> anyhow::Result<AppState> {
    let config = Arc::new(apply_overrides(cli, config));
    info!(base_url = %config.base_url, "Search endpoint");

    let source = Arc::new(NewsApiClient::new(config.clone())?);
    let enricher = create_enricher(cli.enrichment, Duration::from_secs(cli.scrape_timeout_secs))?;
    let manager = ArticleManager::new(source, enricher, config.page_size as usize);
    info!(
        "🦗 Using {} search with {} enrichment",
        manager.source_name(),
        manager.enricher_name()
    );
    Ok(AppState::new(manager))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();
    let config = NewsConfig::from_env()?;

    let state = build_state(&cli, config)?;
    xr_web::serve(&cli.host, cli.port, state)
        .await
        .with_context(|| format!("server on {}:{} stopped", cli.host, cli.port))
}
