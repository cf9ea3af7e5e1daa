// =============================================================================
// Crypto Dashboard Analytics: Main Entry Point
// =============================================================================
//
// Serves candle data and price analytics for the admin dashboard. Market data
// is read through a `PriceSource`; this binary wires up the file-backed one.
// =============================================================================

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crypto_dashboard::api;
use crypto_dashboard::app_state::AppState;
use crypto_dashboard::config::DashboardConfig;
use crypto_dashboard::dashboard::DashboardService;
use crypto_dashboard::source::JsonFileSource;

const DEFAULT_CONFIG_PATH: &str = "dashboard_config.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Crypto dashboard analytics starting up");

    let config_path =
        std::env::var("DASHBOARD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());

    let mut config = DashboardConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, path = %config_path, "Failed to load config, using defaults");
        DashboardConfig::default()
    });
    config.apply_overrides(|key| std::env::var(key).ok());
    config.validate().context("invalid dashboard configuration")?;

    info!(
        coin_id = %config.coin_id,
        vs_currency = %config.vs_currency,
        interval = %config.interval,
        atr_period = config.atr_period,
        price_file = %config.price_file.display(),
        "Configuration ready"
    );

    // ── 2. Price source & shared state ───────────────────────────────────
    let source = Arc::new(JsonFileSource::new(config.price_file.clone()));
    if !source.path().exists() {
        warn!(
            path = %source.path().display(),
            "price file not found yet; dashboard requests will fail until it exists"
        );
    }

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(DashboardService::new(source, config)));

    // ── 3. API server ────────────────────────────────────────────────────
    let app = api::rest::router(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind API server on {bind_addr}"))?;
    info!(addr = %bind_addr, "API server listening");

    // ── 4. Graceful shutdown ─────────────────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for shutdown signal");
            }
            warn!("Shutdown signal received, stopping gracefully");
        })
        .await
        .context("API server failed")?;

    info!("Crypto dashboard analytics shut down complete.");
    Ok(())
}
