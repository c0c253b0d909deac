//! Backend entry-point: loads settings, selects storage and serves the API.

mod server;

use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use clientes::domain::MessageCatalog;
use clientes::inbound::http::health::HealthState;
use clientes::settings::AppSettings;
use server::{ServerConfig, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let messages = MessageCatalog::builtin(settings.default_locale())
        .map_err(|e| std::io::Error::other(format!("failed to load messages: {e}")))?;
    info!(locale = %messages.default_locale(), "message catalogue loaded");

    let http_state = build_http_state(&settings, Arc::new(messages)).await?;
    let config = ServerConfig::new(bind_addr, http_state);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(make_metrics()?);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}

#[cfg(feature = "metrics")]
fn make_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("clientes")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("failed to configure Prometheus metrics: {e}")))
}
