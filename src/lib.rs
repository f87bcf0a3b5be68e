//! # TaxID Worker
//!
//! Validation of Brazilian taxpayer documents for back-office forms:
//!
//! - **CPF**: 11-digit individual taxpayer IDs (`111.444.777-35`)
//! - **CNPJ**: 14-digit legal entity IDs (`11.222.333/0001-81`)
//!
//! The validators in [`service`] are plain functions and can be used without
//! the HTTP layer:
//!
//! ```
//! use taxid_worker::service::{validate_cnpj, validate_cpf};
//!
//! assert!(validate_cpf("111.444.777-35"));
//! assert!(!validate_cnpj("11.222.333/0001-82"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Worker Service                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌──────────────┐  ┌──────────────────────┐ │
//! │  │  API Layer  │  │  Validation  │  │  CPF / CNPJ checksum │ │
//! │  │  (Axum)     │→ │  Service     │→ │  + generator         │ │
//! │  └─────────────┘  └──────────────┘  └──────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::api::state::AppState;
use crate::config::AppConfig;

/// Run the tax-ID worker service.
///
/// This function:
/// 1. Loads configuration from files and environment
/// 2. Initializes logging and the metrics recorder
/// 3. Starts the HTTP server
/// 4. Handles graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - The metrics recorder cannot be installed
/// - HTTP server fails to bind
pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting TaxID Worker"
    );

    let metrics = if config.observability.metrics_enabled {
        let handle = PrometheusBuilder::new().install_recorder()?;
        info!("Prometheus recorder installed");
        Some(handle)
    } else {
        None
    };

    if !config.auth.is_enabled() {
        warn!("auth.api_key is empty; /v1 routes are unauthenticated");
    }

    let state = AppState::new(Arc::new(config.clone()), metrics);
    let app = create_router(state);

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize logging based on configuration.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber.with(fmt::layer()).init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
