//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::ValidationService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Validation service.
    pub validation_service: Arc<ValidationService>,
    /// Prometheus handle, present when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: Arc<AppConfig>, metrics: Option<PrometheusHandle>) -> Self {
        let validation_service = Arc::new(ValidationService::new(&config.validation));

        Self {
            config,
            validation_service,
            metrics,
        }
    }
}
