pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod search;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::search::SearchProvider;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: AppConfig,
    /// Full-text search; market queries ignore `search` when this is `None`.
    pub search: Option<Arc<dyn SearchProvider>>,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
