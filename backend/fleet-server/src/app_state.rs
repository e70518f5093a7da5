use fleet_monitor::Coordinator;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state for every handler
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<Coordinator>,
    /// None when no recorder is installed (tests)
    pub metrics: Option<PrometheusHandle>,
    pub cors_origins: Vec<String>,
}

impl AppState {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self {
            coordinator,
            metrics: None,
            cors_origins: vec![String::from("*")],
        }
    }
}
