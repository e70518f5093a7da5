use crate::error::{Result as ServerErrorResult, ServerError};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder. Counters recorded through the
/// `metrics` facade become visible at `/metrics`.
pub fn install_recorder() -> ServerErrorResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: format!("Failed to install Prometheus recorder: {e}"),
        })
}
