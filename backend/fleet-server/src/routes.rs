use crate::{
    AppState, get_status, health, list_bots, list_servers, restart_bot, set_auto_restart,
    start_bot, start_monitoring, stop_bot, stop_monitoring, switch_server,
};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use log::warn;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);

    Router::new()
        // Control surface
        .route("/api/status", get(get_status))
        .route("/api/start_monitoring", post(start_monitoring))
        .route("/api/stop_monitoring", post(stop_monitoring))
        .route("/api/switch_server", post(switch_server))
        .route("/api/start_bot", post(start_bot))
        .route("/api/stop_bot", post(stop_bot))
        .route("/api/restart_bot", post(restart_bot))
        .route("/api/auto_restart", post(set_auto_restart))
        .route("/api/servers", get(list_servers))
        .route("/api/bots", get(list_bots))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(health::metrics))
        // Add shared state
        .with_state(state)
        .layer(cors)
}

/// `*` (or no origins) allows any origin; otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {origin}: {e}");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(parsed))
}
