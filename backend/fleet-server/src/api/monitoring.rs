//! Monitoring control handlers

use crate::api::body::parse_body;
use crate::{ActionResponse, ApiResult, AppState, AutoRestartRequest};

use axum::{Json, body::Bytes, extract::State};
use fleet_core::MonitorSnapshot;

/// GET /api/status
pub async fn get_status(State(state): State<AppState>) -> Json<MonitorSnapshot> {
    Json(state.coordinator.status().await)
}

/// POST /api/start_monitoring
pub async fn start_monitoring(State(state): State<AppState>) -> Json<ActionResponse> {
    let message = if state.coordinator.start_monitoring().await {
        "Monitoring started"
    } else {
        "Monitoring already running"
    };
    Json(ActionResponse::ok(message))
}

/// POST /api/stop_monitoring
pub async fn stop_monitoring(State(state): State<AppState>) -> Json<ActionResponse> {
    let message = if state.coordinator.stop_monitoring().await {
        "Monitoring stopped"
    } else {
        "Monitoring was not running"
    };
    Json(ActionResponse::ok(message))
}

/// POST /api/auto_restart
///
/// Body `{"enabled": bool}`; a missing flag or empty body enables it.
pub async fn set_auto_restart(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ActionResponse>> {
    let request: AutoRestartRequest = parse_body(&body)?;
    let enabled = request.enabled.unwrap_or(true);

    state.coordinator.set_auto_restart(enabled).await;

    Ok(Json(ActionResponse::ok(format!(
        "Auto-restart {}",
        if enabled { "enabled" } else { "disabled" }
    ))))
}
