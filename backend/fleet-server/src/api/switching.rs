use crate::api::body::{parse_body, require};
use crate::{ApiResult, AppState, SwitchResponse, SwitchServerRequest};

use axum::{Json, body::Bytes, extract::State};

/// POST /api/switch_server
///
/// Immediate manual switch: stops bots everywhere else and starts them on
/// the named server. Cancels any announced automatic promotion.
pub async fn switch_server(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<SwitchResponse>> {
    let request: SwitchServerRequest = parse_body(&body)?;
    let server = require(request.server, "server")?;

    let report = state.coordinator.switch_server(&server).await?;

    let message = if report.is_clean() {
        format!("Switched to server {server}")
    } else {
        format!(
            "Switched to server {server} with {} failed bot commands",
            report.failures()
        )
    };

    Ok(Json(SwitchResponse {
        success: report.is_clean(),
        message,
        report,
    }))
}
