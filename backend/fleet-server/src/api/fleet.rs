//! Static fleet configuration

use crate::{AppState, ServerBotsDto};

use fleet_core::ServerDescriptor;

use std::collections::BTreeMap;

use axum::{Json, extract::State};

/// GET /api/servers
pub async fn list_servers(State(state): State<AppState>) -> Json<BTreeMap<String, ServerDescriptor>> {
    let servers = state
        .coordinator
        .fleet()
        .servers()
        .iter()
        .map(|s| (s.key.clone(), s.clone()))
        .collect();
    Json(servers)
}

/// GET /api/bots
pub async fn list_bots(State(state): State<AppState>) -> Json<BTreeMap<String, ServerBotsDto>> {
    let bots = state
        .coordinator
        .fleet()
        .servers()
        .iter()
        .map(|s| (s.key.clone(), ServerBotsDto::from(s)))
        .collect();
    Json(bots)
}
