use serde::Deserialize;

/// Body of `POST /api/switch_server`
#[derive(Debug, Default, Deserialize)]
pub struct SwitchServerRequest {
    pub server: Option<String>,
}
