use serde::Deserialize;

/// Body of `POST /api/auto_restart`. Omitted `enabled` means true.
#[derive(Debug, Default, Deserialize)]
pub struct AutoRestartRequest {
    pub enabled: Option<bool>,
}
