use fleet_core::SwitchReport;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchResponse {
    /// False when any stop/start command failed; the switch still happened
    pub success: bool,
    pub message: String,
    pub report: SwitchReport,
}
