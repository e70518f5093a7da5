use crate::{PendingPromotion, ServerStatus};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of the coordinator's monitor state for operators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorSnapshot {
    pub servers: BTreeMap<String, ServerStatus>,
    pub active_server: Option<String>,
    pub is_monitoring: bool,
    pub auto_restart_enabled: bool,
    pub last_switch: Option<DateTime<Utc>>,
    pub pending_promotion: Option<PendingPromotion>,
}
