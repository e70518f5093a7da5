use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A promotion that has been announced and is waiting out its delay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingPromotion {
    pub target: String,
    pub reason: String,
    pub announced_at: DateTime<Utc>,
    pub execute_at: DateTime<Utc>,
}
