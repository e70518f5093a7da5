use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What a scheduled promotion does once its announcement delay has elapsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SwitchPolicy {
    /// Switch to the decided target regardless of its current health
    #[default]
    Unconditional,
    /// Re-check the latest snapshot and abort if the target no longer qualifies
    Reconfirm,
}

impl SwitchPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unconditional => "unconditional",
            Self::Reconfirm => "reconfirm",
        }
    }
}

impl FromStr for SwitchPolicy {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "unconditional" => Ok(Self::Unconditional),
            "reconfirm" => Ok(Self::Reconfirm),
            _ => Err(CoreError::InvalidSwitchPolicy {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
