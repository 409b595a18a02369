use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutboxStatus {
    Pending,
    Complete,
}

impl OutboxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutboxStatus::Pending => "pending",
            OutboxStatus::Complete => "complete",
        }
    }
}

impl FromStr for OutboxStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self> {
        match value {
            "pending" => Ok(OutboxStatus::Pending),
            "complete" => Ok(OutboxStatus::Complete),
            _ => Err(CoreError::InvalidOutboxStatus {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
