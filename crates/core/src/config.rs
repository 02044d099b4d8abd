//! Organization auction configuration.

use std::collections::BTreeSet;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::auction::AuctionType;
use crate::error::{EngineError, EngineResult};

/// Per-organization-category auction settings (e.g., "Dealership").
///
/// Loaded once at the boundary, never mutated at runtime. All times are in
/// the organization's local civil time zone; durations are wall-clock hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionConfig {
    /// Start-of-day auction start time (regular and Black Friday timing).
    pub start_time: NaiveTime,
    pub duration_hours: i64,
    /// Fixed end time used by the backward-running holiday timing.
    pub holiday_end_time: NaiveTime,
    pub holiday_duration_hours: i64,
    pub enabled_types: BTreeSet<AuctionType>,
}

impl AuctionConfig {
    /// Parse a configuration document as stored by the organization settings
    /// service.
    pub fn from_json_str(raw: &str) -> EngineResult<Self> {
        let config: AuctionConfig = serde_json::from_str(raw)
            .map_err(|e| EngineError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that could never yield a well-formed window.
    pub fn validate(&self) -> EngineResult<()> {
        if self.duration_hours <= 0 {
            return Err(EngineError::invalid_config("duration_hours must be positive"));
        }
        if self.holiday_duration_hours <= 0 {
            return Err(EngineError::invalid_config(
                "holiday_duration_hours must be positive",
            ));
        }
        if self.enabled_types.is_empty() {
            return Err(EngineError::invalid_config(
                "at least one auction type must be enabled",
            ));
        }
        Ok(())
    }

    pub fn is_enabled(&self, auction_type: AuctionType) -> bool {
        self.enabled_types.contains(&auction_type)
    }
}
