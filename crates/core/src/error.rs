//! Engine error model.

use chrono::NaiveDate;
use thiserror::Error;

use crate::auction::AuctionType;
use crate::id::ItemId;

/// Result type used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level error.
///
/// Keep this focused on failures the caller cannot fix by editing a form
/// field: collaborator outages, malformed organization configuration and
/// caller/engine disagreements. User-input problems are modelled as
/// [`crate::auction::RejectionReason`] values instead, so the caller can
/// render one message per invalid field.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The external holiday data source failed for a (country, year) pair.
    ///
    /// Never downgraded to an empty holiday list: treating all days as
    /// holiday-free would allow illegal auction dates.
    #[error("holiday data unavailable for {country} {year}")]
    HolidayDataUnavailable {
        country: String,
        year: i32,
        #[source]
        source: anyhow::Error,
    },

    /// A date reached the window calculator that the eligibility rules for
    /// its auction type do not permit. Indicates a caller/engine
    /// disagreement, not a user mistake.
    #[error("{date} is not a valid start date for a {auction_type} auction")]
    InvalidDateForType {
        auction_type: AuctionType,
        date: NaiveDate,
    },

    /// The inventory collaborator could not produce an item context.
    #[error("inventory lookup failed for item {item_id}")]
    ItemLookupFailed {
        item_id: ItemId,
        #[source]
        source: anyhow::Error,
    },

    /// Organization auction configuration failed validation.
    #[error("invalid auction configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    pub fn holiday_data_unavailable(
        country: impl Into<String>,
        year: i32,
        source: anyhow::Error,
    ) -> Self {
        Self::HolidayDataUnavailable {
            country: country.into(),
            year,
            source,
        }
    }

    pub fn invalid_date_for_type(auction_type: AuctionType, date: NaiveDate) -> Self {
        Self::InvalidDateForType { auction_type, date }
    }

    pub fn item_lookup_failed(item_id: ItemId, source: anyhow::Error) -> Self {
        Self::ItemLookupFailed { item_id, source }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
