//! Read-only snapshot of an inventory item, supplied by the inventory
//! collaborator per invocation.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Item facts the engine needs: only the creation instant, used for
/// age-based eligibility (New Arrival, Clearance).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemContext {
    pub created_at: DateTime<Utc>,
}

impl ItemContext {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self { created_at }
    }

    /// Calendar date of creation.
    pub fn created_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Whole days elapsed between creation and `today`.
    pub fn age_days(&self, today: NaiveDate) -> i64 {
        (today - self.created_date()).num_days()
    }

    /// First date outside the 30-day New Arrival window; the last
    /// eligible start date is the day before.
    pub fn new_arrival_cutoff(&self) -> NaiveDate {
        self.created_date() + Duration::days(30)
    }

    /// First date at which the item qualifies for Clearance.
    pub fn clearance_floor(&self) -> NaiveDate {
        self.created_date() + Duration::days(60)
    }
}
