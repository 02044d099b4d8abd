//! Observed public holiday value object.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Organization's synthetic Christmas Day name (second Monday of December).
pub const CHRISTMAS_DAY: &str = "Christmas Day";
/// Organization's synthetic New Year's Day name (January 2).
pub const NEW_YEARS_DAY: &str = "New Year's Day";

/// A public holiday after organizational override and Sunday-shift rules.
///
/// Derived, never persisted: regenerated per query from (country, year).
/// Invariants (upheld by the calendar, asserted in its tests): no two
/// entries share a date, and no entry falls on a Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }

    /// True for the two organization-injected holidays, which keep the
    /// regular morning start time instead of the fixed-end holiday timing.
    pub fn is_synthetic(&self) -> bool {
        self.name == CHRISTMAS_DAY || self.name == NEW_YEARS_DAY
    }

    pub fn falls_on_monday(&self) -> bool {
        self.date.weekday() == Weekday::Mon
    }
}
