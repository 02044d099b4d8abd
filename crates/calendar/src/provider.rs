//! Jurisdictional holiday data source (external collaborator).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One record as returned by the external holiday provider, before any
/// organizational override is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHoliday {
    pub date: NaiveDate,
    pub name: String,
    /// Provider-side classification (e.g., "public", "observance"). Carried
    /// through untouched; the engine only schedules around public holidays,
    /// which is what providers return for the supported jurisdictions.
    pub kind: String,
}

impl RawHoliday {
    pub fn new(date: NaiveDate, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// Source of standard public holidays for a (country, year) pair.
///
/// Implementations live at the system boundary (HTTP client, bundled
/// table, test fake). A failure must surface as an error: the calendar
/// never substitutes an empty list, since "no holidays" would legalize
/// auction dates the organization forbids.
pub trait HolidayDataSource: Send + Sync {
    fn holidays(&self, country: &str, year: i32) -> anyhow::Result<Vec<RawHoliday>>;
}

impl<T: HolidayDataSource + ?Sized> HolidayDataSource for &T {
    fn holidays(&self, country: &str, year: i32) -> anyhow::Result<Vec<RawHoliday>> {
        (**self).holidays(country, year)
    }
}
