//! Observed-holiday derivation: organizational overrides, Sunday shifts,
//! per-year memoization.

use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;
use std::sync::RwLock;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use gavel_core::holiday::{CHRISTMAS_DAY, Holiday, NEW_YEARS_DAY};
use gavel_core::{EngineError, EngineResult};

use crate::provider::{HolidayDataSource, RawHoliday};

/// Jurisdictional holidays the organization replaces with its own dates.
const OVERRIDDEN_NAMES: [&str; 3] = ["Christmas Day", "Day of Goodwill", "New Year's Day"];

/// A holiday observed on a Sunday moves to the following Monday.
pub fn shift_off_sunday(date: NaiveDate) -> NaiveDate {
    if date.weekday() == Weekday::Sun {
        date + Duration::days(1)
    } else {
        date
    }
}

/// Second Monday of December: start at Dec 1, advance to the first Monday,
/// then add seven days.
pub fn second_monday_of_december(year: i32) -> NaiveDate {
    let mut day = NaiveDate::from_ymd_opt(year, 12, 1).expect("December 1 exists in every year");
    while day.weekday() != Weekday::Mon {
        day += Duration::days(1);
    }
    day + Duration::days(7)
}

/// Apply the organizational rules to one year's worth of provider records.
///
/// Removes the three overridden holidays by name, injects the synthetic
/// Christmas Day (second Monday of December) and New Year's Day (Jan 2),
/// shifts every Sunday result to Monday, and dedupes by date with the first
/// occurrence winning. Output order follows insertion (provider order, then
/// the two synthetics); callers sort after merging years.
pub fn observed_holidays_for_year(raw: &[RawHoliday], year: i32) -> Vec<Holiday> {
    let mut observed: Vec<Holiday> = Vec::with_capacity(raw.len() + 2);
    let mut seen: HashSet<NaiveDate> = HashSet::with_capacity(raw.len() + 2);

    let mut push = |date: NaiveDate, name: &str| {
        let date = shift_off_sunday(date);
        if seen.insert(date) {
            observed.push(Holiday::new(date, name));
        }
    };

    for holiday in raw {
        if OVERRIDDEN_NAMES.contains(&holiday.name.as_str()) {
            continue;
        }
        push(holiday.date, &holiday.name);
    }

    push(second_monday_of_december(year), CHRISTMAS_DAY);
    push(
        NaiveDate::from_ymd_opt(year, 1, 2).expect("January 2 exists in every year"),
        NEW_YEARS_DAY,
    );

    observed
}

/// Observed-holiday calendar for one country, with a per-year memo table.
///
/// The memo is keyed by the true derivation input (the year; the country is
/// fixed per instance) and stores full years unfiltered by "today", so a
/// cached year stays correct as the current date advances. Entries are
/// recompute-safe and never need invalidation.
pub struct HolidayCalendar<S> {
    source: S,
    country: String,
    memo: RwLock<HashMap<i32, Vec<Holiday>>>,
}

impl<S: HolidayDataSource> HolidayCalendar<S> {
    pub fn new(source: S, country: impl Into<String>) -> Self {
        Self {
            source,
            country: country.into(),
            memo: RwLock::new(HashMap::new()),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Observed holidays for one full year, memoized.
    pub fn year_observed(&self, year: i32) -> EngineResult<Vec<Holiday>> {
        if let Some(cached) = self.memo.read().unwrap().get(&year) {
            return Ok(cached.clone());
        }

        let raw = self.source.holidays(&self.country, year).map_err(|e| {
            tracing::error!(country = %self.country, year, error = %e, "holiday data source failed");
            EngineError::holiday_data_unavailable(&self.country, year, e)
        })?;
        let observed = observed_holidays_for_year(&raw, year);
        tracing::debug!(
            country = %self.country,
            year,
            count = observed.len(),
            "derived observed holidays"
        );

        self.memo
            .write()
            .unwrap()
            .entry(year)
            .or_insert_with(|| observed.clone());
        Ok(observed)
    }

    /// Observed holidays across `years`, deduplicated by date (first
    /// occurrence wins), restricted to `today` or later, ascending.
    pub fn holidays_for(
        &self,
        years: RangeInclusive<i32>,
        today: NaiveDate,
    ) -> EngineResult<Vec<Holiday>> {
        let mut merged: Vec<Holiday> = Vec::new();
        let mut seen: HashSet<NaiveDate> = HashSet::new();

        for year in years {
            for holiday in self.year_observed(year)? {
                if holiday.date >= today && seen.insert(holiday.date) {
                    merged.push(holiday);
                }
            }
        }

        merged.sort_by_key(|h| h.date);
        Ok(merged)
    }
}
