//! Auction window calculation: type-specific timing rules.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use gavel_core::{AuctionConfig, AuctionType, AuctionWindow, EngineError, EngineResult};

use crate::context::CalendarView;

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Compute the concrete start/end window for an auction booked on `date`.
///
/// Callers are expected to pass dates already filtered by the availability
/// scan; the calculator still re-validates and answers
/// [`EngineError::InvalidDateForType`] on disagreement.
///
/// All arithmetic is wall-clock: durations are added as civil hours in the
/// organization's time zone, so a window never stretches or shrinks across
/// a daylight-saving transition.
pub fn compute_window(
    date: NaiveDate,
    auction_type: AuctionType,
    config: &AuctionConfig,
    calendar: &CalendarView,
) -> EngineResult<AuctionWindow> {
    match auction_type {
        AuctionType::Holiday => {
            let holiday = calendar
                .holiday_on(date)
                .ok_or_else(|| EngineError::invalid_date_for_type(auction_type, date))?;

            if holiday.is_synthetic() {
                // The organization's own Christmas/New Year dates keep the
                // regular morning start and run the holiday duration.
                let start = date.and_time(config.start_time);
                let end = start + Duration::hours(config.holiday_duration_hours);
                Ok(AuctionWindow::unadjusted(start, end))
            } else if holiday.falls_on_monday() {
                // Sunday-observed holiday shifted to Monday: the auction
                // runs backward from a fixed end on the following day.
                let end = (date + Duration::days(1)).and_time(config.holiday_end_time);
                let start = end - Duration::hours(config.holiday_duration_hours);
                Ok(AuctionWindow::unadjusted(start, end))
            } else {
                let end = date.and_time(config.holiday_end_time);
                let start = end - Duration::hours(config.holiday_duration_hours);
                Ok(AuctionWindow::unadjusted(start, end))
            }
        }

        AuctionType::BlackFriday => {
            if date != calendar.black_friday() {
                return Err(EngineError::invalid_date_for_type(auction_type, date));
            }
            let start = date.and_time(config.start_time);
            let end = start + Duration::hours(config.duration_hours);
            Ok(AuctionWindow::unadjusted(start, end))
        }

        AuctionType::Regular
        | AuctionType::NewArrival
        | AuctionType::Clearance
        | AuctionType::DealersOnly => {
            if is_weekend(date) || calendar.is_holiday(date) {
                return Err(EngineError::invalid_date_for_type(auction_type, date));
            }

            let mut start = date.and_time(config.start_time);
            let mut end = start + Duration::hours(config.duration_hours);
            let mut shifts = 0u32;
            let mut blocking_holiday: Option<String> = None;

            // Walk the window back one full day at a time until neither
            // endpoint lands on an observed holiday. Terminates: each pass
            // moves both endpoints strictly earlier and the holiday set over
            // the horizon is finite.
            while let Some(holiday) = calendar
                .holiday_on(start.date())
                .or_else(|| calendar.holiday_on(end.date()))
            {
                if blocking_holiday.is_none() {
                    blocking_holiday = Some(holiday.name.clone());
                }
                start -= Duration::days(1);
                end -= Duration::days(1);
                shifts += 1;
            }

            if let Some(name) = blocking_holiday {
                tracing::debug!(%date, %auction_type, shifts, holiday = %name, "window shifted off holiday");
                Ok(AuctionWindow::adjusted_by(
                    start,
                    end,
                    format!("moved {shifts} day(s) earlier: window overlapped {name}"),
                ))
            } else {
                Ok(AuctionWindow::unadjusted(start, end))
            }
        }
    }
}
