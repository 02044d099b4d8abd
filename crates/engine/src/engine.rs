//! The auction engine facade.

use chrono::{Datelike, Duration, NaiveDate};

use gavel_calendar::{HolidayCalendar, HolidayDataSource, black_friday, next_black_friday};
use gavel_core::{
    AuctionConfig, AuctionType, AuctionWindow, Availability, BookingDecision, BookingRequest,
    EngineError, EngineResult, ItemId,
};
use gavel_scheduling::{
    CalendarView, DEFAULT_HORIZON_DAYS, compute_window, eligible_dates, validate_booking,
};

use crate::collaborators::{Clock, InventoryLookup, SystemClock};

/// Facade over the pure scheduling functions.
///
/// Owns no mutable state beyond the holiday calendar's per-year memo, so a
/// single instance can serve concurrent callers. Organization configuration
/// is passed per call and validated at every entry point.
pub struct AuctionEngine<S, I, C = SystemClock> {
    holidays: HolidayCalendar<S>,
    inventory: I,
    clock: C,
}

impl<S: HolidayDataSource, I: InventoryLookup> AuctionEngine<S, I, SystemClock> {
    pub fn new(source: S, country: impl Into<String>, inventory: I) -> Self {
        Self::with_clock(source, country, inventory, SystemClock)
    }
}

impl<S: HolidayDataSource, I: InventoryLookup, C: Clock> AuctionEngine<S, I, C> {
    pub fn with_clock(source: S, country: impl Into<String>, inventory: I, clock: C) -> Self {
        Self {
            holidays: HolidayCalendar::new(source, country),
            inventory,
            clock,
        }
    }

    /// First available date and disabled-date set for one (type, item) pair
    /// over the one-year horizon.
    pub fn eligible_dates(
        &self,
        auction_type: AuctionType,
        item_id: ItemId,
        config: &AuctionConfig,
    ) -> EngineResult<Availability> {
        config.validate()?;
        let today = self.clock.today();
        let item = self
            .inventory
            .context(item_id)
            .map_err(|e| EngineError::item_lookup_failed(item_id, e))?;
        let calendar = self.calendar_view(today)?;

        let availability = eligible_dates(
            auction_type,
            &item,
            config,
            &calendar,
            today,
            DEFAULT_HORIZON_DAYS,
        );
        tracing::debug!(
            %auction_type,
            %item_id,
            first_available = ?availability.first_available,
            disabled = availability.disabled.len(),
            "computed eligible dates"
        );
        Ok(availability)
    }

    /// Concrete start/end window for an auction booked on `date`.
    ///
    /// `date` must lie inside the booking horizon `(today, today + 365]`:
    /// eligibility is only ever computed over that range, so anything
    /// outside it cannot be a legal candidate and the loaded calendar view
    /// would be blind to its holidays.
    pub fn compute_window(
        &self,
        date: NaiveDate,
        auction_type: AuctionType,
        config: &AuctionConfig,
    ) -> EngineResult<AuctionWindow> {
        config.validate()?;
        let today = self.clock.today();
        if date <= today || date > today + Duration::days(DEFAULT_HORIZON_DAYS) {
            return Err(EngineError::invalid_date_for_type(auction_type, date));
        }
        let calendar = self.calendar_view(today)?;

        let window = compute_window(date, auction_type, config, &calendar)?;
        tracing::debug!(
            %auction_type,
            %date,
            start = %window.start,
            end = %window.end,
            adjusted = window.adjusted,
            "computed auction window"
        );
        Ok(window)
    }

    /// Validate a proposed booking end to end: field checks, eligibility,
    /// window and title.
    pub fn validate_booking(
        &self,
        request: &BookingRequest,
        item_id: ItemId,
        config: &AuctionConfig,
    ) -> EngineResult<BookingDecision> {
        config.validate()?;
        let today = self.clock.today();
        let item = self
            .inventory
            .context(item_id)
            .map_err(|e| EngineError::item_lookup_failed(item_id, e))?;
        let calendar = self.calendar_view(today)?;

        let availability = eligible_dates(
            request.auction_type,
            &item,
            config,
            &calendar,
            today,
            DEFAULT_HORIZON_DAYS,
        );
        let decision = validate_booking(request, &availability, config, &calendar)?;
        match &decision {
            BookingDecision::Accepted(booking) => {
                tracing::info!(
                    auction_type = %request.auction_type,
                    %item_id,
                    title = %booking.title,
                    start = %booking.window.start,
                    "booking accepted"
                );
            }
            BookingDecision::Rejected(reason) => {
                tracing::debug!(
                    auction_type = %request.auction_type,
                    %item_id,
                    %reason,
                    "booking rejected"
                );
            }
        }
        Ok(decision)
    }

    /// The single Black Friday date of `year`.
    pub fn black_friday_for(&self, year: i32) -> NaiveDate {
        black_friday(year)
    }

    /// The nearest future Black Friday as of the engine's clock.
    pub fn next_black_friday(&self) -> NaiveDate {
        next_black_friday(self.clock.today())
    }

    /// Calendar facts for the horizon starting at `today`, plus one year
    /// past the horizon end: a window booked on the last eligible dates can
    /// spill into the next calendar year, and the holiday checks must see
    /// that year too.
    fn calendar_view(&self, today: NaiveDate) -> EngineResult<CalendarView> {
        let horizon_end = today + Duration::days(DEFAULT_HORIZON_DAYS);
        let holidays = self
            .holidays
            .holidays_for(today.year()..=horizon_end.year() + 1, today)?;
        Ok(CalendarView::new(holidays, next_black_friday(today)))
    }
}
