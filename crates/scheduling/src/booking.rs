//! Booking validation: field checks, eligibility check, window + title.

use gavel_core::{
    AcceptedBooking, AuctionConfig, AuctionType, AuctionWindow, Availability, BookingDecision,
    BookingRequest, EngineResult, RejectionReason,
};

use crate::context::CalendarView;
use crate::window::compute_window;

/// Validate a proposed booking against the availability scan and, when it
/// passes, compute its window and display title.
///
/// Field-level problems come back as [`BookingDecision::Rejected`] values;
/// the only `Err` path is the window calculator's defensive re-validation,
/// which signals a caller/engine disagreement.
pub fn validate_booking(
    request: &BookingRequest,
    availability: &Availability,
    config: &AuctionConfig,
    calendar: &CalendarView,
) -> EngineResult<BookingDecision> {
    if request.opening_bid <= 0 {
        return Ok(BookingDecision::Rejected(RejectionReason::MissingOpeningBid));
    }
    let Some(date) = request.candidate_date else {
        return Ok(BookingDecision::Rejected(RejectionReason::MissingDate));
    };
    if !availability.is_eligible(date) {
        return Ok(BookingDecision::Rejected(RejectionReason::DateNotEligible));
    }

    let window = compute_window(date, request.auction_type, config, calendar)?;
    let title = match request.auction_type {
        AuctionType::Holiday => calendar
            .holiday_on(date)
            .map(|h| h.name.clone())
            .unwrap_or_else(|| range_title(&window)),
        _ => range_title(&window),
    };

    Ok(BookingDecision::Accepted(AcceptedBooking { window, title }))
}

/// "D MMM" when the window opens and closes on the same calendar day,
/// otherwise "D MMM - D MMM".
fn range_title(window: &AuctionWindow) -> String {
    let start_day = window.start.date();
    let end_day = window.end.date();
    if start_day == end_day {
        start_day.format("%-d %b").to_string()
    } else {
        format!("{} - {}", start_day.format("%-d %b"), end_day.format("%-d %b"))
    }
}
