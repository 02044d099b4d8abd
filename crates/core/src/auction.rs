//! Auction value objects: the event type taxonomy, computed windows,
//! availability results and booking requests/decisions.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Business category of an auction, governing eligibility and timing rules.
///
/// Closed set: timing and eligibility rules match on it exhaustively, so a
/// new variant forces every rule site to be revisited at compile time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuctionType {
    Regular,
    NewArrival,
    Clearance,
    BlackFriday,
    Holiday,
    DealersOnly,
}

impl AuctionType {
    /// All variants, for exhaustive iteration in scans and tests.
    pub const ALL: [AuctionType; 6] = [
        AuctionType::Regular,
        AuctionType::NewArrival,
        AuctionType::Clearance,
        AuctionType::BlackFriday,
        AuctionType::Holiday,
        AuctionType::DealersOnly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionType::Regular => "regular",
            AuctionType::NewArrival => "new-arrival",
            AuctionType::Clearance => "clearance",
            AuctionType::BlackFriday => "black-friday",
            AuctionType::Holiday => "holiday",
            AuctionType::DealersOnly => "dealers-only",
        }
    }

    /// Saturday/Sunday are start-date blockers for every type except the
    /// two whose single allowed dates are fixed by the calendar itself.
    pub fn excludes_weekends(&self) -> bool {
        !matches!(self, AuctionType::BlackFriday | AuctionType::Holiday)
    }
}

impl core::fmt::Display for AuctionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete start/end instant of a booked auction, in the organization's
/// civil time zone (wall-clock arithmetic, no UTC offset attached).
///
/// Created fresh per calculation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// True when the window was shifted away from its candidate date to
    /// avoid a public holiday.
    pub adjusted: bool,
    pub adjustment_reason: Option<String>,
}

impl AuctionWindow {
    pub fn unadjusted(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            adjusted: false,
            adjustment_reason: None,
        }
    }

    pub fn adjusted_by(start: NaiveDateTime, end: NaiveDateTime, reason: impl Into<String>) -> Self {
        Self {
            start,
            end,
            adjusted: true,
            adjustment_reason: Some(reason.into()),
        }
    }
}

/// Result of the one-year eligibility scan for one (auction type, item) pair.
///
/// `disabled` holds every scanned date that may **not** be used; a date is
/// eligible exactly when it lies inside the scanned horizon and is absent
/// from `disabled`. `first_available = None` is a legitimate outcome
/// ("no slot in the horizon"), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub first_available: Option<NaiveDate>,
    pub disabled: BTreeSet<NaiveDate>,
    /// First day of the scanned horizon (the day after "today").
    pub horizon_start: NaiveDate,
    /// Last day of the scanned horizon (inclusive).
    pub horizon_end: NaiveDate,
}

impl Availability {
    pub fn is_eligible(&self, date: NaiveDate) -> bool {
        date >= self.horizon_start && date <= self.horizon_end && !self.disabled.contains(&date)
    }
}

/// A proposed booking; validated then discarded, no persisted lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub auction_type: AuctionType,
    pub candidate_date: Option<NaiveDate>,
    /// Opening bid in the smallest currency unit (e.g., cents).
    pub opening_bid: i64,
}

/// Field-level booking rejection. Returned as a value inside
/// [`BookingDecision::Rejected`], never raised as an engine error, so the
/// caller can surface one message per invalid field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionReason {
    #[error("an opening bid greater than zero is required")]
    MissingOpeningBid,
    #[error("an auction date is required")]
    MissingDate,
    #[error("the chosen date is not eligible for this auction type")]
    DateNotEligible,
}

/// A validated booking: the computed window plus its display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedBooking {
    pub window: AuctionWindow,
    pub title: String,
}

/// Outcome of booking validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingDecision {
    Accepted(AcceptedBooking),
    Rejected(RejectionReason),
}

impl BookingDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, BookingDecision::Accepted(_))
    }
}
