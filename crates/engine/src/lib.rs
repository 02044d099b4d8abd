//! `gavel-engine` — boundary facade over the auction scheduling engine.
//!
//! Wires the pure calendar and scheduling functions to their collaborators
//! (holiday data source, inventory lookup, clock) and exposes the four
//! call-style operations the booking layer consumes.

pub mod collaborators;
pub mod engine;

pub use collaborators::{Clock, InventoryLookup, SystemClock};
pub use engine::AuctionEngine;

pub use gavel_calendar::{HolidayDataSource, RawHoliday};
pub use gavel_core::{
    AcceptedBooking, AuctionConfig, AuctionType, AuctionWindow, Availability, BookingDecision,
    BookingRequest, EngineError, EngineResult, Holiday, ItemContext, ItemId, RejectionReason,
};
