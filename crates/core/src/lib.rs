//! `gavel-core` — domain foundation for the auction scheduling engine.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the auction type taxonomy, organization configuration, calendar value
//! objects and the engine-wide error model.

pub mod auction;
pub mod config;
pub mod error;
pub mod holiday;
pub mod id;
pub mod item;

pub use auction::{
    AcceptedBooking, AuctionType, AuctionWindow, Availability, BookingDecision, BookingRequest,
    RejectionReason,
};
pub use config::AuctionConfig;
pub use error::{EngineError, EngineResult};
pub use holiday::Holiday;
pub use id::ItemId;
pub use item::ItemContext;
