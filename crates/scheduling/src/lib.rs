//! `gavel-scheduling` — auction window timing, eligibility scans and
//! booking validation.
//!
//! Pure functions over immutable inputs: the caller supplies "today", the
//! organization configuration and a [`CalendarView`] snapshot; nothing here
//! reads the wall clock or performs I/O.

pub mod availability;
pub mod booking;
pub mod context;
pub mod window;

pub use availability::{DEFAULT_HORIZON_DAYS, eligible_dates, next_valid_start};
pub use booking::validate_booking;
pub use context::CalendarView;
pub use window::compute_window;
