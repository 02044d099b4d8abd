//! `gavel-calendar` — observed-holiday and Black Friday date derivation.
//!
//! Deterministic, pure logic over immutable inputs. The only collaborator
//! is the jurisdictional [`HolidayDataSource`]; everything derived from its
//! answers is re-derivable at any time, so the per-year memo table is an
//! optimization and never a source of truth.

pub mod black_friday;
pub mod holidays;
pub mod provider;

pub use black_friday::{black_friday, next_black_friday};
pub use holidays::HolidayCalendar;
pub use provider::{HolidayDataSource, RawHoliday};
