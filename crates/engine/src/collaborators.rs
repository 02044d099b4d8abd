//! Collaborator traits injected at the system boundary.

use chrono::{NaiveDate, Utc};

use gavel_core::{ItemContext, ItemId};

/// Inventory collaborator: resolves an item id to the snapshot the engine
/// needs. Backed by the (out-of-scope) inventory service in production and
/// by fixed maps in tests.
pub trait InventoryLookup: Send + Sync {
    fn context(&self, item_id: ItemId) -> anyhow::Result<ItemContext>;
}

/// Source of "today". The pure functions take the date explicitly; the
/// facade resolves it once per operation through this trait so tests can
/// pin the calendar.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock calendar date in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
