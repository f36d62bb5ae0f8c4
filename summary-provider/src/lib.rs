//! FILENAME: summary-provider/src/lib.rs
//! Summary Provider Module
//!
//! The collaborator boundary that hands `PeriodSummary` values to the
//! engine's callers. The engine itself never fetches, caches, or persists
//! data; anything that can produce a period summary - a reporting backend
//! client, a JSON document on disk, an in-memory test fixture - implements
//! [`SummaryProvider`].

mod error;
mod fixture;
mod json;

pub use error::ProviderError;
pub use fixture::FixtureProvider;
pub use json::{load_summary_document, save_summary_document, JsonFileProvider};

use summary_engine::PeriodSummary;

/// A collaborator able to produce the expense summary for one reporting
/// period. Each fetch yields a fresh, immutable value; refetching replaces
/// the old value wholesale rather than mutating it.
pub trait SummaryProvider {
    fn fetch_period_summary(&self, year: i32, month: u32) -> Result<PeriodSummary, ProviderError>;
}
