//! FILENAME: summary-provider/src/fixture.rs
//! In-memory provider for tests and demos.

use summary_engine::PeriodSummary;

use crate::{ProviderError, SummaryProvider};

/// A provider backed by a fixed, in-memory list of summaries.
#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    summaries: Vec<PeriodSummary>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        FixtureProvider::default()
    }

    /// Adds one period's summary to the fixture.
    pub fn with_summary(mut self, summary: PeriodSummary) -> Self {
        self.summaries.push(summary);
        self
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl SummaryProvider for FixtureProvider {
    fn fetch_period_summary(&self, year: i32, month: u32) -> Result<PeriodSummary, ProviderError> {
        self.summaries
            .iter()
            .find(|s| s.period.year == year && s.period.month == month)
            .cloned()
            .ok_or(ProviderError::PeriodNotFound { year, month })
    }
}
