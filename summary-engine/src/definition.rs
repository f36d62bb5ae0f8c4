//! FILENAME: summary-engine/src/definition.rs
//! Summary Definition - The serializable input model.
//!
//! This module contains the types that DESCRIBE one reporting period's
//! expense data, exactly as handed over by a Summary Provider. These
//! structures are designed to be:
//! - Serializable (they round-trip the backend's camelCase DTO)
//! - Immutable snapshots: a refetch produces a wholly new value
//! - Validated up front, before any computation runs

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use locale_format::Locale;

/// Errors that reject a summary before computation proceeds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("month {month} is outside the valid range 1..=12")]
    MonthOutOfRange { month: u32 },

    #[error("year {year} must be positive")]
    YearNotPositive { year: i32 },

    #[error("source name appears more than once in period: {name}")]
    DuplicateSourceName { name: String },
}

// ============================================================================
// PERIOD
// ============================================================================

/// A (year, month) pair identifying a reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub year: i32,

    /// Calendar month, 1 through 12.
    pub month: u32,

    /// Human-readable name for the window (e.g. "Mayıs 2025").
    #[serde(default)]
    pub display_name: String,
}

impl Period {
    pub fn new(year: i32, month: u32, display_name: impl Into<String>) -> Self {
        Period {
            year,
            month,
            display_name: display_name.into(),
        }
    }

    /// Builds a validated period whose display name is generated for the
    /// given locale. Used when a provider supplies no name of its own.
    pub fn localized(year: i32, month: u32, locale: Locale) -> Result<Self, ValidationError> {
        let mut period = Period::new(year, month, String::new());
        period.validate()?;
        // month is in range here, so a name always exists
        period.display_name = locale.period_display_name(year, month).unwrap_or_default();
        Ok(period)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=12).contains(&self.month) {
            return Err(ValidationError::MonthOutOfRange { month: self.month });
        }
        if self.year <= 0 {
            return Err(ValidationError::YearNotPositive { year: self.year });
        }
        Ok(())
    }
}

// ============================================================================
// AMOUNTS AND SOURCES
// ============================================================================

/// One category's subtotal. Category names are opaque, case-sensitive,
/// exact-match labels; classification itself happens upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmount {
    pub category_name: String,
    pub amount: f64,
}

impl CategoryAmount {
    pub fn new(category_name: impl Into<String>, amount: f64) -> Self {
        CategoryAmount {
            category_name: category_name.into(),
            amount,
        }
    }
}

/// One origin of transactions within a period (a statement, an account).
///
/// The entry list is sparse: it need not cover the full category set, and
/// it may repeat a category name (the engine merges repeats by summation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSummary {
    pub source_name: String,

    #[serde(default)]
    pub category_amounts: Vec<CategoryAmount>,
}

impl SourceSummary {
    pub fn new(source_name: impl Into<String>) -> Self {
        SourceSummary {
            source_name: source_name.into(),
            category_amounts: Vec::new(),
        }
    }

    /// Appends one category entry.
    pub fn with_amount(mut self, category_name: impl Into<String>, amount: f64) -> Self {
        self.category_amounts
            .push(CategoryAmount::new(category_name, amount));
        self
    }
}

// ============================================================================
// MAIN INPUT STRUCT
// ============================================================================

/// Everything a Summary Provider hands over for one reporting period.
///
/// `overall_category_totals` and `grand_total` are independently supplied
/// aggregates. They are expected - but not guaranteed - to equal the sums
/// derivable from `sources`; the engine treats disagreement as a
/// detectable, non-fatal condition (see `engine`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub period: Period,

    #[serde(default)]
    pub sources: Vec<SourceSummary>,

    /// Supplied per-category aggregates. Names are expected to be unique;
    /// categories referenced by sources need not appear here.
    #[serde(default)]
    pub overall_category_totals: Vec<CategoryAmount>,

    /// Supplied overall aggregate. Providers may omit it.
    #[serde(default)]
    pub grand_total: Option<f64>,
}

impl PeriodSummary {
    pub fn new(period: Period) -> Self {
        PeriodSummary {
            period,
            sources: Vec::new(),
            overall_category_totals: Vec::new(),
            grand_total: None,
        }
    }

    /// Checks the invariants computation relies on: a well-formed period
    /// and source names unique within the period. An empty source list is
    /// valid input, not an error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.period.validate()?;

        let mut seen = FxHashSet::default();
        for source in &self.sources {
            if !seen.insert(source.source_name.as_str()) {
                return Err(ValidationError::DuplicateSourceName {
                    name: source.source_name.clone(),
                });
            }
        }
        Ok(())
    }
}
