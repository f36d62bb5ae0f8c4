//! FILENAME: summary-engine/src/engine.rs
//! Summary Engine - The calculation core that transforms sparse period
//! data into a renderable cross-tabulation.
//!
//! This module takes a PeriodSummary (sparse per-source, per-category
//! subtotals plus independently supplied aggregates) and produces a
//! SummaryView (dense matrix with reconciled totals).
//!
//! Algorithm:
//! 1. Validate the period before anything runs
//! 2. Resolve the category column set (dedup + locale collation sort)
//! 3. Cross-tabulate sources into a dense matrix; absent combinations
//!    become an explicit 0, repeated entries within a source are summed
//! 4. Aggregate: row totals by recomputation; column and grand totals by
//!    prefer-but-verify against the supplied aggregates
//! 5. Assemble the view, attaching any reconciliation warnings
//!
//! The engine is a pure synchronous transform: no I/O, no shared state,
//! no interior caching. Memoizing results is the caller's concern.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::smallvec;

use locale_format::Locale;

use crate::definition::{PeriodSummary, ValidationError};
use crate::view::{
    ColumnTotal, GrandTotal, ReconciliationWarning, RowCells, SummaryRow, SummaryView,
};

/// Tolerance when comparing a supplied aggregate against its independent
/// recomputation: one currency minor unit. Differences at or below this
/// are rounding noise, not inconsistency.
pub const RECONCILE_EPSILON: f64 = 0.01;

/// Calculates the full summary view for one period.
///
/// The single entry point presentation layers call once per data change.
/// Validation failures surface immediately; reconciliation mismatches
/// ride along inside the successful result as warnings.
pub fn calculate_summary(
    summary: &PeriodSummary,
    locale: Locale,
) -> Result<SummaryView, ValidationError> {
    summary.validate()?;
    Ok(SummaryCalculator::new(summary, locale).calculate())
}

// ============================================================================
// SUMMARY CALCULATOR
// ============================================================================

/// The main calculation engine for period summaries.
pub struct SummaryCalculator<'a> {
    summary: &'a PeriodSummary,
    locale: Locale,

    /// Resolved category columns in display order.
    categories: Vec<String>,

    /// Lookup from category name to its column index.
    category_index: FxHashMap<String, usize>,
}

impl<'a> SummaryCalculator<'a> {
    /// Creates a new calculator instance. The input is expected to be
    /// validated already; `calculate_summary` handles that.
    pub fn new(summary: &'a PeriodSummary, locale: Locale) -> Self {
        SummaryCalculator {
            summary,
            locale,
            categories: Vec::new(),
            category_index: FxHashMap::default(),
        }
    }

    /// Executes the full calculation and returns the rendered view.
    pub fn calculate(mut self) -> SummaryView {
        // Step 1: Resolve the category column set
        self.resolve_categories();

        // Step 2: Cross-tabulate into dense rows
        let rows = self.build_rows();

        // Step 3: Aggregate and reconcile
        let mut warnings = Vec::new();
        let column_totals = self.column_totals(&rows, &mut warnings);
        let grand_total = self.grand_total(&rows, &mut warnings);

        SummaryView {
            period: self.summary.period.clone(),
            categories: self.categories,
            rows,
            column_totals,
            grand_total,
            warnings,
        }
    }

    /// Computes the deterministic, deduplicated column set: every category
    /// name any source references, sorted under the locale's collation.
    /// Ordering depends only on the set of names present, not on source
    /// order or duplication.
    fn resolve_categories(&mut self) {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for source in &self.summary.sources {
            for entry in &source.category_amounts {
                seen.insert(entry.category_name.as_str());
            }
        }

        let mut categories: Vec<String> = seen.into_iter().map(str::to_string).collect();
        categories.sort_by(|a, b| self.locale.collate(a, b));

        self.category_index = categories
            .iter()
            .enumerate()
            .map(|(col, name)| (name.clone(), col))
            .collect();
        self.categories = categories;
    }

    /// Expands the sparse entries into dense rows, one per source, in
    /// source input order. Every cell a source never mentions is exactly
    /// 0; a category the source repeats accumulates into one cell.
    /// Lookup is exact-match on the category name - no normalization.
    fn build_rows(&self) -> Vec<SummaryRow> {
        self.summary
            .sources
            .iter()
            .map(|source| {
                let mut cells: RowCells = smallvec![0.0; self.categories.len()];
                for entry in &source.category_amounts {
                    if let Some(&col) = self.category_index.get(entry.category_name.as_str()) {
                        cells[col] += entry.amount;
                    }
                }
                let row_total = cells.iter().sum();
                SummaryRow {
                    source_name: source.source_name.clone(),
                    cells,
                    row_total,
                }
            })
            .collect()
    }

    /// Computes column totals under the prefer-but-verify policy: display
    /// the supplied aggregate when present, but always recompute the
    /// column sum and warn when the two disagree beyond tolerance.
    /// Supplied totals naming categories outside the resolved set have no
    /// column and are ignored.
    fn column_totals(
        &self,
        rows: &[SummaryRow],
        warnings: &mut Vec<ReconciliationWarning>,
    ) -> Vec<ColumnTotal> {
        // First occurrence wins if a supplied name repeats; the list is
        // declared unique.
        let mut supplied_by_name: FxHashMap<&str, f64> = FxHashMap::default();
        for entry in &self.summary.overall_category_totals {
            supplied_by_name
                .entry(entry.category_name.as_str())
                .or_insert(entry.amount);
        }

        self.categories
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let recomputed: f64 = rows.iter().map(|row| row.cells[col]).sum();
                let supplied = supplied_by_name.get(name.as_str()).copied();

                let (value, reconciled) = match supplied {
                    Some(supplied_value) => {
                        let agrees = (supplied_value - recomputed).abs() <= RECONCILE_EPSILON;
                        if !agrees {
                            warnings.push(ReconciliationWarning::Category {
                                category: name.clone(),
                                supplied: supplied_value,
                                recomputed,
                            });
                        }
                        // The displayed value stays the supplied one even
                        // on mismatch.
                        (supplied_value, agrees)
                    }
                    None => (recomputed, true),
                };

                ColumnTotal {
                    category_name: name.clone(),
                    value,
                    supplied,
                    recomputed,
                    reconciled,
                }
            })
            .collect()
    }

    /// Computes the grand total with the same prefer-but-verify policy,
    /// against the recomputed sum of all row totals.
    fn grand_total(
        &self,
        rows: &[SummaryRow],
        warnings: &mut Vec<ReconciliationWarning>,
    ) -> GrandTotal {
        let recomputed: f64 = rows.iter().map(|row| row.row_total).sum();
        let supplied = self.summary.grand_total;

        let (value, reconciled) = match supplied {
            Some(supplied_value) => {
                let agrees = (supplied_value - recomputed).abs() <= RECONCILE_EPSILON;
                if !agrees {
                    warnings.push(ReconciliationWarning::GrandTotal {
                        supplied: supplied_value,
                        recomputed,
                    });
                }
                (supplied_value, agrees)
            }
            None => (recomputed, true),
        };

        GrandTotal {
            value,
            supplied,
            recomputed,
            reconciled,
        }
    }
}
