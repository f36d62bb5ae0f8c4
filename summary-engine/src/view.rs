//! FILENAME: summary-engine/src/view.rs
//! Summary View - Renderable output for any presentation layer.
//!
//! This module holds the dense result of one calculation: the resolved
//! category columns, the sources × categories matrix with per-row totals,
//! reconciled column and grand totals, and any warnings raised while
//! reconciling. The view is immutable and carries everything a table UI,
//! CLI, or JSON API needs; number formatting happens in `locale-format`
//! at render time only.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::definition::Period;

/// Dense per-row cell storage. Realistic periods have tens of categories,
/// so small rows stay inline.
pub type RowCells = SmallVec<[f64; 8]>;

// ============================================================================
// ROWS AND TOTALS
// ============================================================================

/// One source's row in the cross-tabulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub source_name: String,

    /// Cells in category-column order. Combinations absent from the input
    /// hold exactly 0 - "computed zero" is distinct from "never recorded",
    /// and matrix cells are always the former.
    pub cells: RowCells,

    /// Sum of this row's cells. Always recomputed internally so displayed
    /// cells and displayed total stay consistent even on inconsistent
    /// upstream data.
    pub row_total: f64,
}

/// One category column's total, with its reconciliation provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnTotal {
    pub category_name: String,

    /// The displayed value: the supplied aggregate when the provider gave
    /// one, otherwise the recomputed column sum.
    pub value: f64,

    /// The provider-supplied aggregate, when present.
    pub supplied: Option<f64>,

    /// The independently recomputed column sum.
    pub recomputed: f64,

    /// False when supplied and recomputed disagree beyond tolerance.
    pub reconciled: bool,
}

/// The grand total, with the same prefer-but-verify provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrandTotal {
    pub value: f64,
    pub supplied: Option<f64>,
    pub recomputed: f64,
    pub reconciled: bool,
}

/// A supplied aggregate disagreed with its independent recomputation
/// beyond tolerance. Warnings travel with a successful result; the caller
/// decides whether to log or display them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReconciliationWarning {
    Category {
        category: String,
        supplied: f64,
        recomputed: f64,
    },
    GrandTotal {
        supplied: f64,
        recomputed: f64,
    },
}

/// One entry of the spending ranking (most spent first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCategoryTotal {
    pub category_name: String,
    pub value: f64,

    /// This category's share of the effective grand total, 0.0 when the
    /// grand total is zero.
    pub share_of_total: f64,
}

// ============================================================================
// MAIN VIEW STRUCT
// ============================================================================

/// The complete result of one summary calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub period: Period,

    /// Resolved category columns: unique names referenced by any source,
    /// sorted under the calculation locale's collation.
    pub categories: Vec<String>,

    /// Rows in source input order (not re-sorted).
    pub rows: Vec<SummaryRow>,

    /// Column totals in `categories` order.
    pub column_totals: Vec<ColumnTotal>,

    pub grand_total: GrandTotal,

    pub warnings: Vec<ReconciliationWarning>,
}

impl SummaryView {
    /// The cell at (row, column), if both indices are in range.
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.cells.get(col)).copied()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.categories.len()
    }

    /// True for the all-zero table produced by an empty source list.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column totals sorted descending by displayed value ("most spent
    /// first"), each with its share of the effective grand total. Ties
    /// keep column order, which is already collation order.
    pub fn ranked_category_totals(&self) -> Vec<RankedCategoryTotal> {
        let total = self.grand_total.value;
        let mut ranked: Vec<RankedCategoryTotal> = self
            .column_totals
            .iter()
            .map(|ct| RankedCategoryTotal {
                category_name: ct.category_name.clone(),
                value: ct.value,
                share_of_total: if total != 0.0 { ct.value / total } else { 0.0 },
            })
            .collect();
        ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_view() -> SummaryView {
        SummaryView {
            period: Period::new(2025, 5, "Mayıs 2025"),
            categories: vec!["Market".to_string(), "Ulaşım".to_string()],
            rows: vec![
                SummaryRow {
                    source_name: "Banka".to_string(),
                    cells: RowCells::from_slice(&[100.0, 40.0]),
                    row_total: 140.0,
                },
                SummaryRow {
                    source_name: "Kredi Kartı".to_string(),
                    cells: RowCells::from_slice(&[60.0, 0.0]),
                    row_total: 60.0,
                },
            ],
            column_totals: vec![
                ColumnTotal {
                    category_name: "Market".to_string(),
                    value: 160.0,
                    supplied: Some(160.0),
                    recomputed: 160.0,
                    reconciled: true,
                },
                ColumnTotal {
                    category_name: "Ulaşım".to_string(),
                    value: 40.0,
                    supplied: None,
                    recomputed: 40.0,
                    reconciled: true,
                },
            ],
            grand_total: GrandTotal {
                value: 200.0,
                supplied: Some(200.0),
                recomputed: 200.0,
                reconciled: true,
            },
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_cell_access() {
        let view = create_test_view();
        assert_eq!(view.cell(0, 1), Some(40.0));
        assert_eq!(view.cell(1, 1), Some(0.0));
        assert_eq!(view.cell(2, 0), None);
        assert_eq!(view.cell(0, 5), None);
    }

    #[test]
    fn test_ranked_category_totals() {
        let view = create_test_view();
        let ranked = view.ranked_category_totals();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].category_name, "Market");
        assert_eq!(ranked[0].value, 160.0);
        assert!((ranked[0].share_of_total - 0.8).abs() < 1e-9);
        assert_eq!(ranked[1].category_name, "Ulaşım");
        assert!((ranked[1].share_of_total - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_ranked_totals_with_zero_grand_total() {
        let mut view = create_test_view();
        view.grand_total.value = 0.0;

        for entry in view.ranked_category_totals() {
            assert_eq!(entry.share_of_total, 0.0);
        }
    }
}
