//! FILENAME: summary-engine/src/lib.rs
//! Period expense summary subsystem.
//!
//! This crate provides the cross-tabulation and aggregation engine as a
//! standalone module, separate from any transport or presentation layer.
//! It depends on `locale-format` only for collation and display naming.
//!
//! Layers:
//! - `definition`: Serializable input model (what the summary IS)
//! - `engine`: Calculation engine (HOW we compute)
//! - `view`: Renderable output for any frontend (WHAT we display)

pub mod definition;
pub mod engine;
pub mod view;

pub use definition::*;
pub use engine::{calculate_summary, SummaryCalculator, RECONCILE_EPSILON};
pub use view::*;
