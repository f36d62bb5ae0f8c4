//! FILENAME: locale-format/src/lib.rs
//! PURPOSE: Locale profiles and presentation formatting for summary output.
//! CONTEXT: Pure formatting layer shared by every consumer of the summary
//! engine's output (table UI, CLI, JSON API). Holds no state; locale is
//! always an explicit parameter, never a process-wide global.

pub mod currency;
pub mod locale;

pub use currency::{format_amount, format_currency, CurrencyStyle, SymbolPosition, MISSING_AMOUNT};
pub use locale::{Locale, LocaleError};
