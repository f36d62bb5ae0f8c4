//! FILENAME: locale-format/src/currency.rs
//! PURPOSE: Currency formatting utilities for displaying summary amounts.
//! CONTEXT: This module handles the conversion of raw amounts to display
//! strings under a locale's currency conventions. Amounts are always
//! rendered with exactly two fraction digits.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Placeholder rendered for an amount that was never recorded.
///
/// Only genuinely-absent top-level aggregates (e.g. a backend that omitted
/// its grand total) render this; matrix cells are always concrete numbers,
/// with absence already normalized to an explicit `0`.
pub const MISSING_AMOUNT: &str = "-";

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolPosition {
    Before,
    After,
}

/// A locale's currency display conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyStyle {
    /// Currency symbol or code, including any spacing (e.g. "₺", "TRY ").
    pub symbol: &'static str,
    pub position: SymbolPosition,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl CurrencyStyle {
    /// The conventions for amounts in a given locale. The dashboard's
    /// reporting currency is the Turkish lira; "tr" uses the symbol and
    /// "en" uses the ISO code, matching Intl output for tr-TR and en-US.
    pub fn for_locale(locale: Locale) -> CurrencyStyle {
        match locale {
            Locale::Tr => CurrencyStyle {
                symbol: "₺",
                position: SymbolPosition::Before,
                group_separator: '.',
                decimal_separator: ',',
            },
            Locale::En => CurrencyStyle {
                symbol: "TRY ",
                position: SymbolPosition::Before,
                group_separator: ',',
                decimal_separator: '.',
            },
        }
    }
}

/// Format an amount as currency under the given locale.
///
/// Pure function of its inputs: exactly two fraction digits, locale
/// grouping and decimal separators, sign ahead of the symbol.
pub fn format_currency(amount: f64, locale: Locale) -> String {
    let style = CurrencyStyle::for_locale(locale);
    let fixed = format!("{:.2}", amount.abs());
    let (integer_part, decimal_part) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));

    let mut number = group_digits(integer_part, style.group_separator);
    number.push(style.decimal_separator);
    number.push_str(decimal_part);

    let body = match style.position {
        SymbolPosition::Before => format!("{}{}", style.symbol, number),
        SymbolPosition::After => format!("{}{}", number, style.symbol),
    };

    if amount < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Format an optional amount, rendering [`MISSING_AMOUNT`] when the value
/// was never recorded. Never renders "0.00" for an absent value.
pub fn format_amount(amount: Option<f64>, locale: Locale) -> String {
    match amount {
        Some(value) => format_currency(value, locale),
        None => MISSING_AMOUNT.to_string(),
    }
}

/// Insert a grouping separator every three digits of an integer string.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }

    result
}
