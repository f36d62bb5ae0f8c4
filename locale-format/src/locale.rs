//! FILENAME: locale-format/src/locale.rs
//! Locale profiles - tag parsing, collation, and calendar names.
//!
//! Two profiles are supported, matching the dashboard's language switch:
//! Turkish ("tr") and English ("en"). Each profile owns:
//! - its alphabet ordering for sorting category labels,
//! - its month names for period display,
//! - its currency conventions (see `currency`).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while resolving a locale tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unknown locale tag: {tag}")]
    UnknownTag { tag: String },
}

/// A supported locale profile.
///
/// Always passed explicitly; the engine and formatter never read locale
/// from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Tr,
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Tr
    }
}

/// The Turkish alphabet in dictionary order. Letters not in this table
/// (q, w, x, digits, punctuation) sort after it by code point.
const TR_ALPHABET: [char; 29] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'ö', 'p', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'y', 'z',
];

const TR_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran",
    "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
];

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

impl Locale {
    /// Resolves a locale tag ("tr", "tr-TR", "en", "en_US", ...).
    /// Only the primary language subtag is considered.
    pub fn from_tag(tag: &str) -> Result<Locale, LocaleError> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "tr" => Ok(Locale::Tr),
            "en" => Ok(Locale::En),
            _ => Err(LocaleError::UnknownTag {
                tag: tag.to_string(),
            }),
        }
    }

    /// Resolves a tag, falling back to Turkish for anything unknown.
    /// Mirrors the dashboard behavior of defaulting to "tr".
    pub fn from_tag_or_default(tag: &str) -> Locale {
        Locale::from_tag(tag).unwrap_or_default()
    }

    /// The canonical tag for this profile.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
        }
    }

    /// The localized full month name, or None when month is outside [1, 12].
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let names = match self {
            Locale::Tr => &TR_MONTHS,
            Locale::En => &EN_MONTHS,
        };
        Some(names[(month - 1) as usize])
    }

    /// A localized "<Month> <Year>" display name for a reporting period,
    /// e.g. "Mayıs 2025" / "May 2025". None when month is out of range.
    pub fn period_display_name(&self, year: i32, month: u32) -> Option<String> {
        self.month_name(month)
            .map(|name| format!("{} {}", name, year))
    }

    /// Locale-aware string comparison at primary (case-insensitive)
    /// strength, with a plain code-point comparison as tie-break so the
    /// ordering is total and stable.
    pub fn collate(&self, a: &str, b: &str) -> Ordering {
        let lhs = a.chars().map(|c| self.primary_rank(c));
        let rhs = b.chars().map(|c| self.primary_rank(c));
        match lhs.cmp(rhs) {
            Ordering::Equal => a.cmp(b),
            unequal => unequal,
        }
    }

    /// The primary sort rank of a single character under this profile.
    fn primary_rank(&self, c: char) -> u32 {
        let lowered = self.lower(c);
        match self {
            Locale::Tr => match TR_ALPHABET.iter().position(|&t| t == lowered) {
                Some(idx) => idx as u32,
                // Untabled characters keep relative code-point order
                // after the alphabet.
                None => TR_ALPHABET.len() as u32 + lowered as u32,
            },
            Locale::En => lowered as u32,
        }
    }

    /// Locale-correct lowercasing. Turkish distinguishes dotted and
    /// dotless I: 'I' lowers to 'ı' and 'İ' lowers to 'i'.
    fn lower(&self, c: char) -> char {
        match self {
            Locale::Tr => match c {
                'I' => 'ı',
                'İ' => 'i',
                _ => c.to_lowercase().next().unwrap_or(c),
            },
            Locale::En => c.to_lowercase().next().unwrap_or(c),
        }
    }
}
