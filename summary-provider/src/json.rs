//! FILENAME: summary-provider/src/json.rs
//! JSON document provider - structured JSON on disk.
//!
//! A summary document is a JSON array of period summaries in the backend's
//! camelCase DTO shape. This is the shape the reporting API serves; the
//! engine stays oblivious to it.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use summary_engine::PeriodSummary;

use crate::{ProviderError, SummaryProvider};

/// Reads a summary document from any reader.
pub fn load_summary_document(reader: impl Read) -> Result<Vec<PeriodSummary>, ProviderError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes a summary document to any writer.
pub fn save_summary_document(
    writer: impl Write,
    summaries: &[PeriodSummary],
) -> Result<(), ProviderError> {
    Ok(serde_json::to_writer_pretty(writer, summaries)?)
}

/// A provider backed by a JSON summary document on disk. The whole
/// document is read once at open time; fetches are lookups into the
/// loaded copy.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    summaries: Vec<PeriodSummary>,
}

impl JsonFileProvider {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let file = File::open(path)?;
        let summaries = load_summary_document(BufReader::new(file))?;
        Ok(JsonFileProvider { summaries })
    }

    /// Writes the given summaries as a document at `path`.
    pub fn save(path: impl AsRef<Path>, summaries: &[PeriodSummary]) -> Result<(), ProviderError> {
        let file = File::create(path)?;
        save_summary_document(BufWriter::new(file), summaries)
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl SummaryProvider for JsonFileProvider {
    fn fetch_period_summary(&self, year: i32, month: u32) -> Result<PeriodSummary, ProviderError> {
        self.summaries
            .iter()
            .find(|s| s.period.year == year && s.period.month == month)
            .cloned()
            .ok_or(ProviderError::PeriodNotFound { year, month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summary_engine::{Period, PeriodSummary, SourceSummary};

    const DTO_DOCUMENT: &str = r#"[
        {
            "period": {"year": 2025, "month": 5, "displayName": "Mayıs 2025"},
            "sources": [
                {
                    "sourceName": "Kredi Kartı",
                    "categoryAmounts": [
                        {"categoryName": "Market", "amount": 1250.75},
                        {"categoryName": "Ulaşım", "amount": 320.0}
                    ]
                }
            ],
            "overallCategoryTotals": [
                {"categoryName": "Market", "amount": 1250.75},
                {"categoryName": "Ulaşım", "amount": 320.0}
            ],
            "grandTotal": 1570.75
        }
    ]"#;

    #[test]
    fn test_load_dto_document() {
        let summaries = load_summary_document(DTO_DOCUMENT.as_bytes()).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].period.display_name, "Mayıs 2025");
        assert_eq!(summaries[0].sources[0].category_amounts.len(), 2);
        assert_eq!(summaries[0].grand_total, Some(1570.75));
    }

    #[test]
    fn test_file_provider_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summaries.json");
        std::fs::write(&path, DTO_DOCUMENT).unwrap();

        let provider = JsonFileProvider::open(&path).unwrap();
        let summary = provider.fetch_period_summary(2025, 5).unwrap();
        assert_eq!(summary.sources[0].source_name, "Kredi Kartı");

        let err = provider.fetch_period_summary(2025, 6).unwrap_err();
        assert!(matches!(err, ProviderError::PeriodNotFound { .. }));
    }

    #[test]
    fn test_save_then_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summaries.json");

        let mut summary = PeriodSummary::new(Period::new(2025, 6, "Haziran 2025"));
        summary
            .sources
            .push(SourceSummary::new("Banka").with_amount("Fatura", 890.5));
        summary.grand_total = Some(890.5);

        JsonFileProvider::save(&path, std::slice::from_ref(&summary)).unwrap();

        let provider = JsonFileProvider::open(&path).unwrap();
        assert_eq!(provider.fetch_period_summary(2025, 6).unwrap(), summary);
    }

    #[test]
    fn test_malformed_document() {
        let err = load_summary_document("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, ProviderError::Json(_)));
    }
}
