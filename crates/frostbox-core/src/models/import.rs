//! CSV import preview models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One parsed candidate item from a CSV import.
///
/// A record is never discarded because of a validation problem: every error
/// becomes a message in `errors` and the record is returned in the batch so
/// the caller can show it to the user for correction or skip-on-import.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvItemRecord {
    /// 1-based row number in the source file, header row included.
    pub row_number: usize,
    pub name: String,
    pub category_name: String,
    /// Unset until (and unless) the quantity cell parses as a decimal.
    pub quantity: Option<Decimal>,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub errors: Vec<String>,
    pub valid: bool,
}

impl CsvItemRecord {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            name: String::new(),
            category_name: String::new(),
            quantity: None,
            unit: String::new(),
            expiry_date: None,
            description: None,
            errors: Vec::new(),
            valid: true,
        }
    }

    /// Append a validation error and mark the record invalid.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.valid = false;
    }

    pub fn is_valid(&self) -> bool {
        self.valid && self.errors.is_empty()
    }
}

/// The ordered result of parsing one uploaded CSV file.
///
/// This is a preview, not a commit: creating items from valid rows (and
/// enforcing per-category quantity constraints) is the consuming layer's job.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBatch {
    pub items: Vec<CsvItemRecord>,
    pub total_items: usize,
    pub valid_items: usize,
    /// Relative path of the persisted source file, kept so the caller can
    /// re-read it after the user corrects external data.
    pub file_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_valid() {
        let record = CsvItemRecord::new(1);
        assert!(record.is_valid());
        assert!(record.errors.is_empty());
        assert_eq!(record.row_number, 1);
    }

    #[test]
    fn test_add_error_invalidates() {
        let mut record = CsvItemRecord::new(2);
        record.add_error("Name is required");
        assert!(!record.is_valid());
        assert_eq!(record.errors, vec!["Name is required".to_string()]);
    }

    #[test]
    fn test_errors_keep_insertion_order() {
        let mut record = CsvItemRecord::new(3);
        record.add_error("Invalid quantity: abc");
        record.add_error("Valid quantity is required");
        record.add_error("Unit is required");
        assert_eq!(record.errors.len(), 3);
        assert_eq!(record.errors[0], "Invalid quantity: abc");
        assert_eq!(record.errors[2], "Unit is required");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let mut record = CsvItemRecord::new(1);
        record.name = "Chicken".to_string();
        record.category_name = "Fleisch".to_string();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rowNumber"], 1);
        assert_eq!(json["categoryName"], "Fleisch");
        assert_eq!(json["valid"], true);
    }

    #[test]
    fn test_batch_serializes_counts() {
        let batch = ImportBatch {
            items: vec![CsvItemRecord::new(1)],
            total_items: 1,
            valid_items: 1,
            file_path: "csv/alice/alice_123.csv".to_string(),
        };
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["validItems"], 1);
        assert_eq!(json["filePath"], "csv/alice/alice_123.csv");
    }
}
