//! Spreadsheet ingestion: heuristic, partial-failure-tolerant CSV parsing.
//!
//! Structural failures (malformed quoting, invalid UTF-8, zero rows) reject
//! the whole file; field-level problems never do: each becomes a message on
//! its row and the row is still emitted so the user can see every problem in
//! one pass.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;

use frostbox_core::CsvItemRecord;

use crate::error::{IngestError, IngestResult};

/// Minimum cells for a row to be considered at all: name, category,
/// quantity, unit.
const MIN_CELLS: usize = 4;

/// Expiry date patterns, tried in order; the first match wins.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%m/%d/%Y"];

/// Substrings that mark the first row as a header when found in its first
/// cell (lower-cased, trimmed).
const HEADER_MARKERS: &[&str] = &["name", "artikel", "item", "bezeichnung"];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Best-effort header detection on the first row only.
///
/// This is a heuristic, not a schema check: a data row whose name cell
/// happens to contain a marker word ("Item X") is misclassified as a header.
fn is_header_row(first_row: &StringRecord) -> bool {
    if first_row.len() < MIN_CELLS {
        return false;
    }

    let first_cell = first_row.get(0).unwrap_or("").trim().to_lowercase();
    HEADER_MARKERS
        .iter()
        .any(|marker| first_cell.contains(marker))
}

/// Parse one data row into a record, annotating field-level problems.
///
/// Cell parsing never aborts the row: a bad quantity or date is recorded and
/// parsing continues. Required-field checks run afterwards in fixed order,
/// each appending its error independently.
fn parse_record(record: &StringRecord, row_number: usize) -> CsvItemRecord {
    let mut item = CsvItemRecord::new(row_number);

    item.name = record.get(0).unwrap_or("").trim().to_string();
    item.category_name = record.get(1).unwrap_or("").trim().to_string();

    let raw_quantity = record.get(2).unwrap_or("");
    match raw_quantity.trim().parse::<Decimal>() {
        Ok(quantity) => item.quantity = Some(quantity),
        Err(_) => item.add_error(format!("Invalid quantity: {}", raw_quantity)),
    }

    item.unit = record.get(3).unwrap_or("").trim().to_string();

    if let Some(raw_date) = record.get(4) {
        if !raw_date.trim().is_empty() {
            match parse_date(raw_date.trim()) {
                Some(date) => item.expiry_date = Some(date),
                None => item.add_error(format!("Invalid expiry date: {}", raw_date)),
            }
        }
    }

    if let Some(raw_description) = record.get(5) {
        if !raw_description.trim().is_empty() {
            item.description = Some(raw_description.trim().to_string());
        }
    }

    if item.name.is_empty() {
        item.add_error("Name is required");
    }
    if item.category_name.is_empty() {
        item.add_error("Category is required");
    }
    if item.quantity.map_or(true, |q| q <= Decimal::ZERO) {
        item.add_error("Valid quantity is required");
    }
    if item.unit.is_empty() {
        item.add_error("Unit is required");
    }

    item
}

/// Parse an uploaded CSV into its ordered row records.
///
/// Row numbers are 1-based positions in the decoded file, a skipped header
/// included. Rows with fewer than [`MIN_CELLS`] cells are skipped without
/// being emitted or counted.
pub fn parse_rows(data: &[u8]) -> IngestResult<Vec<CsvItemRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let records: Vec<StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .map_err(|e| IngestError::UnparsableFile(e.to_string()))?;

    if records.is_empty() {
        return Err(IngestError::UnparsableFile("CSV file is empty".to_string()));
    }

    let start = if is_header_row(&records[0]) { 1 } else { 0 };

    let mut items = Vec::new();
    for (index, record) in records.iter().enumerate().skip(start) {
        if record.len() >= MIN_CELLS {
            items.push(parse_record(record, index + 1));
        } else {
            tracing::debug!(
                row = index + 1,
                cells = record.len(),
                "Skipping CSV row with too few cells"
            );
        }
    }

    Ok(items)
}
