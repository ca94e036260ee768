use super::RawRow;
use crate::common::constants::columns;
use crate::common::error::{ImportError, Result};

/// Typed view of one export row.
///
/// Scalars are copied verbatim, even when blank: blank cells are real values
/// in the export and the grouping logic decides what they mean.
#[derive(Debug, Clone)]
pub struct NormalizedRow {
    pub title: String,
    pub handle: String,
    pub description: String,
    pub category_path: String,
    pub product_type: String,
    pub status: String,
    pub tags: Vec<String>,
    pub sku: String,
    pub price: f64,
    pub compare_at_price: f64,
    pub image: String,
}

/// Extract and coerce the typed fields from a raw row.
///
/// `row_number` is the 1-based data row index, used only for diagnostics.
pub fn normalize_row(row: &RawRow, row_number: u64) -> Result<NormalizedRow> {
    Ok(NormalizedRow {
        title: field(row, columns::TITLE),
        handle: field(row, columns::HANDLE),
        description: field(row, columns::DESCRIPTION),
        category_path: category_path(row),
        product_type: field(row, columns::TYPE),
        status: field(row, columns::STATUS),
        tags: split_tags(&field(row, columns::TAGS)),
        sku: field(row, columns::SKU),
        price: parse_required_number(row, columns::PRICE, row_number)?,
        compare_at_price: parse_optional_number(row, columns::COMPARE_AT_PRICE, row_number)?,
        image: field(row, columns::IMAGE),
    })
}

fn field(row: &RawRow, column: &str) -> String {
    row.get(column).cloned().unwrap_or_default()
}

/// Newer exports name the column "Product Category", older ones plain "Category".
fn category_path(row: &RawRow) -> String {
    row.get(columns::PRODUCT_CATEGORY)
        .filter(|path| !path.trim().is_empty())
        .or_else(|| row.get(columns::CATEGORY))
        .cloned()
        .unwrap_or_default()
}

/// Comma-split and trim; a blank column yields an empty list, not `[""]`.
pub fn split_tags(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// The primary price has no silent fallback: empty and non-numeric are both
/// fatal, with distinct diagnostics.
fn parse_required_number(row: &RawRow, column: &str, row_number: u64) -> Result<f64> {
    let raw = field(row, column);
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ImportError::MissingValue {
            row: row_number,
            column: column.to_string(),
        });
    }
    trimmed.parse::<f64>().map_err(|_| ImportError::InvalidNumber {
        row: row_number,
        column: column.to_string(),
        value: raw.clone(),
    })
}

/// Compare-at price is the one field where the export's "no value" means zero.
fn parse_optional_number(row: &RawRow, column: &str, row_number: u64) -> Result<f64> {
    let raw = field(row, column);
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed.parse::<f64>().map_err(|_| ImportError::InvalidNumber {
        row: row_number,
        column: column.to_string(),
        value: raw.clone(),
    })
}
