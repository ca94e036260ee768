use async_trait::async_trait;
use csv::{Reader, StringRecord};
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::app::ports::RowSource;
use crate::common::constants::columns;
use crate::common::error::{ImportError, Result};
use crate::pipeline::RawRow;

/// Streaming CSV implementation of RowSource.
///
/// The header is validated once at open time so a malformed export fails fast
/// instead of producing silently-empty fields for the whole run.
pub struct CsvRowSource {
    reader: Reader<File>,
    headers: StringRecord,
    record: StringRecord,
}

impl CsvRowSource {
    pub fn open<P: AsRef<Path>>(path: P, require_status: bool) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path.as_ref())?;
        let headers = reader.headers()?.clone();

        let mut required = vec![
            columns::TITLE,
            columns::HANDLE,
            columns::DESCRIPTION,
            columns::TYPE,
            columns::TAGS,
            columns::SKU,
            columns::PRICE,
            columns::COMPARE_AT_PRICE,
            columns::IMAGE,
        ];
        if require_status {
            required.push(columns::STATUS);
        }
        for column in required {
            if !headers.iter().any(|header| header == column) {
                return Err(ImportError::MissingColumn(column.to_string()));
            }
        }

        debug!(
            "opened export {} with {} columns",
            path.as_ref().display(),
            headers.len()
        );
        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

#[async_trait]
impl RowSource for CsvRowSource {
    async fn next_row(&mut self) -> Result<Option<RawRow>> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }
        let mut row = RawRow::with_capacity(self.headers.len());
        for (index, header) in self.headers.iter().enumerate() {
            // Short records pad with empty fields; extra fields are dropped.
            let value = self.record.get(index).unwrap_or("");
            row.insert(header.to_string(), value.to_string());
        }
        Ok(Some(row))
    }
}
