use async_trait::async_trait;

use crate::common::error::Result;
use crate::domain::Product;
use crate::pipeline::RawRow;

/// Pull-based source of parsed export rows. The only suspension point in the
/// run is between rows, awaiting the next one here.
#[async_trait]
pub trait RowSource: Send {
    /// Yield the next row, or `None` once the stream is exhausted.
    async fn next_row(&mut self) -> Result<Option<RawRow>>;
}

/// Destination for the finished product document. Receives the complete list
/// in one call so the boundary can write it atomically.
#[async_trait]
pub trait ProductSink: Send + Sync {
    async fn write_products(&self, products: &[Product]) -> Result<()>;
}
