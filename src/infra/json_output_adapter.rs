use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::ports::ProductSink;
use crate::common::error::Result;
use crate::domain::Product;

/// Writes the product document as pretty-printed JSON.
///
/// The document is serialized in full, written to a sibling temp file, and
/// renamed into place: the target path holds either the complete document or
/// nothing.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ProductSink for JsonFileSink {
    async fn write_products(&self, products: &[Product]) -> Result<()> {
        let body = serde_json::to_vec_pretty(products)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &body)?;
        fs::rename(&tmp, &self.path)?;
        info!("wrote {} products to {}", products.len(), self.path.display());
        Ok(())
    }
}
