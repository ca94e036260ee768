use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use super::ports::{ProductSink, RowSource};
use crate::common::error::{ImportError, Result};
use crate::domain::Category;
use crate::pipeline::{IdGenerator, ImportOptions, ProductAccumulator};

/// Cooperative cancellation flag, checked between rows. Typically set from a
/// signal handler; once set, the run aborts before its next row and flushes
/// nothing.
#[derive(Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Use case driving the row stream through the accumulator and into the sink.
pub struct ImportUseCase {
    taxonomy: Vec<Category>,
    ids: Box<dyn IdGenerator>,
    options: ImportOptions,
    cancel: CancelFlag,
}

impl ImportUseCase {
    pub fn new(
        taxonomy: Vec<Category>,
        ids: Box<dyn IdGenerator>,
        options: ImportOptions,
    ) -> Self {
        Self {
            taxonomy,
            ids,
            options,
            cancel: CancelFlag::new(),
        }
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Fold the row stream into nested products, then hand the complete list
    /// to the sink. Returns the number of products written.
    pub async fn run(
        &self,
        source: &mut dyn RowSource,
        sink: &dyn ProductSink,
    ) -> Result<usize> {
        let mut accumulator =
            ProductAccumulator::new(&self.taxonomy, self.ids.as_ref(), self.options);
        let mut rows = 0u64;

        while let Some(row) = source.next_row().await? {
            if self.cancel.is_cancelled() {
                warn!("cancellation requested, aborting after {} rows", rows);
                return Err(ImportError::Cancelled);
            }
            accumulator.push_row(&row)?;
            rows += 1;
        }

        let products = accumulator.finish();
        sink.write_products(&products).await?;
        info!("✅ imported {} products from {} rows", products.len(), rows);
        Ok(products.len())
    }
}
