// Row-stream processing: typed extraction, attribute carry-forward, grouping

pub mod accumulator;
pub mod attributes;
pub mod category;
pub mod normalize;

use std::collections::HashMap;

pub use accumulator::ProductAccumulator;
pub use attributes::{AttributeContext, MetafieldKeyStrategy};

/// One parsed export row, keyed by header name.
pub type RawRow = HashMap<String, String>;

/// Source of collision-free identifier strings for new entities.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Knobs that unify the two export dialects behind one pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ImportOptions {
    /// How metafield columns are keyed in variant attribute maps.
    pub metafield_keys: MetafieldKeyStrategy,
    /// Whether the export carries a Status column to propagate.
    pub include_status: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            metafield_keys: MetafieldKeyStrategy::Label,
            include_status: true,
        }
    }
}
