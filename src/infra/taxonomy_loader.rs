use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::domain::Category;

/// Load the category taxonomy from a JSON array of category records.
///
/// An unreadable or unparsable file degrades to an empty list rather than
/// aborting the run; every lookup then falls back to the uncategorized
/// sentinel.
pub fn load_categories<P: AsRef<Path>>(path: P) -> Vec<Category> {
    let path = path.as_ref();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("failed to read taxonomy {}: {}", path.display(), err);
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Category>>(&raw) {
        Ok(categories) => {
            info!(
                "loaded {} taxonomy categories from {}",
                categories.len(),
                path.display()
            );
            categories
        }
        Err(err) => {
            warn!("failed to parse taxonomy {}: {}", path.display(), err);
            Vec::new()
        }
    }
}
