//! Main library crate for the catalog importer
//!
//! Converts a flat, per-variant product export (one CSV row per variant,
//! parent fields repeated or blank-inherited across consecutive rows) into
//! nested product/variant entities with carried-forward attribute maps.

pub mod app;
pub mod common;
pub mod domain;
pub mod infra;
pub mod observability;
pub mod pipeline;

// Re-export commonly used types
pub use domain::{Category, Product, ProductVariant};
