use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One record of the category taxonomy reference data.
///
/// Loaded wholesale before a run and never mutated; `parent_category_id` and
/// `attributes` travel with the record but the importer only matches on `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_category_id: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub description: String,
    pub category_id: String,
    #[serde(rename = "type")]
    pub product_type: String,
    /// Older exports have no Status column; `None` is omitted from the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub tags: Vec<String>,
    pub variants: Vec<ProductVariant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub sku: String,
    pub price: f64,
    pub compare_at_price: f64,
    pub image: String,
    /// Lower-cased attribute names to values, option- and metafield-derived.
    /// Ordered map so repeated runs serialize identically.
    pub attributes: BTreeMap<String, String>,
}
