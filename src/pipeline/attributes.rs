use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use super::RawRow;

/// Matches metafield headers like `Brand (product.metafields.custom.brand)`.
static METAFIELD_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<label>.*?)\s*\(product\.metafields\.(?P<key>[^)]+)\)\s*$")
        .expect("metafield header pattern is valid")
});

/// How metafield columns are keyed in variant attribute maps.
///
/// The export names each metafield column twice, as a display label and an
/// internal key; which one becomes the attribute key differs between catalog
/// consumers, so it stays a configuration choice rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetafieldKeyStrategy {
    /// Key by the human-readable label before the parenthesis, lower-cased.
    Label,
    /// Key by the suffix after `product.metafields.`, lower-cased.
    InternalKey,
}

/// Carry-forward attribute state threaded through the row fold.
///
/// The export only repeats option names and metafield values on the row that
/// also carries the product's non-variant fields; every other variant row of
/// the same product inherits them. Both maps start empty at stream start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeContext {
    pub option_names: BTreeMap<String, String>,
    pub metafields: BTreeMap<String, String>,
}

impl AttributeContext {
    /// Advance the carry-forward state by one row.
    ///
    /// A row that defines any explicit option pair replaces the whole option
    /// set (names do not merge across redefinitions); a row with none inherits
    /// the previous set unchanged. Metafields follow the same replace-or-inherit
    /// rule independently. Returns the next context plus the variant's merged
    /// attribute map, metafields winning key collisions.
    pub fn advance(
        &self,
        row: &RawRow,
        strategy: MetafieldKeyStrategy,
    ) -> (AttributeContext, BTreeMap<String, String>) {
        let explicit_options = explicit_option_pairs(row);
        let option_names = if explicit_options.is_empty() {
            self.option_names.clone()
        } else {
            explicit_options
        };

        let explicit_metafields = explicit_metafield_pairs(row, strategy);
        let metafields = if explicit_metafields.is_empty() {
            self.metafields.clone()
        } else {
            explicit_metafields
        };

        let mut attributes = option_names.clone();
        for (key, value) in &metafields {
            attributes.insert(key.clone(), value.clone());
        }

        (
            AttributeContext {
                option_names,
                metafields,
            },
            attributes,
        )
    }
}

/// Option slots 1..=3; a slot counts only when both name and value are non-empty.
fn explicit_option_pairs(row: &RawRow) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::new();
    for slot in 1..=3 {
        let name = row
            .get(&format!("Option{slot} Name"))
            .map(|s| s.trim())
            .unwrap_or_default();
        let value = row
            .get(&format!("Option{slot} Value"))
            .map(|s| s.trim())
            .unwrap_or_default();
        if !name.is_empty() && !value.is_empty() {
            pairs.insert(name.to_lowercase(), value.to_string());
        }
    }
    pairs
}

fn explicit_metafield_pairs(
    row: &RawRow,
    strategy: MetafieldKeyStrategy,
) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::new();
    for (header, value) in row {
        if value.trim().is_empty() {
            continue;
        }
        if let Some(captures) = METAFIELD_HEADER.captures(header) {
            let key = match strategy {
                MetafieldKeyStrategy::Label => captures["label"].to_lowercase(),
                MetafieldKeyStrategy::InternalKey => captures["key"].to_lowercase(),
            };
            if !key.is_empty() {
                pairs.insert(key, value.trim().to_string());
            }
        }
    }
    pairs
}
