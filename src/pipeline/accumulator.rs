use tracing::debug;

use super::attributes::AttributeContext;
use super::category::resolve_category_id;
use super::normalize::{normalize_row, NormalizedRow};
use super::{IdGenerator, ImportOptions, RawRow};
use crate::common::constants::UNCATEGORIZED_CATEGORY_ID;
use crate::common::error::Result;
use crate::domain::{Category, Product, ProductVariant};

/// Stateful fold that turns the ungrouped row stream into nested products.
///
/// Grouping is purely on immediately-preceding handle equality: a handle that
/// reappears after an intervening different handle opens a second, distinct
/// product rather than merging into the earlier one.
pub struct ProductAccumulator<'a> {
    taxonomy: &'a [Category],
    ids: &'a dyn IdGenerator,
    options: ImportOptions,
    context: AttributeContext,
    current: Option<Product>,
    completed: Vec<Product>,
    row_number: u64,
}

impl<'a> ProductAccumulator<'a> {
    pub fn new(
        taxonomy: &'a [Category],
        ids: &'a dyn IdGenerator,
        options: ImportOptions,
    ) -> Self {
        Self {
            taxonomy,
            ids,
            options,
            context: AttributeContext::default(),
            current: None,
            completed: Vec::new(),
            row_number: 0,
        }
    }

    /// Consume one row: open a product on a handle boundary, then append the
    /// row's variant to the open product. Every row produces a variant.
    pub fn push_row(&mut self, row: &RawRow) -> Result<()> {
        self.row_number += 1;
        let normalized = normalize_row(row, self.row_number)?;

        let (next_context, attributes) = self.context.advance(row, self.options.metafield_keys);
        self.context = next_context;

        let boundary = self
            .current
            .as_ref()
            .map_or(true, |product| product.handle != normalized.handle);
        if boundary {
            if let Some(done) = self.current.take() {
                debug!(handle = %done.handle, variants = done.variants.len(), "closing product");
                self.completed.push(done);
            }
            self.current = Some(self.open_product(&normalized));
        }

        let variant = ProductVariant {
            id: self.ids.generate(),
            sku: normalized.sku,
            price: normalized.price,
            compare_at_price: normalized.compare_at_price,
            image: normalized.image,
            attributes,
        };
        if let Some(product) = self.current.as_mut() {
            product.variants.push(variant);
        }
        Ok(())
    }

    /// Category resolution happens per row but only takes effect here, on the
    /// row that opens the product.
    fn open_product(&self, row: &NormalizedRow) -> Product {
        let category_id = resolve_category_id(&row.category_path, self.taxonomy)
            .unwrap_or(UNCATEGORIZED_CATEGORY_ID)
            .to_string();
        Product {
            id: self.ids.generate(),
            title: row.title.clone(),
            handle: row.handle.clone(),
            description: row.description.clone(),
            category_id,
            product_type: row.product_type.clone(),
            status: self.options.include_status.then(|| row.status.clone()),
            tags: row.tags.clone(),
            variants: Vec::new(),
        }
    }

    /// Close the open product and hand back the completed list, in
    /// first-appearance order of each product run.
    pub fn finish(mut self) -> Vec<Product> {
        if let Some(done) = self.current.take() {
            self.completed.push(done);
        }
        self.completed
    }
}
