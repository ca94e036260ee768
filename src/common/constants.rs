/// Category id assigned when taxonomy resolution fails for a product.
pub const UNCATEGORIZED_CATEGORY_ID: &str = "gid://shopify/TaxonomyCategory/na";

/// Column names as they appear in the export header, case-sensitive.
pub mod columns {
    pub const TITLE: &str = "Title";
    pub const HANDLE: &str = "Handle";
    pub const DESCRIPTION: &str = "Description";
    pub const PRODUCT_CATEGORY: &str = "Product Category";
    pub const CATEGORY: &str = "Category";
    pub const TYPE: &str = "Type";
    pub const TAGS: &str = "Tags";
    pub const SKU: &str = "Variant SKU";
    pub const PRICE: &str = "Price";
    pub const COMPARE_AT_PRICE: &str = "Compare At Price";
    pub const IMAGE: &str = "Image";
    pub const STATUS: &str = "Status";
}
