use crate::domain::Category;

/// Last `>`-delimited, trimmed component of a taxonomy path, or `None` for a
/// blank path.
pub fn leaf_segment(path: &str) -> Option<&str> {
    let leaf = path.rsplit('>').next()?.trim();
    if leaf.is_empty() {
        None
    } else {
        Some(leaf)
    }
}

/// Resolve a taxonomy path to a category id by exact, case-sensitive match on
/// the leaf name. Linear scan, first match in list order wins — duplicate leaf
/// names are not disambiguated.
pub fn resolve_category_id<'a>(path: &str, categories: &'a [Category]) -> Option<&'a str> {
    let leaf = leaf_segment(path)?;
    categories
        .iter()
        .find(|category| category.name == leaf)
        .map(|category| category.id.as_str())
}
