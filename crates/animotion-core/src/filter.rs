//! Category and name filtering over the catalog.

use crate::catalog::{AnimationDefinition, Catalog, Category};

/// Return the definitions visible for a category and search text.
///
/// The category constraint is skipped for `Category::All`. The search text is
/// matched case-insensitively as a substring of the display name; an empty
/// search matches everything. Catalog order is preserved and an empty result
/// is a normal outcome.
pub fn filter(
    catalog: &Catalog,
    category: Category,
    search_text: &str,
) -> Vec<&'static AnimationDefinition> {
    let needle = search_text.to_lowercase();
    catalog
        .list()
        .iter()
        .filter(|a| category.admits(a.category) && a.name.to_lowercase().contains(&needle))
        .collect()
}
