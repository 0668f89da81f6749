//! Catalog grouping helpers.

use crate::models::{CatalogItem, Category};

/// Groups catalog items by category.
///
/// Categories appear in first-appearance order and items keep server order
/// within each group, so the browse screen mirrors what the backend served.
#[must_use]
pub fn group_by_category(items: &[CatalogItem]) -> Vec<(Category, Vec<CatalogItem>)> {
    let mut groups: Vec<(Category, Vec<CatalogItem>)> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, bucket)) => bucket.push(item.clone()),
            None => groups.push((item.category, vec![item.clone()])),
        }
    }

    groups
}
