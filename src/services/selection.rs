//! In-memory selection state for the request wizard.

use crate::models::{CatalogItem, RequestItem};

/// A chosen catalog item plus the quantity being requested.
///
/// Holds a snapshot of the catalog fields it needs so the selection
/// survives a catalog reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedItem {
    /// Catalog item identifier
    pub item_id: String,
    /// Item display name
    pub name: String,
    /// Available quantity at selection time (advisory only)
    pub available: i64,
    /// Unit label
    pub unit: String,
    /// Requested quantity, always at least 1
    pub requested_quantity: u32,
}

/// Ordered set of selected items, keyed by catalog id.
///
/// Insertion order is preserved and becomes the item order of the request
/// payload at submission time. No duplicate ids are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    items: Vec<SelectedItem>,
}

impl SelectionStore {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the item with a default quantity of 1, or removes it if it is
    /// already selected. Two toggles of the same item are a no-op pair.
    pub fn toggle(&mut self, item: &CatalogItem) {
        if let Some(index) = self.items.iter().position(|s| s.item_id == item.id) {
            self.items.remove(index);
        } else {
            self.items.push(SelectedItem {
                item_id: item.id.clone(),
                name: item.item_name.clone(),
                available: item.quantity,
                unit: item.unit.clone(),
                requested_quantity: 1,
            });
        }
    }

    /// Returns true if the item is currently selected.
    #[must_use]
    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|s| s.item_id == item_id)
    }

    /// Looks up a selected item by id.
    #[must_use]
    pub fn get(&self, item_id: &str) -> Option<&SelectedItem> {
        self.items.iter().find(|s| s.item_id == item_id)
    }

    /// Sets the requested quantity from raw user input.
    ///
    /// Parse failures and values below 1 coerce to 1. The available
    /// quantity is advisory and never enforced here; the backend owns any
    /// upper-bound check.
    pub fn set_quantity(&mut self, item_id: &str, raw: &str) {
        if let Some(selected) = self.items.iter_mut().find(|s| s.item_id == item_id) {
            selected.requested_quantity = raw.trim().parse::<u32>().unwrap_or(1).max(1);
        }
    }

    /// Number of selected items. Gates wizard advancement.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every selected item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Selected items in selection order.
    #[must_use]
    pub fn items(&self) -> &[SelectedItem] {
        &self.items
    }

    /// Builds the `{name, quantity}` pairs for a request payload, in
    /// selection order.
    #[must_use]
    pub fn request_items(&self) -> Vec<RequestItem> {
        self.items
            .iter()
            .map(|s| RequestItem {
                name: s.name.clone(),
                quantity: s.requested_quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn apples() -> CatalogItem {
        CatalogItem {
            id: "1".to_string(),
            item_name: "Apples".to_string(),
            category: Category::Fresh,
            quantity: 10,
            unit: "lbs".to_string(),
        }
    }

    fn rice() -> CatalogItem {
        CatalogItem {
            id: "2".to_string(),
            item_name: "Rice".to_string(),
            category: Category::Dry,
            quantity: 25,
            unit: "bags".to_string(),
        }
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let mut store = SelectionStore::new();
        let before = store.clone();

        store.toggle(&apples());
        assert_eq!(store.count(), 1);

        store.toggle(&apples());
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut store = SelectionStore::new();
        store.toggle(&apples());
        store.toggle(&rice());
        store.toggle(&apples());
        store.toggle(&apples());

        assert_eq!(store.count(), 2);
        let ids: Vec<&str> = store.items().iter().map(|s| s.item_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_default_quantity_is_one() {
        let mut store = SelectionStore::new();
        store.toggle(&apples());
        assert_eq!(store.get("1").unwrap().requested_quantity, 1);
    }

    #[test]
    fn test_set_quantity_clamps_invalid_input_to_one() {
        let mut store = SelectionStore::new();
        store.toggle(&apples());

        for raw in ["0", "-3", "abc", "", "1.5"] {
            store.set_quantity("1", raw);
            assert_eq!(store.get("1").unwrap().requested_quantity, 1, "input {raw:?}");
        }
    }

    #[test]
    fn test_set_quantity_is_uncapped_by_available_stock() {
        let mut store = SelectionStore::new();
        store.toggle(&apples());

        store.set_quantity("1", "500");
        assert_eq!(store.get("1").unwrap().requested_quantity, 500);
    }

    #[test]
    fn test_set_quantity_ignores_unselected_items() {
        let mut store = SelectionStore::new();
        store.set_quantity("1", "3");
        assert!(store.is_empty());
    }

    #[test]
    fn test_request_items_in_selection_order() {
        let mut store = SelectionStore::new();
        store.toggle(&rice());
        store.toggle(&apples());
        store.set_quantity("1", "3");

        let items = store.request_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Rice");
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[1].name, "Apples");
        assert_eq!(items[1].quantity, 3);
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut store = SelectionStore::new();
        store.toggle(&apples());
        store.toggle(&rice());
        store.clear();
        assert_eq!(store.count(), 0);
    }
}
