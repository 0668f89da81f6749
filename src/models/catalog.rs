//! Inventory catalog types served by `GET /api/inventory`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Food category for inventory items.
///
/// The set is fixed by the backend contract; an item outside it fails to
/// decode, which the catalog loader treats as a load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Fresh produce
    Fresh,
    /// Frozen goods
    Frozen,
    /// Dairy products
    Dairy,
    /// Canned goods
    Canned,
    /// Dry goods (rice, pasta, cereal)
    Dry,
}

impl Category {
    /// All categories, in conventional display order.
    pub const ALL: [Self; 5] = [Self::Fresh, Self::Frozen, Self::Dairy, Self::Canned, Self::Dry];

    /// Returns the backend string for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "Fresh",
            Self::Frozen => "Frozen",
            Self::Dairy => "Dairy",
            Self::Canned => "Canned",
            Self::Dry => "Dry",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single available inventory record.
///
/// Immutable once loaded; the catalog is replaced wholesale on reload.
/// The backend serves additional batch bookkeeping fields (source,
/// expiration, storage location) which the portal does not use and serde
/// ignores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Server-issued identifier
    pub id: String,
    /// Display name (e.g., "Apples")
    pub item_name: String,
    /// Food category
    pub category: Category,
    /// Quantity currently available. Advisory for the client; the backend
    /// owns enforcement.
    pub quantity: i64,
    /// Unit label (e.g., "lbs", "cans")
    pub unit: String,
}
