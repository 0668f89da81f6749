//! Domain services over the wire models.
//!
//! These modules hold the portal's client-side business logic: catalog
//! grouping and the selection state behind the request wizard. They have no
//! UI or network dependencies so they can be tested in isolation.

pub mod catalog;
pub mod selection;

pub use catalog::group_by_category;
pub use selection::{SelectedItem, SelectionStore};
