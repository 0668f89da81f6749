//! Data types exchanged with the food-bank backend.

pub mod catalog;
pub mod request;

pub use catalog::{CatalogItem, Category};
pub use request::{FoodRequest, RequestItem, RequestPayload, RequestStatus, ScheduleInfo};
