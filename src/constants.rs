//! Application-wide constants.
//!
//! This module defines constants used throughout the application, including
//! the fixed pickup locations and time slots the backend accepts.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Pantry Portal";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "pantry-portal";

/// Default backend base URL used when neither the config file nor the
/// `--api-url` flag provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// A pickup location offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupLocation {
    /// Backend location identifier (e.g., "LOC-001")
    pub id: &'static str,
    /// Human-readable location name
    pub name: &'static str,
}

/// Fixed set of pickup locations. The identifiers are part of the backend
/// contract and must not be changed independently.
pub const PICKUP_LOCATIONS: [PickupLocation; 3] = [
    PickupLocation {
        id: "LOC-001",
        name: "Main Distribution Center",
    },
    PickupLocation {
        id: "LOC-002",
        name: "Community Center North",
    },
    PickupLocation {
        id: "LOC-003",
        name: "Community Center South",
    },
];

/// Fixed pickup time slots: one-hour ranges between 9:00 AM and 4:00 PM
/// with a lunch gap. The exact strings are part of the backend contract.
pub const PICKUP_TIME_SLOTS: [&str; 6] = [
    "9:00 AM - 10:00 AM",
    "10:00 AM - 11:00 AM",
    "11:00 AM - 12:00 PM",
    "1:00 PM - 2:00 PM",
    "2:00 PM - 3:00 PM",
    "3:00 PM - 4:00 PM",
];

/// Looks up the display name for a location identifier.
#[must_use]
pub fn location_name(id: &str) -> Option<&'static str> {
    PICKUP_LOCATIONS
        .iter()
        .find(|loc| loc.id == id)
        .map(|loc| loc.name)
}
