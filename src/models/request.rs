//! Request payloads and records exchanged with `/api/requests`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheduling details collected in step two of the wizard.
///
/// Fields hold raw user input as entered; [`ScheduleInfo::is_complete`]
/// gates submission. An incomplete form is never an error, it just blocks
/// the submit action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleInfo {
    /// Household size as typed (validated as a positive integer)
    pub household_size: String,
    /// Pickup location identifier (one of the fixed set)
    pub location_id: String,
    /// Pickup date as typed, YYYY-MM-DD
    pub pickup_date: String,
    /// Pickup time slot (one of the fixed set)
    pub pickup_time: String,
}

impl ScheduleInfo {
    /// Parses the household size field as a positive integer.
    #[must_use]
    pub fn household_size_value(&self) -> Option<u32> {
        self.household_size
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
    }

    /// Parses the pickup date field as a calendar date.
    #[must_use]
    pub fn pickup_date_value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.pickup_date.trim(), "%Y-%m-%d").ok()
    }

    /// Returns true only when every required field is present and well formed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.household_size_value().is_some()
            && !self.location_id.is_empty()
            && self.pickup_date_value().is_some()
            && !self.pickup_time.is_empty()
    }

    /// Resets all fields to empty defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One `{name, quantity}` pair in a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    /// Item display name
    pub name: String,
    /// Requested quantity (at least 1)
    pub quantity: u32,
}

/// Body of `POST /api/requests`: flattened schedule fields plus the item
/// list in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    /// Pickup location identifier
    pub location_id: String,
    /// Pickup date, YYYY-MM-DD
    pub pickup_date: String,
    /// Pickup time slot
    pub pickup_time: String,
    /// Household size
    pub household_size: u32,
    /// Requested items in selection order
    pub items: Vec<RequestItem>,
}

/// Lifecycle status of a submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting staff action
    Pending,
    /// Fulfilled by staff
    Completed,
    /// Cancelled by staff
    Cancelled,
}

impl RequestStatus {
    /// Returns the backend string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => anyhow::bail!(
                "Unknown request status '{other}' (expected pending, completed, or cancelled)"
            ),
        }
    }
}

/// A stored food request as returned by the backend.
///
/// The confirmation number is an opaque server-issued identifier; the
/// client displays it and never validates its shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRequest {
    /// Server-issued record identifier
    pub id: String,
    /// Opaque confirmation identifier shown to the client
    pub confirmation_number: String,
    /// Pickup location identifier
    pub location_id: String,
    /// Requested items
    pub items: Vec<RequestItem>,
    /// Pickup date, YYYY-MM-DD
    pub pickup_date: String,
    /// Pickup time slot
    pub pickup_time: String,
    /// Household size
    pub household_size: u32,
    /// Current lifecycle status
    pub status: RequestStatus,
    /// Server-side creation timestamp
    pub created_at: DateTime<Utc>,
}
