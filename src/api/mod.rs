//! REST client for the food-bank backend.
//!
//! The backend is an external collaborator; this module covers the four
//! operations the portal and the staff CLI consume:
//!
//! | Operation           | Method | Path                  |
//! |---------------------|--------|-----------------------|
//! | list inventory      | GET    | `/api/inventory`      |
//! | create food request | POST   | `/api/requests`       |
//! | list food requests  | GET    | `/api/requests`       |
//! | update food request | PUT    | `/api/requests/{id}`  |

pub mod background;

pub use background::{
    CatalogFetchState, CatalogMessage, FetchStatus, SubmitMessage, SubmitState, SubmitStatus,
};

use anyhow::{Context, Result};
use std::time::Duration;

use crate::models::{CatalogItem, FoodRequest, RequestPayload, RequestStatus};

/// Blocking HTTP client for the backend REST surface.
///
/// Cheap to clone; background tasks take a clone onto their worker thread.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Per-request timeout. A hung backend surfaces as an ordinary request
    /// failure instead of wedging the caller forever.
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a client for the given base URL (scheme + host + port).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches the available inventory (`GET /api/inventory`).
    pub fn list_inventory(&self) -> Result<Vec<CatalogItem>> {
        self.http
            .get(self.url("/api/inventory"))
            .send()
            .context("Failed to reach the inventory endpoint")?
            .error_for_status()
            .context("Inventory request was rejected")?
            .json()
            .context("Failed to decode the inventory response")
    }

    /// Submits a food request (`POST /api/requests`).
    ///
    /// The returned record carries the server-issued confirmation number.
    pub fn create_request(&self, payload: &RequestPayload) -> Result<FoodRequest> {
        self.http
            .post(self.url("/api/requests"))
            .json(payload)
            .send()
            .context("Failed to reach the request endpoint")?
            .error_for_status()
            .context("Request submission was rejected")?
            .json()
            .context("Failed to decode the submission response")
    }

    /// Lists submitted food requests (`GET /api/requests`).
    pub fn list_requests(&self) -> Result<Vec<FoodRequest>> {
        self.http
            .get(self.url("/api/requests"))
            .send()
            .context("Failed to reach the request endpoint")?
            .error_for_status()
            .context("Request listing was rejected")?
            .json()
            .context("Failed to decode the request listing")
    }

    /// Updates the status of a food request (`PUT /api/requests/{id}`).
    pub fn update_request_status(&self, id: &str, status: RequestStatus) -> Result<FoodRequest> {
        self.http
            .put(self.url(&format!("/api/requests/{id}")))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .context("Failed to reach the request endpoint")?
            .error_for_status()
            .with_context(|| format!("Status update for request '{id}' was rejected"))?
            .json()
            .context("Failed to decode the updated request")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/inventory"), "http://localhost:8000/api/inventory");
    }
}
