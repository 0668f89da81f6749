//! Background network tasks with progress tracking.
//!
//! Network calls run on spawned threads and report back over message
//! channels; the render loop polls with `try_recv` and never blocks on the
//! backend.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use anyhow::Result;

use crate::api::ApiClient;
use crate::models::{CatalogItem, FoodRequest, RequestPayload};

/// Catalog fetch status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch started yet
    Idle,
    /// Fetch in flight
    Loading,
    /// Catalog received
    Loaded,
    /// Fetch failed; the catalog stays empty
    Failed,
}

/// Message sent from the catalog fetch thread.
#[derive(Debug)]
pub enum CatalogMessage {
    /// Inventory received
    Loaded(Vec<CatalogItem>),
    /// Fetch failed with a display-ready error
    Failed(String),
}

/// State for the background inventory fetch.
#[derive(Debug)]
pub struct CatalogFetchState {
    /// Current fetch status
    pub status: FetchStatus,
    receiver: Option<Receiver<CatalogMessage>>,
}

impl CatalogFetchState {
    /// Creates a new idle fetch state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: FetchStatus::Idle,
            receiver: None,
        }
    }

    /// Checks if a fetch is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Starts a fetch on a background thread.
    ///
    /// A fetch already in flight is left alone; the call is a no-op.
    pub fn start(&mut self, client: ApiClient) {
        if self.is_loading() {
            return;
        }

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.status = FetchStatus::Loading;

        thread::spawn(move || {
            let message = match client.list_inventory() {
                Ok(items) => CatalogMessage::Loaded(items),
                Err(e) => CatalogMessage::Failed(format!("{e:#}")),
            };
            // Receiver may be gone if the app quit mid-fetch
            let _ = sender.send(message);
        });
    }

    /// Polls the channel for a completed fetch.
    ///
    /// Returns the message if one arrived; the caller applies it to the
    /// application state.
    pub fn poll(&mut self) -> Option<CatalogMessage> {
        let receiver = self.receiver.as_ref()?;

        match receiver.try_recv() {
            Ok(message) => {
                self.status = match &message {
                    CatalogMessage::Loaded(_) => FetchStatus::Loaded,
                    CatalogMessage::Failed(_) => FetchStatus::Failed,
                };
                self.receiver = None;
                Some(message)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.status = FetchStatus::Failed;
                self.receiver = None;
                Some(CatalogMessage::Failed(
                    "Catalog fetch thread exited unexpectedly".to_string(),
                ))
            }
        }
    }
}

impl Default for CatalogFetchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Submission status.
///
/// `Submitting` doubles as the in-flight guard: the wizard refuses to start
/// another submission while one is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No submission started
    Idle,
    /// Submission in flight; further submits are blocked
    Submitting,
    /// Last submission succeeded
    Succeeded,
    /// Last submission failed
    Failed,
}

/// Message sent from the submission thread.
#[derive(Debug)]
pub enum SubmitMessage {
    /// Backend accepted the request
    Succeeded(Box<FoodRequest>),
    /// Submission failed with a display-ready error
    Failed(String),
}

/// State for a background request submission.
#[derive(Debug)]
pub struct SubmitState {
    /// Current submission status
    pub status: SubmitStatus,
    receiver: Option<Receiver<SubmitMessage>>,
}

impl SubmitState {
    /// Creates a new idle submission state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: SubmitStatus::Idle,
            receiver: None,
        }
    }

    /// Checks if a submission is currently in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Starts a submission on a background thread.
    pub fn start(&mut self, client: ApiClient, payload: RequestPayload) -> Result<()> {
        if self.is_submitting() {
            anyhow::bail!("Submission already in progress");
        }

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.status = SubmitStatus::Submitting;

        thread::spawn(move || {
            let message = match client.create_request(&payload) {
                Ok(request) => SubmitMessage::Succeeded(Box::new(request)),
                Err(e) => SubmitMessage::Failed(format!("{e:#}")),
            };
            let _ = sender.send(message);
        });

        Ok(())
    }

    /// Polls the channel for a completed submission.
    pub fn poll(&mut self) -> Option<SubmitMessage> {
        let receiver = self.receiver.as_ref()?;

        match receiver.try_recv() {
            Ok(message) => {
                self.status = match &message {
                    SubmitMessage::Succeeded(_) => SubmitStatus::Succeeded,
                    SubmitMessage::Failed(_) => SubmitStatus::Failed,
                };
                self.receiver = None;
                Some(message)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.status = SubmitStatus::Failed;
                self.receiver = None;
                Some(SubmitMessage::Failed(
                    "Submission thread exited unexpectedly".to_string(),
                ))
            }
        }
    }

    /// Resets to idle, ready for the next request.
    pub fn reset(&mut self) {
        self.status = SubmitStatus::Idle;
        self.receiver = None;
    }
}

impl Default for SubmitState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_state_starts_idle() {
        let state = CatalogFetchState::new();
        assert_eq!(state.status, FetchStatus::Idle);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_fetch_poll_without_receiver_is_none() {
        let mut state = CatalogFetchState::new();
        assert!(state.poll().is_none());
    }

    #[test]
    fn test_submit_state_starts_idle() {
        let state = SubmitState::new();
        assert_eq!(state.status, SubmitStatus::Idle);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_submit_guard_rejects_double_start() {
        let mut state = SubmitState::new();
        state.status = SubmitStatus::Submitting;

        let client = ApiClient::new("http://localhost:1").unwrap();
        let payload = RequestPayload {
            location_id: "LOC-001".to_string(),
            pickup_date: "2024-05-01".to_string(),
            pickup_time: "9:00 AM - 10:00 AM".to_string(),
            household_size: 1,
            items: vec![],
        };

        assert!(state.start(client, payload).is_err());
    }

    #[test]
    fn test_submit_reset_returns_to_idle() {
        let mut state = SubmitState::new();
        state.status = SubmitStatus::Succeeded;
        state.reset();
        assert_eq!(state.status, SubmitStatus::Idle);
    }
}
