//! Wizard step machine and guarded transitions.

use crate::models::{FoodRequest, RequestPayload};

use super::AppState;

/// Steps in the request wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Browse inventory and select items
    Browse,
    /// Pick up scheduling details
    Schedule,
    /// Submission succeeded; show confirmation
    Confirmed,
}

impl WizardStep {
    /// One-based position shown in the title bar.
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::Browse => 1,
            Self::Schedule => 2,
            Self::Confirmed => 3,
        }
    }

    /// Human-readable step title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Browse => "Select Items",
            Self::Schedule => "Schedule Pickup",
            Self::Confirmed => "Request Confirmed",
        }
    }
}

impl AppState {
    /// Move from Browse to Schedule. Refused while nothing is selected.
    ///
    /// Returns whether the transition happened.
    pub fn advance_to_schedule(&mut self) -> bool {
        if self.step != WizardStep::Browse || self.selection.is_empty() {
            return false;
        }
        self.step = WizardStep::Schedule;
        self.set_status(format!(
            "{} item(s) selected. Fill in pickup details.",
            self.selection.count()
        ));
        true
    }

    /// Move back from Schedule to Browse. The selection is kept.
    pub fn back_to_browse(&mut self) {
        if self.step == WizardStep::Schedule {
            self.step = WizardStep::Browse;
            self.set_status("Space selects items. Enter continues.");
        }
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submit.is_submitting()
    }

    /// Builds the wire payload from the current selection and schedule.
    ///
    /// Returns None when the schedule is incomplete or nothing is selected.
    #[must_use]
    pub fn build_payload(&self) -> Option<RequestPayload> {
        if self.selection.is_empty() || !self.schedule.info.is_complete() {
            return None;
        }
        Some(RequestPayload {
            items: self.selection.request_items(),
            location_id: self.schedule.info.location_id.clone(),
            pickup_date: self.schedule.info.pickup_date.clone(),
            pickup_time: self.schedule.info.pickup_time.clone(),
            household_size: self.schedule.info.household_size_value()?,
        })
    }

    /// Starts a background submission of the current request.
    ///
    /// A no-op unless the wizard is on the schedule step with a complete
    /// form, a non-empty selection, and no submission already in flight.
    pub fn submit_request(&mut self) {
        if self.step != WizardStep::Schedule {
            return;
        }
        if self.is_submitting() {
            self.set_status("Submitting request...");
            return;
        }
        let Some(payload) = self.build_payload() else {
            self.set_error("Please complete all pickup details first.");
            return;
        };
        match self.submit.start(self.client.clone(), payload) {
            Ok(()) => self.set_status("Submitting request..."),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Records a successful submission and advances to the confirmation step.
    pub(crate) fn complete_submission(&mut self, request: &FoodRequest) {
        self.confirmation = Some(request.confirmation_number.clone());
        self.step = WizardStep::Confirmed;
        self.set_status("Your request has been received.");
    }

    /// Resets the wizard for a new request and reloads the catalog.
    pub fn start_over(&mut self) {
        self.selection.clear();
        self.schedule.reset();
        self.confirmation = None;
        self.submit.reset();
        self.browse.clamp_cursor(0);
        self.step = WizardStep::Browse;
        self.set_status("Loading available items...");
        self.catalog_fetch.start(self.client.clone());
    }
}
