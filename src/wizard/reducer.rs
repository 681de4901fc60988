// ABOUTME: Reducer-style state machine for the onboarding wizard
// Each action produces a new WizardState; submission is requested through an effect

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::form::{PhotoRef, WizardFormState, MIN_PHOTOS};
use super::schedule::WeeklySchedule;
use super::types::{DocumentSlot, FieldUpdate, Service, Step};

/// Acknowledgement returned by the backend for an accepted application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
}

/// Typed intents emitted by the step views and widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    Advance,
    Retreat,
    SetField(FieldUpdate),
    ToggleService(Service),
    SelectActiveService(usize),
    /// Replace the schedule of the active availability tab
    UpdateAvailability(WeeklySchedule),
    AddPhoto(PhotoRef),
    RemovePhoto(usize),
    UploadDocument(DocumentSlot, String),
    /// Jump from review back to the first step
    EditFromReview,
    Submit,
    SubmissionSucceeded(SubmissionReceipt),
    SubmissionFailed(String),
}

/// Side effects the caller must carry out after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect {
    SubmitApplication(Box<WizardFormState>),
}

/// Result of reducing one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: WizardState,
    pub effect: Option<WizardEffect>,
}

impl Transition {
    fn to(state: WizardState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Complete wizard state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    pub form: WizardFormState,
    /// Index into `form.services` of the tab shown on the availability step
    pub active_service: usize,
    /// A submission is in flight
    pub submitting: bool,
    pub receipt: Option<SubmissionReceipt>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: Step::BusinessBasics,
            form: WizardFormState::new(),
            active_service: 0,
            submitting: false,
            receipt: None,
        }
    }

    /// Can we leave the current step forward?
    pub fn can_advance(&self) -> bool {
        step_gate(self.step, &self.form) && self.step.next().is_some()
    }

    /// Can the current step go back?
    pub fn can_retreat(&self) -> bool {
        self.step.previous().is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.step == Step::Review && !self.submitting
    }

    /// Service whose schedule is being edited on the availability step
    pub fn active_service(&self) -> Option<Service> {
        self.form.services.get(self.active_service).copied()
    }

    /// Apply an action in place, returning any effect it requested
    pub fn dispatch(&mut self, action: WizardAction) -> Option<WizardEffect> {
        let Transition { state, effect } = reduce(self, action);
        *self = state;
        effect
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate condition for leaving `step` forward
pub fn step_gate(step: Step, form: &WizardFormState) -> bool {
    match step {
        Step::BusinessBasics => form.basics_complete(),
        Step::Services => !form.services.is_empty(),
        // Availability always has defaults
        Step::Availability => true,
        Step::Photos => form.photos.len() >= MIN_PHOTOS,
        Step::Documents => form.documents.required_filled(),
        Step::Preferences => true,
        // Review is left through submission, not advance
        Step::Review | Step::Complete => false,
    }
}

/// Compute the next wizard state. `state` is never modified.
pub fn reduce(state: &WizardState, action: WizardAction) -> Transition {
    let mut next = state.clone();

    match action {
        WizardAction::Advance => {
            if !state.can_advance() {
                debug!("Advance blocked on step {}", state.step.number());
                return Transition::to(next);
            }
            if let Some(step) = state.step.next() {
                info!("Wizard advanced to step {}", step.number());
                next.step = step;
            }
        }
        WizardAction::Retreat => {
            if let Some(step) = state.step.previous() {
                debug!("Wizard moved back to step {}", step.number());
                next.step = step;
            }
        }
        WizardAction::SetField(update) => {
            next.form.apply(update);
        }
        WizardAction::ToggleService(service) => {
            next.form.toggle_service(service);
            let count = next.form.services.len();
            if next.active_service >= count {
                next.active_service = count.saturating_sub(1);
            }
        }
        WizardAction::SelectActiveService(index) => {
            if index < next.form.services.len() {
                next.active_service = index;
            }
        }
        WizardAction::UpdateAvailability(schedule) => {
            if let Some(service) = state.active_service() {
                next.form.availability.insert(service, schedule);
            }
        }
        WizardAction::AddPhoto(photo) => {
            next.form.photos.push(photo);
        }
        WizardAction::RemovePhoto(index) => {
            if index < next.form.photos.len() {
                next.form.photos.remove(index);
            }
        }
        WizardAction::UploadDocument(slot, file_name) => {
            next.form.documents.set(slot, file_name);
        }
        WizardAction::EditFromReview => {
            if state.step == Step::Review {
                next.step = Step::BusinessBasics;
            }
        }
        WizardAction::Submit => {
            if !state.can_submit() {
                debug!(
                    "Submit ignored (step {}, submitting: {})",
                    state.step.number(),
                    state.submitting
                );
                return Transition::to(next);
            }
            info!("Submitting onboarding application");
            next.submitting = true;
            let effect = WizardEffect::SubmitApplication(Box::new(next.form.clone()));
            return Transition {
                state: next,
                effect: Some(effect),
            };
        }
        WizardAction::SubmissionSucceeded(receipt) => {
            info!("Application accepted: {}", receipt.reference);
            next.submitting = false;
            next.step = Step::Complete;
            next.receipt = Some(receipt);
        }
        WizardAction::SubmissionFailed(reason) => {
            info!("Application submission failed: {}", reason);
            next.submitting = false;
        }
    }

    Transition::to(next)
}
