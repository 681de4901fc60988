// ABOUTME: Shared test fixtures for behavioral tests
//
// Provides:
// - press()/type_text(): feed keys through the real event pipeline
// - MockBackend: mockall double of the onboarding backend
// - filled_form(): an application that passes every step gate

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;

use genie_onboard::app::{AppState, EventHandler, Route};
use genie_onboard::auth::Credentials;
use genie_onboard::backend::{BackendError, OnboardingBackend, Session};
use genie_onboard::config::AppConfig;
use genie_onboard::wizard::{
    DocumentSlot, FieldUpdate, PhotoRef, Service, SubmissionReceipt, WizardAction, WizardFormState,
};

mockall::mock! {
    pub Backend {}

    #[async_trait]
    impl OnboardingBackend for Backend {
        async fn login(&self, credentials: Credentials) -> Result<Session, BackendError>;
        async fn signup(&self, credentials: Credentials) -> Result<Session, BackendError>;
        async fn submit_application(
            &self,
            application: WizardFormState,
        ) -> Result<SubmissionReceipt, BackendError>;
    }
}

pub fn state_on(route: Route) -> AppState {
    AppState::new(AppConfig::default(), route)
}

pub fn press(state: &mut AppState, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(event) = EventHandler::handle_key_event(key, state) {
        EventHandler::process_event(event, state);
    }
}

pub fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

/// Application data that satisfies every gate up to review
pub fn filled_form() -> WizardFormState {
    let mut form = WizardFormState::new();
    for update in [
        FieldUpdate::BusinessName("Gotham Locksmiths".into()),
        FieldUpdate::Email("ops@gotham.test".into()),
        FieldUpdate::Phone("555-0100".into()),
        FieldUpdate::City("New York".into()),
        FieldUpdate::State("NY".into()),
        FieldUpdate::ZipCode("10001".into()),
    ] {
        form.apply(update);
    }
    form.toggle_service(Service::Locksmith);
    for name in ["front.jpg", "van.jpg", "team.png"] {
        form.photos.push(PhotoRef::from_path(Path::new(name)));
    }
    form.documents.set(DocumentSlot::Insurance, "insurance.pdf".into());
    form.documents.set(DocumentSlot::Tax, "ein.pdf".into());
    form
}

/// Wizard screen parked on review with a complete application
pub fn state_on_review() -> AppState {
    let mut state = state_on(Route::Onboarding);
    state.onboarding.wizard.form = filled_form();
    for _ in 0..6 {
        state.dispatch_wizard(WizardAction::Advance);
    }
    state
}
