// ABOUTME: Behavioral tests for submitting the application from the review step
// Covers the simulated backend delay, mocked failures and the completion screen

use crossterm::event::KeyCode;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use super::fixtures::{press, state_on_review, MockBackend};
use genie_onboard::app::state::{AsyncAction, NotificationType};
use genie_onboard::app::{App, Route};
use genie_onboard::backend::{BackendError, SimulatedBackend};
use genie_onboard::components::onboarding::Control;
use genie_onboard::config::{AppConfig, BackendConfig};
use genie_onboard::wizard::{Step, SubmissionReceipt};

fn app_on_review(backend: Arc<dyn genie_onboard::backend::OnboardingBackend>) -> App {
    let mut app = App::new(AppConfig::default(), Route::Onboarding, backend);
    app.state = state_on_review();
    app
}

fn press_submit(app: &mut App) {
    app.state.onboarding.focus_control(Control::Next);
    press(&mut app.state, KeyCode::Enter);
}

#[tokio::test(start_paused = true)]
async fn test_submit_through_simulated_backend_reaches_complete() {
    let backend = Arc::new(SimulatedBackend::new(BackendConfig::default()));
    let mut app = app_on_review(backend);

    press_submit(&mut app);
    assert!(app.state.onboarding.wizard.submitting);
    assert!(matches!(
        app.state.pending_async_action,
        Some(AsyncAction::SubmitApplication(_))
    ));

    app.spawn_pending_action();
    assert!(app.state.pending_async_action.is_none());

    // Still waiting on the backend
    tokio::time::sleep(Duration::from_millis(1000)).await;
    app.tick();
    assert_eq!(app.state.onboarding.step(), Step::Review);

    tokio::time::sleep(Duration::from_millis(2100)).await;
    tokio::task::yield_now().await;
    app.tick();
    assert_eq!(app.state.onboarding.step(), Step::Complete);
    assert!(!app.state.onboarding.wizard.submitting);
    assert!(app.state.onboarding.wizard.receipt.is_some());
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_ignored() {
    let mut backend = MockBackend::new();
    backend.expect_submit_application().times(1).returning(|_| {
        Ok(SubmissionReceipt {
            reference: Uuid::new_v4(),
        })
    });
    let mut app = app_on_review(Arc::new(backend));

    press_submit(&mut app);
    let first = app.state.pending_async_action.take();
    assert!(first.is_some());

    press(&mut app.state, KeyCode::Enter);
    assert!(app.state.pending_async_action.is_none());

    app.state.pending_async_action = first;
    app.process_async_action().await;
    assert_eq!(app.state.onboarding.step(), Step::Complete);
}

#[tokio::test]
async fn test_failed_submission_stays_on_review() {
    let mut backend = MockBackend::new();
    backend
        .expect_submit_application()
        .times(1)
        .returning(|_| Err(BackendError::Unavailable("maintenance".into())));
    let mut app = app_on_review(Arc::new(backend));

    press_submit(&mut app);
    app.process_async_action().await;

    assert_eq!(app.state.onboarding.step(), Step::Review);
    assert!(!app.state.onboarding.wizard.submitting);
    let last = app.state.notifications.last().expect("notification");
    assert_eq!(last.notification_type, NotificationType::Error);
    assert!(last.message.contains("maintenance"));
}

#[tokio::test]
async fn test_submitted_payload_matches_form() {
    let mut backend = MockBackend::new();
    backend
        .expect_submit_application()
        .withf(|form| form.business_name == "Gotham Locksmiths" && form.photos.len() == 3)
        .times(1)
        .returning(|_| {
            Ok(SubmissionReceipt {
                reference: Uuid::nil(),
            })
        });
    let mut app = app_on_review(Arc::new(backend));

    press_submit(&mut app);
    app.process_async_action().await;

    assert_eq!(
        app.state.onboarding.wizard.receipt.as_ref().map(|r| r.reference),
        Some(Uuid::nil())
    );
    assert_eq!(app.state.onboarding.controls(), vec![Control::GetInTouch]);

    press(&mut app.state, KeyCode::Enter);
    let last = app.state.notifications.last().expect("notification");
    assert_eq!(last.notification_type, NotificationType::Info);
    assert!(last.message.contains("vendor@findmygenie.com"));
}
