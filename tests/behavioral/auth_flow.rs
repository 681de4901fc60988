// ABOUTME: Behavioral tests for the login and signup screens against a mocked backend

use crossterm::event::KeyCode;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use super::fixtures::{press, type_text, MockBackend};
use genie_onboard::app::{App, Route};
use genie_onboard::auth::AuthFocus;
use genie_onboard::backend::{BackendError, Session};
use genie_onboard::config::AppConfig;

fn session(email: &str) -> Session {
    Session {
        email: email.to_string(),
        token: Uuid::new_v4(),
    }
}

#[tokio::test]
async fn test_login_success_opens_wizard() {
    let mut backend = MockBackend::new();
    backend
        .expect_login()
        .withf(|c| c.email == "ops@gotham.test" && c.password == "hunter2")
        .times(1)
        .returning(|c| Ok(session(&c.email)));
    let mut app = App::new(AppConfig::default(), Route::Login, Arc::new(backend));

    type_text(&mut app.state, "ops@gotham.test");
    press(&mut app.state, KeyCode::Tab);
    type_text(&mut app.state, "hunter2");
    press(&mut app.state, KeyCode::Enter);
    assert!(app.state.login.loading);

    app.process_async_action().await;
    assert_eq!(app.state.route, Route::Onboarding);
    assert_eq!(
        app.state.session.as_ref().map(|s| s.email.as_str()),
        Some("ops@gotham.test")
    );
}

#[tokio::test]
async fn test_rejected_login_shakes_and_stays() {
    let mut backend = MockBackend::new();
    backend
        .expect_login()
        .times(1)
        .returning(|_| Err(BackendError::RejectedCredentials));
    let mut app = App::new(AppConfig::default(), Route::Login, Arc::new(backend));

    app.state.login.email = "ops@gotham.test".into();
    app.state.login.password = "wrong".into();
    app.state.submit_auth();
    app.process_async_action().await;

    assert_eq!(app.state.route, Route::Login);
    assert!(!app.state.login.loading);
    assert!(app.state.login.is_shaking(Instant::now()));
    assert!(app.state.session.is_none());
}

#[test]
fn test_empty_login_never_reaches_backend() {
    // No expectations: any backend call would panic
    let backend = MockBackend::new();
    let mut app = App::new(AppConfig::default(), Route::Login, Arc::new(backend));

    press(&mut app.state, KeyCode::Enter);
    assert!(app.state.pending_async_action.is_none());
    assert!(app.state.login.is_shaking(Instant::now()));
}

#[tokio::test]
async fn test_signup_requires_matching_passwords() {
    let mut backend = MockBackend::new();
    backend
        .expect_signup()
        .times(1)
        .returning(|c| Ok(session(&c.email)));
    let mut app = App::new(AppConfig::default(), Route::Signup, Arc::new(backend));

    type_text(&mut app.state, "new@vendor.test");
    press(&mut app.state, KeyCode::Tab);
    type_text(&mut app.state, "pw1");
    press(&mut app.state, KeyCode::Tab);
    assert_eq!(app.state.signup.focus, AuthFocus::Confirm);
    type_text(&mut app.state, "pw2");
    press(&mut app.state, KeyCode::Enter);
    assert!(app.state.pending_async_action.is_none());

    press(&mut app.state, KeyCode::Backspace);
    type_text(&mut app.state, "1");
    press(&mut app.state, KeyCode::Enter);
    app.process_async_action().await;
    assert_eq!(app.state.route, Route::Onboarding);
}

#[test]
fn test_switch_links_between_auth_screens() {
    let mut app = App::new(AppConfig::default(), Route::Login, Arc::new(MockBackend::new()));
    app.state.login.email = "typed@before.switch".into();

    press(&mut app.state, KeyCode::BackTab);
    press(&mut app.state, KeyCode::Enter);
    assert_eq!(app.state.route, Route::Signup);

    press(&mut app.state, KeyCode::BackTab);
    press(&mut app.state, KeyCode::Char(' '));
    assert_eq!(app.state.route, Route::Login);
    assert!(app.state.login.email.is_empty());
}
