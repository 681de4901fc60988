// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use genie_onboard::app::{AppEvent, AppState, EventHandler, Route};
use genie_onboard::config::AppConfig;
use genie_onboard::wizard::WizardAction;

const fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn state_on(route: Route) -> AppState {
    AppState::new(AppConfig::default(), route)
}

#[test]
fn test_quit_key_events() {
    let mut state = state_on(Route::Login);

    let ctrl_c = EventHandler::handle_key_event(
        create_key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut state,
    );
    assert_eq!(ctrl_c, Some(AppEvent::Quit));

    let ctrl_q = EventHandler::handle_key_event(
        create_key_event_with_modifiers(KeyCode::Char('q'), KeyModifiers::CONTROL),
        &mut state,
    );
    assert_eq!(ctrl_q, Some(AppEvent::Quit));

    // Plain letters are text input, never quit
    let q = EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &mut state);
    assert_eq!(q, Some(AppEvent::InputChar('q')));

    EventHandler::process_event(AppEvent::Quit, &mut state);
    assert!(state.should_quit);
}

#[test]
fn test_navigation_key_events() {
    let mut state = state_on(Route::Onboarding);

    let cases = [
        (KeyCode::Tab, AppEvent::FocusNext),
        (KeyCode::BackTab, AppEvent::FocusPrevious),
        (KeyCode::Enter, AppEvent::Activate),
        (KeyCode::Esc, AppEvent::Cancel),
        (KeyCode::Up, AppEvent::Up),
        (KeyCode::Down, AppEvent::Down),
        (KeyCode::Left, AppEvent::Left),
        (KeyCode::Right, AppEvent::Right),
        (KeyCode::PageDown, AppEvent::Wizard(WizardAction::Advance)),
        (KeyCode::PageUp, AppEvent::Wizard(WizardAction::Retreat)),
    ];
    for (code, expected) in cases {
        assert_eq!(
            EventHandler::handle_key_event(create_key_event(code), &mut state),
            Some(expected),
            "{code:?}"
        );
    }
}

#[test]
fn test_theme_toggle_shortcut() {
    let mut state = state_on(Route::Signup);
    let event = EventHandler::handle_key_event(
        create_key_event_with_modifiers(KeyCode::Char('t'), KeyModifiers::CONTROL),
        &mut state,
    );
    assert_eq!(event, Some(AppEvent::ToggleTheme));

    let before = state.theme;
    EventHandler::process_event(AppEvent::ToggleTheme, &mut state);
    assert_ne!(state.theme, before);
}

#[test]
fn test_navigate_event_switches_route() {
    let mut state = state_on(Route::Login);
    EventHandler::process_event(AppEvent::Navigate(Route::Onboarding), &mut state);
    assert_eq!(state.route, Route::Onboarding);
}

#[test]
fn test_paste_into_auth_field() {
    let mut state = state_on(Route::Login);
    EventHandler::process_event(AppEvent::Paste("ops@gotham.test".into()), &mut state);
    assert_eq!(state.login.email, "ops@gotham.test");

    EventHandler::process_event(AppEvent::Home, &mut state);
    EventHandler::process_event(AppEvent::Delete, &mut state);
    assert_eq!(state.login.email, "ps@gotham.test");
}
