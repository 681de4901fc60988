// ABOUTME: Behavioral tests walking the onboarding wizard from the keyboard
// Each step is filled through the same key pipeline the terminal uses

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

use super::fixtures::{press, state_on, type_text};
use genie_onboard::app::{AppState, Route};
use genie_onboard::components::onboarding::Control;
use genie_onboard::wizard::{ContactMethod, DocumentSlot, Service, Step, WeeklySchedule};

fn fill_basics(state: &mut AppState) {
    type_text(state, "Gotham Locksmiths");
    press(state, KeyCode::Tab); // Website stays empty
    press(state, KeyCode::Tab);
    type_text(state, "ops@gotham.test");
    press(state, KeyCode::Tab);
    type_text(state, "555-0100");
    press(state, KeyCode::Tab);
    type_text(state, "New York");
    press(state, KeyCode::Tab);

    // State dropdown: open, filter, choose
    press(state, KeyCode::Enter);
    assert!(state.onboarding.state_select.is_open());
    type_text(state, "new york");
    press(state, KeyCode::Enter);
    assert!(!state.onboarding.state_select.is_open());

    press(state, KeyCode::Tab);
    type_text(state, "10001");
}

fn add_photo(state: &mut AppState, path: &str) {
    press(state, KeyCode::Enter);
    assert!(state.onboarding.photos.prompt.is_open());
    type_text(state, path);
    press(state, KeyCode::Enter);
}

fn attach_document(state: &mut AppState, path: &str) {
    press(state, KeyCode::Enter);
    type_text(state, path);
    press(state, KeyCode::Enter);
}

#[test]
fn test_business_basics_gate_and_fields() {
    let mut state = state_on(Route::Onboarding);

    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.onboarding.step(), Step::BusinessBasics);

    fill_basics(&mut state);
    let form = &state.onboarding.wizard.form;
    assert_eq!(form.business_name, "Gotham Locksmiths");
    assert_eq!(form.state, "NY");
    assert_eq!(form.country, "USA");
    assert_eq!(form.zip_code, "10001");
    assert_eq!(form.website, "");

    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.onboarding.step(), Step::Services);
}

#[test]
fn test_full_keyboard_journey_to_review() {
    let mut state = state_on(Route::Onboarding);
    fill_basics(&mut state);
    press(&mut state, KeyCode::PageDown);

    // Services: Plumber (index 1) and Electrician (index 3)
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Char(' '));
    assert_eq!(
        state.onboarding.wizard.form.services,
        vec![Service::Plumber, Service::Electrician]
    );
    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.onboarding.step(), Step::Availability);

    // Availability: switch to the Electrician tab
    press(&mut state, KeyCode::Right);
    assert_eq!(state.onboarding.wizard.active_service(), Some(Service::Electrician));
    press(&mut state, KeyCode::Down);
    assert_eq!(state.onboarding.focused_control(), Control::AvailabilityGrid);

    // Monday off
    press(&mut state, KeyCode::Char(' '));
    // Tuesday starts an hour later
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);
    assert!(state.onboarding.availability.time_picker.is_open());
    press(&mut state, KeyCode::Up);
    press(&mut state, KeyCode::Enter);
    assert!(!state.onboarding.availability.time_picker.is_open());

    let form = &state.onboarding.wizard.form;
    let electrician = form.schedule_for(Service::Electrician);
    assert!(!electrician.days()[0].available);
    assert_eq!(electrician.days()[1].start, "10:00");
    let plumber = form.schedule_for(Service::Plumber);
    assert!(plumber.days()[0].available);
    assert_eq!(plumber.days()[1].start, "09:00");

    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.onboarding.step(), Step::Photos);

    // Photos: three needed, removal reopens the gate
    add_photo(&mut state, "front.jpg");
    add_photo(&mut state, "van.jpg");
    add_photo(&mut state, "team.png");
    assert_eq!(state.onboarding.wizard.form.photos.len(), 3);
    press(&mut state, KeyCode::Left);
    press(&mut state, KeyCode::Char('x'));
    assert_eq!(state.onboarding.wizard.form.photos.len(), 2);
    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.onboarding.step(), Step::Photos);
    press(&mut state, KeyCode::Right);
    add_photo(&mut state, "~/pictures/crew.jpg");
    assert_eq!(state.onboarding.wizard.form.photos[2].file_name, "crew.jpg");
    assert_eq!(state.onboarding.wizard.form.photos[0].file_name, "front.jpg");
    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.onboarding.step(), Step::Documents);

    // Documents: insurance alone is not enough
    attach_document(&mut state, "/tmp/scans/insurance.pdf");
    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.onboarding.step(), Step::Documents);
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Down);
    attach_document(&mut state, "ein.pdf");
    let documents = &state.onboarding.wizard.form.documents;
    assert_eq!(documents.get(DocumentSlot::Insurance), Some("insurance.pdf"));
    assert_eq!(documents.get(DocumentSlot::Tax), Some("ein.pdf"));
    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.onboarding.step(), Step::Preferences);

    // Preferences
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Backspace);
    type_text(&mut state, "8x");
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Char(' '));
    let form = &state.onboarding.wizard.form;
    assert_eq!(form.contact_method, ContactMethod::Phone);
    assert_eq!(form.max_jobs, "8");
    assert!(form.auto_accept);

    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.onboarding.step(), Step::Review);
    assert!(state.pending_async_action.is_none());
}

#[test]
fn test_single_service_seeds_one_default_schedule() {
    let mut state = state_on(Route::Onboarding);
    fill_basics(&mut state);
    press(&mut state, KeyCode::PageDown);

    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.onboarding.step(), Step::Availability);

    let availability = &state.onboarding.wizard.form.availability;
    assert_eq!(availability.len(), 1);
    assert_eq!(availability.get(&Service::Plumber), Some(&WeeklySchedule::default_week()));
}

#[test]
fn test_back_button_and_edit_from_review() {
    let mut state = super::fixtures::state_on_review();
    assert_eq!(state.onboarding.step(), Step::Review);

    // Review focus starts on Edit Application
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.onboarding.step(), Step::BusinessBasics);
    assert_eq!(state.onboarding.wizard.form.business_name, "Gotham Locksmiths");

    press(&mut state, KeyCode::PageDown);
    state.onboarding.focus_control(Control::Back);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.onboarding.step(), Step::BusinessBasics);
}

#[test]
fn test_open_dropdown_blocks_page_navigation_and_click_closes_it() {
    let mut state = state_on(Route::Onboarding);
    state.onboarding.focus_control(Control::Select(genie_onboard::wizard::SelectField::Country));
    press(&mut state, KeyCode::Enter);
    assert!(state.onboarding.any_overlay_open());

    press(&mut state, KeyCode::PageUp);
    assert_eq!(state.onboarding.step(), Step::BusinessBasics);

    // Nothing was rendered, so no region is registered and any click dismisses
    genie_onboard::app::EventHandler::process_event(
        genie_onboard::app::AppEvent::MouseClick { x: 3, y: 3 },
        &mut state,
    );
    assert!(!state.onboarding.any_overlay_open());
}
