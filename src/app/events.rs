// ABOUTME: Event handling system for keyboard and mouse input
// Keys map to AppEvents; process_event applies them to the screen of the current route

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::app::router::Route;
use crate::app::state::{AppState, Notification, SUPPORT_EMAIL};
use crate::auth::{AuthFocus, AuthMode};
use crate::components::onboarding::{Control, OnboardingScreenState};
use crate::widgets::availability_picker::GridColumn;
use crate::widgets::select::SelectOption;
use crate::widgets::slider::Slider;
use crate::wizard::form::MAX_RADIUS_MILES;
use crate::wizard::locations::{countries, us_states};
use crate::wizard::{FieldUpdate, SelectField, Service, Step, WizardAction};

/// Radius slider: whole miles, five-mile steps from the keyboard
pub const RADIUS_SLIDER: Slider = Slider {
    min: 0,
    max: MAX_RADIUS_MILES,
    step: 5,
};

/// Columns of the service catalog grid
pub const SERVICE_GRID_COLUMNS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleTheme,
    Navigate(Route),
    FocusNext,
    FocusPrevious,
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
    /// Enter
    Activate,
    /// Esc
    Cancel,
    /// Direct wizard shortcut (PageDown / PageUp)
    Wizard(WizardAction),
    MouseClick { x: u16, y: u16 },
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl {
            return match key_event.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(AppEvent::Quit),
                KeyCode::Char('t') => Some(AppEvent::ToggleTheme),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Tab => Some(AppEvent::FocusNext),
            KeyCode::BackTab => Some(AppEvent::FocusPrevious),
            KeyCode::Enter => Some(AppEvent::Activate),
            KeyCode::Esc => Some(AppEvent::Cancel),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Delete => Some(AppEvent::Delete),
            KeyCode::Home => Some(AppEvent::Home),
            KeyCode::End => Some(AppEvent::End),
            KeyCode::Up => Some(AppEvent::Up),
            KeyCode::Down => Some(AppEvent::Down),
            KeyCode::Left => Some(AppEvent::Left),
            KeyCode::Right => Some(AppEvent::Right),
            KeyCode::PageDown if state.route == Route::Onboarding => {
                Some(AppEvent::Wizard(WizardAction::Advance))
            }
            KeyCode::PageUp if state.route == Route::Onboarding => {
                Some(AppEvent::Wizard(WizardAction::Retreat))
            }
            KeyCode::Char(c) => Some(AppEvent::InputChar(c)),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleTheme => state.toggle_theme(),
            AppEvent::Navigate(route) => state.navigate(route),
            AppEvent::MouseClick { x, y } => {
                if state.route == Route::Onboarding && state.onboarding.handle_click(x, y) {
                    debug!("Overlay dismissed by click at ({}, {})", x, y);
                }
            }
            other => match state.route {
                Route::Login | Route::Signup => Self::process_auth_event(other, state),
                Route::Onboarding => Self::process_onboarding_event(other, state),
            },
        }
    }

    fn process_auth_event(event: AppEvent, state: &mut AppState) {
        let Some(auth) = state.active_auth_mut() else {
            return;
        };
        let focus = auth.focus;
        let mode = auth.mode;
        match event {
            AppEvent::FocusNext | AppEvent::Down => auth.focus_next(),
            AppEvent::FocusPrevious | AppEvent::Up => auth.focus_previous(),
            AppEvent::InputChar(' ') if !focus.is_text() => {
                Self::process_auth_event(AppEvent::Activate, state)
            }
            AppEvent::InputChar(c) => auth.edit(|input, value| input.insert(value, c)),
            AppEvent::Paste(text) => auth.edit(|input, value| input.insert_str(value, &text)),
            AppEvent::Backspace => auth.edit(|input, value| input.backspace(value)),
            AppEvent::Delete => auth.edit(|input, value| input.delete(value)),
            AppEvent::Left => auth.input.move_left(),
            AppEvent::Right => {
                let value = auth.field(focus).unwrap_or_default().to_string();
                auth.input.move_right(&value);
            }
            AppEvent::Home => auth.input.home(),
            AppEvent::End => {
                let value = auth.field(focus).unwrap_or_default().to_string();
                auth.input.end(&value);
            }
            AppEvent::Activate => match focus {
                AuthFocus::SwitchLink => {
                    if auth.loading {
                        return;
                    }
                    let target = match mode {
                        AuthMode::Login => Route::Signup,
                        AuthMode::Signup => Route::Login,
                    };
                    state.navigate(target);
                }
                _ => state.submit_auth(),
            },
            _ => {}
        }
    }

    fn process_onboarding_event(event: AppEvent, state: &mut AppState) {
        if let AppEvent::Wizard(action) = event {
            if !state.onboarding.any_overlay_open() {
                state.dispatch_wizard(action);
            }
            return;
        }

        match event {
            AppEvent::FocusNext => return state.onboarding.focus_next(),
            AppEvent::FocusPrevious => return state.onboarding.focus_previous(),
            _ => {}
        }

        match state.onboarding.focused_control() {
            Control::Text(field) => {
                let screen = &mut state.onboarding;
                let value = screen.wizard.form.text(field).to_string();
                let edited = match event {
                    AppEvent::InputChar(c) => screen.text_input.insert(&value, c),
                    AppEvent::Paste(text) => screen.text_input.insert_str(&value, &text),
                    AppEvent::Backspace => screen.text_input.backspace(&value),
                    AppEvent::Delete => screen.text_input.delete(&value),
                    AppEvent::Left => {
                        screen.text_input.move_left();
                        None
                    }
                    AppEvent::Right => {
                        screen.text_input.move_right(&value);
                        None
                    }
                    AppEvent::Home => {
                        screen.text_input.home();
                        None
                    }
                    AppEvent::End => {
                        screen.text_input.end(&value);
                        None
                    }
                    AppEvent::Activate | AppEvent::Down => {
                        screen.focus_next();
                        None
                    }
                    AppEvent::Up => {
                        screen.focus_previous();
                        None
                    }
                    _ => None,
                };
                if let Some(next) = edited {
                    state.dispatch_wizard(WizardAction::SetField(field.update(next)));
                }
            }
            Control::Select(field) => Self::process_select(event, field, state),
            Control::Radius => {
                let radius = state.onboarding.wizard.form.radius;
                let next = match event {
                    AppEvent::Left | AppEvent::Down => RADIUS_SLIDER.decrement(radius),
                    AppEvent::Right | AppEvent::Up => RADIUS_SLIDER.increment(radius),
                    AppEvent::Home => RADIUS_SLIDER.min,
                    AppEvent::End => RADIUS_SLIDER.max,
                    _ => return,
                };
                state.dispatch_wizard(WizardAction::SetField(FieldUpdate::Radius(next)));
            }
            Control::ServiceGrid => Self::process_service_grid(event, state),
            Control::ServiceTabs => {
                let active = state.onboarding.wizard.active_service;
                let target = match event {
                    AppEvent::Left => active.checked_sub(1),
                    AppEvent::Right => Some(active + 1),
                    AppEvent::Down | AppEvent::Activate => {
                        state.onboarding.focus_next();
                        None
                    }
                    _ => None,
                };
                if let Some(index) = target {
                    state.dispatch_wizard(WizardAction::SelectActiveService(index));
                }
            }
            Control::AvailabilityGrid => Self::process_availability(event, state),
            Control::PhotoGallery => Self::process_photos(event, state),
            Control::DocumentSlots => Self::process_documents(event, state),
            Control::ContactMethod => {
                let method = state.onboarding.wizard.form.contact_method;
                let next = match event {
                    AppEvent::Left => method.previous(),
                    AppEvent::Right | AppEvent::InputChar(' ') => method.next(),
                    _ => return,
                };
                state.dispatch_wizard(WizardAction::SetField(FieldUpdate::ContactMethod(next)));
            }
            Control::AutoAccept => {
                if matches!(event, AppEvent::Activate | AppEvent::InputChar(' ')) {
                    let current = state.onboarding.wizard.form.auto_accept;
                    state.dispatch_wizard(WizardAction::SetField(FieldUpdate::AutoAccept(!current)));
                }
            }
            Control::EditApplication => {
                if Self::is_press(&event) {
                    state.dispatch_wizard(WizardAction::EditFromReview);
                }
            }
            Control::Back => {
                if Self::is_press(&event) {
                    state.dispatch_wizard(WizardAction::Retreat);
                }
            }
            Control::Next => {
                if Self::is_press(&event) {
                    let action = if state.onboarding.step() == Step::Review {
                        WizardAction::Submit
                    } else {
                        WizardAction::Advance
                    };
                    state.dispatch_wizard(action);
                }
            }
            Control::GetInTouch => {
                if Self::is_press(&event) {
                    state.add_notification(Notification::info(format!(
                        "Questions? Reach us at {SUPPORT_EMAIL}"
                    )));
                }
            }
        }
    }

    fn is_press(event: &AppEvent) -> bool {
        matches!(event, AppEvent::Activate | AppEvent::InputChar(' '))
    }

    fn select_options(field: SelectField) -> Vec<SelectOption> {
        match field {
            SelectField::State => us_states(),
            SelectField::Country => countries(),
        }
    }

    fn process_select(event: AppEvent, field: SelectField, state: &mut AppState) {
        let options = Self::select_options(field);
        let current = match field {
            SelectField::State => state.onboarding.wizard.form.state.clone(),
            SelectField::Country => state.onboarding.wizard.form.country.clone(),
        };
        let select = state.onboarding.select_state_mut(field);

        if !select.is_open() {
            match event {
                AppEvent::Activate | AppEvent::InputChar(' ') | AppEvent::Down => {
                    select.open(&options, &current)
                }
                AppEvent::Up => state.onboarding.focus_previous(),
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Up => select.move_up(),
            AppEvent::Down => select.move_down(&options),
            AppEvent::InputChar(c) => select.push_query(c),
            AppEvent::Backspace => select.pop_query(),
            AppEvent::Cancel => select.close(),
            AppEvent::Activate => {
                if let Some(value) = select.choose(&options) {
                    state.dispatch_wizard(WizardAction::SetField(field.update(value)));
                }
            }
            _ => {}
        }
    }

    fn process_service_grid(event: AppEvent, state: &mut AppState) {
        let count = Service::all().len();
        let cursor = &mut state.onboarding.service_cursor;
        match event {
            AppEvent::Left => *cursor = cursor.saturating_sub(1),
            AppEvent::Right => *cursor = (*cursor + 1).min(count - 1),
            AppEvent::Up => *cursor = cursor.saturating_sub(SERVICE_GRID_COLUMNS),
            AppEvent::Down => {
                if *cursor + SERVICE_GRID_COLUMNS < count {
                    *cursor += SERVICE_GRID_COLUMNS;
                }
            }
            AppEvent::Activate | AppEvent::InputChar(' ') => {
                let service = Service::all()[*cursor];
                state.dispatch_wizard(WizardAction::ToggleService(service));
            }
            _ => {}
        }
    }

    fn process_availability(event: AppEvent, state: &mut AppState) {
        let Some(service) = state.onboarding.wizard.active_service() else {
            return;
        };
        let schedule = state.onboarding.wizard.form.schedule_for(service);
        let picker = &mut state.onboarding.availability;

        if picker.time_picker.is_open() {
            let delta = match event {
                AppEvent::Up => 1,
                AppEvent::Down => -1,
                AppEvent::Left => {
                    picker.time_picker.previous_column();
                    return;
                }
                AppEvent::Right => {
                    picker.time_picker.next_column();
                    return;
                }
                AppEvent::Activate | AppEvent::Cancel => {
                    picker.time_picker.close();
                    return;
                }
                _ => return,
            };
            match picker.adjust_time(&schedule, delta) {
                Ok(Some(next)) => state.dispatch_wizard(WizardAction::UpdateAvailability(next)),
                Ok(None) => {}
                Err(e) => {
                    warn!("Ignoring unreadable time for {}: {}", service.id(), e);
                    state.add_notification(Notification::warning(format!("Invalid time: {e}")));
                }
            }
            return;
        }

        match event {
            AppEvent::Up => {
                if picker.row == 0 {
                    state.onboarding.focus_previous();
                } else {
                    picker.move_up();
                }
            }
            AppEvent::Down => picker.move_down(),
            AppEvent::Left => picker.move_left(),
            AppEvent::Right => picker.move_right(&schedule),
            AppEvent::Activate | AppEvent::InputChar(' ') => {
                if picker.column == GridColumn::Toggle {
                    let next = picker.toggle_day(&schedule);
                    state.dispatch_wizard(WizardAction::UpdateAvailability(next));
                } else {
                    picker.open_time_picker(&schedule);
                }
            }
            _ => {}
        }
    }

    fn process_photos(event: AppEvent, state: &mut AppState) {
        let screen = &mut state.onboarding;
        if screen.photos.prompt.is_open() {
            match event {
                AppEvent::InputChar(c) => screen.photos.prompt.type_char(c),
                AppEvent::Paste(text) => screen.photos.prompt.paste(&text),
                AppEvent::Backspace => screen.photos.prompt.backspace(),
                AppEvent::Cancel => screen.photos.prompt.close(),
                AppEvent::Activate => {
                    if let Some(photo) = screen.photos.pick() {
                        state.dispatch_wizard(WizardAction::AddPhoto(photo));
                        let count = state.onboarding.wizard.form.photos.len();
                        state.onboarding.photos.selected = count;
                    }
                }
                _ => {}
            }
            return;
        }

        let photos = &screen.wizard.form.photos;
        match event {
            AppEvent::Left | AppEvent::Up => screen.photos.move_left(),
            AppEvent::Right | AppEvent::Down => screen.photos.move_right(photos),
            AppEvent::Activate | AppEvent::InputChar(' ') => {
                if screen.photos.on_add_tile(photos) {
                    screen.photos.prompt.open();
                }
            }
            AppEvent::Backspace | AppEvent::Delete | AppEvent::InputChar('x') => {
                if let Some(index) = screen.photos.removal_target(photos) {
                    state.dispatch_wizard(WizardAction::RemovePhoto(index));
                }
            }
            _ => {}
        }
    }

    fn process_documents(event: AppEvent, state: &mut AppState) {
        let screen = &mut state.onboarding;
        if screen.documents.prompt.is_open() {
            match event {
                AppEvent::InputChar(c) => screen.documents.prompt.type_char(c),
                AppEvent::Paste(text) => screen.documents.prompt.paste(&text),
                AppEvent::Backspace => screen.documents.prompt.backspace(),
                AppEvent::Cancel => screen.documents.prompt.close(),
                AppEvent::Activate => {
                    if let Some((slot, name)) = screen.documents.pick() {
                        state.dispatch_wizard(WizardAction::UploadDocument(slot, name));
                    }
                }
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Up => screen.documents.move_up(),
            AppEvent::Down => screen.documents.move_down(),
            AppEvent::Activate | AppEvent::InputChar(' ') => screen.documents.prompt.open(),
            _ => {}
        }
    }
}

/// Footer hint for the focused wizard control
pub fn key_hints(screen: &OnboardingScreenState) -> &'static str {
    if screen.any_overlay_open() {
        return "↑↓ choose · Enter confirm · Esc close";
    }
    match screen.focused_control() {
        Control::Text(_) => "Type to edit · Tab next field · PgDn continue",
        Control::Select(_) => "Enter open list · Tab next field",
        Control::Radius => "←→ adjust radius · Tab next field",
        Control::ServiceGrid => "Arrows move · Space toggle service · Tab buttons",
        Control::ServiceTabs => "←→ switch service · ↓ schedule",
        Control::AvailabilityGrid => "↑↓ day · ←→ cell · Space toggle / edit time",
        Control::PhotoGallery => "←→ select · Enter add photo · x remove",
        Control::DocumentSlots => "↑↓ select slot · Enter attach file",
        Control::ContactMethod => "←→ change contact method",
        Control::AutoAccept => "Space toggle auto-accept",
        Control::EditApplication | Control::Back | Control::Next | Control::GetInTouch => {
            "Enter press · Tab move · PgUp back"
        }
    }
}
