// ABOUTME: UI state wrapped around the wizard state machine
// Tracks the focused control per step and the ephemeral state of each widget

use tracing::debug;

use crate::widgets::availability_picker::AvailabilityPickerState;
use crate::widgets::document_upload::DocumentUploadState;
use crate::widgets::photo_upload::PhotoUploadState;
use crate::widgets::select::SelectState;
use crate::widgets::text_input::{InputKind, TextInput};
use crate::wizard::{SelectField, Step, TextField, WizardAction, WizardEffect, WizardState};

/// Focusable controls of a step, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Text(TextField),
    Select(SelectField),
    Radius,
    ServiceGrid,
    ServiceTabs,
    AvailabilityGrid,
    PhotoGallery,
    DocumentSlots,
    ContactMethod,
    AutoAccept,
    EditApplication,
    Back,
    Next,
    GetInTouch,
}

impl Control {
    pub fn input_kind(field: TextField) -> InputKind {
        match field {
            TextField::Email => InputKind::Email,
            TextField::Phone => InputKind::Phone,
            TextField::ZipCode | TextField::MaxJobs => InputKind::Number,
            _ => InputKind::Text,
        }
    }
}

/// Controls shown on a step
pub fn controls_for(step: Step) -> Vec<Control> {
    let mut controls = match step {
        Step::BusinessBasics => vec![
            Control::Text(TextField::BusinessName),
            Control::Text(TextField::Website),
            Control::Text(TextField::Email),
            Control::Text(TextField::Phone),
            Control::Text(TextField::City),
            Control::Select(SelectField::State),
            Control::Text(TextField::ZipCode),
            Control::Select(SelectField::Country),
            Control::Radius,
        ],
        Step::Services => vec![Control::ServiceGrid],
        Step::Availability => vec![Control::ServiceTabs, Control::AvailabilityGrid],
        Step::Photos => vec![Control::PhotoGallery],
        Step::Documents => vec![Control::DocumentSlots],
        Step::Preferences => vec![
            Control::ContactMethod,
            Control::Text(TextField::MaxJobs),
            Control::AutoAccept,
        ],
        Step::Review => vec![Control::EditApplication],
        Step::Complete => return vec![Control::GetInTouch],
    };
    if step.previous().is_some() {
        controls.push(Control::Back);
    }
    controls.push(Control::Next);
    controls
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingScreenState {
    pub wizard: WizardState,
    /// Index into controls_for(wizard.step)
    pub focus: usize,
    pub text_input: TextInput,
    pub state_select: SelectState,
    pub country_select: SelectState,
    /// Highlighted entry of the service catalog
    pub service_cursor: usize,
    pub availability: AvailabilityPickerState,
    pub photos: PhotoUploadState,
    pub documents: DocumentUploadState,
}

impl Default for OnboardingScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingScreenState {
    pub fn new() -> Self {
        let mut state = Self {
            wizard: WizardState::new(),
            focus: 0,
            text_input: TextInput::default(),
            state_select: SelectState::new(true),
            country_select: SelectState::new(true),
            service_cursor: 0,
            availability: AvailabilityPickerState::new(),
            photos: PhotoUploadState::new(),
            documents: DocumentUploadState::new(),
        };
        state.sync_text_input();
        state
    }

    pub fn step(&self) -> Step {
        self.wizard.step
    }

    pub fn controls(&self) -> Vec<Control> {
        controls_for(self.wizard.step)
    }

    pub fn focused_control(&self) -> Control {
        let controls = self.controls();
        controls[self.focus.min(controls.len() - 1)]
    }

    pub fn is_focused(&self, control: Control) -> bool {
        self.focused_control() == control
    }

    /// Place the text cursor at the end of the focused field
    fn sync_text_input(&mut self) {
        if let Control::Text(field) = self.focused_control() {
            let value = self.wizard.form.text(field).to_string();
            self.text_input = TextInput::focused_at_end(Control::input_kind(field), &value);
        }
    }

    pub fn focus_next(&mut self) {
        self.close_overlays();
        let count = self.controls().len();
        self.focus = (self.focus + 1) % count;
        self.sync_text_input();
    }

    pub fn focus_previous(&mut self) {
        self.close_overlays();
        let count = self.controls().len();
        self.focus = (self.focus + count - 1) % count;
        self.sync_text_input();
    }

    pub fn focus_control(&mut self, control: Control) {
        if let Some(idx) = self.controls().iter().position(|c| *c == control) {
            self.close_overlays();
            self.focus = idx;
            self.sync_text_input();
        }
    }

    pub fn select_state_mut(&mut self, field: SelectField) -> &mut SelectState {
        match field {
            SelectField::State => &mut self.state_select,
            SelectField::Country => &mut self.country_select,
        }
    }

    pub fn any_overlay_open(&self) -> bool {
        self.state_select.is_open()
            || self.country_select.is_open()
            || self.availability.time_picker.is_open()
            || self.photos.prompt.is_open()
            || self.documents.prompt.is_open()
    }

    pub fn close_overlays(&mut self) {
        self.state_select.close();
        self.country_select.close();
        self.availability.time_picker.close();
        self.photos.prompt.close();
        self.documents.prompt.close();
    }

    /// Forward a mouse press to every open overlay. Returns true if one was dismissed.
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        let mut dismissed = false;
        if self.state_select.overlay.handle_click(column, row) {
            self.state_select.close();
            dismissed = true;
        }
        if self.country_select.overlay.handle_click(column, row) {
            self.country_select.close();
            dismissed = true;
        }
        dismissed |= self.availability.time_picker.overlay.handle_click(column, row);
        if self.photos.prompt.overlay.handle_click(column, row) {
            self.photos.prompt.close();
            dismissed = true;
        }
        if self.documents.prompt.overlay.handle_click(column, row) {
            self.documents.prompt.close();
            dismissed = true;
        }
        dismissed
    }

    /// Run an action through the wizard. A step change resets focus and widget state.
    pub fn dispatch(&mut self, action: WizardAction) -> Option<WizardEffect> {
        let before = self.wizard.step;
        let effect = self.wizard.dispatch(action);
        if self.wizard.step != before {
            debug!(
                "Step changed {} -> {}",
                before.number(),
                self.wizard.step.number()
            );
            self.close_overlays();
            self.focus = 0;
            self.availability.row = 0;
            self.availability.column = Default::default();
        }
        self.photos.clamp(&self.wizard.form.photos);
        self.sync_text_input();
        effect
    }
}
