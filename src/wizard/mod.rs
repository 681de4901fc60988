// ABOUTME: Onboarding wizard state machine
// Form aggregate, typed actions and the reducer with per-step gates

pub mod form;
pub mod locations;
pub mod reducer;
pub mod schedule;
pub mod types;

pub use form::{Documents, PhotoRef, WizardFormState, MIN_PHOTOS};
pub use reducer::{
    reduce, step_gate, SubmissionReceipt, Transition, WizardAction, WizardEffect, WizardState,
};
pub use schedule::{DaySchedule, TimeField, WeeklySchedule, Weekday};
pub use types::{ContactMethod, DocumentSlot, FieldUpdate, SelectField, Service, Step, TextField};
