// ABOUTME: Vendor onboarding wizard screen
// Step views, navigation buttons and the focus model around the wizard reducer

pub mod component;
pub mod state;
pub mod steps;

pub use component::OnboardingComponent;
pub use state::{controls_for, Control, OnboardingScreenState};
