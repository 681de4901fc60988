// ABOUTME: UI components for the TUI: auth screens, onboarding wizard, layout and theme

pub mod auth_screen;
pub mod layout;
pub mod onboarding;
pub mod theme;

pub use auth_screen::AuthScreenComponent;
pub use layout::LayoutComponent;
pub use onboarding::OnboardingComponent;
pub use theme::{Palette, Theme};
