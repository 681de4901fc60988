// ABOUTME: Login and signup form state machines
// Presence checks, transient shake on rejection, loading while the backend call runs

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::widgets::text_input::{InputKind, TextInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Vendor Sign In",
            Self::Signup => "Create Vendor Account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Signup => "Create Account",
        }
    }

    pub fn loading_label(&self) -> &'static str {
        match self {
            Self::Login => "Signing In...",
            Self::Signup => "Creating Account...",
        }
    }

    /// Prompt for the link to the other screen
    pub fn switch_label(&self) -> &'static str {
        match self {
            Self::Login => "New vendor? Create an account",
            Self::Signup => "Already have an account? Sign in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Request to hand to the backend once local validation passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login(Credentials),
    Signup(Credentials),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Focusable controls of an auth screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFocus {
    Email,
    Password,
    Confirm,
    Submit,
    SwitchLink,
}

impl AuthFocus {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Email | Self::Password | Self::Confirm)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthScreenState {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub focus: AuthFocus,
    pub input: TextInput,
    pub loading: bool,
    shake_until: Option<Instant>,
}

impl AuthScreenState {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
            focus: AuthFocus::Email,
            input: TextInput::new(InputKind::Email),
            loading: false,
            shake_until: None,
        }
    }

    pub fn login() -> Self {
        Self::new(AuthMode::Login)
    }

    pub fn signup() -> Self {
        Self::new(AuthMode::Signup)
    }

    /// Controls in tab order
    pub fn focus_order(&self) -> &'static [AuthFocus] {
        match self.mode {
            AuthMode::Login => &[
                AuthFocus::Email,
                AuthFocus::Password,
                AuthFocus::Submit,
                AuthFocus::SwitchLink,
            ],
            AuthMode::Signup => &[
                AuthFocus::Email,
                AuthFocus::Password,
                AuthFocus::Confirm,
                AuthFocus::Submit,
                AuthFocus::SwitchLink,
            ],
        }
    }

    fn set_focus(&mut self, focus: AuthFocus) {
        self.focus = focus;
        let kind = match focus {
            AuthFocus::Email => InputKind::Email,
            _ => InputKind::Password,
        };
        let value = self.field(focus).unwrap_or_default().to_string();
        self.input = TextInput::focused_at_end(kind, &value);
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(idx + 1) % order.len()]);
    }

    pub fn focus_previous(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(idx + order.len() - 1) % order.len()]);
    }

    pub fn field(&self, focus: AuthFocus) -> Option<&str> {
        match focus {
            AuthFocus::Email => Some(&self.email),
            AuthFocus::Password => Some(&self.password),
            AuthFocus::Confirm => Some(&self.confirm),
            AuthFocus::Submit | AuthFocus::SwitchLink => None,
        }
    }

    fn store(&mut self, value: String) {
        match self.focus {
            AuthFocus::Email => self.email = value,
            AuthFocus::Password => self.password = value,
            AuthFocus::Confirm => self.confirm = value,
            AuthFocus::Submit | AuthFocus::SwitchLink => {}
        }
    }

    /// Route an edit to the focused text field. Ignored while loading.
    pub fn edit(&mut self, op: impl FnOnce(&mut TextInput, &str) -> Option<String>) {
        if self.loading {
            return;
        }
        let Some(current) = self.field(self.focus).map(str::to_string) else {
            return;
        };
        if let Some(next) = op(&mut self.input, &current) {
            self.store(next);
        }
    }

    /// Synchronous presence check (plus password equality on signup)
    pub fn validate(&self) -> Result<Credentials, AuthValidationError> {
        if self.email.is_empty() {
            return Err(AuthValidationError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(AuthValidationError::MissingField("password"));
        }
        if self.mode == AuthMode::Signup {
            if self.confirm.is_empty() {
                return Err(AuthValidationError::MissingField("password confirmation"));
            }
            if self.confirm != self.password {
                return Err(AuthValidationError::PasswordMismatch);
            }
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Attempt to submit. Invalid input starts the shake and yields nothing;
    /// valid input sets loading and yields the backend request.
    pub fn submit(&mut self, now: Instant, shake: Duration) -> Option<AuthRequest> {
        if self.loading {
            debug!("Auth submit ignored while loading");
            return None;
        }
        match self.validate() {
            Ok(credentials) => {
                self.loading = true;
                Some(match self.mode {
                    AuthMode::Login => AuthRequest::Login(credentials),
                    AuthMode::Signup => AuthRequest::Signup(credentials),
                })
            }
            Err(e) => {
                debug!("Auth validation failed: {}", e);
                self.start_shake(now, shake);
                None
            }
        }
    }

    /// Backend rejected the request
    pub fn fail(&mut self, now: Instant, shake: Duration) {
        self.loading = false;
        self.start_shake(now, shake);
    }

    pub fn succeed(&mut self) {
        self.loading = false;
    }

    fn start_shake(&mut self, now: Instant, shake: Duration) {
        self.shake_until = Some(now + shake);
    }

    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake_until.is_some_and(|until| now < until)
    }

    /// Drop an expired shake flag
    pub fn tick(&mut self, now: Instant) {
        if self.shake_until.is_some_and(|until| now >= until) {
            self.shake_until = None;
        }
    }
}
