// ABOUTME: Application state, routing and async backend action handling for genie-onboard

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::router::Route;
use crate::auth::{AuthRequest, AuthScreenState};
use crate::backend::{BackendError, OnboardingBackend, Session};
use crate::components::onboarding::OnboardingScreenState;
use crate::components::theme::Theme;
use crate::config::AppConfig;
use crate::wizard::{SubmissionReceipt, WizardAction, WizardEffect, WizardFormState};

pub const SUPPORT_EMAIL: &str = "vendor@findmygenie.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Success,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Error,
            created_at: Instant::now(),
            duration: Duration::from_secs(5),
        }
    }

    pub fn info(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Info,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn warning(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Warning,
            created_at: Instant::now(),
            duration: Duration::from_secs(4),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Backend work requested by the UI, run off the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncAction {
    Authenticate(AuthRequest),
    SubmitApplication(Box<WizardFormState>),
}

/// Completed backend work, applied back on the UI loop
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncOutcome {
    Authenticated(Result<Session, BackendError>),
    ApplicationSubmitted(Result<SubmissionReceipt, BackendError>),
}

pub struct AppState {
    pub route: Route,
    pub config: AppConfig,
    pub theme: Theme,
    pub login: AuthScreenState,
    pub signup: AuthScreenState,
    pub onboarding: OnboardingScreenState,
    pub session: Option<Session>,
    pub notifications: Vec<Notification>,
    pub pending_async_action: Option<AsyncAction>,
    pub should_quit: bool,
    /// Drives spinner frames
    pub tick_count: usize,
}

impl AppState {
    pub fn new(config: AppConfig, route: Route) -> Self {
        let theme = config.ui.theme;
        info!("Starting on route {}", route);
        Self {
            route,
            config,
            theme,
            login: AuthScreenState::login(),
            signup: AuthScreenState::signup(),
            onboarding: OnboardingScreenState::new(),
            session: None,
            notifications: Vec::new(),
            pending_async_action: None,
            should_quit: false,
            tick_count: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!("Theme switched to {:?}", self.theme);
    }

    /// Switch screens. The target screen always starts from a fresh state.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        info!("Navigating {} -> {}", self.route, route);
        match route {
            Route::Login => self.login = AuthScreenState::login(),
            Route::Signup => self.signup = AuthScreenState::signup(),
            Route::Onboarding => self.onboarding = OnboardingScreenState::new(),
        }
        if self.route == Route::Onboarding {
            // Form data does not outlive the wizard
            self.onboarding = OnboardingScreenState::new();
        }
        self.route = route;
    }

    /// Auth form of the current route, if it is an auth screen
    pub fn active_auth(&self) -> Option<&AuthScreenState> {
        match self.route {
            Route::Login => Some(&self.login),
            Route::Signup => Some(&self.signup),
            Route::Onboarding => None,
        }
    }

    pub fn active_auth_mut(&mut self) -> Option<&mut AuthScreenState> {
        match self.route {
            Route::Login => Some(&mut self.login),
            Route::Signup => Some(&mut self.signup),
            Route::Onboarding => None,
        }
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn cleanup_expired_notifications(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Submit the current auth form, queueing the backend call on success
    pub fn submit_auth(&mut self) {
        let shake = self.config.ui.shake_duration();
        let Some(auth) = self.active_auth_mut() else {
            return;
        };
        if let Some(request) = auth.submit(Instant::now(), shake) {
            self.pending_async_action = Some(AsyncAction::Authenticate(request));
        }
    }

    /// Dispatch a wizard action, queueing any effect it produced
    pub fn dispatch_wizard(&mut self, action: WizardAction) {
        if let Some(WizardEffect::SubmitApplication(form)) = self.onboarding.dispatch(action) {
            self.pending_async_action = Some(AsyncAction::SubmitApplication(form));
        }
    }

    /// Apply a finished backend call
    pub fn apply_outcome(&mut self, outcome: AsyncOutcome) {
        let shake = self.config.ui.shake_duration();
        match outcome {
            AsyncOutcome::Authenticated(Ok(session)) => {
                info!("Authenticated as {}", session.email);
                if let Some(auth) = self.active_auth_mut() {
                    auth.succeed();
                }
                self.add_notification(Notification::success(format!(
                    "Welcome, {}",
                    session.email
                )));
                self.session = Some(session);
                self.navigate(Route::Onboarding);
            }
            AsyncOutcome::Authenticated(Err(e)) => {
                warn!("Authentication failed: {}", e);
                if let Some(auth) = self.active_auth_mut() {
                    auth.fail(Instant::now(), shake);
                }
                self.add_notification(Notification::error(format!("Sign in failed: {e}")));
            }
            AsyncOutcome::ApplicationSubmitted(Ok(receipt)) => {
                if self.route != Route::Onboarding {
                    debug!("Dropping submission result after leaving the wizard");
                    return;
                }
                self.dispatch_wizard(WizardAction::SubmissionSucceeded(receipt));
            }
            AsyncOutcome::ApplicationSubmitted(Err(e)) => {
                error!("Application submission failed: {}", e);
                if self.route == Route::Onboarding {
                    self.dispatch_wizard(WizardAction::SubmissionFailed(e.to_string()));
                }
                self.add_notification(Notification::error(format!(
                    "Submission failed: {e}"
                )));
            }
        }
    }

    /// Expire transient UI flags
    pub fn tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.cleanup_expired_notifications();
        self.login.tick(now);
        self.signup.tick(now);
    }
}

async fn run_action(backend: Arc<dyn OnboardingBackend>, action: AsyncAction) -> AsyncOutcome {
    match action {
        AsyncAction::Authenticate(AuthRequest::Login(credentials)) => {
            AsyncOutcome::Authenticated(backend.login(credentials).await)
        }
        AsyncAction::Authenticate(AuthRequest::Signup(credentials)) => {
            AsyncOutcome::Authenticated(backend.signup(credentials).await)
        }
        AsyncAction::SubmitApplication(form) => {
            AsyncOutcome::ApplicationSubmitted(backend.submit_application(*form).await)
        }
    }
}

pub struct App {
    pub state: AppState,
    backend: Arc<dyn OnboardingBackend>,
    outcome_tx: mpsc::UnboundedSender<AsyncOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<AsyncOutcome>,
}

impl App {
    pub fn new(config: AppConfig, route: Route, backend: Arc<dyn OnboardingBackend>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config, route),
            backend,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Start the pending backend call on a background task. Its outcome is applied on a later tick.
    pub fn spawn_pending_action(&mut self) {
        let Some(action) = self.state.pending_async_action.take() else {
            return;
        };
        info!("Spawning backend action {}", action_name(&action));
        let backend = Arc::clone(&self.backend);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = run_action(backend, action).await;
            if tx.send(outcome).is_err() {
                warn!("Backend outcome dropped: app is shutting down");
            }
        });
    }

    /// Run the pending backend call to completion and apply its outcome
    pub async fn process_async_action(&mut self) {
        if let Some(action) = self.state.pending_async_action.take() {
            info!("Processing backend action {}", action_name(&action));
            let outcome = run_action(Arc::clone(&self.backend), action).await;
            self.state.apply_outcome(outcome);
        }
    }

    /// Apply finished background calls and expire transient state
    pub fn tick(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.state.apply_outcome(outcome);
        }
        self.state.tick(Instant::now());
    }
}

fn action_name(action: &AsyncAction) -> &'static str {
    match action {
        AsyncAction::Authenticate(AuthRequest::Login(_)) => "login",
        AsyncAction::Authenticate(AuthRequest::Signup(_)) => "signup",
        AsyncAction::SubmitApplication(_) => "submit_application",
    }
}
