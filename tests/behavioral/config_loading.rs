// ABOUTME: Behavioral tests for configuration loading and its effect on the running app
// Verifies file overrides reach the backend delays, the theme and CLI flags

use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use genie_onboard::app::{App, AppState, Route};
use genie_onboard::auth::{AuthRequest, Credentials};
use genie_onboard::app::state::AsyncAction;
use genie_onboard::backend::SimulatedBackend;
use genie_onboard::cli::{self, Cli};
use genie_onboard::components::theme::Theme;
use genie_onboard::config::AppConfig;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_configured_theme_is_initial_theme() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[ui]\ntheme = \"light\"\n");

    let config = AppConfig::load_from(&path).unwrap();
    let state = AppState::new(config, Route::Login);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn test_cli_route_and_config_flags() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[backend]\nsubmit_delay_ms = 42\n");

    let args = Cli::parse_from([
        "genie-onboard",
        "--config",
        path.to_str().unwrap(),
        "--route",
        "/signup/",
    ]);
    let effective = cli::config::resolve(&args).unwrap();
    assert_eq!(effective.path, path);
    assert_eq!(effective.config.backend.submit_delay_ms, 42);
    assert_eq!(effective.config.ui.theme, Theme::Dark);
    assert_eq!(args.start_route(), Route::Signup);
}

#[tokio::test(start_paused = true)]
async fn test_configured_login_delay_is_used() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[backend]\nlogin_delay_ms = 50\n");
    let config = AppConfig::load_from(&path).unwrap();

    let backend = Arc::new(SimulatedBackend::new(config.backend.clone()));
    let mut app = App::new(config, Route::Login, backend);
    app.state.login.loading = true;
    app.state.pending_async_action = Some(AsyncAction::Authenticate(AuthRequest::Login(
        Credentials {
            email: "fast@vendor.test".into(),
            password: "pw".into(),
        },
    )));

    app.spawn_pending_action();
    tokio::time::sleep(Duration::from_millis(60)).await;
    tokio::task::yield_now().await;
    app.tick();

    assert_eq!(app.state.route, Route::Onboarding);
}
