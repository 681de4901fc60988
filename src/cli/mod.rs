// ABOUTME: CLI argument parsing and command routing for genie-onboard
//
// Provides command-line interface for:
// - Launching the vendor onboarding TUI (tui, default)
// - Printing the effective configuration (config)

pub mod config;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::router::Route;
use crate::components::theme::Theme;

/// Vendor onboarding in the terminal: sign in, then complete the application wizard
#[derive(Parser, Debug)]
#[command(name = "genie-onboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Screen to open on start (/login, /signup, /onboarding)
    #[arg(long, global = true, default_value = "/login")]
    pub route: String,

    /// Config file to use instead of ~/.genie-onboard/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured color theme
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    pub fn start_route(&self) -> Route {
        Route::resolve(&self.route)
    }
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Print the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_login_tui() {
        let cli = Cli::parse_from(["genie-onboard"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.start_route(), Route::Login);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "genie-onboard",
            "config",
            "--route",
            "/onboarding",
            "--theme",
            "light",
            "--format",
            "json",
        ]);
        assert_eq!(cli.command, Some(Commands::Config));
        assert_eq!(cli.start_route(), Route::Onboarding);
        assert_eq!(cli.theme, Some(Theme::Light));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_route_falls_back() {
        let cli = Cli::parse_from(["genie-onboard", "--route", "/admin"]);
        assert_eq!(cli.start_route(), Route::Login);
    }
}
