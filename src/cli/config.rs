// ABOUTME: Config command - resolves the effective configuration and prints it

use anyhow::{Context, Result};
use std::path::PathBuf;

use super::{Cli, OutputFormat};
use crate::config::AppConfig;

/// Config file location and the settings after CLI overrides
pub struct EffectiveConfig {
    pub path: PathBuf,
    pub config: AppConfig,
}

/// Load the config named on the command line (or the default file) and apply flag overrides
pub fn resolve(cli: &Cli) -> Result<EffectiveConfig> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::default_path()?,
    };
    let mut config = AppConfig::load_from(&path)?;
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }
    Ok(EffectiveConfig { path, config })
}

pub fn execute(cli: &Cli) -> Result<()> {
    let effective = resolve(cli)?;
    print!("{}", render(&effective, cli.format)?);
    Ok(())
}

fn render(effective: &EffectiveConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": effective.path.display().to_string(),
                "exists": effective.path.exists(),
                "config": effective.config,
            });
            let mut out = serde_json::to_string_pretty(&value).context("Failed to serialize config")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => {
            let status = if effective.path.exists() { "" } else { " (not found, using defaults)" };
            let body = toml::to_string_pretty(&effective.config).context("Failed to serialize config")?;
            Ok(format!("# {}{}\n{}", effective.path.display(), status, body))
        }
    }
}
