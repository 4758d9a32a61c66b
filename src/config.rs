use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

pub const EVENTBRITE_API_BASE: &str = "https://www.eventbriteapi.com/v3";
pub const AIRTABLE_API_BASE: &str = "https://api.airtable.com/v0";

/// Everything one sync run needs, built once in main and passed to each
/// client at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub eventbrite_token: String,
    pub airtable_token: String,
    pub airtable_base_id: String,

    /// API roots, overridable for tests.
    pub eventbrite_api_base: String,
    pub airtable_api_base: String,
}

/// Optional config file values. Environment variables take precedence.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    eventbrite_token: Option<String>,
    airtable_token: Option<String>,
    airtable_base_id: Option<String>,
}

/// Get the config directory path (~/.config/ticketsync)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("ticketsync");
    Ok(config_dir)
}

/// Get the config file path (~/.config/ticketsync/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

fn load_file_config() -> Result<FileConfig> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: FileConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

impl Config {
    /// Load tokens from the environment, falling back to the config file.
    pub fn load() -> Result<Self> {
        let file = load_file_config()?;

        let eventbrite_token = setting("EVENTBRITE_TOKEN", file.eventbrite_token)?;
        let airtable_token = setting("AIRTABLE_TOKEN", file.airtable_token)?;
        let airtable_base_id = setting("AIRTABLE_BASE_ID", file.airtable_base_id)?;

        Ok(Config {
            eventbrite_token,
            airtable_token,
            airtable_base_id,
            eventbrite_api_base: EVENTBRITE_API_BASE.to_string(),
            airtable_api_base: AIRTABLE_API_BASE.to_string(),
        })
    }
}

fn setting(var: &str, fallback: Option<String>) -> Result<String> {
    if let Ok(value) = std::env::var(var) {
        if !value.is_empty() {
            return Ok(value);
        }
    }

    if let Some(value) = fallback {
        if !value.is_empty() {
            return Ok(value);
        }
    }

    anyhow::bail!(
        "{} is not set.\n\n\
        Export it (or put it in a .env file next to your crontab entry),\n\
        or add it to {}:\n\n\
        eventbrite_token = \"...\"\n\
        airtable_token = \"...\"\n\
        airtable_base_id = \"...\"",
        var,
        config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "~/.config/ticketsync/config.toml".to_string())
    )
}
