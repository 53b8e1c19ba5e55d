//! Environment-driven bot configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_ACTIVITY_DATA_PATH: &str = "activity_data.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Register commands for this guild only (faster propagation during development)
    pub discord_guild_id: Option<u64>,
    pub log_level: String,
    /// Roles allowed to open recruitment posts and configure nickname panels
    pub recruitment_role_ids: Vec<u64>,
    /// Channel that receives submitted recruitment posts
    pub recruitment_channel_id: Option<u64>,
    pub activity_data_path: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .context("DISCORD_TOKEN must be set")?;

        let discord_guild_id = lookup("DISCORD_GUILD_ID")
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_snowflake("DISCORD_GUILD_ID", &v))
            .transpose()?;

        let recruitment_channel_id = lookup("RECRUITMENT_CHANNEL_ID")
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_snowflake("RECRUITMENT_CHANNEL_ID", &v))
            .transpose()?;

        let recruitment_role_ids = match lookup("RECRUITMENT_ROLE_IDS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_snowflake("RECRUITMENT_ROLE_IDS", s))
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            discord_token,
            discord_guild_id,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            recruitment_role_ids,
            recruitment_channel_id,
            activity_data_path: lookup("ACTIVITY_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ACTIVITY_DATA_PATH)),
        })
    }
}

fn parse_snowflake(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a numeric Discord id, got '{value}'"))
}
