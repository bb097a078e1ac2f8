//! # Configuration
//!
//! Environment-driven settings for the skill server.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{Context, Result};
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_REMINDER_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP endpoint listens on
    pub bind_addr: String,
    /// Expected application id; None disables verification
    pub skill_id: Option<String>,
    /// Timeout for reminder service calls
    pub reminder_api_timeout: Duration,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Config {
    /// Load configuration from process environment
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("SKILL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let skill_id = lookup("SKILL_ID").filter(|id| !id.trim().is_empty());

        let timeout_secs = match lookup("REMINDER_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("REMINDER_API_TIMEOUT_SECS must be a whole number, got '{raw}'"))?,
            None => DEFAULT_REMINDER_API_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(anyhow::anyhow!("REMINDER_API_TIMEOUT_SECS must be greater than zero"));
        }

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            bind_addr,
            skill_id,
            reminder_api_timeout: Duration::from_secs(timeout_secs),
            log_level,
        })
    }
}
