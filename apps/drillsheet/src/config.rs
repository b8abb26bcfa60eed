use anyhow::{Context, Result};

pub const DEFAULT_OUTPUT: &str = "worksheet.pdf";
pub const DEFAULT_APP_NAME: &str = "Drillsheet";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Document path for console mode and the default for `generate --output`.
    pub output_path: String,
    /// Printed in every page header.
    pub app_name: String,
    /// Fixed seed for reproducible sheets. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Retry cap of the operand generator.
    pub max_attempts: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup("DRILLSHEET_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .context("DRILLSHEET_SEED must be an unsigned integer")?,
            ),
            None => None,
        };

        let max_attempts = match lookup("DRILLSHEET_MAX_ATTEMPTS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("DRILLSHEET_MAX_ATTEMPTS must be an unsigned integer")?,
            None => DEFAULT_MAX_ATTEMPTS,
        };
        if max_attempts == 0 {
            anyhow::bail!("DRILLSHEET_MAX_ATTEMPTS must be greater than zero");
        }

        Ok(Config {
            output_path: lookup("DRILLSHEET_OUTPUT").unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            app_name: lookup("DRILLSHEET_APP_NAME")
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            seed,
            max_attempts,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
