use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use jobboard_core::DEFAULT_SITE_URL;

use super::logging::LogDestination;

/// Application configuration loaded from environment variables.
/// Every variable is optional; absent ones fall back to local defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the job API. `None` runs against the in-memory board.
    pub api_url: Option<String>,
    pub data_dir: PathBuf,
    pub site_url: String,
    /// JSON job list seeding the in-memory board.
    pub seed_file: Option<PathBuf>,
    pub log_destination: LogDestination,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_destination = match non_empty("JOBBOARD_LOG").as_deref() {
            None | Some("file") => LogDestination::File,
            Some("terminal") => LogDestination::Terminal,
            Some("both") => LogDestination::Both,
            Some(other) => bail!("JOBBOARD_LOG must be one of file, terminal, both (got '{other}')"),
        };

        let request_timeout = match non_empty("JOBBOARD_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse::<u64>()
                    .context("JOBBOARD_TIMEOUT_MS must be a number of milliseconds")?,
            ),
            None => Duration::from_secs(10),
        };

        Ok(AppConfig {
            api_url: non_empty("JOBBOARD_API_URL"),
            data_dir: non_empty("JOBBOARD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            site_url: non_empty("JOBBOARD_SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            seed_file: non_empty("JOBBOARD_SEED_FILE").map(PathBuf::from),
            log_destination,
            request_timeout,
        })
    }
}
