use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_COOLDOWN_SECS: u64 = 60;

/// Runtime settings, resolved from the environment once at startup.
/// The trigger token stays here, server-side; it is never rendered
/// into the page or echoed in any response.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub sync_status_path: PathBuf,
    pub trigger_url: Option<String>,
    pub trigger_token: Option<String>,
    pub trigger_ref: String,
    pub cooldown: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let data_path = env::var("DASHBOARD_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/daily_summary.csv"));

        let sync_status_path = env::var("SYNC_STATUS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/sync_status.json"));

        let cooldown_secs = env::var("REFRESH_COOLDOWN_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_COOLDOWN_SECS);

        Self {
            port,
            data_path,
            sync_status_path,
            trigger_url: env::var("TRIGGER_URL").ok().filter(|url| !url.is_empty()),
            trigger_token: env::var("TRIGGER_TOKEN").ok().filter(|tok| !tok.is_empty()),
            trigger_ref: env::var("TRIGGER_REF").unwrap_or_else(|_| "main".to_string()),
            cooldown: Duration::from_secs(cooldown_secs),
        }
    }
}
