use crate::config::Config;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;

/// Everything the handlers share: settings, the outbound HTTP client,
/// and the refresh cooldown. Cooldown state lives here rather than in a
/// free-standing global.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    cooldown_until: Arc<Mutex<Option<Instant>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
            cooldown_until: Arc::new(Mutex::new(None)),
        }
    }

    /// Remaining cooldown, if one is armed.
    pub async fn cooldown_remaining(&self) -> Option<Duration> {
        let guard = self.cooldown_until.lock().await;
        guard.and_then(|until| until.checked_duration_since(Instant::now()))
    }

    pub async fn arm_cooldown(&self) {
        let mut guard = self.cooldown_until.lock().await;
        *guard = Some(Instant::now() + self.config.cooldown);
    }

    /// Cleared on trigger failure so the user can retry immediately.
    pub async fn clear_cooldown(&self) {
        let mut guard = self.cooldown_until.lock().await;
        *guard = None;
    }
}
