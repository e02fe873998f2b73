use crate::config::Config;
use crate::errors::AppError;
use crate::models::SyncStatus;
use serde_json::json;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// Reads the ingestion job's status document. Missing or malformed
/// documents degrade to the default (idle, no timestamp); the poller
/// never surfaces an error to the page.
pub async fn load_status(path: &Path) -> SyncStatus {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(status) => status,
            Err(err) => {
                warn!("failed to parse sync status file: {err}");
                SyncStatus::default()
            }
        },
        Err(err) => {
            debug!("failed to read sync status file: {err}");
            SyncStatus::default()
        }
    }
}

/// Issues the one outbound trigger call to the remote job endpoint. The
/// bearer credential comes from the server environment and is attached
/// here only; it never appears in the page or in any response body.
/// One attempt, no retry.
pub async fn trigger_refresh(http: &reqwest::Client, config: &Config) -> Result<(), AppError> {
    let url = config
        .trigger_url
        .as_deref()
        .ok_or_else(|| AppError::not_configured("refresh trigger is not configured"))?;

    let mut request = http.post(url).json(&json!({ "ref": config.trigger_ref }));
    if let Some(token) = config.trigger_token.as_deref() {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|err| {
        warn!("refresh trigger request failed: {err}");
        AppError::upstream("refresh trigger request failed")
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("refresh trigger returned {status}");
        return Err(AppError::upstream(format!(
            "refresh trigger returned {status}"
        )));
    }

    info!("refresh trigger accepted (ref {})", config.trigger_ref);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn missing_status_file_degrades_to_idle() {
        let status = load_status(Path::new("/nonexistent/sync_status.json")).await;
        assert!(!status.is_syncing());
        assert!(status.last_updated.is_empty());
    }

    #[tokio::test]
    async fn malformed_status_file_degrades_to_idle() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();
        let status = load_status(file.path()).await;
        assert!(!status.is_syncing());
    }

    #[tokio::test]
    async fn syncing_status_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"status":"syncing","last_updated":"2026-08-30T07:00:00Z"}"#)
            .unwrap();
        let status = load_status(file.path()).await;
        assert!(status.is_syncing());
        assert_eq!(status.last_updated, "2026-08-30T07:00:00Z");
    }

    #[tokio::test]
    async fn unconfigured_trigger_is_rejected() {
        let config = Config {
            port: 0,
            data_path: "unused".into(),
            sync_status_path: "unused".into(),
            trigger_url: None,
            trigger_token: None,
            trigger_ref: "main".to_string(),
            cooldown: std::time::Duration::from_secs(60),
        };
        let err = trigger_refresh(&reqwest::Client::new(), &config)
            .await
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::SERVICE_UNAVAILABLE);
    }
}
