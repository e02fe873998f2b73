use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/metrics", get(handlers::get_metrics))
        .route("/api/sync-status", get(handlers::get_sync_status))
        .route("/api/refresh", post(handlers::post_refresh))
        .with_state(state)
}
