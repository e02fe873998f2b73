use crate::errors::AppError;
use crate::models::{MetricsQuery, MetricsResponse, RefreshResponse, SummaryResponse, SyncStatus};
use crate::state::AppState;
use crate::ui::render_index;
use crate::{dataset, freshness, metrics, sync};
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::info;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

/// Re-reads the summary file on every call; nothing is cached across
/// requests, so a regenerated file shows up on the next page load.
pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let records = dataset::load_records(&state.config.data_path).await;
    let freshness = freshness::badge(records.last().map(|record| record.date.as_str()));

    Json(SummaryResponse {
        total_revenue: dataset::total_revenue(&records),
        total_refunds: dataset::total_refunds(&records),
        total_orders: dataset::total_orders(&records),
        freshness,
        records,
    })
}

pub async fn get_metrics(
    State(state): State<AppState>,
    Query(query): Query<MetricsQuery>,
) -> Json<MetricsResponse> {
    let records = dataset::load_records(&state.config.data_path).await;
    let ad_spend = metrics::parse_ad_spend(&query.ad_spend);

    Json(metrics::compute(
        dataset::total_revenue(&records),
        dataset::total_refunds(&records),
        ad_spend,
    ))
}

pub async fn get_sync_status(State(state): State<AppState>) -> Json<SyncStatus> {
    Json(sync::load_status(&state.config.sync_status_path).await)
}

/// Proxy trigger for the backend refresh job. Guarded by a server-side
/// cooldown: a request during the cooldown is rejected without issuing
/// an outbound call. Failure clears the cooldown so the user can retry.
pub async fn post_refresh(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    if let Some(remaining) = state.cooldown_remaining().await {
        return Err(AppError::cooldown(format!(
            "refresh already requested, retry in {}s",
            remaining.as_secs().max(1)
        )));
    }

    state.arm_cooldown().await;
    info!("refresh trigger requested");

    match sync::trigger_refresh(&state.http, &state.config).await {
        Ok(()) => Ok(Json(RefreshResponse {
            triggered: true,
            cooldown_secs: state.config.cooldown.as_secs(),
        })),
        Err(err) => {
            state.clear_cooldown().await;
            Err(err)
        }
    }
}
