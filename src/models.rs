use serde::{Deserialize, Serialize};

/// One row of the daily summary table, in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    pub revenue: f64,
    pub refunds: f64,
    pub net: f64,
    pub orders: u64,
}

/// Status document written by the backend ingestion job. Any `status`
/// other than "syncing" counts as idle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SyncStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub last_updated: String,
}

impl SyncStatus {
    pub fn is_syncing(&self) -> bool {
        self.status == "syncing"
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub records: Vec<DailyRecord>,
    pub total_revenue: f64,
    pub total_refunds: f64,
    pub total_orders: u64,
    pub freshness: FreshnessResponse,
}

#[derive(Debug, Serialize)]
pub struct FreshnessResponse {
    pub label: String,
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    #[serde(default)]
    pub ad_spend: String,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub revenue: f64,
    pub refunds: f64,
    pub ad_spend: f64,
    pub net_profit: f64,
    pub efficiency: Option<f64>,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub triggered: bool,
    pub cooldown_secs: u64,
}
