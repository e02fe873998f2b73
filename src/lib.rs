pub mod app;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod freshness;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod state;
pub mod sync;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
