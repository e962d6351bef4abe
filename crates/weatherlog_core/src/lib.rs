//! Core domain logic for Weatherlog.
//! This crate is the single source of truth for forecast persistence rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::forecast::{Forecast, ForecastId, ForecastRecord, Location, LocationId};
pub use service::forecast_service::ForecastService;
pub use store::forecast_store::{ForecastStore, SqliteForecastStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
