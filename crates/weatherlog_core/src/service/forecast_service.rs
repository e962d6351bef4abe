//! Forecast use-case service.
//!
//! # Responsibility
//! - Keep the Location/Forecast pair consistent on the write path.
//! - Expose the read-side query surface used by collaborators.
//!
//! # Invariants
//! - `add_forecast` issues two sequential store writes with no rollback of
//!   the first if the second fails (see the method contract).
//! - Store errors propagate unmodified; no retries, no recovery here.

use crate::model::forecast::{Forecast, ForecastId, Location};
use crate::store::forecast_store::{ForecastStore, StoreResult};
use chrono::NaiveDate;
use log::debug;

/// Use-case service wrapper for forecast create and query operations.
///
/// Holds no state beyond the store handle; the store exclusively owns the
/// durable record set.
pub struct ForecastService<S: ForecastStore> {
    store: S,
}

impl<S: ForecastStore> ForecastService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a Location, then a Forecast owned by it.
    ///
    /// # Contract
    /// - Two sequential store writes. If the forecast write fails, the
    ///   freshly inserted location row remains persisted (an orphan
    ///   location with no forecasts). Callers get the store error as-is.
    /// - A repeated city/country pair still creates a new location row.
    /// - Returns the created forecast ID.
    pub fn add_forecast(
        &self,
        city: &str,
        country: &str,
        temperature: i32,
        conditions: &str,
        date: NaiveDate,
    ) -> StoreResult<ForecastId> {
        let location_id = self.store.insert_location(city, country)?;
        let forecast_id = self
            .store
            .insert_forecast(location_id, temperature, conditions, date)?;
        debug!(
            "event=forecast_added module=service status=ok forecast_id={forecast_id} location_id={location_id}"
        );
        Ok(forecast_id)
    }

    /// Lists every forecast joined with its owning location, in insertion
    /// order.
    pub fn list_forecasts(&self) -> StoreResult<Vec<(Forecast, Location)>> {
        self.store.all_forecasts()
    }

    /// Lists forecasts whose location city exactly equals `city`.
    ///
    /// An unknown city yields an empty vec, never an error; the caller
    /// decides how to report "no matches".
    pub fn search_forecasts(&self, city: &str) -> StoreResult<Vec<(Forecast, Location)>> {
        self.store.forecasts_by_city(city)
    }
}
