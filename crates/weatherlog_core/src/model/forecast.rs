//! Location and forecast domain records.
//!
//! # Invariants
//! - `Location::id` and `Forecast::id` are assigned by the store on insert
//!   and never reused.
//! - `Forecast::location_id` references an existing `Location` row.
//! - `city`, `country` and `conditions` are non-empty text; emptiness is
//!   rejected at the store write boundary, not here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage-assigned identifier for a `Location` row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type LocationId = i64;

/// Storage-assigned identifier for a `Forecast` row.
pub type ForecastId = i64;

/// A city/country pair that forecasts attach to.
///
/// Every add creates a fresh row, even for a city/country text already on
/// record; callers that want dedup must do it themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub city: String,
    pub country: String,
}

/// A dated temperature and conditions reading owned by one `Location`.
///
/// `conditions` is free text at the storage level; the demo vocabulary
/// (Sunny, Cloudy, Rainy, Snowy) is a caller convention, not a constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub id: ForecastId,
    /// Degrees Celsius. No range is enforced here.
    pub temperature: i32,
    pub conditions: String,
    pub date: NaiveDate,
    pub location_id: LocationId,
}

/// Flat read model joining a forecast with its owning location's fields.
///
/// This is the shape handed to display-side callers; it deliberately drops
/// the row identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub city: String,
    pub country: String,
    pub date: NaiveDate,
    pub temperature: i32,
    pub conditions: String,
}

impl From<(&Forecast, &Location)> for ForecastRecord {
    fn from((forecast, location): (&Forecast, &Location)) -> Self {
        Self {
            city: location.city.clone(),
            country: location.country.clone(),
            date: forecast.date,
            temperature: forecast.temperature,
            conditions: forecast.conditions.clone(),
        }
    }
}
