//! Forecast store contract and SQLite implementation.
//!
//! # Responsibility
//! - Append-only persistence of `Location` and `Forecast` rows.
//! - Eager, explicit join of forecasts with their owning location on read.
//!
//! # Invariants
//! - `insert_forecast` verifies the referenced location exists before
//!   writing; a failed write leaves no forecast row behind.
//! - Read results keep insertion order; no implicit reordering.

use crate::db::DbError;
use crate::model::forecast::{Forecast, ForecastId, Location, LocationId};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const JOINED_SELECT_SQL: &str = "SELECT
    f.id AS forecast_id,
    f.temperature,
    f.conditions,
    f.date,
    f.location_id,
    l.city,
    l.country
FROM weather_forecasts f
JOIN locations l ON l.id = f.location_id";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for forecast persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    /// A required text field was empty on write. Carries the field name.
    Constraint(&'static str),
    /// A forecast write referenced a location that does not exist.
    Referential(LocationId),
    Db(DbError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constraint(field) => write!(f, "required field `{field}` is empty"),
            Self::Referential(id) => write!(f, "location not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted forecast data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Constraint(_) | Self::Referential(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage interface for forecast create and query operations.
pub trait ForecastStore {
    fn insert_location(&self, city: &str, country: &str) -> StoreResult<LocationId>;
    fn insert_forecast(
        &self,
        location_id: LocationId,
        temperature: i32,
        conditions: &str,
        date: NaiveDate,
    ) -> StoreResult<ForecastId>;
    fn all_forecasts(&self) -> StoreResult<Vec<(Forecast, Location)>>;
    fn forecasts_by_city(&self, city: &str) -> StoreResult<Vec<(Forecast, Location)>>;
}

/// SQLite-backed forecast store.
///
/// Borrows an already-bootstrapped connection (see `db::open_db`); the
/// connection is expected to outlive the process session.
pub struct SqliteForecastStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteForecastStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn location_exists(&self, id: LocationId) -> StoreResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM locations WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl ForecastStore for SqliteForecastStore<'_> {
    fn insert_location(&self, city: &str, country: &str) -> StoreResult<LocationId> {
        if city.trim().is_empty() {
            return Err(StoreError::Constraint("city"));
        }
        if country.trim().is_empty() {
            return Err(StoreError::Constraint("country"));
        }

        self.conn.execute(
            "INSERT INTO locations (city, country) VALUES (?1, ?2);",
            params![city, country],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn insert_forecast(
        &self,
        location_id: LocationId,
        temperature: i32,
        conditions: &str,
        date: NaiveDate,
    ) -> StoreResult<ForecastId> {
        if conditions.trim().is_empty() {
            return Err(StoreError::Constraint("conditions"));
        }
        if !self.location_exists(location_id)? {
            return Err(StoreError::Referential(location_id));
        }

        self.conn.execute(
            "INSERT INTO weather_forecasts (temperature, conditions, date, location_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![temperature, conditions, date, location_id],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn all_forecasts(&self) -> StoreResult<Vec<(Forecast, Location)>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{JOINED_SELECT_SQL} ORDER BY f.id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut results = Vec::new();

        while let Some(row) = rows.next()? {
            results.push(parse_joined_row(row)?);
        }

        Ok(results)
    }

    fn forecasts_by_city(&self, city: &str) -> StoreResult<Vec<(Forecast, Location)>> {
        // Exact, case-sensitive equality on the joined city column.
        let mut stmt = self.conn.prepare(&format!(
            "{JOINED_SELECT_SQL} WHERE l.city = ?1 ORDER BY f.id ASC;"
        ))?;
        let mut rows = stmt.query([city])?;
        let mut results = Vec::new();

        while let Some(row) = rows.next()? {
            results.push(parse_joined_row(row)?);
        }

        Ok(results)
    }
}

fn parse_joined_row(row: &Row<'_>) -> StoreResult<(Forecast, Location)> {
    let date: NaiveDate = row.get("date").map_err(|err| match err {
        rusqlite::Error::FromSqlConversionFailure(..) => StoreError::InvalidData(format!(
            "unparseable date in weather_forecasts.date: {err}"
        )),
        other => StoreError::from(other),
    })?;

    let forecast = Forecast {
        id: row.get("forecast_id")?,
        temperature: row.get("temperature")?,
        conditions: row.get("conditions")?,
        date,
        location_id: row.get("location_id")?,
    };
    let location = Location {
        id: forecast.location_id,
        city: row.get("city")?,
        country: row.get("country")?,
    };

    Ok((forecast, location))
}
