use chrono::NaiveDate;
use rusqlite::Connection;
use weatherlog_core::db::open_db_in_memory;
use weatherlog_core::{
    ForecastRecord, ForecastService, ForecastStore, SqliteForecastStore, StoreError,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn add_then_list_roundtrip_preserves_all_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = ForecastService::new(SqliteForecastStore::new(&conn));

    service
        .add_forecast("Paris", "France", 22, "Sunny", date(2024, 6, 1))
        .unwrap();

    let listed = service.list_forecasts().unwrap();
    assert_eq!(listed.len(), 1);

    let (forecast, location) = &listed[0];
    assert_eq!(location.city, "Paris");
    assert_eq!(location.country, "France");
    assert_eq!(forecast.temperature, 22);
    assert_eq!(forecast.conditions, "Sunny");
    assert_eq!(forecast.date, date(2024, 6, 1));
    assert_eq!(forecast.location_id, location.id);
}

#[test]
fn search_returns_exact_city_matches_and_empty_for_unknown_city() {
    let conn = open_db_in_memory().unwrap();
    let service = ForecastService::new(SqliteForecastStore::new(&conn));

    service
        .add_forecast("Paris", "France", 22, "Sunny", date(2024, 6, 1))
        .unwrap();

    let hits = service.search_forecasts("Paris").unwrap();
    assert_eq!(hits.len(), 1);
    let record = ForecastRecord::from((&hits[0].0, &hits[0].1));
    assert_eq!(
        record,
        ForecastRecord {
            city: "Paris".to_string(),
            country: "France".to_string(),
            date: date(2024, 6, 1),
            temperature: 22,
            conditions: "Sunny".to_string(),
        }
    );

    assert!(service.search_forecasts("Berlin").unwrap().is_empty());
}

#[test]
fn search_is_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let service = ForecastService::new(SqliteForecastStore::new(&conn));

    service
        .add_forecast("Paris", "France", 22, "Sunny", date(2024, 6, 1))
        .unwrap();

    assert!(service.search_forecasts("paris").unwrap().is_empty());
    assert!(service.search_forecasts("PARIS").unwrap().is_empty());
}

#[test]
fn search_equals_city_filtered_subset_of_list() {
    let conn = open_db_in_memory().unwrap();
    let service = ForecastService::new(SqliteForecastStore::new(&conn));

    service
        .add_forecast("Paris", "France", 22, "Sunny", date(2024, 6, 1))
        .unwrap();
    service
        .add_forecast("Berlin", "Germany", 15, "Cloudy", date(2024, 6, 2))
        .unwrap();
    service
        .add_forecast("Paris", "France", 18, "Rainy", date(2024, 6, 3))
        .unwrap();

    let listed = service.list_forecasts().unwrap();
    let expected: Vec<_> = listed
        .iter()
        .filter(|(_, location)| location.city == "Paris")
        .cloned()
        .collect();

    let searched = service.search_forecasts("Paris").unwrap();
    assert_eq!(searched, expected);
    assert_eq!(searched.len(), 2);
}

#[test]
fn list_keeps_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let service = ForecastService::new(SqliteForecastStore::new(&conn));

    service
        .add_forecast("Oslo", "Norway", 5, "Snowy", date(2024, 1, 10))
        .unwrap();
    service
        .add_forecast("Rome", "Italy", 28, "Sunny", date(2024, 7, 4))
        .unwrap();
    service
        .add_forecast("Lima", "Peru", 19, "Cloudy", date(2024, 3, 21))
        .unwrap();

    let cities: Vec<_> = service
        .list_forecasts()
        .unwrap()
        .into_iter()
        .map(|(_, location)| location.city)
        .collect();
    assert_eq!(cities, ["Oslo", "Rome", "Lima"]);
}

#[test]
fn repeated_city_creates_independent_location_rows() {
    let conn = open_db_in_memory().unwrap();
    let service = ForecastService::new(SqliteForecastStore::new(&conn));

    service
        .add_forecast("Paris", "France", 22, "Sunny", date(2024, 6, 1))
        .unwrap();
    service
        .add_forecast("Paris", "France", 17, "Rainy", date(2024, 6, 2))
        .unwrap();

    let listed = service.list_forecasts().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].1.city, listed[1].1.city);
    assert_eq!(listed[0].1.country, listed[1].1.country);
    assert_ne!(listed[0].1.id, listed[1].1.id);
}

#[test]
fn insert_forecast_with_unknown_location_fails_and_writes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteForecastStore::new(&conn);

    let err = store
        .insert_forecast(9999, 10, "Cloudy", date(2024, 6, 1))
        .unwrap_err();
    assert!(matches!(err, StoreError::Referential(9999)));

    assert!(store.all_forecasts().unwrap().is_empty());
    assert_eq!(count_rows(&conn, "weather_forecasts"), 0);
}

#[test]
fn empty_required_fields_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteForecastStore::new(&conn);

    let err = store.insert_location("", "France").unwrap_err();
    assert!(matches!(err, StoreError::Constraint("city")));

    let err = store.insert_location("Paris", "   ").unwrap_err();
    assert!(matches!(err, StoreError::Constraint("country")));

    let location_id = store.insert_location("Paris", "France").unwrap();
    let err = store
        .insert_forecast(location_id, 22, "", date(2024, 6, 1))
        .unwrap_err();
    assert!(matches!(err, StoreError::Constraint("conditions")));
}

#[test]
fn failed_forecast_half_leaves_orphan_location_persisted() {
    let conn = open_db_in_memory().unwrap();
    let service = ForecastService::new(SqliteForecastStore::new(&conn));

    let err = service
        .add_forecast("Oslo", "Norway", 5, "", date(2024, 1, 10))
        .unwrap_err();
    assert!(matches!(err, StoreError::Constraint("conditions")));

    // The two-step write has no rollback: the location row stays behind.
    assert_eq!(count_rows(&conn, "locations"), 1);
    assert_eq!(count_rows(&conn, "weather_forecasts"), 0);
    assert!(service.list_forecasts().unwrap().is_empty());
}

fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
