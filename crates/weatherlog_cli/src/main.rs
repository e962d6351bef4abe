//! Interactive menu loop for Weatherlog.
//!
//! # Responsibility
//! - Prompt for input, generate demo forecast values, format results.
//! - Drive `weatherlog_core` through its service surface only.
//!
//! All persistence rules live in the core crate; this binary is glue.

use chrono::{Duration, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use std::error::Error;
use std::io::{self, BufRead, Write};
use weatherlog_core::db::open_db;
use weatherlog_core::{
    default_log_level, init_logging, Forecast, ForecastService, SqliteForecastStore,
};

const DB_FILE: &str = "weatherlog.db";

/// Demo vocabulary only; the core stores conditions as free text.
const CONDITIONS: [&str; 4] = ["Sunny", "Cloudy", "Rainy", "Snowy"];

fn main() {
    if let Err(err) = run() {
        eprintln!("weatherlog: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    init_best_effort_logging();

    // One connection for the whole session, dropped on exit.
    let conn = open_db(DB_FILE)?;
    let service = ForecastService::new(SqliteForecastStore::new(&conn));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Weather Forecast CLI");
        println!("1. Add Weather Forecast");
        println!("2. List Weather Forecasts");
        println!("3. Search Weather Forecasts");
        println!("4. Exit");

        let Some(choice) = prompt(&mut lines, "Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(city) = prompt(&mut lines, "Enter city: ")? else {
                    break;
                };
                let Some(country) = prompt(&mut lines, "Enter country: ")? else {
                    break;
                };
                match service.add_forecast(
                    &city,
                    &country,
                    demo_temperature(),
                    demo_conditions(),
                    demo_date(),
                ) {
                    Ok(_) => println!("Weather forecast added successfully!"),
                    Err(err) => println!("Could not add weather forecast: {err}"),
                }
            }
            "2" => {
                for (forecast, location) in service.list_forecasts()? {
                    println!("Location: {}, {}", location.city, location.country);
                    print_forecast_body(&forecast);
                }
            }
            "3" => {
                let Some(city) = prompt(&mut lines, "Enter city to search: ")? else {
                    break;
                };
                let matches = service.search_forecasts(&city)?;
                if matches.is_empty() {
                    println!("No weather forecasts found for {city}.");
                } else {
                    println!("Weather forecasts for {city}:");
                    for (forecast, _) in matches {
                        print_forecast_body(&forecast);
                    }
                }
            }
            "4" => {
                println!("Exiting Weather Forecast CLI. Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please select a valid option."),
        }
    }

    Ok(())
}

/// Prints `label`, reads one trimmed line. `None` means stdin was closed.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn print_forecast_body(forecast: &Forecast) {
    println!("Date: {}", forecast.date);
    println!("Temperature: {}°C", forecast.temperature);
    println!("Conditions: {}", forecast.conditions);
    println!("{}", "-".repeat(30));
}

fn demo_temperature() -> i32 {
    rand::thread_rng().gen_range(0..=40)
}

fn demo_conditions() -> &'static str {
    CONDITIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Sunny")
}

/// A date 1 to 7 days from today, like the original demo data.
fn demo_date() -> NaiveDate {
    let days_ahead = rand::thread_rng().gen_range(1..=7);
    Local::now().date_naive() + Duration::days(days_ahead)
}

fn init_best_effort_logging() {
    let log_dir = std::env::temp_dir().join("weatherlog").join("logs");
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), log_dir) {
        // The CLI stays usable without file logs.
        eprintln!("weatherlog: logging disabled: {err}");
    }
}
