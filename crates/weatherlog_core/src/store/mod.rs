//! Storage layer contracts and SQLite implementation.
//!
//! # Responsibility
//! - Own the durable record set for locations and forecasts.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths reject empty required fields before SQL mutations.
//! - A forecast write must reference a location that exists at write time.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod forecast_store;
