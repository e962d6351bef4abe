//! Use-case services over the storage layer.
//!
//! # Responsibility
//! - Provide stable entry points for collaborators (CLI and friends).
//! - Delegate persistence to store implementations.
//!
//! # Invariants
//! - Service APIs never bypass store validation/persistence contracts.
//! - The service layer holds no cached state; every call round-trips
//!   through the store.

pub mod forecast_service;
