//! Domain model for forecast persistence.
//!
//! # Responsibility
//! - Define the canonical records shared by store, service and callers.
//!
//! # Invariants
//! - Identifiers are storage-assigned and immutable once assigned.
//! - Records are never mutated after creation in this scope.

pub mod forecast;
