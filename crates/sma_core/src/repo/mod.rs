//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for staff records.
//! - Keep SQL details out of service and CLI layers.
//!
//! # Invariants
//! - Constraint enforcement belongs to the schema; repositories surface
//!   violations as `RepoError::DataIntegrity` and never swallow them.
//! - Operations on a missing id affect zero rows and are not errors.

pub mod employee_repo;
