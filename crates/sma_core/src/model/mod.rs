//! Staff domain model.
//!
//! # Responsibility
//! - Define employee and working-form records shared by repository,
//!   service and CLI layers.
//!
//! # Invariants
//! - Identifiers are assigned by the store and never chosen by callers.
//! - Required-field checks are owned by the schema, not by these types.

pub mod employee;
pub mod working_form;
