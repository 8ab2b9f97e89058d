//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into caller-level operations.
//! - Report write outcomes as `EmployeeOperationResult` values.

pub mod employee_service;
