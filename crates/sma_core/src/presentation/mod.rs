//! Presentation-facing value objects returned to callers.

pub mod employee_result;
