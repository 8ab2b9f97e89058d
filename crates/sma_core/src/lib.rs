//! Core staff-records logic: employees, working forms and the operations
//! callers run against them.

pub mod db;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
    LoggingError,
};
pub use model::employee::{
    Employee, EmployeeField, EmployeeId, Gender, NewEmployee, UnknownEmployeeField,
};
pub use model::working_form::{WorkingForm, WorkingFormId};
pub use presentation::employee_result::EmployeeOperationResult;
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository,
};
pub use service::employee_service::EmployeeService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
