//! Employee use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for callers (CLI, future UI layers).
//! - Wrap repository outcomes into `EmployeeOperationResult`.
//!
//! # Invariants
//! - Repository errors propagate unchanged; no local recovery.
//! - A write on a missing id yields `completed = false`, not an error.

use crate::model::employee::{Employee, EmployeeField, EmployeeId, NewEmployee};
use crate::model::working_form::WorkingForm;
use crate::presentation::employee_result::EmployeeOperationResult;
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};

/// Use-case service wrapper for employee operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn working_forms(&self) -> RepoResult<Vec<WorkingForm>> {
        self.repo.find_all_working_form()
    }

    pub fn employees(&self) -> RepoResult<Vec<Employee>> {
        self.repo.find_all_employee()
    }

    pub fn employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.repo.find_employee(id)
    }

    /// Registers a new employee; the result targets the store-assigned id.
    pub fn register(&self, employee: &NewEmployee) -> RepoResult<EmployeeOperationResult> {
        let id = self.repo.insert_employee(Some(employee))?;
        Ok(EmployeeOperationResult::new(true, id))
    }

    /// Updates one field of one employee.
    ///
    /// # Contract
    /// - `completed` is `true` only when exactly one row changed.
    pub fn update(
        &self,
        id: EmployeeId,
        field: EmployeeField,
        value: Option<&str>,
    ) -> RepoResult<EmployeeOperationResult> {
        let changed = self.repo.update_employee(field, value, id)?;
        Ok(EmployeeOperationResult::new(changed == 1, id))
    }

    /// Same as [`Self::update`] with the field given by column name.
    pub fn update_by_name(
        &self,
        id: EmployeeId,
        field_name: &str,
        value: Option<&str>,
    ) -> RepoResult<EmployeeOperationResult> {
        let field = field_name.parse::<EmployeeField>()?;
        self.update(id, field, value)
    }

    /// Removes one employee; a missing id reports `completed = false`.
    pub fn remove(&self, id: EmployeeId) -> RepoResult<EmployeeOperationResult> {
        let changed = self.repo.delete_employee(id)?;
        Ok(EmployeeOperationResult::new(changed == 1, id))
    }
}
