//! Outcome snapshot of a single employee operation.

use crate::model::employee::EmployeeId;
use serde::Serialize;

/// Immutable report of whether an operation on one employee completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeOperationResult {
    completed: bool,
    target_employee_id: EmployeeId,
}

impl EmployeeOperationResult {
    pub fn new(completed: bool, target_employee_id: EmployeeId) -> Self {
        Self {
            completed,
            target_employee_id,
        }
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn target_employee_id(&self) -> EmployeeId {
        self.target_employee_id
    }
}

#[cfg(test)]
mod tests {
    use super::EmployeeOperationResult;

    #[test]
    fn accessors_return_constructed_values() {
        let result = EmployeeOperationResult::new(true, 7);
        assert!(result.completed());
        assert_eq!(result.target_employee_id(), 7);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(EmployeeOperationResult::new(false, 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "completed": false, "targetEmployeeId": 3 })
        );
    }
}
