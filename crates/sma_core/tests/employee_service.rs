mod common;

use common::{employee_count, fixture_employees, hatoyama, seeded_connection};
use sma_core::{
    EmployeeField, EmployeeOperationResult, EmployeeService, RepoError, SqliteEmployeeRepository,
};

#[test]
fn register_reports_store_assigned_id() {
    let conn = seeded_connection();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    let result = service.register(&hatoyama()).unwrap();
    assert_eq!(result, EmployeeOperationResult::new(true, 6));
    assert_eq!(service.employees().unwrap().len(), 6);
}

#[test]
fn update_reports_completion_per_matched_row() {
    let conn = seeded_connection();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    let hit = service.update(1, EmployeeField::Age, Some("60")).unwrap();
    assert!(hit.completed());
    assert_eq!(hit.target_employee_id(), 1);
    assert_eq!(service.employee(1).unwrap().unwrap().age, 60);

    let miss = service.update(42, EmployeeField::Age, Some("60")).unwrap();
    assert!(!miss.completed());
    assert_eq!(miss.target_employee_id(), 42);
}

#[test]
fn update_by_name_rejects_unknown_field_without_touching_store() {
    let conn = seeded_connection();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let service = EmployeeService::new(&repo);

    let err = service.update_by_name(1, "salary", Some("1")).unwrap_err();
    assert!(matches!(err, RepoError::UnknownField(_)));
    assert_eq!(service.employees().unwrap(), fixture_employees());
}

#[test]
fn update_by_name_propagates_data_integrity_errors() {
    let conn = seeded_connection();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    let err = service.update_by_name(1, "last_name", None).unwrap_err();
    assert!(matches!(err, RepoError::DataIntegrity(_)));
}

#[test]
fn remove_reports_completion_and_missing_ids() {
    let conn = seeded_connection();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    assert_eq!(
        service.remove(2).unwrap(),
        EmployeeOperationResult::new(true, 2)
    );
    assert_eq!(
        service.remove(2).unwrap(),
        EmployeeOperationResult::new(false, 2)
    );
    assert_eq!(employee_count(&conn), 4);
}

#[test]
fn working_forms_pass_through() {
    let conn = seeded_connection();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    let labels: Vec<_> = service
        .working_forms()
        .unwrap()
        .into_iter()
        .map(|form| form.label)
        .collect();
    assert_eq!(
        labels,
        vec!["Full-time", "Full-time (shortened hours)", "Part-time"]
    );
}
