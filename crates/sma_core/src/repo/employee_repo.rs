//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over `employee`, joined with `working_form`.
//! - Translate SQLite constraint failures into one integrity error kind.
//!
//! # Invariants
//! - Inserts never bind `employee_id`; the store assigns it.
//! - Updates touch exactly one whitelisted column.
//! - Every call is a single statement; failure leaves the store unchanged.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::employee::{
    Employee, EmployeeField, EmployeeId, Gender, NewEmployee, UnknownEmployeeField,
};
use crate::model::working_form::WorkingForm;
use log::{info, warn};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    e.employee_id AS employee_id,
    e.last_name AS last_name,
    e.first_name AS first_name,
    e.last_name_romaji AS last_name_romaji,
    e.first_name_romaji AS first_name_romaji,
    e.birth_date AS birth_date,
    e.age AS age,
    e.gender AS gender,
    e.phone_number AS phone_number,
    e.email AS email,
    e.hire_date AS hire_date,
    e.leave_date AS leave_date,
    w.working_form_id AS working_form_id,
    w.label AS working_form_label
FROM employee e
INNER JOIN working_form w ON w.working_form_id = e.working_form_id";

const REQUIRED_EMPLOYEE_COLUMNS: &[&str] = &[
    "employee_id",
    "last_name",
    "first_name",
    "last_name_romaji",
    "first_name_romaji",
    "birth_date",
    "age",
    "gender",
    "phone_number",
    "email",
    "hire_date",
    "leave_date",
    "working_form_id",
];

const REQUIRED_WORKING_FORM_COLUMNS: &[&str] = &["working_form_id", "label"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// A NOT NULL, CHECK or FOREIGN KEY constraint rejected the write, or the
    /// insert payload was absent.
    DataIntegrity(String),
    Db(DbError),
    InvalidData(String),
    UnknownField(UnknownEmployeeField),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataIntegrity(_) => "data_integrity",
            Self::Db(_) => "db_error",
            Self::InvalidData(_) => "invalid_data",
            Self::UnknownField(_) => "unknown_field",
            Self::UninitializedConnection { .. } => "uninitialized_connection",
            Self::MissingRequiredTable(_) => "missing_table",
            Self::MissingRequiredColumn { .. } => "missing_column",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataIntegrity(message) => write!(f, "data integrity violation: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
            Self::UnknownField(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UnknownField(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        match value {
            DbError::Sqlite(err) => Self::from(err),
            other => Self::Db(other),
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Self::DataIntegrity(message.unwrap_or_else(|| failure.to_string()))
            }
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

impl From<UnknownEmployeeField> for RepoError {
    fn from(value: UnknownEmployeeField) -> Self {
        Self::UnknownField(value)
    }
}

/// Repository interface for employee CRUD operations.
pub trait EmployeeRepository {
    /// Returns every working form ordered by id.
    fn find_all_working_form(&self) -> RepoResult<Vec<WorkingForm>>;
    /// Returns every employee ordered by id, joined with its working form.
    fn find_all_employee(&self) -> RepoResult<Vec<Employee>>;
    fn find_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Persists a new employee and returns the store-assigned id.
    fn insert_employee(&self, employee: Option<&NewEmployee>) -> RepoResult<EmployeeId>;
    /// Sets one column on the matching row; returns the affected row count.
    fn update_employee(
        &self,
        field: EmployeeField,
        value: Option<&str>,
        id: EmployeeId,
    ) -> RepoResult<usize>;
    /// Removes the matching row; returns the affected row count.
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<usize>;
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for &R {
    fn find_all_working_form(&self) -> RepoResult<Vec<WorkingForm>> {
        (**self).find_all_working_form()
    }

    fn find_all_employee(&self) -> RepoResult<Vec<Employee>> {
        (**self).find_all_employee()
    }

    fn find_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        (**self).find_employee(id)
    }

    fn insert_employee(&self, employee: Option<&NewEmployee>) -> RepoResult<EmployeeId> {
        (**self).insert_employee(employee)
    }

    fn update_employee(
        &self,
        field: EmployeeField,
        value: Option<&str>,
        id: EmployeeId,
    ) -> RepoResult<usize> {
        (**self).update_employee(field, value, id)
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<usize> {
        (**self).delete_employee(id)
    }
}

/// SQLite-backed employee repository borrowing a migrated connection.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Wraps a connection after checking it carries the current schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   shape does not match what the queries expect.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        ensure_table_shape(conn, "working_form", REQUIRED_WORKING_FORM_COLUMNS)?;
        ensure_table_shape(conn, "employee", REQUIRED_EMPLOYEE_COLUMNS)?;

        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn find_all_working_form(&self) -> RepoResult<Vec<WorkingForm>> {
        let mut stmt = self.conn.prepare(
            "SELECT working_form_id, label
             FROM working_form
             ORDER BY working_form_id ASC;",
        )?;
        let forms = stmt
            .query_map([], |row| {
                Ok(WorkingForm::new(
                    row.get::<_, i64>("working_form_id")?,
                    row.get::<_, String>("label")?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(forms)
    }

    fn find_all_employee(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY e.employee_id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn find_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE e.employee_id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_employee_row(row)?)),
            None => Ok(None),
        }
    }

    fn insert_employee(&self, employee: Option<&NewEmployee>) -> RepoResult<EmployeeId> {
        let started_at = Instant::now();
        let result = match employee {
            Some(employee) => self.insert_row(employee),
            None => Err(RepoError::DataIntegrity(
                "employee payload is absent".to_string(),
            )),
        };

        match &result {
            Ok(id) => info!(
                "event=employee_insert module=repo status=ok employee_id={id} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_write_failure("employee_insert", None, started_at, err),
        }
        result
    }

    fn update_employee(
        &self,
        field: EmployeeField,
        value: Option<&str>,
        id: EmployeeId,
    ) -> RepoResult<usize> {
        let started_at = Instant::now();
        let result = self
            .conn
            .execute(
                &format!(
                    "UPDATE employee SET {} = ?1 WHERE employee_id = ?2;",
                    field.column()
                ),
                params![value, id],
            )
            .map_err(RepoError::from);

        match &result {
            Ok(changed) => info!(
                "event=employee_update module=repo status=ok employee_id={id} field={field} rows={changed} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_write_failure("employee_update", Some(id), started_at, err),
        }
        result
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<usize> {
        let started_at = Instant::now();
        let result = self
            .conn
            .execute("DELETE FROM employee WHERE employee_id = ?1;", [id])
            .map_err(RepoError::from);

        match &result {
            Ok(changed) => info!(
                "event=employee_delete module=repo status=ok employee_id={id} rows={changed} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_write_failure("employee_delete", Some(id), started_at, err),
        }
        result
    }
}

impl SqliteEmployeeRepository<'_> {
    fn insert_row(&self, employee: &NewEmployee) -> RepoResult<EmployeeId> {
        self.conn.execute(
            "INSERT INTO employee (
                last_name,
                first_name,
                last_name_romaji,
                first_name_romaji,
                birth_date,
                age,
                gender,
                phone_number,
                email,
                hire_date,
                leave_date,
                working_form_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12);",
            params![
                employee.last_name.as_deref(),
                employee.first_name.as_deref(),
                employee.last_name_romaji.as_deref(),
                employee.first_name_romaji.as_deref(),
                employee.birth_date,
                employee.age,
                employee.gender.map(Gender::as_db_str),
                employee.phone_number.as_deref(),
                employee.email.as_deref(),
                employee.hire_date,
                employee.leave_date,
                employee.working_form_id,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }
}

fn log_write_failure(
    event: &str,
    id: Option<EmployeeId>,
    started_at: Instant,
    err: &RepoError,
) {
    let id = id.map_or_else(|| "none".to_string(), |id| id.to_string());
    warn!(
        "event={event} module=repo status=error employee_id={id} duration_ms={} error_code={} error={err}",
        started_at.elapsed().as_millis(),
        err.code()
    );
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let gender_text: String = row.get("gender")?;
    let gender = Gender::from_db_str(&gender_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid gender `{gender_text}` in employee.gender"))
    })?;

    Ok(Employee {
        id: row.get("employee_id")?,
        last_name: row.get("last_name")?,
        first_name: row.get("first_name")?,
        last_name_romaji: row.get("last_name_romaji")?,
        first_name_romaji: row.get("first_name_romaji")?,
        birth_date: row.get("birth_date")?,
        age: row.get("age")?,
        gender,
        phone_number: row.get("phone_number")?,
        email: row.get("email")?,
        hire_date: row.get("hire_date")?,
        leave_date: row.get("leave_date")?,
        working_form: WorkingForm::new(
            row.get::<_, i64>("working_form_id")?,
            row.get::<_, String>("working_form_label")?,
        ),
    })
}

fn ensure_table_shape(
    conn: &Connection,
    table: &'static str,
    columns: &'static [&'static str],
) -> RepoResult<()> {
    let exists = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [table],
            |_| Ok(()),
        )
        .optional()?;
    if exists.is_none() {
        return Err(RepoError::MissingRequiredTable(table));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    match columns
        .iter()
        .find(|column| !present.iter().any(|name| name.as_str() == **column))
    {
        Some(&column) => Err(RepoError::MissingRequiredColumn { table, column }),
        None => Ok(()),
    }
}
