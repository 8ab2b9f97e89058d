//! Employee domain model.
//!
//! # Responsibility
//! - Define the persisted employee record (`Employee`) joined with its
//!   working form.
//! - Define the insert payload (`NewEmployee`) and the set of updatable
//!   columns (`EmployeeField`).
//!
//! # Invariants
//! - `Employee::id` is assigned by the store on insert.
//! - `NewEmployee` fields are optional on purpose: NOT-NULL enforcement is
//!   left to the schema and surfaces as a data-integrity error.

use super::working_form::{WorkingForm, WorkingFormId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned identifier of an employee row.
pub type EmployeeId = i64;

/// Gender as persisted in `employee.gender`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Column value stored in SQLite.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Parses a stored column value.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Employee row as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub last_name: String,
    pub first_name: String,
    pub last_name_romaji: String,
    pub first_name_romaji: String,
    pub birth_date: NaiveDate,
    pub age: i64,
    pub gender: Gender,
    pub phone_number: String,
    pub email: String,
    pub hire_date: NaiveDate,
    /// `None` while the employee is still employed.
    pub leave_date: Option<NaiveDate>,
    pub working_form: WorkingForm,
}

/// Insert payload for a new employee row.
///
/// There is no `id` field: the store always assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewEmployee {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name_romaji: Option<String>,
    pub first_name_romaji: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i64>,
    pub gender: Option<Gender>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub leave_date: Option<NaiveDate>,
    pub working_form_id: Option<WorkingFormId>,
}

impl NewEmployee {
    /// Builds a payload with every required column populated and no leave date.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        last_name_romaji: impl Into<String>,
        first_name_romaji: impl Into<String>,
        birth_date: NaiveDate,
        age: i64,
        gender: Gender,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        hire_date: NaiveDate,
        working_form_id: WorkingFormId,
    ) -> Self {
        Self {
            last_name: Some(last_name.into()),
            first_name: Some(first_name.into()),
            last_name_romaji: Some(last_name_romaji.into()),
            first_name_romaji: Some(first_name_romaji.into()),
            birth_date: Some(birth_date),
            age: Some(age),
            gender: Some(gender),
            phone_number: Some(phone_number.into()),
            email: Some(email.into()),
            hire_date: Some(hire_date),
            leave_date: None,
            working_form_id: Some(working_form_id),
        }
    }
}

/// Single updatable employee column.
///
/// Column names are only ever produced from this enum, never from caller text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeField {
    LastName,
    FirstName,
    LastNameRomaji,
    FirstNameRomaji,
    BirthDate,
    Age,
    Gender,
    PhoneNumber,
    Email,
    HireDate,
    LeaveDate,
    WorkingFormId,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 12] = [
        Self::LastName,
        Self::FirstName,
        Self::LastNameRomaji,
        Self::FirstNameRomaji,
        Self::BirthDate,
        Self::Age,
        Self::Gender,
        Self::PhoneNumber,
        Self::Email,
        Self::HireDate,
        Self::LeaveDate,
        Self::WorkingFormId,
    ];

    /// Column name in the `employee` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::LastName => "last_name",
            Self::FirstName => "first_name",
            Self::LastNameRomaji => "last_name_romaji",
            Self::FirstNameRomaji => "first_name_romaji",
            Self::BirthDate => "birth_date",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::PhoneNumber => "phone_number",
            Self::Email => "email",
            Self::HireDate => "hire_date",
            Self::LeaveDate => "leave_date",
            Self::WorkingFormId => "working_form_id",
        }
    }
}

impl Display for EmployeeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Field name that does not match any updatable employee column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEmployeeField(pub String);

impl Display for UnknownEmployeeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown employee field `{}`", self.0)
    }
}

impl Error for UnknownEmployeeField {}

impl FromStr for EmployeeField {
    type Err = UnknownEmployeeField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.column() == normalized)
            .ok_or_else(|| UnknownEmployeeField(normalized.to_string()))
    }
}
