#![allow(dead_code)]

use chrono::NaiveDate;
use rusqlite::Connection;
use sma_core::db::open_db_in_memory;
use sma_core::{Employee, Gender, NewEmployee, WorkingForm};

pub const EMPLOYEE_FIXTURE: &str = include_str!("../fixtures/employees.sql");

/// In-memory database with the schema, reference working forms and five
/// fixture employees.
pub fn seeded_connection() -> Connection {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(EMPLOYEE_FIXTURE).unwrap();
    conn
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn full_time() -> WorkingForm {
    WorkingForm::new(1, "Full-time")
}

pub fn shortened_full_time() -> WorkingForm {
    WorkingForm::new(2, "Full-time (shortened hours)")
}

pub fn part_time() -> WorkingForm {
    WorkingForm::new(3, "Part-time")
}

#[allow(clippy::too_many_arguments)]
pub fn employee(
    id: i64,
    last_name: &str,
    first_name: &str,
    last_name_romaji: &str,
    first_name_romaji: &str,
    birth_date: &str,
    age: i64,
    phone_number: &str,
    email: &str,
    hire_date: &str,
    working_form: WorkingForm,
) -> Employee {
    Employee {
        id,
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        last_name_romaji: last_name_romaji.to_string(),
        first_name_romaji: first_name_romaji.to_string(),
        birth_date: date(birth_date),
        age,
        gender: Gender::Male,
        phone_number: phone_number.to_string(),
        email: email.to_string(),
        hire_date: date(hire_date),
        leave_date: None,
        working_form,
    }
}

pub fn kishida() -> Employee {
    employee(
        1,
        "岸田",
        "文雄",
        "Kishida",
        "Fumio",
        "1957-07-29",
        64,
        "090-1111-1111",
        "kishida@hoge.com",
        "2020-01-01",
        full_time(),
    )
}

pub fn fixture_employees() -> Vec<Employee> {
    vec![
        kishida(),
        employee(
            2,
            "菅",
            "義偉",
            "Suga",
            "Yoshihide",
            "1948-12-06",
            73,
            "090-2222-2222",
            "suga@hoge.com",
            "2020-02-01",
            shortened_full_time(),
        ),
        employee(
            3,
            "安倍",
            "晋三",
            "Abe",
            "Shinzo",
            "1954-09-21",
            67,
            "090-3333-3333",
            "abe@hoge.com",
            "2020-03-01",
            full_time(),
        ),
        employee(
            4,
            "野田",
            "佳彦",
            "Noda",
            "Yoshihiko",
            "1957-05-20",
            65,
            "090-4444-4444",
            "noda@hoge.com",
            "2020-04-01",
            full_time(),
        ),
        employee(
            5,
            "菅",
            "直人",
            "Kan",
            "Naoto",
            "1946-10-10",
            75,
            "090-5555-5555",
            "kan@hoge.com",
            "2020-05-01",
            part_time(),
        ),
    ]
}

pub fn hatoyama() -> NewEmployee {
    NewEmployee::new(
        "鳩山",
        "由紀夫",
        "Hatoyama",
        "Yukio",
        date("1947-02-11"),
        75,
        Gender::Male,
        "090-6666-6666",
        "hatoyama@hoge.com",
        date("2020-06-01"),
        1,
    )
}

pub fn employee_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM employee;", [], |row| row.get(0))
        .unwrap()
}
