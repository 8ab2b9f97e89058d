//! Command-line front end for staff records.
//!
//! # Responsibility
//! - Parse arguments/environment into core calls.
//! - Print reads as JSON and writes as `EmployeeOperationResult` JSON.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rusqlite::Connection;
use serde_json::to_string_pretty;
use sma_core::db::{open_db, open_db_in_memory};
use sma_core::{
    default_log_level, init_logging, EmployeeField, EmployeeService, Gender, NewEmployee,
    SqliteEmployeeRepository,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sma")]
#[command(about = "Staff records: employees and working forms", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// SQLite database file; an in-memory database is used when omitted
    #[arg(long, env = "SMA_DB", global = true)]
    db: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, env = "SMA_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, env = "SMA_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Level from `--log-level`/`SMA_LOG_LEVEL`, else the build-mode default.
    fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List all working forms
    WorkingForms,

    /// List all employees with their working form
    List,

    /// Show one employee
    Show {
        /// Employee ID
        id: i64,
    },

    /// Register a new employee
    Add(AddArgs),

    /// Update one field of an employee
    Update {
        /// Employee ID
        id: i64,
        /// Column name, e.g. age, email, leave_date, working_form_id
        field: EmployeeField,
        /// New value; omit together with --null to clear the field
        value: Option<String>,
        /// Write NULL instead of a value
        #[arg(long, conflicts_with = "value")]
        null: bool,
    },

    /// Delete an employee
    Delete {
        /// Employee ID
        id: i64,
    },
}

#[derive(clap::Args)]
struct AddArgs {
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name_romaji: String,
    #[arg(long)]
    first_name_romaji: String,
    /// YYYY-MM-DD
    #[arg(long)]
    birth_date: NaiveDate,
    #[arg(long)]
    age: i64,
    #[arg(long, value_enum)]
    gender: GenderArg,
    #[arg(long)]
    phone_number: String,
    #[arg(long)]
    email: String,
    /// YYYY-MM-DD
    #[arg(long)]
    hire_date: NaiveDate,
    /// YYYY-MM-DD
    #[arg(long)]
    leave_date: Option<NaiveDate>,
    /// Working form ID (see `working-forms`)
    #[arg(long)]
    working_form_id: i64,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

impl From<AddArgs> for NewEmployee {
    fn from(args: AddArgs) -> Self {
        let mut employee = NewEmployee::new(
            args.last_name,
            args.first_name,
            args.last_name_romaji,
            args.first_name_romaji,
            args.birth_date,
            args.age,
            args.gender.into(),
            args.phone_number,
            args.email,
            args.hire_date,
            args.working_form_id,
        );
        employee.leave_date = args.leave_date;
        employee
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(cli.log_level(), log_dir)
            .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;
    }

    let conn = connect(cli.db.as_deref())?;
    let repo = SqliteEmployeeRepository::try_new(&conn)?;
    let service = EmployeeService::new(repo);

    let output = match cli.command {
        Commands::WorkingForms => to_string_pretty(&service.working_forms()?)?,
        Commands::List => to_string_pretty(&service.employees()?)?,
        Commands::Show { id } => {
            let employee = service
                .employee(id)?
                .with_context(|| format!("employee {id} not found"))?;
            to_string_pretty(&employee)?
        }
        Commands::Add(args) => to_string_pretty(&service.register(&args.into())?)?,
        Commands::Update {
            id,
            field,
            value,
            null,
        } => {
            let value = if null { None } else { value };
            if value.is_none() && !null {
                anyhow::bail!("missing value for `{field}`; pass --null to clear it");
            }
            to_string_pretty(&service.update(id, field, value.as_deref())?)?
        }
        Commands::Delete { id } => to_string_pretty(&service.remove(id)?)?,
    };

    info!("event=cli_command module=cli status=ok");
    println!("{output}");
    Ok(())
}

fn connect(path: Option<&Path>) -> Result<Connection> {
    match path {
        Some(path) => {
            open_db(path).with_context(|| format!("failed to open `{}`", path.display()))
        }
        None => open_db_in_memory().context("failed to open in-memory database"),
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;
    use sma_core::{default_log_level, EmployeeField, Gender, NewEmployee};

    #[test]
    fn update_parses_field_by_column_name() {
        let cli = Cli::try_parse_from(["sma", "update", "1", "age", "60"]).unwrap();
        match cli.command {
            Commands::Update {
                id,
                field,
                value,
                null,
            } => {
                assert_eq!(id, 1);
                assert_eq!(field, EmployeeField::Age);
                assert_eq!(value.as_deref(), Some("60"));
                assert!(!null);
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn log_level_prefers_flag_and_falls_back_to_build_default() {
        let explicit = Cli::try_parse_from(["sma", "--log-level", "warn", "list"]).unwrap();
        assert_eq!(explicit.log_level(), "warn");

        let fallback = Cli::try_parse_from(["sma", "list"]).unwrap();
        if fallback.log_level.is_none() {
            assert_eq!(fallback.log_level(), default_log_level());
        }
    }

    #[test]
    fn update_rejects_unknown_field() {
        assert!(Cli::try_parse_from(["sma", "update", "1", "salary", "1"]).is_err());
    }

    #[test]
    fn add_builds_full_payload() {
        let cli = Cli::try_parse_from([
            "sma",
            "--db",
            "/tmp/staff.db",
            "add",
            "--last-name",
            "鳩山",
            "--first-name",
            "由紀夫",
            "--last-name-romaji",
            "Hatoyama",
            "--first-name-romaji",
            "Yukio",
            "--birth-date",
            "1947-02-11",
            "--age",
            "75",
            "--gender",
            "male",
            "--phone-number",
            "090-6666-6666",
            "--email",
            "hatoyama@hoge.com",
            "--hire-date",
            "2020-06-01",
            "--working-form-id",
            "1",
        ])
        .unwrap();

        assert_eq!(cli.db.as_deref(), Some(std::path::Path::new("/tmp/staff.db")));
        let Commands::Add(args) = cli.command else {
            panic!("expected add command");
        };
        let employee = NewEmployee::from(args);
        assert_eq!(employee.gender, Some(Gender::Male));
        assert_eq!(employee.working_form_id, Some(1));
        assert_eq!(employee.leave_date, None);
        assert_eq!(employee.email.as_deref(), Some("hatoyama@hoge.com"));
    }
}
