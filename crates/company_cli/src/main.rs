//! Command-line front end for `company_core`.
//!
//! # Responsibility
//! - Open the database file, wire repositories, and run one command.
//! - Keep output plain and line-oriented for scripting.

use clap::{Args, Parser, Subcommand};
use company_core::db::open_db;
use company_core::{
    default_log_level, init_logging, DepartmentRepository, Employee, EmployeeRepository,
    EmployeeService, SqliteDepartmentRepository, SqliteEmployeeRepository,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "company")]
#[command(version)]
#[command(about = "Manage employee records in a SQLite company database")]
struct Cli {
    /// Path to the database file
    #[arg(short, long, global = true, default_value = "company.db")]
    database: PathBuf,

    /// Absolute directory for rolling log files (logging is off when omitted)
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Log level used with --log-dir
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the employees table if it does not exist
    Init,

    /// Add a department
    AddDepartment {
        /// Department name
        name: String,
    },

    /// Create and persist an employee
    Hire {
        name: String,
        job_title: String,
        department_id: i64,
    },

    /// List all employees
    List,

    /// Look up one employee
    Find(FindArgs),

    /// Delete an employee by id
    Fire {
        id: i64,
    },

    /// Drop the employees table if it exists
    Drop,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct FindArgs {
    /// Employee id
    #[arg(long)]
    id: Option<i64>,

    /// Exact employee name
    #[arg(long)]
    name: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let conn = open_db(&cli.database)?;
    let employees = SqliteEmployeeRepository::try_new(&conn)?;

    match cli.command {
        Commands::Init => {
            employees.create_table()?;
            println!("employees table ready");
        }
        Commands::AddDepartment { name } => {
            let departments = SqliteDepartmentRepository::try_new(&conn)?;
            let department = departments.create_department(&name)?;
            println!(
                "{}\t{}",
                department.id().unwrap_or_default(),
                department.name()
            );
        }
        Commands::Hire {
            name,
            job_title,
            department_id,
        } => {
            let service = EmployeeService::new(employees);
            let employee = service.hire(&name, &job_title, department_id)?;
            print_employee(&employee);
        }
        Commands::List => {
            let service = EmployeeService::new(employees);
            for employee in service.roster()? {
                print_employee(&employee);
            }
        }
        Commands::Find(args) => {
            let found = match (args.id, args.name) {
                (Some(id), _) => employees.find_by_id(id)?,
                (None, Some(name)) => employees.find_by_name(&name)?,
                (None, None) => None,
            };
            match found {
                Some(employee) => print_employee(&employee),
                None => println!("not found"),
            }
        }
        Commands::Fire { id } => {
            let service = EmployeeService::new(employees);
            match service.find_by_id(id)? {
                Some(mut employee) => {
                    service.dismiss(&mut employee)?;
                    println!("deleted {id}");
                }
                None => println!("not found"),
            }
        }
        Commands::Drop => {
            employees.drop_table()?;
            println!("employees table dropped");
        }
    }

    info!("event=cli_command module=cli status=ok");
    Ok(())
}

fn print_employee(employee: &Employee) {
    println!(
        "{}\t{}\t{}\t{}",
        employee.id().unwrap_or_default(),
        employee.name(),
        employee.job_title(),
        employee.department_id()
    );
}
