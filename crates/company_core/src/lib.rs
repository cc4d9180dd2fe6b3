//! Core data-access layer for company employee records.
//! This crate owns validation and persistence rules for `employees`.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::{Department, DepartmentId, DepartmentValidationError};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository,
};
pub use service::employee_service::{
    EmployeeService, EmployeeServiceError, EmployeeServiceResult,
};

/// Minimal health-check API for CLI wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
