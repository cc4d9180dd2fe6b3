//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories borrow an injected connection; there is no global handle.
//! - Repository APIs return semantic errors (`NotFound`, `MissingId`,
//!   `DepartmentNotFound`) in addition to DB transport errors.

pub mod department_repo;
pub mod employee_repo;
