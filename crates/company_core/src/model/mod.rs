//! Domain model for company records.
//!
//! # Responsibility
//! - Define validated in-memory records for employees and departments.
//! - Keep field validation pure; storage lookups live in `repo`.
//!
//! # Invariants
//! - Records are identified by storage-assigned integer ids.
//! - `id == None` marks an unsaved record.

pub mod department;
pub mod employee;
