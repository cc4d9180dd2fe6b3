//! Employee domain model.
//!
//! # Responsibility
//! - Define the in-memory record mapped onto one `employees` row.
//! - Enforce pure field validation on construction and on every assignment.
//!
//! # Invariants
//! - `name` and `job_title` are never empty or whitespace-only.
//! - `id == None` means the record was never persisted or was just deleted.
//! - Department existence is a cross-entity rule and is checked by the
//!   repository at persistence time, not here.

use crate::model::department::DepartmentId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned row identifier for employees.
pub type EmployeeId = i64;

/// Field-level validation failures for [`Employee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// `name` is empty after trimming whitespace.
    EmptyName,
    /// `job_title` is empty after trimming whitespace.
    EmptyJobTitle,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must be a non-empty string"),
            Self::EmptyJobTitle => write!(f, "job title must be a non-empty string"),
        }
    }
}

impl Error for EmployeeValidationError {}

/// Validated employee record.
///
/// Fields are private so every mutation goes through a validating setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeWire")]
pub struct Employee {
    id: Option<EmployeeId>,
    name: String,
    job_title: String,
    department_id: DepartmentId,
}

/// Unvalidated serde shape; converted through [`Employee::try_from`].
#[derive(Deserialize)]
struct EmployeeWire {
    #[serde(default)]
    id: Option<EmployeeId>,
    name: String,
    job_title: String,
    department_id: DepartmentId,
}

impl TryFrom<EmployeeWire> for Employee {
    type Error = EmployeeValidationError;

    fn try_from(value: EmployeeWire) -> Result<Self, Self::Error> {
        let mut employee = Self::new(value.name, value.job_title, value.department_id)?;
        employee.id = value.id;
        Ok(employee)
    }
}

impl Employee {
    /// Creates an unsaved employee.
    ///
    /// # Errors
    /// - `EmptyName` / `EmptyJobTitle` for blank text fields.
    pub fn new(
        name: impl Into<String>,
        job_title: impl Into<String>,
        department_id: DepartmentId,
    ) -> Result<Self, EmployeeValidationError> {
        let name = name.into();
        let job_title = job_title.into();
        validate_name(&name)?;
        validate_job_title(&job_title)?;

        Ok(Self {
            id: None,
            name,
            job_title,
            department_id,
        })
    }

    /// Rebuilds a persisted employee from stored column values.
    pub(crate) fn from_storage(
        id: EmployeeId,
        name: String,
        job_title: String,
        department_id: DepartmentId,
    ) -> Result<Self, EmployeeValidationError> {
        let mut employee = Self::new(name, job_title, department_id)?;
        employee.id = Some(id);
        Ok(employee)
    }

    pub fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn department_id(&self) -> DepartmentId {
        self.department_id
    }

    /// Returns whether this record currently maps to a stored row.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Replaces `name`; the previous value is kept when validation fails.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), EmployeeValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces `job_title`; the previous value is kept when validation fails.
    pub fn set_job_title(
        &mut self,
        job_title: impl Into<String>,
    ) -> Result<(), EmployeeValidationError> {
        let job_title = job_title.into();
        validate_job_title(&job_title)?;
        self.job_title = job_title;
        Ok(())
    }

    /// Replaces `department_id`.
    ///
    /// Existence of the department is verified on the next save/update.
    pub fn set_department_id(&mut self, department_id: DepartmentId) {
        self.department_id = department_id;
    }

    pub(crate) fn assign_id(&mut self, id: EmployeeId) {
        self.id = Some(id);
    }

    pub(crate) fn clear_id(&mut self) {
        self.id = None;
    }
}

fn validate_name(value: &str) -> Result<(), EmployeeValidationError> {
    if value.trim().is_empty() {
        return Err(EmployeeValidationError::EmptyName);
    }
    Ok(())
}

fn validate_job_title(value: &str) -> Result<(), EmployeeValidationError> {
    if value.trim().is_empty() {
        return Err(EmployeeValidationError::EmptyJobTitle);
    }
    Ok(())
}
