//! Employee use-case service.
//!
//! # Responsibility
//! - Provide hire/rename/retitle/transfer/dismiss entry points.
//! - Map repository failures to use-case level errors.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - A failed mutation leaves the caller's record untouched.

use crate::model::department::DepartmentId;
use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EmployeeServiceResult<T> = Result<T, EmployeeServiceError>;

/// Service error for employee use-cases.
#[derive(Debug)]
pub enum EmployeeServiceError {
    /// Field input failed pure validation.
    InvalidInput(EmployeeValidationError),
    /// Record has no id, so it cannot be changed in place or removed.
    NotPersisted,
    /// Target employee row does not exist.
    EmployeeNotFound(EmployeeId),
    /// Referenced department does not exist.
    DepartmentNotFound(DepartmentId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for EmployeeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid employee input: {err}"),
            Self::NotPersisted => write!(f, "employee has not been saved"),
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
            Self::DepartmentNotFound(id) => write!(f, "department not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EmployeeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EmployeeValidationError> for EmployeeServiceError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::InvalidInput(value)
    }
}

impl From<RepoError> for EmployeeServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::InvalidInput(err),
            RepoError::MissingId(_) => Self::NotPersisted,
            RepoError::NotFound(id) => Self::EmployeeNotFound(id),
            RepoError::DepartmentNotFound(id) => Self::DepartmentNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper for employee operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists a new employee.
    pub fn hire(
        &self,
        name: &str,
        job_title: &str,
        department_id: DepartmentId,
    ) -> EmployeeServiceResult<Employee> {
        Ok(self.repo.create(name, job_title, department_id)?)
    }

    /// Renames an employee and persists the change through `save`.
    pub fn rename(&self, employee: &mut Employee, name: &str) -> EmployeeServiceResult<()> {
        self.apply(employee, |next| next.set_name(name))
    }

    /// Changes the job title and persists the change through `save`.
    pub fn retitle(&self, employee: &mut Employee, job_title: &str) -> EmployeeServiceResult<()> {
        self.apply(employee, |next| next.set_job_title(job_title))
    }

    /// Moves an employee to another department.
    ///
    /// # Errors
    /// - `DepartmentNotFound` when the target department is missing.
    pub fn transfer(
        &self,
        employee: &mut Employee,
        department_id: DepartmentId,
    ) -> EmployeeServiceResult<()> {
        self.apply(employee, |next| {
            next.set_department_id(department_id);
            Ok(())
        })
    }

    /// Deletes a persisted employee; the record becomes unsaved again.
    pub fn dismiss(&self, employee: &mut Employee) -> EmployeeServiceResult<()> {
        Ok(self.repo.delete(employee)?)
    }

    /// Returns all employees in storage order.
    pub fn roster(&self) -> EmployeeServiceResult<Vec<Employee>> {
        Ok(self.repo.get_all()?)
    }

    pub fn find_by_id(&self, id: EmployeeId) -> EmployeeServiceResult<Option<Employee>> {
        Ok(self.repo.find_by_id(id)?)
    }

    pub fn find_by_name(&self, name: &str) -> EmployeeServiceResult<Option<Employee>> {
        Ok(self.repo.find_by_name(name)?)
    }

    fn apply<F>(&self, employee: &mut Employee, change: F) -> EmployeeServiceResult<()>
    where
        F: FnOnce(&mut Employee) -> Result<(), EmployeeValidationError>,
    {
        let mut next = employee.clone();
        change(&mut next)?;
        self.repo.save(&mut next)?;
        *employee = next;
        Ok(())
    }
}
