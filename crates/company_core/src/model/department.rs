//! Department domain model.
//!
//! Departments are the referenced side of `employees.department_id`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned row identifier for departments.
pub type DepartmentId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentValidationError {
    EmptyName,
}

impl Display for DepartmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "department name must be a non-empty string"),
        }
    }
}

impl Error for DepartmentValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DepartmentWire")]
pub struct Department {
    id: Option<DepartmentId>,
    name: String,
}

#[derive(Deserialize)]
struct DepartmentWire {
    #[serde(default)]
    id: Option<DepartmentId>,
    name: String,
}

impl TryFrom<DepartmentWire> for Department {
    type Error = DepartmentValidationError;

    fn try_from(value: DepartmentWire) -> Result<Self, Self::Error> {
        let mut department = Self::new(value.name)?;
        department.id = value.id;
        Ok(department)
    }
}

impl Department {
    pub fn new(name: impl Into<String>) -> Result<Self, DepartmentValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DepartmentValidationError::EmptyName);
        }
        Ok(Self { id: None, name })
    }

    pub(crate) fn from_storage(
        id: DepartmentId,
        name: String,
    ) -> Result<Self, DepartmentValidationError> {
        let mut department = Self::new(name)?;
        department.id = Some(id);
        Ok(department)
    }

    pub fn id(&self) -> Option<DepartmentId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn assign_id(&mut self, id: DepartmentId) {
        self.id = Some(id);
    }
}
