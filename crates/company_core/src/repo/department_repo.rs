//! Department repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Populate and query the `departments` collaborator table.
//! - Provide the existence check used by employee write paths.
//!
//! # Invariants
//! - `departments` is migration-managed; this repository never creates or
//!   drops it.
//! - Listing is deterministic: `id ASC`.

use crate::model::department::{Department, DepartmentId};
use crate::repo::employee_repo::{table_exists, RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for department operations.
pub trait DepartmentRepository {
    /// Validates and inserts a department, returning it with its new id.
    fn create_department(&self, name: &str) -> RepoResult<Department>;
    fn department_exists(&self, id: DepartmentId) -> RepoResult<bool>;
    fn find_department(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, "departments")? {
            return Err(RepoError::MissingRequiredTable("departments"));
        }
        Ok(Self { conn })
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn create_department(&self, name: &str) -> RepoResult<Department> {
        let mut department = Department::new(name)?;
        self.conn.execute(
            "INSERT INTO departments (name) VALUES (?1);",
            params![department.name()],
        )?;
        let id = self.conn.last_insert_rowid();
        department.assign_id(id);

        debug!("event=department_insert module=repo status=ok department_id={id}");
        Ok(department)
    }

    fn department_exists(&self, id: DepartmentId) -> RepoResult<bool> {
        department_exists_in(self.conn, id)
    }

    fn find_department(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name FROM departments WHERE id = ?1;",
                [id],
                |row| Ok((row.get::<_, DepartmentId>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        row.map(|(id, name)| parse_department(id, name))
            .transpose()
    }

    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM departments ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            departments.push(parse_department(row.get(0)?, row.get(1)?)?);
        }

        Ok(departments)
    }
}

/// Existence probe shared with employee write transactions.
pub(crate) fn department_exists_in(conn: &Connection, id: DepartmentId) -> RepoResult<bool> {
    let found = conn
        .query_row("SELECT id FROM departments WHERE id = ?1;", [id], |row| {
            row.get::<_, DepartmentId>(0)
        })
        .optional()?;
    Ok(found.is_some())
}

fn parse_department(id: DepartmentId, name: String) -> RepoResult<Department> {
    Department::from_storage(id, name)
        .map_err(|err| RepoError::InvalidData(format!("departments row {id}: {err}")))
}
