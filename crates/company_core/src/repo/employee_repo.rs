//! Employee repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and lookup APIs over the `employees` table.
//! - Own the `employees` create/drop lifecycle.
//! - Verify department references inside each write transaction.
//!
//! # Invariants
//! - Every write runs in one `IMMEDIATE` transaction: insert-and-capture-id,
//!   update, and delete are each atomic.
//! - `save` never inserts a record that already carries an id.
//! - `delete` resets the in-memory id only after the transaction commits.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::department::{DepartmentId, DepartmentValidationError};
use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError};
use crate::repo::department_repo::department_exists_in;
use log::{debug, info};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    job_title TEXT NOT NULL,
    department_id INTEGER NOT NULL,
    FOREIGN KEY(department_id) REFERENCES departments(id)
);";

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    name,
    job_title,
    department_id
FROM employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee/department persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    DepartmentValidation(DepartmentValidationError),
    Db(DbError),
    /// Operation requires a persisted identity; payload is the operation name.
    MissingId(&'static str),
    /// Referenced department row does not exist.
    DepartmentNotFound(DepartmentId),
    /// No employee row matches the record id.
    NotFound(EmployeeId),
    /// Connection is missing a table the repository depends on.
    MissingRequiredTable(&'static str),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DepartmentValidation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingId(operation) => write!(f, "cannot {operation} employee without id"),
            Self::DepartmentNotFound(id) => write!(f, "department id does not exist: {id}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "employee repository requires table `{table}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DepartmentValidation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::MissingId(_) => None,
            Self::DepartmentNotFound(_) => None,
            Self::NotFound(_) => None,
            Self::MissingRequiredTable(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DepartmentValidationError> for RepoError {
    fn from(value: DepartmentValidationError) -> Self {
        Self::DepartmentValidation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for employee CRUD and lookups.
pub trait EmployeeRepository {
    /// Creates the `employees` table when absent.
    fn create_table(&self) -> RepoResult<()>;
    /// Drops the `employees` table when present.
    fn drop_table(&self) -> RepoResult<()>;
    /// Inserts an unsaved record (capturing its id) or updates a saved one.
    fn save(&self, employee: &mut Employee) -> RepoResult<()>;
    /// Overwrites all fields of the row matching `employee.id()`.
    fn update(&self, employee: &Employee) -> RepoResult<()>;
    /// Deletes the row and resets `employee.id()` to `None`.
    fn delete(&self, employee: &mut Employee) -> RepoResult<()>;
    /// Validates, persists and returns a new record.
    fn create(
        &self,
        name: &str,
        job_title: &str,
        department_id: DepartmentId,
    ) -> RepoResult<Employee>;
    /// Returns every row in storage order.
    fn get_all(&self) -> RepoResult<Vec<Employee>>;
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Exact-match lookup; returns the first row storage yields.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Employee>>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable("departments")` when migrations were not applied.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, "departments")? {
            return Err(RepoError::MissingRequiredTable("departments"));
        }
        Ok(Self { conn })
    }

    fn begin(&self) -> RepoResult<Transaction<'conn>> {
        Ok(Transaction::new_unchecked(
            self.conn,
            TransactionBehavior::Immediate,
        )?)
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(EMPLOYEE_TABLE_SQL)?;
        info!("event=schema_create module=repo status=ok table=employees");
        Ok(())
    }

    fn drop_table(&self) -> RepoResult<()> {
        self.conn.execute_batch("DROP TABLE IF EXISTS employees;")?;
        info!("event=schema_drop module=repo status=ok table=employees");
        Ok(())
    }

    fn save(&self, employee: &mut Employee) -> RepoResult<()> {
        if employee.id().is_some() {
            return self.update(employee);
        }

        let tx = self.begin()?;
        ensure_department_exists(&tx, employee.department_id())?;
        tx.execute(
            "INSERT INTO employees (name, job_title, department_id) VALUES (?1, ?2, ?3);",
            params![
                employee.name(),
                employee.job_title(),
                employee.department_id()
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        employee.assign_id(id);
        debug!("event=employee_insert module=repo status=ok employee_id={id}");
        Ok(())
    }

    fn update(&self, employee: &Employee) -> RepoResult<()> {
        let id = employee.id().ok_or(RepoError::MissingId("update"))?;

        let tx = self.begin()?;
        ensure_department_exists(&tx, employee.department_id())?;
        let changed = tx.execute(
            "UPDATE employees
             SET
                name = ?1,
                job_title = ?2,
                department_id = ?3
             WHERE id = ?4;",
            params![
                employee.name(),
                employee.job_title(),
                employee.department_id(),
                id
            ],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        tx.commit()?;

        debug!("event=employee_update module=repo status=ok employee_id={id}");
        Ok(())
    }

    fn delete(&self, employee: &mut Employee) -> RepoResult<()> {
        let id = employee.id().ok_or(RepoError::MissingId("delete"))?;

        let tx = self.begin()?;
        let removed = tx.execute("DELETE FROM employees WHERE id = ?1;", [id])?;
        tx.commit()?;

        employee.clear_id();
        debug!("event=employee_delete module=repo status=ok employee_id={id} removed={removed}");
        Ok(())
    }

    fn create(
        &self,
        name: &str,
        job_title: &str,
        department_id: DepartmentId,
    ) -> RepoResult<Employee> {
        let mut employee = Employee::new(name, job_title, department_id)?;
        self.save(&mut employee)?;
        Ok(employee)
    }

    fn get_all(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(&format!("{EMPLOYEE_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE name = ?1 LIMIT 1;"))?;

        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let id: EmployeeId = row.get("id")?;
    Employee::from_storage(
        id,
        row.get("name")?,
        row.get("job_title")?,
        row.get("department_id")?,
    )
    .map_err(|err| RepoError::InvalidData(format!("employees row {id}: {err}")))
}

fn ensure_department_exists(conn: &Connection, department_id: DepartmentId) -> RepoResult<()> {
    if !department_exists_in(conn, department_id)? {
        return Err(RepoError::DepartmentNotFound(department_id));
    }
    Ok(())
}

pub(crate) fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
