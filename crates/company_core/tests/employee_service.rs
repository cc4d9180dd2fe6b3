use company_core::db::open_db_in_memory;
use company_core::{
    DepartmentRepository, Employee, EmployeeRepository, EmployeeService, EmployeeServiceError,
    EmployeeValidationError, SqliteDepartmentRepository, SqliteEmployeeRepository,
};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = open_db_in_memory().unwrap();
    {
        let departments = SqliteDepartmentRepository::try_new(&conn).unwrap();
        departments.create_department("Engineering").unwrap();
        departments.create_department("Research").unwrap();
    }
    SqliteEmployeeRepository::try_new(&conn)
        .unwrap()
        .create_table()
        .unwrap();
    conn
}

fn service(conn: &Connection) -> EmployeeService<SqliteEmployeeRepository<'_>> {
    EmployeeService::new(SqliteEmployeeRepository::try_new(conn).unwrap())
}

#[test]
fn hire_persists_and_appears_in_roster() {
    let conn = setup();
    let service = service(&conn);

    let ada = service.hire("Ada Lovelace", "Engineer", 1).unwrap();

    assert!(ada.is_persisted());
    assert_eq!(service.roster().unwrap(), vec![ada.clone()]);
    assert_eq!(service.find_by_name("Ada Lovelace").unwrap(), Some(ada));
}

#[test]
fn hire_into_missing_department_is_reported() {
    let conn = setup();
    let service = service(&conn);

    let err = service.hire("Ada", "Engineer", 77).unwrap_err();
    assert!(matches!(err, EmployeeServiceError::DepartmentNotFound(77)));
    assert!(service.roster().unwrap().is_empty());
}

#[test]
fn rename_and_retitle_persist_changes() {
    let conn = setup();
    let service = service(&conn);

    let mut employee = service.hire("Ada", "Engineer", 1).unwrap();
    service.rename(&mut employee, "Ada King").unwrap();
    service.retitle(&mut employee, "Countess").unwrap();

    let stored = service.find_by_id(employee.id().unwrap()).unwrap().unwrap();
    assert_eq!(stored.name(), "Ada King");
    assert_eq!(stored.job_title(), "Countess");
}

#[test]
fn invalid_rename_leaves_record_untouched() {
    let conn = setup();
    let service = service(&conn);

    let mut employee = service.hire("Ada", "Engineer", 1).unwrap();
    let err = service.rename(&mut employee, " ").unwrap_err();

    assert!(matches!(
        err,
        EmployeeServiceError::InvalidInput(EmployeeValidationError::EmptyName)
    ));
    assert_eq!(employee.name(), "Ada");
}

#[test]
fn failed_transfer_keeps_previous_department_in_memory_and_storage() {
    let conn = setup();
    let service = service(&conn);

    let mut employee = service.hire("Ada", "Engineer", 1).unwrap();
    let err = service.transfer(&mut employee, 404).unwrap_err();

    assert!(matches!(err, EmployeeServiceError::DepartmentNotFound(404)));
    assert_eq!(employee.department_id(), 1);
    let stored = service.find_by_id(employee.id().unwrap()).unwrap().unwrap();
    assert_eq!(stored.department_id(), 1);

    service.transfer(&mut employee, 2).unwrap();
    let stored = service.find_by_id(employee.id().unwrap()).unwrap().unwrap();
    assert_eq!(stored.department_id(), 2);
}

#[test]
fn dismiss_resets_identity_and_rejects_unsaved_records() {
    let conn = setup();
    let service = service(&conn);

    let mut employee = service.hire("Ada", "Engineer", 1).unwrap();
    let old_id = employee.id().unwrap();
    service.dismiss(&mut employee).unwrap();

    assert_eq!(employee.id(), None);
    assert!(service.find_by_id(old_id).unwrap().is_none());

    let err = service.dismiss(&mut employee).unwrap_err();
    assert!(matches!(err, EmployeeServiceError::NotPersisted));
}

#[test]
fn rename_of_unsaved_record_inserts_it() {
    let conn = setup();
    let service = service(&conn);
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let mut employee = Employee::new("Draft", "Intern", 1).unwrap();
    service.rename(&mut employee, "Alan").unwrap();

    assert!(employee.is_persisted());
    assert_eq!(repo.get_all().unwrap(), vec![employee]);
}
