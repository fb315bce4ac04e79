//! Roster management: admin-only add/list of employee accounts.

use rusqlite::Connection;

use crate::core::auth::hash_password;
use crate::core::session::Session;
use crate::db::log::audit;
use crate::db::queries::{employee_id_exists, find_employee, insert_employee, load_employees};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::role::Role;

pub struct Roster;

impl Roster {
    /// Add an employee. Both roster keys (email and id) must be new; a
    /// duplicate of either is rejected before anything is written.
    pub fn add(
        conn: &Connection,
        session: &Session,
        new_email: &str,
        new_id: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let admin = session.require(Role::Admin)?;

        if new_email.trim().is_empty() {
            return Err(AppError::EmptyField("email"));
        }
        if new_id.trim().is_empty() {
            return Err(AppError::EmptyField("id"));
        }
        if new_password.is_empty() {
            return Err(AppError::EmptyField("password"));
        }

        if find_employee(conn, new_email)?.is_some() {
            return Err(AppError::DuplicateEmployee("email", new_email.to_string()));
        }
        if employee_id_exists(conn, new_id)? {
            return Err(AppError::DuplicateEmployee("id", new_id.to_string()));
        }

        let hash = hash_password(new_password)?;
        insert_employee(conn, &Employee::new(new_email, new_id, hash))?;

        audit(
            conn,
            "roster",
            admin,
            &format!("employee '{new_email}' added"),
        )?;

        Ok(())
    }

    pub fn list(conn: &Connection, session: &Session) -> AppResult<Vec<Employee>> {
        session.require(Role::Admin)?;
        load_employees(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        run_pending_migrations(&conn).expect("migrations");
        conn
    }

    fn admin() -> Session {
        Session::login("boss@x.com", Role::Admin)
    }

    #[test]
    fn duplicate_email_is_rejected_and_roster_unchanged() {
        let conn = test_conn();
        Roster::add(&conn, &admin(), "a@x.com", "E001", "pw123456").unwrap();

        let err = Roster::add(&conn, &admin(), "a@x.com", "E002", "pw123456").unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmployee("email", _)));

        assert_eq!(Roster::list(&conn, &admin()).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected_and_roster_unchanged() {
        let conn = test_conn();
        Roster::add(&conn, &admin(), "a@x.com", "E001", "pw123456").unwrap();

        let err = Roster::add(&conn, &admin(), "b@x.com", "E001", "pw123456").unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmployee("id", _)));

        assert_eq!(Roster::list(&conn, &admin()).unwrap().len(), 1);
    }

    #[test]
    fn passwords_are_stored_hashed() {
        let conn = test_conn();
        Roster::add(&conn, &admin(), "a@x.com", "E001", "pw123456").unwrap();

        let roster = Roster::list(&conn, &admin()).unwrap();
        assert_ne!(roster[0].password_hash, "pw123456");
        assert!(roster[0].password_hash.starts_with("$argon2"));
    }

    #[test]
    fn employees_cannot_manage_the_roster() {
        let conn = test_conn();
        let session = Session::login("a@x.com", Role::Employee);

        let err = Roster::add(&conn, &session, "b@x.com", "E002", "pw123456").unwrap_err();
        assert!(matches!(err, AppError::NotAuthorized(_)));
        assert!(Roster::list(&conn, &session).is_err());
    }
}
