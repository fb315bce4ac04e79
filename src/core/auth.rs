//! Credential checks against the two independent sources: the seeded admin
//! table and the employee roster. Passwords are stored as salted Argon2 PHC
//! strings and verified with the constant-time verifier.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rusqlite::Connection;

use crate::core::session::Session;
use crate::db::queries::{find_admin, find_employee, upsert_admin};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::role::Role;

pub fn hash_password(plain: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AppError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

pub fn verify_password(plain: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Check the submitted email/id/password triple against the credential
/// source for `role`. All three fields must match.
///
/// Every mismatch collapses into the same `InvalidCredentials` error, so a
/// caller cannot tell an unknown email from a wrong id or password.
pub fn authenticate(
    conn: &Connection,
    role: Role,
    email: &str,
    id: &str,
    password: &str,
) -> AppResult<Session> {
    let account = match role {
        Role::Admin => find_admin(conn, email)?,
        Role::Employee => find_employee(conn, email)?,
    };

    let Some(account) = account else {
        // Burn a comparable amount of work before failing so an unknown
        // identity is not measurably faster than a wrong password.
        let _ = hash_password(password);
        return Err(AppError::InvalidCredentials);
    };

    let password_ok = verify_password(password, &account.password_hash);
    if account.id != id || !password_ok {
        return Err(AppError::InvalidCredentials);
    }

    Ok(Session::login(email, role))
}

/// Create or rotate the admin account. Called by `init`.
pub fn seed_admin(conn: &Connection, email: &str, id: &str, password: &str) -> AppResult<()> {
    let hash = hash_password(password)?;
    upsert_admin(conn, &Employee::new(email, id, hash))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;
    use crate::db::queries::insert_employee;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        run_pending_migrations(&conn).expect("migrations");
        conn
    }

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("hunter2!").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter2!", &hash));
        assert!(!verify_password("hunter3!", &hash));
        assert!(!verify_password("hunter2!", "not-a-phc-string"));
    }

    #[test]
    fn all_three_fields_are_required() {
        let conn = test_conn();
        let hash = hash_password("pw123456").unwrap();
        insert_employee(&conn, &Employee::new("a@x.com", "E001", hash)).unwrap();

        assert!(authenticate(&conn, Role::Employee, "a@x.com", "E001", "pw123456").is_ok());
        assert!(authenticate(&conn, Role::Employee, "a@x.com", "E002", "pw123456").is_err());
        assert!(authenticate(&conn, Role::Employee, "a@x.com", "E001", "wrong").is_err());
    }

    #[test]
    fn unknown_email_and_wrong_password_are_indistinguishable() {
        let conn = test_conn();
        let hash = hash_password("pw123456").unwrap();
        insert_employee(&conn, &Employee::new("a@x.com", "E001", hash)).unwrap();

        let wrong_password = authenticate(&conn, Role::Employee, "a@x.com", "E001", "nope")
            .unwrap_err()
            .to_string();
        let unknown_email = authenticate(&conn, Role::Employee, "ghost@x.com", "E001", "nope")
            .unwrap_err()
            .to_string();

        assert_eq!(wrong_password, unknown_email);
    }

    #[test]
    fn roles_use_independent_credential_sources() {
        let conn = test_conn();
        seed_admin(&conn, "boss@x.com", "A001", "adminpw1").unwrap();

        assert!(authenticate(&conn, Role::Admin, "boss@x.com", "A001", "adminpw1").is_ok());
        // The admin account does not exist in the roster.
        assert!(authenticate(&conn, Role::Employee, "boss@x.com", "A001", "adminpw1").is_err());
    }

    #[test]
    fn seeding_twice_rotates_the_password() {
        let conn = test_conn();
        seed_admin(&conn, "boss@x.com", "A001", "first-pw").unwrap();
        seed_admin(&conn, "boss@x.com", "A001", "second-pw").unwrap();

        assert!(authenticate(&conn, Role::Admin, "boss@x.com", "A001", "first-pw").is_err());
        assert!(authenticate(&conn, Role::Admin, "boss@x.com", "A001", "second-pw").is_ok());
    }
}
