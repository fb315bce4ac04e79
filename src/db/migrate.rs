//! Idempotent schema migrations. Every statement uses IF NOT EXISTS so the
//! engine can run at init and again from `db --migrate` without side effects.

use rusqlite::{Connection, Result};

/// Ensure that the internal audit `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Work log, append-only. `date` is nullable: a legacy import coerces
/// unparsable date cells to NULL instead of rejecting the row.
fn create_work_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            date         TEXT,
            time         TEXT NOT NULL,
            email        TEXT NOT NULL,
            task         TEXT NOT NULL,
            remarks      TEXT NOT NULL,
            final_report TEXT NOT NULL CHECK(final_report IN ('Complete','In-Progress'))
        );
        CREATE INDEX IF NOT EXISTS idx_work_entries_date  ON work_entries(date);
        CREATE INDEX IF NOT EXISTS idx_work_entries_email ON work_entries(email);
        "#,
    )?;
    Ok(())
}

fn create_plan_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS plan_entries (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT,
            email      TEXT NOT NULL,
            plan       TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time   TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_plan_entries_date  ON plan_entries(date);
        CREATE INDEX IF NOT EXISTS idx_plan_entries_email ON plan_entries(email);
        "#,
    )?;
    Ok(())
}

/// Roster. Email is the primary key; the employee id carries its own UNIQUE
/// constraint so both duplicate kinds are rejected at insert time.
fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            email         TEXT PRIMARY KEY,
            id            TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Admin accounts, seeded by `init`. Kept separate from the roster so the
/// two credential sources stay independent.
fn create_admins_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS admins (
            email         TEXT PRIMARY KEY,
            id            TEXT NOT NULL,
            password_hash TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_work_entries_table(conn)?;
    create_plan_entries_table(conn)?;
    create_employees_table(conn)?;
    create_admins_table(conn)?;
    Ok(())
}
