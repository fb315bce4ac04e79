use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::plan_entry::PlanEntry;
use crate::models::report_status::ReportStatus;
use crate::models::work_entry::WorkEntry;
use crate::utils::date::parse_date;
use chrono::NaiveTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

fn parse_time_cell(time_str: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.to_string())),
        )
    })
}

pub fn map_work_row(row: &Row) -> Result<WorkEntry> {
    let date_cell: Option<String> = row.get("date")?;
    let time_str: String = row.get("time")?;
    let status_str: String = row.get("final_report")?;

    let status = ReportStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(WorkEntry {
        id: row.get("id")?,
        // NULL stays None; a junk cell that survived an old import degrades
        // to None rather than failing the whole load.
        date: date_cell.as_deref().and_then(parse_date),
        time: parse_time_cell(&time_str)?,
        email: row.get("email")?,
        task: row.get("task")?,
        remarks: row.get("remarks")?,
        status,
    })
}

pub fn map_plan_row(row: &Row) -> Result<PlanEntry> {
    let date_cell: Option<String> = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    Ok(PlanEntry {
        id: row.get("id")?,
        date: date_cell.as_deref().and_then(parse_date),
        email: row.get("email")?,
        plan: row.get("plan")?,
        start: parse_time_cell(&start_str)?,
        end: parse_time_cell(&end_str)?,
    })
}

fn map_account_row(row: &Row) -> Result<Employee> {
    Ok(Employee {
        email: row.get("email")?,
        id: row.get("id")?,
        password_hash: row.get("password_hash")?,
    })
}

// ---------------------------------------------------------------------------
// Work entries
// ---------------------------------------------------------------------------

pub fn insert_work_entry(conn: &Connection, entry: &WorkEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO work_entries (date, time, email, task, remarks, final_report)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.date.map(|d| d.format("%Y-%m-%d").to_string()),
            entry.time.format("%H:%M").to_string(),
            entry.email,
            entry.task,
            entry.remarks,
            entry.status.to_db_str(),
        ],
    )?;
    Ok(())
}

/// Full work dataset, in insertion order.
pub fn load_work_entries(conn: &Connection) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM work_entries ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_work_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Work entries belonging to one identity, in insertion order.
pub fn load_work_entries_for(conn: &Connection, email: &str) -> AppResult<Vec<WorkEntry>> {
    let mut stmt =
        conn.prepare("SELECT * FROM work_entries WHERE email = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([email], map_work_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Plan entries
// ---------------------------------------------------------------------------

pub fn insert_plan_entry(conn: &Connection, entry: &PlanEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO plan_entries (date, email, plan, start_time, end_time)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry.date.map(|d| d.format("%Y-%m-%d").to_string()),
            entry.email,
            entry.plan,
            entry.start.format("%H:%M").to_string(),
            entry.end.format("%H:%M").to_string(),
        ],
    )?;
    Ok(())
}

pub fn load_plan_entries(conn: &Connection) -> AppResult<Vec<PlanEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM plan_entries ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_plan_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_plan_entries_for(conn: &Connection, email: &str) -> AppResult<Vec<PlanEntry>> {
    let mut stmt =
        conn.prepare("SELECT * FROM plan_entries WHERE email = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([email], map_plan_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Roster and admin accounts
// ---------------------------------------------------------------------------

pub fn insert_employee(conn: &Connection, employee: &Employee) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employees (email, id, password_hash) VALUES (?1, ?2, ?3)",
        params![employee.email, employee.id, employee.password_hash],
    )?;
    Ok(())
}

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt =
        conn.prepare("SELECT email, id, password_hash FROM employees ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_account_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_employee(conn: &Connection, email: &str) -> AppResult<Option<Employee>> {
    let mut stmt =
        conn.prepare("SELECT email, id, password_hash FROM employees WHERE email = ?1")?;
    let found = stmt.query_row([email], map_account_row).optional()?;
    Ok(found)
}

pub fn employee_id_exists(conn: &Connection, id: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM employees WHERE id = ?1 LIMIT 1")?;
    Ok(stmt.exists([id])?)
}

/// Insert or replace an admin account. Re-running `init` with new admin
/// credentials rotates the password instead of failing.
pub fn upsert_admin(conn: &Connection, admin: &Employee) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO admins (email, id, password_hash) VALUES (?1, ?2, ?3)",
        params![admin.email, admin.id, admin.password_hash],
    )?;
    Ok(())
}

pub fn find_admin(conn: &Connection, email: &str) -> AppResult<Option<Employee>> {
    let mut stmt =
        conn.prepare("SELECT email, id, password_hash FROM admins WHERE email = ?1")?;
    let found = stmt.query_row([email], map_account_row).optional()?;
    Ok(found)
}
