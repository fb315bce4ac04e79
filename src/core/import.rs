//! Import of the legacy flat-file datasets (the CSV layout the old
//! dashboards persisted). Malformed date cells are coerced to the null
//! sentinel instead of rejecting the row; legacy roster passwords arrive in
//! plaintext and are hashed on the way in.

use std::io::Read;
use std::path::Path;

use rusqlite::Connection;
use serde::Deserialize;

use crate::core::auth::hash_password;
use crate::core::session::Session;
use crate::db::log::audit;
use crate::db::queries::{
    employee_id_exists, find_employee, insert_employee, insert_plan_entry, insert_work_entry,
};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::plan_entry::PlanEntry;
use crate::models::report_status::ReportStatus;
use crate::models::role::Role;
use crate::models::work_entry::WorkEntry;
use crate::utils::date::coerce_date;
use crate::utils::time::parse_time_lenient;
use chrono::NaiveTime;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub inserted: usize,
    /// Rows whose date cell could not be parsed and was stored as NULL.
    pub coerced_dates: usize,
    /// Roster rows skipped because the email or id already existed.
    pub skipped: usize,
}

#[derive(Deserialize)]
struct LegacyWorkRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Task")]
    task: String,
    #[serde(rename = "Remarks")]
    remarks: String,
    #[serde(rename = "Final Report")]
    final_report: String,
}

#[derive(Deserialize)]
struct LegacyPlanRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Tomorrow Plan")]
    plan: String,
    #[serde(rename = "Start Time")]
    start: String,
    #[serde(rename = "End Time")]
    end: String,
}

#[derive(Deserialize)]
struct LegacyRosterRow {
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Password")]
    password: String,
}

fn midnight() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).unwrap()
}

pub struct Importer;

impl Importer {
    pub fn import_work(conn: &Connection, session: &Session, path: &Path) -> AppResult<ImportOutcome> {
        let admin = session.require(Role::Admin)?;
        let rdr = csv::Reader::from_path(path)?;
        let outcome = import_work_from(conn, rdr)?;
        audit(
            conn,
            "import",
            admin,
            &format!("imported {} work entries from {}", outcome.inserted, path.display()),
        )?;
        Ok(outcome)
    }

    pub fn import_plans(conn: &Connection, session: &Session, path: &Path) -> AppResult<ImportOutcome> {
        let admin = session.require(Role::Admin)?;
        let rdr = csv::Reader::from_path(path)?;
        let outcome = import_plans_from(conn, rdr)?;
        audit(
            conn,
            "import",
            admin,
            &format!("imported {} plan entries from {}", outcome.inserted, path.display()),
        )?;
        Ok(outcome)
    }

    pub fn import_roster(conn: &Connection, session: &Session, path: &Path) -> AppResult<ImportOutcome> {
        let admin = session.require(Role::Admin)?;
        let rdr = csv::Reader::from_path(path)?;
        let outcome = import_roster_from(conn, rdr)?;
        audit(
            conn,
            "import",
            admin,
            &format!("imported {} roster entries from {}", outcome.inserted, path.display()),
        )?;
        Ok(outcome)
    }
}

fn import_work_from<R: Read>(conn: &Connection, mut rdr: csv::Reader<R>) -> AppResult<ImportOutcome> {
    let mut outcome = ImportOutcome::default();

    for row in rdr.deserialize::<LegacyWorkRow>() {
        let row = row.map_err(|e| AppError::Import(format!("work dataset: {e}")))?;

        let date = coerce_date(&row.date);
        if date.is_none() {
            outcome.coerced_dates += 1;
        }

        let entry = WorkEntry {
            id: 0,
            date,
            time: parse_time_lenient(&row.time).unwrap_or_else(midnight),
            email: row.email,
            task: row.task,
            remarks: row.remarks,
            status: ReportStatus::from_legacy(&row.final_report),
        };
        insert_work_entry(conn, &entry)?;
        outcome.inserted += 1;
    }

    Ok(outcome)
}

fn import_plans_from<R: Read>(conn: &Connection, mut rdr: csv::Reader<R>) -> AppResult<ImportOutcome> {
    let mut outcome = ImportOutcome::default();

    for row in rdr.deserialize::<LegacyPlanRow>() {
        let row = row.map_err(|e| AppError::Import(format!("plan dataset: {e}")))?;

        let date = coerce_date(&row.date);
        if date.is_none() {
            outcome.coerced_dates += 1;
        }

        // The start < end invariant is checked at submission only; legacy
        // rows are carried over as-is.
        let entry = PlanEntry {
            id: 0,
            date,
            email: row.email,
            plan: row.plan,
            start: parse_time_lenient(&row.start).unwrap_or_else(midnight),
            end: parse_time_lenient(&row.end).unwrap_or_else(midnight),
        };
        insert_plan_entry(conn, &entry)?;
        outcome.inserted += 1;
    }

    Ok(outcome)
}

fn import_roster_from<R: Read>(conn: &Connection, mut rdr: csv::Reader<R>) -> AppResult<ImportOutcome> {
    let mut outcome = ImportOutcome::default();

    for row in rdr.deserialize::<LegacyRosterRow>() {
        let row = row.map_err(|e| AppError::Import(format!("roster dataset: {e}")))?;

        if find_employee(conn, &row.email)?.is_some() || employee_id_exists(conn, &row.id)? {
            outcome.skipped += 1;
            continue;
        }

        let hash = hash_password(&row.password)?;
        insert_employee(conn, &Employee::new(row.email, row.id, hash))?;
        outcome.inserted += 1;
    }

    Ok(outcome)
}
