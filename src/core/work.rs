//! High-level business logic for submitting work entries.

use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;

use crate::core::session::Session;
use crate::db::log::audit;
use crate::db::queries::insert_work_entry;
use crate::errors::{AppError, AppResult};
use crate::models::report_status::ReportStatus;
use crate::models::role::Role;
use crate::models::work_entry::WorkEntry;

pub struct WorkLog;

impl WorkLog {
    /// Validate and persist one work entry for the session's identity.
    /// Validation failures leave the store untouched.
    pub fn submit(
        conn: &Connection,
        session: &Session,
        date: NaiveDate,
        time: NaiveTime,
        task: &str,
        remarks: &str,
        status: ReportStatus,
    ) -> AppResult<WorkEntry> {
        let email = session.require(Role::Employee)?;

        if task.trim().is_empty() {
            return Err(AppError::EmptyField("task"));
        }
        if remarks.trim().is_empty() {
            return Err(AppError::EmptyField("remarks"));
        }

        let entry = WorkEntry::new(email, task, remarks, status, date, time);
        insert_work_entry(conn, &entry)?;

        audit(
            conn,
            "work",
            email,
            &format!("work entry added for {}", entry.date_str()),
        )?;

        Ok(entry)
    }
}
