//! High-level business logic for submitting next-day plans.

use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;

use crate::core::session::Session;
use crate::db::log::audit;
use crate::db::queries::insert_plan_entry;
use crate::errors::{AppError, AppResult};
use crate::models::plan_entry::PlanEntry;
use crate::models::role::Role;

pub struct PlanLog;

impl PlanLog {
    /// Validate and persist one plan entry. The `start < end` invariant is
    /// enforced here, at creation, only.
    pub fn submit(
        conn: &Connection,
        session: &Session,
        date: NaiveDate,
        plan: &str,
        start: NaiveTime,
        end: NaiveTime,
    ) -> AppResult<PlanEntry> {
        let email = session.require(Role::Employee)?;

        if plan.trim().is_empty() {
            return Err(AppError::EmptyField("plan"));
        }
        if start >= end {
            return Err(AppError::InvalidTimeRange {
                start: start.format("%H:%M").to_string(),
                end: end.format("%H:%M").to_string(),
            });
        }

        let entry = PlanEntry::new(email, plan, date, start, end);
        insert_plan_entry(conn, &entry)?;

        audit(
            conn,
            "plan",
            email,
            &format!("plan added for {}", entry.date_str()),
        )?;

        Ok(entry)
    }
}
