use super::report_status::ReportStatus;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One daily work log row.
///
/// `date` is `None` when the source cell could not be parsed (possible only
/// for rows that came in through a legacy CSV import). Such rows are kept in
/// the store but excluded from every date-windowed query.
#[derive(Debug, Clone, Serialize)]
pub struct WorkEntry {
    pub id: i64,            // ⇔ work_entries.id (INTEGER PK)
    pub date: Option<NaiveDate>, // ⇔ work_entries.date (TEXT "YYYY-MM-DD", nullable)
    pub time: NaiveTime,    // ⇔ work_entries.time (TEXT "HH:MM")
    pub email: String,      // ⇔ work_entries.email
    pub task: String,       // ⇔ work_entries.task
    pub remarks: String,    // ⇔ work_entries.remarks
    pub status: ReportStatus, // ⇔ work_entries.final_report
}

impl WorkEntry {
    /// Constructor for entries created from the CLI.
    /// `id = 0` until the row is inserted.
    pub fn new(
        email: impl Into<String>,
        task: impl Into<String>,
        remarks: impl Into<String>,
        status: ReportStatus,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Self {
            id: 0,
            date: Some(date),
            time,
            email: email.into(),
            task: task.into(),
            remarks: remarks.into(),
            status,
        }
    }

    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
