use serde::Serialize;

use crate::models::work_entry::WorkEntry;

/// Flat export row, serialized with the legacy dashboard column names so the
/// emitted CSV is byte-compatible with the original work dataset layout.
#[derive(Serialize, Clone, Debug)]
pub struct WorkEntryExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "Final Report")]
    pub final_report: String,
}

impl From<&WorkEntry> for WorkEntryExport {
    fn from(entry: &WorkEntry) -> Self {
        Self {
            date: entry.date_str(),
            time: entry.time_str(),
            email: entry.email.clone(),
            task: entry.task.clone(),
            remarks: entry.remarks.clone(),
            final_report: entry.status.to_db_str().to_string(),
        }
    }
}
