use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ValueEnum)]
pub enum ReportStatus {
    Complete,
    InProgress,
}

impl ReportStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReportStatus::Complete => "Complete",
            ReportStatus::InProgress => "In-Progress",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Complete" => Some(ReportStatus::Complete),
            "In-Progress" => Some(ReportStatus::InProgress),
            _ => None,
        }
    }

    /// Coerce a status cell from a legacy CSV export. The old dashboards
    /// decorated the value ("Complete ✅", "Process 🕒"), so anything that
    /// does not start with "Complete" counts as still in progress.
    pub fn from_legacy(s: &str) -> Self {
        if s.trim().starts_with("Complete") {
            ReportStatus::Complete
        } else {
            ReportStatus::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ReportStatus::Complete)
    }
}
