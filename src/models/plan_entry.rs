use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One next-day plan row. The `start < end` invariant is checked when the
/// plan is submitted, never re-validated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct PlanEntry {
    pub id: i64,
    pub date: Option<NaiveDate>, // None when an imported cell was unparsable
    pub email: String,
    pub plan: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl PlanEntry {
    pub fn new(
        email: impl Into<String>,
        plan: impl Into<String>,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            id: 0,
            date: Some(date),
            email: email.into(),
            plan: plan.into(),
            start,
            end,
        }
    }

    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}
