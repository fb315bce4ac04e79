//! High-level export flow: load the work dataset, run the filter engine,
//! serialize to the requested format.

use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::Path;

use crate::core::filter::{Window, filter_rows};
use crate::core::session::Session;
use crate::db::queries::load_work_entries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::WorkEntryExport;
use crate::models::role::Role;
use crate::ui::messages::warning;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered work dataset. Returns the number of exported
    /// rows; an empty selection writes nothing and returns 0.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        conn: &Connection,
        session: &Session,
        format: ExportFormat,
        file: &str,
        window: Window,
        today: NaiveDate,
        bounds: Option<(NaiveDate, NaiveDate)>,
        email_filter: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        session.require(Role::Admin)?;

        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows = load_work_entries(conn)?;
        let rows = filter_rows(rows, window, today, bounds, email_filter);

        if rows.is_empty() {
            warning("No work entries matched the selected filter.");
            return Ok(0);
        }

        let out: Vec<WorkEntryExport> = rows.iter().map(WorkEntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&out, path)?,
            ExportFormat::Json => export_json(&out, path)?,
        }

        Ok(out.len())
    }
}
