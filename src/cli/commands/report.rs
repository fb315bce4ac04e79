use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::authenticate;
use crate::core::filter::filter_rows;
use crate::db::pool::DbPool;
use crate::db::queries::{load_plan_entries, load_work_entries};
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::ui::messages::{info, warning};
use crate::utils::date;
use crate::utils::table::Table;
use chrono::NaiveDate;

use super::list::format_date;

/// Parse the optional --from/--to pair. The window predicate only applies
/// when both bounds are present (legacy dashboard behavior); a lone bound
/// is ignored with a warning.
pub(crate) fn resolve_bounds(
    from: &Option<String>,
    to: &Option<String>,
) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match (from, to) {
        (Some(f), Some(t)) => {
            let start = date::parse_date(f).ok_or_else(|| AppError::InvalidDate(f.clone()))?;
            let end = date::parse_date(t).ok_or_else(|| AppError::InvalidDate(t.clone()))?;
            Ok(Some((start, end)))
        }
        (None, None) => Ok(None),
        _ => {
            warning("Both --from and --to are needed for a date range; ignoring the lone bound.");
            Ok(None)
        }
    }
}

/// Admin view over the full work (or plan) dataset.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        auth,
        window,
        from,
        to,
        filter_email,
        plans,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let _session = authenticate(&pool.conn, Role::Admin, &auth.email, &auth.id, &auth.password)?;

        let bounds = resolve_bounds(from, to)?;
        let today = date::today();
        let email = filter_email.as_deref();

        if *plans {
            let rows = load_plan_entries(&pool.conn)?;
            let rows = filter_rows(rows, window.to_window(), today, bounds, email);
            if rows.is_empty() {
                info("No plan entries matched the selected filter.");
                return Ok(());
            }

            let mut table = Table::new(vec!["Date", "Email", "Plan", "Start", "End"]);
            for row in &rows {
                table.add_row(vec![
                    format_date(row.date, cfg),
                    row.email.clone(),
                    row.plan.clone(),
                    row.start_str(),
                    row.end_str(),
                ]);
            }
            print!("{}", table.render());
            println!("{} plan entries.", table.len());
        } else {
            let rows = load_work_entries(&pool.conn)?;
            let rows = filter_rows(rows, window.to_window(), today, bounds, email);
            if rows.is_empty() {
                info("No work entries matched the selected filter.");
                return Ok(());
            }

            let mut table = Table::new(vec!["Date", "Time", "Email", "Task", "Remarks", "Status"]);
            for row in &rows {
                table.add_row(vec![
                    format_date(row.date, cfg),
                    row.time_str(),
                    row.email.clone(),
                    row.task.clone(),
                    row.remarks.clone(),
                    row.status.to_db_str().to_string(),
                ]);
            }
            print!("{}", table.render());
            println!("{} work entries.", table.len());
        }
    }

    Ok(())
}
