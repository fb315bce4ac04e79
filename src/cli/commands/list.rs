use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::authenticate;
use crate::db::pool::DbPool;
use crate::db::queries::{load_plan_entries_for, load_work_entries_for};
use crate::errors::AppResult;
use crate::models::role::Role;
use crate::ui::messages::info;
use crate::utils::table::Table;
use crate::utils::time::minutes_between;

/// List the authenticated employee's own past entries.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { auth, plans } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let session = authenticate(&pool.conn, Role::Employee, &auth.email, &auth.id, &auth.password)?;
        // The identity comes from the session, never from a free-form flag:
        // an employee can only ever see their own rows.
        let email = session.identity().unwrap_or_default();

        if *plans {
            let rows = load_plan_entries_for(&pool.conn, email)?;
            if rows.is_empty() {
                info("No plan entries yet.");
                return Ok(());
            }

            let mut table = Table::new(vec!["Date", "Plan", "Start", "End", "Minutes"]);
            for row in &rows {
                table.add_row(vec![
                    format_date(row.date, cfg),
                    row.plan.clone(),
                    row.start_str(),
                    row.end_str(),
                    minutes_between(row.start, row.end).to_string(),
                ]);
            }
            print!("{}", table.render());
            println!("{} plan entries.", table.len());
        } else {
            let rows = load_work_entries_for(&pool.conn, email)?;
            if rows.is_empty() {
                info("No work entries yet.");
                return Ok(());
            }

            let mut table = Table::new(vec!["Date", "Time", "Task", "Remarks", "Status"]);
            for row in &rows {
                table.add_row(vec![
                    format_date(row.date, cfg),
                    row.time_str(),
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

pub(crate) fn format_date(date: Option<chrono::NaiveDate>, cfg: &Config) -> String {
    date.map(|d| d.format(&cfg.date_format).to_string())
        .unwrap_or_else(|| "--".to_string())
}
