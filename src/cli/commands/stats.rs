use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::authenticate;
use crate::db::pool::DbPool;
use crate::db::stats::{status_breakdown, tasks_per_employee};
use crate::errors::AppResult;
use crate::models::report_status::ReportStatus;
use crate::models::role::Role;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, RESET, color_for_status};
use crate::utils::table::Table;

/// Admin analytics: the textual counterpart of the old dashboard charts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { auth } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let _session = authenticate(&pool.conn, Role::Admin, &auth.email, &auth.id, &auth.password)?;

        let per_employee = tasks_per_employee(&pool.conn)?;
        if per_employee.is_empty() {
            info("No work entries recorded yet.");
            return Ok(());
        }

        println!("{}Total tasks by employee{}", CYAN, RESET);
        let mut table = Table::new(vec!["Email", "Total Tasks"]);
        for (email, total) in &per_employee {
            table.add_row(vec![email.clone(), total.to_string()]);
        }
        print!("{}", table.render());

        let breakdown = status_breakdown(&pool.conn)?;
        let grand_total: i64 = breakdown.iter().map(|(_, n)| n).sum();

        println!();
        println!("{}Completion status{}", CYAN, RESET);
        for (status, total) in &breakdown {
            let share = 100.0 * (*total as f64) / (grand_total as f64);
            let complete = ReportStatus::from_db_str(status).is_some_and(|s| s.is_complete());
            let color = color_for_status(complete);
            println!("{color}{status:<12}{RESET} {total:>5}  ({share:.1}%)");
        }
    }

    Ok(())
}
