use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::authenticate;
use crate::core::plan::PlanLog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::ui::messages::success;
use crate::utils::{date, time};

/// Submit a next-day plan as the authenticated employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        auth,
        date: date_arg,
        plan,
        start,
        end,
    } = cmd
    {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let start_t = time::parse_required_time(start)?;
        let end_t = time::parse_required_time(end)?;

        let pool = DbPool::new(&cfg.database)?;
        let session = authenticate(&pool.conn, Role::Employee, &auth.email, &auth.id, &auth.password)?;

        let entry = PlanLog::submit(&pool.conn, &session, d, plan, start_t, end_t)?;

        success(format!(
            "Plan saved for {} ({}–{})",
            entry.date_str(),
            entry.start_str(),
            entry.end_str()
        ));
    }

    Ok(())
}
