use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::authenticate;
use crate::core::work::WorkLog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::ui::messages::success;
use crate::utils::{date, time};

/// Submit a work entry as the authenticated employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Work {
        auth,
        date: date_arg,
        time: time_arg,
        task,
        remarks,
        status,
    } = cmd
    {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let t = match time_arg {
            Some(s) => time::parse_required_time(s)?,
            None => time::now_time(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let session = authenticate(&pool.conn, Role::Employee, &auth.email, &auth.id, &auth.password)?;

        let entry = WorkLog::submit(&pool.conn, &session, d, t, task, remarks, *status)?;

        success(format!(
            "Work entry saved for {} at {} ({})",
            entry.date_str(),
            entry.time_str(),
            entry.email
        ));
    }

    Ok(())
}
