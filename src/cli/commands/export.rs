use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::authenticate;
use crate::core::filter::Window;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::models::role::Role;
use crate::ui::messages::success;
use crate::utils::date;

use super::report::resolve_bounds;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        auth,
        format,
        file,
        window,
        from,
        to,
        filter_email,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let session = authenticate(&pool.conn, Role::Admin, &auth.email, &auth.id, &auth.password)?;

        let format = match format {
            Some(f) => *f,
            None => ExportFormat::from_config(&cfg.default_export_format)?,
        };

        // No --window means "everything": a Range window without bounds
        // applies no date predicate.
        let window = window.map(|w| w.to_window()).unwrap_or(Window::Range);
        let bounds = resolve_bounds(from, to)?;

        let count = ExportLogic::export(
            &pool.conn,
            &session,
            format,
            file,
            window,
            date::today(),
            bounds,
            filter_email.as_deref(),
            *force,
        )?;
        if count > 0 {
            success(format!("{count} rows exported ({}).", format.as_str()));
        }
    }

    Ok(())
}
