use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::authenticate;
use crate::core::import::Importer;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::role::Role;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Import the legacy CSV datasets into the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        auth,
        work,
        plans,
        roster,
    } = cmd
    {
        if work.is_none() && plans.is_none() && roster.is_none() {
            warning("Nothing to import. Pass --work, --plans and/or --roster.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let session = authenticate(&pool.conn, Role::Admin, &auth.email, &auth.id, &auth.password)?;

        if let Some(file) = work {
            let outcome = Importer::import_work(&pool.conn, &session, Path::new(file))?;
            success(format!(
                "Imported {} work entries ({} dates coerced to empty).",
                outcome.inserted, outcome.coerced_dates
            ));
        }

        if let Some(file) = plans {
            let outcome = Importer::import_plans(&pool.conn, &session, Path::new(file))?;
            success(format!(
                "Imported {} plan entries ({} dates coerced to empty).",
                outcome.inserted, outcome.coerced_dates
            ));
        }

        if let Some(file) = roster {
            let outcome = Importer::import_roster(&pool.conn, &session, Path::new(file))?;
            success(format!(
                "Imported {} roster entries ({} duplicates skipped).",
                outcome.inserted, outcome.skipped
            ));
        }
    }

    Ok(())
}
