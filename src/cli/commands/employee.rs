use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::auth::authenticate;
use crate::core::roster::Roster;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::role::Role;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

/// Admin roster management.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { auth, action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let session = authenticate(&pool.conn, Role::Admin, &auth.email, &auth.id, &auth.password)?;

        match action {
            EmployeeAction::Add {
                new_email,
                new_id,
                new_password,
            } => {
                Roster::add(&pool.conn, &session, new_email, new_id, new_password)?;
                success(format!("Employee '{new_email}' added to the roster."));
            }
            EmployeeAction::List => {
                let roster = Roster::list(&pool.conn, &session)?;
                if roster.is_empty() {
                    info("The roster is empty.");
                    return Ok(());
                }

                let mut table = Table::new(vec!["Email", "ID"]);
                for employee in &roster {
                    table.add_row(vec![employee.email.clone(), employee.id.clone()]);
                }
                print!("{}", table.render());
                println!("{} employees.", table.len());
            }
        }
    }

    Ok(())
}
