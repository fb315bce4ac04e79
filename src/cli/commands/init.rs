use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::seed_admin;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and all pending migrations
///  - the admin account, when the three --admin-* flags are supplied
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init {
        admin_email,
        admin_id,
        admin_password,
    } = &cli.command
    else {
        return Ok(());
    };

    Config::init_all(cli.db.clone(), cli.test)?;

    // In test mode no config file is written, so the CLI override is the
    // only source of truth for the database path.
    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or_else(|| cfg.database.clone());

    println!("⚙️  Initializing stafflog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    match (admin_email, admin_id, admin_password) {
        (Some(email), Some(id), Some(password)) => {
            seed_admin(&conn, email, id, password)?;
            success(format!("Admin account seeded: {email}"));
        }
        (None, None, None) => {
            warning(
                "No admin account seeded; run init again with \
                 --admin-email, --admin-id and --admin-password.",
            );
        }
        _ => {
            return Err(AppError::Config(
                "--admin-email, --admin-id and --admin-password must be supplied together"
                    .to_string(),
            ));
        }
    }

    // Audit failure must not block initialization.
    if let Err(e) = log::audit(&conn, "init", &db_path, "database initialized") {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    success("stafflog initialization completed");
    Ok(())
}
