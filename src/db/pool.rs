//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::migrate::run_pending_migrations;
use crate::utils::path::expand_tilde;
use rusqlite::{Connection, Result};

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database. Migrations are idempotent and run on
    /// every open, so a command against a fresh path sees empty tables
    /// instead of a missing-table error.
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(expand_tilde(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}
