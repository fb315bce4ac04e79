use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

/// Print file-level and row-level information about the database.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let work: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM work_entries", [], |row| row.get(0))?;
    let plans: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM plan_entries", [], |row| row.get(0))?;
    let roster: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;

    println!("{}• Work entries:{} {}{}{}", CYAN, RESET, GREEN, work, RESET);
    println!("{}• Plan entries:{} {}{}{}", CYAN, RESET, GREEN, plans, RESET);
    println!("{}• Roster size:{}  {}{}{}", CYAN, RESET, GREEN, roster, RESET);

    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM work_entries WHERE date IS NOT NULL ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM work_entries WHERE date IS NOT NULL ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Work date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}

/// Task counts per identity, busiest first. The textual counterpart of the
/// old dashboard's "Total Tasks by Employee" chart.
pub fn tasks_per_employee(conn: &Connection) -> rusqlite::Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT email, COUNT(*) AS total
         FROM work_entries
         GROUP BY email
         ORDER BY total DESC, email ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entry counts per completion status (the pie-chart numbers).
pub fn status_breakdown(conn: &Connection) -> rusqlite::Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT final_report, COUNT(*) AS total
         FROM work_entries
         GROUP BY final_report
         ORDER BY final_report ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
