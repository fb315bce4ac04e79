#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN_EMAIL: &str = "boss@corp.test";
pub const ADMIN_ID: &str = "A001";
pub const ADMIN_PASS: &str = "s3cret-admin";

pub fn slog() -> Command {
    cargo_bin_cmd!("stafflog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stafflog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the database and seed the test admin account
pub fn init_with_admin(db_path: &str) {
    slog()
        .args([
            "--db",
            db_path,
            "--test",
            "init",
            "--admin-email",
            ADMIN_EMAIL,
            "--admin-id",
            ADMIN_ID,
            "--admin-password",
            ADMIN_PASS,
        ])
        .assert()
        .success();
}

/// Add a roster entry through the admin CLI
pub fn add_employee(db_path: &str, email: &str, id: &str, password: &str) {
    slog()
        .args([
            "--db",
            db_path,
            "employee",
            "--email",
            ADMIN_EMAIL,
            "--id",
            ADMIN_ID,
            "--password",
            ADMIN_PASS,
            "add",
            "--new-email",
            email,
            "--new-id",
            id,
            "--new-password",
            password,
        ])
        .assert()
        .success();
}

/// Submit a work entry for an employee with an explicit date
pub fn submit_work(
    db_path: &str,
    email: &str,
    id: &str,
    password: &str,
    date: &str,
    task: &str,
    remarks: &str,
    status: &str,
) {
    slog()
        .args([
            "--db", db_path, "work", "--email", email, "--id", id, "--password", password,
            "--date", date, "--time", "09:15", "--task", task, "--remarks", remarks, "--status",
            status,
        ])
        .assert()
        .success();
}
