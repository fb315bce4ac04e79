use predicates::str::contains;

mod common;
use common::{add_employee, init_with_admin, setup_test_db, slog};

#[test]
fn valid_plan_is_stored_and_listed() {
    let db_path = setup_test_db("plan_submit");
    init_with_admin(&db_path);
    add_employee(&db_path, "alice@corp.test", "E001", "alice-pw");

    slog()
        .args([
            "--db",
            &db_path,
            "plan",
            "--email",
            "alice@corp.test",
            "--id",
            "E001",
            "--password",
            "alice-pw",
            "--date",
            "2024-01-11",
            "--plan",
            "Ship release",
            "--start",
            "09:00",
            "--end",
            "17:30",
        ])
        .assert()
        .success()
        .stdout(contains("Plan saved"));

    slog()
        .args([
            "--db",
            &db_path,
            "list",
            "--email",
            "alice@corp.test",
            "--id",
            "E001",
            "--password",
            "alice-pw",
            "--plans",
        ])
        .assert()
        .success()
        .stdout(contains("Ship release"))
        .stdout(contains("510")) // 09:00 → 17:30 in minutes
        .stdout(contains("1 plan entries."));
}

#[test]
fn inverted_time_range_is_rejected() {
    let db_path = setup_test_db("plan_inverted");
    init_with_admin(&db_path);
    add_employee(&db_path, "alice@corp.test", "E001", "alice-pw");

    slog()
        .args([
            "--db",
            &db_path,
            "plan",
            "--email",
            "alice@corp.test",
            "--id",
            "E001",
            "--password",
            "alice-pw",
            "--plan",
            "Ship release",
            "--start",
            "17:00",
            "--end",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Start time must be earlier than end time"));
}

#[test]
fn zero_length_plan_is_rejected() {
    let db_path = setup_test_db("plan_zero_length");
    init_with_admin(&db_path);
    add_employee(&db_path, "alice@corp.test", "E001", "alice-pw");

    slog()
        .args([
            "--db",
            &db_path,
            "plan",
            "--email",
            "alice@corp.test",
            "--id",
            "E001",
            "--password",
            "alice-pw",
            "--plan",
            "Ship release",
            "--start",
            "09:00",
            "--end",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Start time must be earlier than end time"));
}
