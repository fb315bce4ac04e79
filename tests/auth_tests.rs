use predicates::str::contains;

mod common;
use common::{ADMIN_EMAIL, ADMIN_ID, ADMIN_PASS, add_employee, init_with_admin, setup_test_db, slog};

#[test]
fn wrong_password_unknown_email_and_wrong_id_fail_identically() {
    let db_path = setup_test_db("auth_uniform");
    init_with_admin(&db_path);
    add_employee(&db_path, "alice@corp.test", "E001", "alice-pw");

    // Wrong password
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
            "wrong-pw",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials"));

    // Unknown email
    slog()
        .args([
            "--db",
            &db_path,
            "list",
            "--email",
            "nobody@corp.test",
            "--id",
            "E001",
            "--password",
            "alice-pw",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials"));

    // Wrong id
    slog()
        .args([
            "--db",
            &db_path,
            "list",
            "--email",
            "alice@corp.test",
            "--id",
            "E999",
            "--password",
            "alice-pw",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials"));
}

#[test]
fn admin_credentials_do_not_open_employee_commands() {
    let db_path = setup_test_db("auth_admin_not_employee");
    init_with_admin(&db_path);

    slog()
        .args([
            "--db",
            &db_path,
            "list",
            "--email",
            ADMIN_EMAIL,
            "--id",
            ADMIN_ID,
            "--password",
            ADMIN_PASS,
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials"));
}

#[test]
fn employee_credentials_do_not_open_admin_commands() {
    let db_path = setup_test_db("auth_employee_not_admin");
    init_with_admin(&db_path);
    add_employee(&db_path, "alice@corp.test", "E001", "alice-pw");

    slog()
        .args([
            "--db",
            &db_path,
            "report",
            "--email",
            "alice@corp.test",
            "--id",
            "E001",
            "--password",
            "alice-pw",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials"));
}

#[test]
fn correct_credentials_log_in() {
    let db_path = setup_test_db("auth_ok");
    init_with_admin(&db_path);
    add_employee(&db_path, "alice@corp.test", "E001", "alice-pw");

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
        ])
        .assert()
        .success()
        .stdout(contains("No work entries yet."));
}
