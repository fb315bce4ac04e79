use predicates::str::contains;

mod common;
use common::{ADMIN_EMAIL, ADMIN_ID, ADMIN_PASS, add_employee, init_with_admin, setup_test_db, slog, submit_work};

fn stats_cmd(db_path: &str) -> Vec<String> {
    [
        "--db", db_path, "stats", "--email", ADMIN_EMAIL, "--id", ADMIN_ID, "--password",
        ADMIN_PASS,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn stats_count_tasks_per_employee_and_status_shares() {
    let db_path = setup_test_db("stats_counts");
    init_with_admin(&db_path);
    add_employee(&db_path, "alice@corp.test", "E001", "alice-pw");
    add_employee(&db_path, "bob@corp.test", "E002", "bob-pw");

    submit_work(&db_path, "alice@corp.test", "E001", "alice-pw", "2024-01-10", "Fix bug", "done", "complete");
    submit_work(&db_path, "alice@corp.test", "E001", "alice-pw", "2024-01-11", "Write docs", "wip", "in-progress");
    submit_work(&db_path, "alice@corp.test", "E001", "alice-pw", "2024-01-12", "Review PR", "ok", "complete");
    submit_work(&db_path, "bob@corp.test", "E002", "bob-pw", "2024-01-10", "Triage", "ok", "complete");

    slog()
        .args(&stats_cmd(&db_path))
        .assert()
        .success()
        .stdout(contains("Total tasks by employee"))
        .stdout(contains("alice@corp.test"))
        .stdout(contains("Completion status"))
        .stdout(contains("(75.0%)"))
        .stdout(contains("(25.0%)"));
}

#[test]
fn stats_with_no_entries_says_so() {
    let db_path = setup_test_db("stats_empty");
    init_with_admin(&db_path);

    slog()
        .args(&stats_cmd(&db_path))
        .assert()
        .success()
        .stdout(contains("No work entries recorded yet."));
}
