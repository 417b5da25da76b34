use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.arg("--db").arg(db).env_remove("EXPENSES_DB").env_remove("EXPENSES_LOG");
    cmd
}

#[test]
fn add_list_and_total() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("expenses.db");

    expenses(&db)
        .args(["add", "coffee", "3.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: coffee (3.50)"));
    expenses(&db).args(["add", "book", "12.25"]).assert().success();

    expenses(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("coffee"))
        .stdout(predicate::str::contains("12.25"))
        .stdout(predicate::str::contains("Total: 15.75"));

    expenses(&db)
        .arg("total")
        .assert()
        .success()
        .stdout("15.75\n");
}

#[test]
fn duplicate_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("expenses.db");

    expenses(&db).args(["add", "rent", "1200.00"]).assert().success();
    expenses(&db)
        .args(["add", "rent", "50.00"])
        .assert()
        .failure()
        .stderr("Input Error: Expense 'rent' already exists.\n");

    expenses(&db)
        .arg("total")
        .assert()
        .success()
        .stdout("1200.00\n");
}

#[test]
fn invalid_price_is_rejected() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("expenses.db");

    expenses(&db)
        .args(["add", "coffee", "cheap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input Error"));

    expenses(&db)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn negative_price_is_accepted() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("expenses.db");

    expenses(&db).args(["add", "refund", "-4.50"]).assert().success();
    expenses(&db).arg("total").assert().success().stdout("-4.50\n");
}

#[test]
fn remove_present_and_absent() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("expenses.db");

    expenses(&db).args(["add", "coffee", "3.5"]).assert().success();

    expenses(&db)
        .args(["remove", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: coffee"));

    expenses(&db)
        .args(["rm", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense named 'coffee'"));

    expenses(&db).arg("total").assert().success().stdout("0.00\n");
}

#[test]
fn json_listing_preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("expenses.db");

    expenses(&db).args(["add", "zeta", "1"]).assert().success();
    expenses(&db).args(["add", "alpha", "2"]).assert().success();

    let output = expenses(&db).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            {"name": "zeta", "amount": 1.0},
            {"name": "alpha", "amount": 2.0}
        ])
    );
}

#[test]
fn config_shows_database_path() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("custom.db");

    expenses(&db)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.db"));
    assert!(!db.exists());
}

#[test]
fn env_var_selects_database() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("env.db");

    Command::cargo_bin("expenses")
        .unwrap()
        .env("EXPENSES_DB", &db)
        .args(["add", "coffee", "3.5"])
        .assert()
        .success();

    assert!(db.exists());
}

#[test]
fn missing_price_prints_only_the_warning() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("expenses.db");

    expenses(&db)
        .args(["add", "coffee", "  "])
        .assert()
        .failure()
        .stderr("Input Error: Please enter both expense name and price.\n");
}

#[test]
fn corrupt_database_is_a_storage_failure() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("expenses.db");
    std::fs::write(&db, "plain text, not sqlite\n".repeat(64)).unwrap();

    expenses(&db)
        .arg("total")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Storage error"))
        .stderr(predicate::str::contains("Input Error").not());
}
