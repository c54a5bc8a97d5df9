use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shopbooks(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shopbooks").unwrap();
    cmd.env("SHOPBOOKS_DATA_DIR", base).env_remove("SHOPBOOKS_LOG");
    cmd
}

fn seed(base: &Path) {
    shopbooks(base).arg("init").assert().success();

    fs::write(
        base.join("data").join("orders.json"),
        r#"{
  "orders": [
    {
      "id": 1,
      "delivery_date": "2024-03-05",
      "total": 1000,
      "paid": true,
      "customer": { "first_name": "Ana", "last_name": "Pérez" },
      "line_items": [{ "quantity": 1, "product_name": "Cake", "options": ["Chocolate"] }]
    },
    { "id": 2, "delivery_date": "2024-03-10", "total": 500, "paid": true, "cancelled": true },
    { "id": 3, "delivery_date": "2024-03-11", "total": "250.00" },
    { "id": 4, "total": 90, "paid": true }
  ]
}"#,
    )
    .unwrap();

    fs::write(
        base.join("data").join("expenses.json"),
        r#"{
  "expenses": [
    { "id": 1, "date": "2024-03-05T10:30:00", "description": "Flour", "amount": "200.00" }
  ]
}"#,
    )
    .unwrap();
}

#[test]
fn init_creates_snapshots() {
    let temp_dir = TempDir::new().unwrap();

    shopbooks(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(temp_dir.path().join("data").join("orders.json").exists());
    assert!(temp_dir.path().join("data").join("expenses.json").exists());
    assert!(temp_dir.path().join("config.json").exists());
}

#[test]
fn report_show_daily() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    shopbooks(temp_dir.path())
        .args(["report", "show", "--from", "2024-03-01", "--to", "2024-03-31", "--by", "day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("05/03/2024"))
        .stdout(predicate::str::contains("$1000.00"))
        .stdout(predicate::str::contains("$200.00"))
        .stdout(predicate::str::contains("$800.00"))
        .stdout(predicate::str::contains("10/03/2024").not())
        .stdout(predicate::str::contains("Skipped 1 malformed record(s)"));
}

#[test]
fn report_show_monthly_with_detail() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    shopbooks(temp_dir.path())
        .args([
            "report", "show", "--from", "2024-03-01", "--to", "2024-03-31", "--by", "month",
            "--detail",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3/2024"))
        .stdout(predicate::str::contains("Ana Pérez"))
        .stdout(predicate::str::contains("Flour"));
}

#[test]
fn report_show_empty_range() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    shopbooks(temp_dir.path())
        .args(["report", "show", "--from", "2023-01-01", "--to", "2023-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity in range."));
}

#[test]
fn report_show_inverted_range() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    shopbooks(temp_dir.path())
        .args(["report", "show", "--from", "2024-04-01", "--to", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity in range."))
        .stdout(predicate::str::contains("is after the end date"));
}

#[test]
fn report_show_rejects_bad_date() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    shopbooks(temp_dir.path())
        .args(["report", "show", "--from", "March 1st"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use YYYY-MM-DD format"));
}

#[test]
fn report_without_data_fails() {
    let temp_dir = TempDir::new().unwrap();

    shopbooks(temp_dir.path())
        .args(["report", "show", "--from", "2024-03-01", "--to", "2024-03-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Orders unavailable"));
}

#[test]
fn report_export_csv() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());
    let out = temp_dir.path().join("out");

    shopbooks(temp_dir.path())
        .args(["report", "export", "--from", "2024-03-01", "--to", "2024-03-31", "--by", "day"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 file(s)"));

    let summary = fs::read_to_string(out.join("finance_2024-03-01_2024-03-31_summary.csv")).unwrap();
    assert_eq!(
        summary,
        "Period,Inflow,Outflow,Balance\n05/03/2024,1000.00,200.00,800.00\nTOTAL,1000.00,200.00,800.00\n"
    );

    let orders = fs::read_to_string(out.join("finance_2024-03-01_2024-03-31_orders.csv")).unwrap();
    assert!(orders.contains("Ana Pérez"));
    assert!(!orders.contains("\n2,"));

    assert!(out.join("finance_2024-03-01_2024-03-31_expenses.csv").exists());
}

#[test]
fn report_export_json() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    shopbooks(temp_dir.path())
        .args([
            "report", "export", "--from", "2024-03-01", "--to", "2024-03-31", "--format", "json",
        ])
        .assert()
        .success();

    let path = temp_dir
        .path()
        .join("exports")
        .join("finance_2024-03-01_2024-03-31.json");
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["granularity"], "month");
    assert_eq!(value["summary"][0]["period"], "3/2024");
    assert_eq!(value["summary"][1]["balance"], "800.00");
}

#[test]
fn dashboard_shows_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    shopbooks(temp_dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending payments:    1"))
        .stdout(predicate::str::contains("Best customer:       Ana Pérez"));
}
