use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "monthbook";

fn monthbook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.arg("--data-dir").arg(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn run(dir: &TempDir, args: &[&str]) -> String {
    let output = monthbook(dir).args(args).assert().success().get_output().clone();
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

/// Pull the short id out of an "ID: ..." line
fn added_id(stdout: &str) -> String {
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID: "))
        .expect("id line")
        .to_string()
}

fn seed_march(dir: &TempDir) {
    run(dir, &["income", "add", "Salary", "1000", "-c", "Job", "-m", "2024-03"]);
    run(dir, &["income", "add", "Freelance", "500", "-c", "Side", "-m", "2024-03"]);
    run(
        dir,
        &["expense", "add", "Groceries", "250", "-c", "Food", "-p", "Card", "-m", "2024-03"],
    );
    run(
        dir,
        &["investment", "add", "Index fund", "300", "-t", "stocks", "-r", "4.5", "-m", "2024-03"],
    );
}

#[test]
fn summary_reports_totals_and_balance() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    monthbook(&dir)
        .args(["summary", "-m", "2024-03"])
        .assert()
        .success()
        .stdout(contains("March 2024"))
        .stdout(contains("$1500.00"))
        .stdout(contains("$250.00"))
        .stdout(contains("$300.00"))
        .stdout(contains("$950.00"));
}

#[test]
fn empty_month_summary_is_zero() {
    let dir = TempDir::new().unwrap();

    monthbook(&dir)
        .args(["summary", "-m", "2023-01"])
        .assert()
        .success()
        .stdout(contains("$0.00"));
}

#[test]
fn months_are_kept_apart() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);
    run(&dir, &["expense", "add", "Rent", "1200", "-c", "Housing", "-m", "2024-04"]);

    monthbook(&dir)
        .args(["expense", "list", "-m", "2024-03"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("Rent").not()));

    monthbook(&dir)
        .arg("months")
        .assert()
        .success()
        .stdout(contains("2024-03").and(contains("2024-04")));
}

#[test]
fn invalid_input_is_rejected_before_storage() {
    let dir = TempDir::new().unwrap();

    monthbook(&dir)
        .args(["expense", "add", "Coffee", "abc", "-c", "Food", "-m", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    monthbook(&dir)
        .args(["expense", "add", "Coffee", "-5", "-c", "Food", "-m", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("Amount cannot be negative"));

    monthbook(&dir)
        .args(["income", "add", "Salary", "100", "-c", "Job", "-p", "Cash", "-m", "2024-03"])
        .assert()
        .failure();

    monthbook(&dir)
        .args(["income", "add", "Salary", "100", "-c", "Job", "-m", "2024-3"])
        .assert()
        .failure();

    assert!(!dir.path().join("data").join("financial_data.json").exists());
}

#[test]
fn edit_and_delete_by_short_id() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, &["expense", "add", "Rent", "1200", "-c", "Housing", "-m", "2024-03"]);
    let id = added_id(&out);

    monthbook(&dir)
        .args(["expense", "edit", &id, "-a", "1250", "-m", "2024-03"])
        .assert()
        .success()
        .stdout(contains("$1250.00"));

    monthbook(&dir)
        .args(["summary", "-m", "2024-03"])
        .assert()
        .success()
        .stdout(contains("-$1250.00"));

    monthbook(&dir)
        .args(["expense", "delete", &id, "-m", "2024-03"])
        .assert()
        .success()
        .stdout(contains("Deleted Expense: Rent"));

    monthbook(&dir)
        .args(["expense", "list", "-m", "2024-03"])
        .assert()
        .success()
        .stdout(contains("No expenses recorded."));
}

#[test]
fn unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    monthbook(&dir)
        .args(["income", "delete", "txn-00000000", "-m", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("not found"));

    monthbook(&dir)
        .args(["summary", "-m", "2024-03"])
        .assert()
        .success()
        .stdout(contains("$1500.00"));
}

#[test]
fn investment_edit_changes_type_and_returns() {
    let dir = TempDir::new().unwrap();
    let out = run(
        &dir,
        &["investment", "add", "Bonds", "200", "-t", "fixed", "-m", "2024-03"],
    );
    let id = added_id(&out);

    monthbook(&dir)
        .args(["investment", "edit", &id, "-t", "treasury", "-r", "3.25", "-m", "2024-03"])
        .assert()
        .success()
        .stdout(contains("treasury").and(contains("3.25%")));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    monthbook(&dir)
        .args(["export", "csv", "-m", "2024-03"])
        .assert()
        .success()
        .stdout(contains("Section,ID,Date,Description,Amount,Category,Payment Method,Returns"))
        .stdout(contains("Expenses,"))
        .stdout(contains("Investments,"));
}

#[test]
fn export_json_to_file() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);
    let output = dir.path().join("march.json");

    monthbook(&dir)
        .args(["export", "json", "-m", "2024-03", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Exported March 2024 (4 entries)"));

    let text = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["month"], "2024-03");
    assert_eq!(value["data"]["expenses"][0]["paymentMethod"], "Card");
    assert_eq!(value["data"]["investments"][0]["type"], "stocks");
    assert_eq!(value["summary"]["balance"], 950.0);
}

#[test]
fn stored_document_uses_wire_field_names() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    let path = dir.path().join("data").join("financial_data.json");
    let text = std::fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let march = &value["2024-03"];
    assert_eq!(march["income"].as_array().unwrap().len(), 2);
    assert_eq!(march["income"][0]["date"], "2024-03-01");
    assert_eq!(march["expenses"][0]["paymentMethod"], "Card");
    assert_eq!(march["investments"][0]["returns"], 4.5);
}

#[test]
fn corrupt_store_is_reported_and_left_alone() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    let path = data_dir.join("financial_data.json");
    std::fs::write(&path, "{not json").unwrap();

    monthbook(&dir)
        .args(["summary", "-m", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse stored data"));

    monthbook(&dir)
        .args(["income", "add", "Salary", "100", "-c", "Job", "-m", "2024-03"])
        .assert()
        .failure();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
}

#[test]
fn overly_precise_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    monthbook(&dir)
        .args(["income", "add", "Bonus", "1234567.123456789012345", "-c", "Job", "-m", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("significant digits"));

    assert!(!dir.path().join("data").join("financial_data.json").exists());
}

#[test]
fn overflowing_totals_are_reported() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    let blob = r#"{"2024-03": {"income": [
        {"id": "0b9c7f5e-3a52-4c8e-9d1f-2a6b8c4e7f10", "date": "2024-03-01",
         "description": "a", "amount": 5e28, "category": "x"},
        {"id": "1c8d6e4f-2b41-4d7f-8e0a-3b5c7d9e1f20", "date": "2024-03-02",
         "description": "b", "amount": 5e28, "category": "x"}
    ], "expenses": [], "investments": []}}"#;
    std::fs::write(data_dir.join("financial_data.json"), blob).unwrap();

    monthbook(&dir)
        .args(["summary", "-m", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("Amount overflow"));

    monthbook(&dir)
        .args(["export", "json", "-m", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("Amount overflow"));

    monthbook(&dir).args(["income", "list", "-m", "2024-03"]).assert().success();
}

#[test]
fn audit_lists_changes() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    monthbook(&dir)
        .args(["audit", "--limit", "2"])
        .assert()
        .success()
        .stdout(contains("CREATE Expense"))
        .stdout(contains("CREATE Investment"))
        .stdout(contains("Salary").not());
}

#[test]
fn audit_filters_by_month() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);
    run(&dir, &["expense", "add", "Heating", "90", "-c", "Utilities", "-m", "2024-02"]);

    monthbook(&dir)
        .args(["audit", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("Heating"))
        .stdout(contains("Salary").not());

    monthbook(&dir)
        .args(["audit", "-m", "2024-05"])
        .assert()
        .success()
        .stdout(contains("No audit entries for May 2024."));

    monthbook(&dir).args(["audit", "-m", "2024-5"]).assert().failure();
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    monthbook(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Storage key:     financial_data"))
        .stdout(contains("Currency symbol: $"));

    assert!(dir.path().join("config.json").exists());
}
