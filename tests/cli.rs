//! End-to-end CLI test: add, import, classify, report, backup round-trip.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bolso(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bolso").unwrap();
    cmd.env("BOLSO_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn full_flow() {
    let home = TempDir::new().unwrap();

    // Manual income entry
    bolso(&home)
        .args(["tx", "add", "1000.00", "Salary", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    // A rule, then an import whose row it should classify
    bolso(&home)
        .args(["rule", "add", "mercado", "Food"])
        .assert()
        .success();

    let csv_path = home.path().join("extrato.csv");
    std::fs::write(
        &csv_path,
        "Data,Valor,Descricao\n15/09/2025,\"-723,11\",Mercado Azul\n",
    )
    .unwrap();

    bolso(&home)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 transaction"));

    // The imported row was normalized and classified
    bolso(&home)
        .args(["tx", "list", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mercado Azul"))
        .stdout(predicate::str::contains("-723.11"))
        .stdout(predicate::str::contains("Food"));

    // Monthly report reflects both records
    bolso(&home)
        .args(["report", "2025-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:  1000.00"))
        .stdout(predicate::str::contains("Expense: 723.11"))
        .stdout(predicate::str::contains("Result:  276.89"));

    // Backup, restore into a fresh home, and compare exports
    let backup_path = home.path().join("backup.json");
    bolso(&home)
        .args(["backup", "create", backup_path.to_str().unwrap()])
        .assert()
        .success();

    let restored_home = TempDir::new().unwrap();
    bolso(&restored_home)
        .args(["backup", "restore", backup_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Restored: transactions, budget, rules",
        ));

    let export_a = home.path().join("a.csv");
    let export_b = restored_home.path().join("b.csv");
    bolso(&home)
        .args(["export", export_a.to_str().unwrap()])
        .assert()
        .success();
    bolso(&restored_home)
        .args(["export", export_b.to_str().unwrap()])
        .assert()
        .success();

    let a = std::fs::read_to_string(&export_a).unwrap();
    let b = std::fs::read_to_string(&export_b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn delete_accepts_the_listed_id() {
    let home = TempDir::new().unwrap();

    bolso(&home)
        .args(["tx", "add", "-12.00", "Bus fare", "--date", "2025-09-02"])
        .assert()
        .success();

    // The short ID printed by the listing must be a usable selector
    let output = bolso(&home).args(["tx", "list"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .split_whitespace()
        .find(|token| token.starts_with("txn-"))
        .expect("listing shows a transaction id")
        .to_string();

    bolso(&home)
        .args(["tx", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    bolso(&home)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions."));
}

#[test]
fn rejects_unknown_category() {
    let home = TempDir::new().unwrap();

    bolso(&home)
        .args(["tx", "add", "-5.00", "coffee", "--category", "Nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found"));
}

#[test]
fn unparseable_csv_commits_nothing() {
    let home = TempDir::new().unwrap();

    let csv_path = home.path().join("bad.csv");
    std::fs::write(&csv_path, "date,amount,description\n2025-09-15,-5.00\n").unwrap();

    bolso(&home)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));

    bolso(&home)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions."));
}
