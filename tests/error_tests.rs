use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_empty_identifier_fails() {
    let mut cmd = Command::new(cargo_bin!("promptpay"));
    cmd.args(["encode", "  "]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("identifier is empty"));
}

#[test]
fn test_invalid_merchant_info_fails() {
    let mut cmd = Command::new(cargo_bin!("promptpay"));
    cmd.args(["encode", "012345678912"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid merchant information"));
}

#[test]
fn test_negative_amount_fails() {
    let mut cmd = Command::new(cargo_bin!("promptpay"));
    cmd.args(["encode", "0105540087061", "--amount", "-1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("amount can't be negative"));
}

#[test]
fn test_unknown_currency_fails() {
    let mut cmd = Command::new(cargo_bin!("promptpay"));
    cmd.args(["encode", "0105540087061", "--currency", "XYZ"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown currency: XYZ"));
}

#[test]
fn test_missing_config_fails() {
    let mut cmd = Command::new(cargo_bin!("promptpay"));
    cmd.args(["--config", "does/not/exist.json", "encode", "0105540087061"]);

    cmd.assert().failure().stderr(predicate::str::contains("IO error"));
}
