use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_encode_national_id() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("promptpay"));
    cmd.args(["encode", "0105540087061", "--amount", "100.75"]);

    cmd.assert().success().stdout(
        "00020101021229370016A000000677010111021301055400870615802TH53037645406100.7563046847\n",
    );

    Ok(())
}

#[test]
fn test_cli_encode_static_mobile() {
    let mut cmd = Command::new(cargo_bin!("promptpay"));
    cmd.args(["encode", "081-111-1111"]);

    cmd.assert().success().stdout(
        "00020101021129370016A000000677010111011300668111111115802TH530376463040EF4\n",
    );
}

#[test]
fn test_cli_encode_one_time() {
    let mut cmd = Command::new(cargo_bin!("promptpay"));
    cmd.args(["encode", "0811111111", "--one-time"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("010212"))
        .stdout(predicate::str::ends_with("6304F137\n"));
}

#[test]
fn test_cli_encode_currency_preset() {
    let mut cmd = Command::new(cargo_bin!("promptpay"));
    cmd.args(["encode", "0105540087061", "--amount", "45.1", "--currency", "eur"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("5303978540545.10"))
        .stdout(predicate::str::ends_with("6304A6E6\n"));
}

#[test]
fn test_cli_encode_json() {
    let output = Command::new(cargo_bin!("promptpay"))
        .args(["encode", "0811111111", "--amount", "100.25", "--json"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["identifier"], "66811111111");
    assert_eq!(json["kind"], "mobile_number");
    assert_eq!(
        json["payload"],
        "00020101021229370016A000000677010111011300668111111115802TH53037645406100.256304B58D"
    );
}
