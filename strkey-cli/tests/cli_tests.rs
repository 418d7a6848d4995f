//! End-to-end tests for the `strkey` binary.
//!
//! These run the compiled binary directly and need no network access.

use std::process::{Command, Output};

use strkey_lib::test_utils::fixtures;

fn strkey(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_strkey"))
        .args(args)
        .env_remove("STRKEY_FORMAT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute strkey binary")
}

fn json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid JSON ({e}): {stdout}"))
}

/// Test that the CLI can show help
#[test]
fn test_cli_help() {
    let output = strkey(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(
        stdout.contains("decode"),
        "Help should mention 'decode' command"
    );
    assert!(stdout.contains("validate"));
}

#[test]
fn test_decode_account_json() {
    let output = strkey(&["--format", "json", "decode", fixtures::ACCOUNT_ID]);
    assert!(output.status.success());
    let value = json(&output);
    assert_eq!(value["version"], "account-id");
    assert_eq!(value["payload_len"], 32);
    assert_eq!(
        value["payload"],
        "363eaa3867841fbad0f4ed88c779e4fe66e56a2470dc98c0ec9c073d05c7b103"
    );
}

#[test]
fn test_decode_withholds_seed_payload() {
    let output = strkey(&["--format", "json", "decode", fixtures::SEED]);
    assert!(output.status.success());
    assert!(json(&output)["payload"].is_null());

    let output = strkey(&["--format", "json", "decode", "--reveal", fixtures::SEED]);
    assert_eq!(
        json(&output)["payload"],
        "69a8c4cbb9f64e8a0798f6e1ac65d06c3162929056bcf4cdb7d3738d1855f363"
    );
}

#[test]
fn test_decode_with_wrong_expectation_fails() {
    let output = strkey(&["decode", "--expect", "seed", fixtures::ACCOUNT_ID]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("version byte mismatch"), "stderr: {stderr}");
}

#[test]
fn test_encode_round_trip() {
    let output = strkey(&[
        "encode",
        "account-id",
        "0x363eaa3867841fbad0f4ed88c779e4fe66e56a2470dc98c0ec9c073d05c7b103",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), fixtures::ACCOUNT_ID);
}

#[test]
fn test_encode_rejects_wrong_length() {
    let output = strkey(&["encode", "muxed-account", "00"]);
    assert!(!output.status.success());
}

#[test]
fn test_inspect_muxed_account() {
    let output = strkey(&["--format", "json", "inspect", fixtures::MUXED_ID_1234]);
    assert!(output.status.success());
    let value = json(&output);
    assert_eq!(value["version"], "muxed-account");
    assert_eq!(value["prefix"], "M");
    assert_eq!(value["muxed_id"], 1234);
    assert_eq!(value["account_id"], fixtures::MUXED_BASE_ACCOUNT);

    let output = strkey(&["--format", "json", "inspect", fixtures::MUXED_ACCOUNT]);
    let value = json(&output);
    assert_eq!(value["muxed_id"], 1u64 << 63);
    assert_eq!(value["account_id"], fixtures::MUXED_BASE_ACCOUNT);
}

#[test]
fn test_inspect_seed_shows_account_not_seed() {
    let output = strkey(&["--format", "json", "inspect", fixtures::SEED]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains(fixtures::SEED));
    assert_eq!(json(&output)["account_id"], fixtures::ACCOUNT_ID);
}

#[test]
fn test_validate_reports_error_code() {
    let output = strkey(&[
        "--format",
        "json",
        "validate",
        "--expect",
        "account-id",
        fixtures::ACCOUNT_ID_BAD_CHECKSUM,
    ]);
    assert!(!output.status.success());
    let value = json(&output);
    assert_eq!(value["valid"], false);
    assert_eq!(value["error"]["code"], "checksum_mismatch");
}

#[test]
fn test_validate_accepts_valid_key() {
    let output = strkey(&["--format", "json", "validate", fixtures::MUXED_ACCOUNT]);
    assert!(output.status.success());
    let value = json(&output);
    assert_eq!(value["valid"], true);
    assert_eq!(value["version"], "muxed-account");
}

#[test]
fn test_format_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_strkey"))
        .args(["validate", fixtures::ACCOUNT_ID])
        .env("STRKEY_FORMAT", "json")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute strkey binary");
    assert!(output.status.success());
    assert_eq!(json(&output)["valid"], true);
}

#[test]
fn test_generate_produces_matching_pair() {
    let output = strkey(&["--format", "json", "generate"]);
    assert!(output.status.success());
    let value = json(&output);
    let seed: strkey_lib::SecretSeed = value["seed"].as_str().unwrap().parse().unwrap();
    assert_eq!(
        value["account_id"].as_str().unwrap(),
        seed.account_id().to_string()
    );
}
