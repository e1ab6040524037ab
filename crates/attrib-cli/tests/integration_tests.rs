//! End-to-end tests for the `attrib` binary
//!
//! Fixtures are written as JSON, encoded to parcels by the binary itself,
//! then checked. Exit codes: 0 accepted, 2 rejected, 1 error.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn attrib(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_attrib"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("ATTRIB_CONFIG")
        .output()
        .expect("failed to run attrib")
}

fn encode_fixture(dir: &Path, name: &str, json: &str) -> PathBuf {
    let json_path = dir.join(format!("{}.json", name));
    let parcel_path = dir.join(format!("{}.parcel", name));
    std::fs::write(&json_path, json).unwrap();

    let output = attrib(&[
        "--no-color",
        "encode",
        json_path.to_str().unwrap(),
        "-o",
        parcel_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "encode failed: {:?}", output);
    parcel_path
}

#[test]
fn test_check_accepts_valid_combination() {
    let dir = tempfile::tempdir().unwrap();
    let parcel = encode_fixture(
        dir.path(),
        "valid",
        r#"[{"tag":"a","label":0,"inherit_from":[]},{"tag":"b","label":0,"inherit_from":["x"]}]"#,
    );

    let output = attrib(&["--format", "quiet", "check", parcel.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "accepted");
}

#[test]
fn test_check_rejects_shared_inherit_from() {
    let dir = tempfile::tempdir().unwrap();
    let parcel = encode_fixture(
        dir.path(),
        "shared",
        r#"[{"tag":"a","label":0,"inherit_from":["x"]},{"tag":"b","label":0,"inherit_from":["x"]}]"#,
    );

    let output = attrib(&["--format", "json", "check", parcel.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));

    let verdict: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(verdict["status"], "rejected");
}

#[test]
fn test_strict_flag_and_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let long_tag = "t".repeat(51);
    let parcel = encode_fixture(
        dir.path(),
        "long",
        &format!(r#"[{{"tag":"{}","label":0,"inherit_from":[]}}]"#, long_tag),
    );
    let parcel = parcel.to_str().unwrap();

    assert_eq!(attrib(&["check", parcel]).status.code(), Some(0));
    assert_eq!(attrib(&["check", "--strict", parcel]).status.code(), Some(2));

    let config = dir.path().join("attrib.toml");
    std::fs::write(&config, "[gatekeeper]\nenforce_tag_length = true\n").unwrap();
    let output = attrib(&["--config", config.to_str().unwrap(), "check", parcel]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_inspect_lists_tags() {
    let dir = tempfile::tempdir().unwrap();
    let parcel = encode_fixture(
        dir.path(),
        "inspect",
        r#"[{"tag":"camera","label":1,"inherit_from":[]},{"tag":"mic","label":2,"inherit_from":[]}]"#,
    );

    let output = attrib(&["--format", "quiet", "inspect", parcel.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "camera\nmic");
}

#[test]
fn test_corrupt_parcel_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.parcel");
    std::fs::write(&path, [5u8, 0, 0, 0, 1]).unwrap();

    let output = attrib(&["check", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Decode error"));
}
