use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ssbdec"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_payload() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("ticket_alnum")
        .join("input.hex")
}

fn truncated_payload() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("ticket_truncated")
        .join("input.hex")
}

#[test]
fn help_supports_decode_and_parse() {
    cmd()
        .arg("ticket")
        .arg("decode")
        .arg("--help")
        .assert()
        .success();
    cmd()
        .arg("ticket")
        .arg("parse")
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.hex");
    let report = temp.path().join("report.json");

    cmd()
        .arg("ticket")
        .arg("decode")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("payload.txt");
    std::fs::write(&input, "00").expect("write input");
    let report = temp.path().join("report.json");

    cmd()
        .arg("ticket")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("unsupported input format").and(contains("expected a .ssb or .hex file")));
}

#[test]
fn stdout_outputs_json() {
    let input = sample_payload();
    let assert = cmd()
        .arg("ticket")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["tickets"][0]["record"]["seat_number"], "07A");
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_payload();
    let report = temp.path().join("report.json");

    cmd()
        .arg("ticket")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_payload();
    let report = temp.path().join("report.json");

    cmd()
        .arg("ticket")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_payload();
    let report = temp.path().join("report.json");

    cmd()
        .arg("ticket")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::contains("OK:").not());
}

#[test]
fn list_failures_outputs_payload_indices() {
    let temp = TempDir::new().expect("tempdir");
    let input = truncated_payload();
    let report = temp.path().join("report.json");

    cmd()
        .arg("ticket")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--list-failures")
        .assert()
        .success()
        .stderr(contains("Decode failures:").and(contains("payload 0: payload too short")));
}

#[test]
fn strict_fails_when_failures_present() {
    let temp = TempDir::new().expect("tempdir");
    let input = truncated_payload();
    let report = temp.path().join("report.json");

    cmd()
        .arg("ticket")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("decode failures detected"));
}
