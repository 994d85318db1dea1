//! Integration tests driving the `readiness` binary.

use assert_cmd::Command;
use readiness::{encode, AnswerSet, Content};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn readiness(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("readiness").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("READINESS_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn personal_email_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = readiness(&dir)
        .args(["check-email", "user@gmail.com"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please use your work email"), "stderr: {stderr}");
}

#[test]
fn work_email_is_accepted() {
    let dir = TempDir::new().unwrap();
    let output = readiness(&dir)
        .args(["--plain", "check-email", "user@company.com"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "accepted: user@company.com"
    );
}

#[test]
fn score_link_as_json() {
    let dir = TempDir::new().unwrap();
    let content = Content::standard();
    let link = format!(
        "https://example.test/quiz#answers={}",
        encode(&AnswerSet::filled(&content, 3))
    );

    let output = readiness(&dir)
        .args(["score", "--link", &link, "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_score"], 75);
    assert_eq!(json["stage"]["id"], "enterprise-ready");
    assert_eq!(json["dimension_scores"]["livecall"], 15);
    assert_eq!(json["dimensions"][0]["name"], "Compliance Artifacts");
    assert_eq!(json["dimensions"][0]["max_score"], 15);
    assert!(json["patterns"].as_array().unwrap().is_empty());
    assert!(json["share_link"]
        .as_str()
        .unwrap()
        .starts_with("https://adversis.io/enterprise-readiness-assessment#answers="));
}

#[test]
fn score_writes_markdown_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("answers.json"), r#"{"q1": 0, "q2": 1}"#).unwrap();

    readiness(&dir)
        .args([
            "score",
            "--answers",
            "answers.json",
            "-f",
            "markdown",
            "-o",
            "out/report.md",
        ])
        .assert()
        .success();

    let report = fs::read_to_string(dir.path().join("out/report.md")).unwrap();
    assert!(report.contains("**Readiness score:** 1 / 75"));
    assert!(report.contains("Only 2 of 25 questions answered"));
}

#[test]
fn encode_then_decode() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("answers.json"), r#"{"q3": 2, "q25": 1}"#).unwrap();

    let encoded = readiness(&dir)
        .args(["encode", "answers.json"])
        .output()
        .unwrap();
    assert!(encoded.status.success());
    let link = String::from_utf8(encoded.stdout).unwrap();
    assert!(link.contains("#answers="));

    let decoded = readiness(&dir)
        .args(["decode", link.trim()])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&decoded.stdout).unwrap();
    assert_eq!(json, serde_json::json!({ "q25": 1, "q3": 2 }));
}

#[test]
fn undecodable_token_prints_empty_object() {
    let dir = TempDir::new().unwrap();
    let output = readiness(&dir)
        .args(["decode", "%%%not-a-token"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "{}");
}

#[test]
fn questions_catalog_as_json() {
    let dir = TempDir::new().unwrap();
    let output = readiness(&dir)
        .args(["questions", "--format", "json"])
        .output()
        .unwrap();

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["question_count"], 25);
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    readiness(&dir).arg("init").assert().success();
    assert!(dir.path().join(".readiness.toml").exists());
    readiness(&dir).arg("init").assert().failure();
    readiness(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn configured_domain_is_blocked() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".readiness.toml"),
        "[contact]\nextra_blocked_domains = [\"contractor.io\"]\n",
    )
    .unwrap();

    readiness(&dir)
        .args(["check-email", "dev@contractor.io"])
        .assert()
        .failure();
}

#[test]
fn offline_run_with_eof_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    readiness(&dir)
        .args(["run", "--offline", "--fresh-session"])
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn color_option_overrides_no_color() {
    let dir = TempDir::new().unwrap();
    let colored = readiness(&dir)
        .args(["--color", "always", "questions", "-f", "terminal"])
        .output()
        .unwrap();
    assert!(colored.status.success());
    assert!(String::from_utf8_lossy(&colored.stdout).contains('\u{1b}'));

    let plain = readiness(&dir)
        .args(["--color", "always", "--plain", "questions", "-f", "terminal"])
        .output()
        .unwrap();
    assert!(plain.status.success());
    assert!(!String::from_utf8_lossy(&plain.stdout).contains('\u{1b}'));
}
