#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn schedule_cmd() -> Command {
    Command::cargo_bin("schedule").expect("schedule binary")
}

#[test]
fn literal_task_prints_highlighted_calendar() {
    schedule_cmd()
        .args(["--start", "2025-01-06", "Write docs:DOC: 3 days"])
        .assert()
        .success()
        .stdout(str_contains("DOC [2025-01-06,2025-01-09)"))
        .stdout(str_contains("    January 2025"))
        .stdout(str_contains("\x1b[94m6  7  8\x1b[0m"));
}

#[test]
fn json_output_lists_scheduled_spans() {
    let assert = schedule_cmd()
        .args(["--start", "1/6/25", "--json", "Design: 2 days\n\nBuild: 1 week"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");

    assert_eq!(json[0]["begin"], "2025-01-06");
    assert_eq!(json[0]["end"], "2025-01-08");
    assert_eq!(json[1]["begin"], "2025-01-08");
    assert_eq!(json[1]["end"], "2025-01-15");
}

#[test]
fn holiday_file_and_no_align_flag() {
    let dir = tempdir().expect("temp dir");
    let holidays = dir.path().join("office.HOL");
    fs::write(&holidays, "name,date\nConference,1/7/2025-1/10/2025\n").expect("write holidays");

    let run = |extra: &[&str]| {
        let mut args = vec![
            holidays.to_string_lossy().to_string(),
            "--start".to_string(),
            "2025-01-06".to_string(),
            "--json".to_string(),
            "Migrate: 2 days".to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        let assert = schedule_cmd().args(&args).assert().success();
        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        serde_json::from_str::<serde_json::Value>(&stdout).expect("valid json")
    };

    let aligned = run(&[]);
    assert_eq!(aligned[0]["begin"], "2025-01-13");
    assert_eq!(aligned[0]["realignments"], 1);

    let fragmented = run(&["--no-align"]);
    assert_eq!(fragmented[0]["begin"], "2025-01-06");
    assert_eq!(fragmented[0]["end"], "2025-01-14");
    assert_eq!(fragmented[0]["masked_days"], 4);
}

#[test]
fn html_output_is_a_document() {
    schedule_cmd()
        .args(["--start", "2025-01-06", "--output-html", "Ship: 1 day"])
        .assert()
        .success()
        .stdout(str_contains("<!DOCTYPE html>"))
        .stdout(str_contains("<font color=\"blue\">6</font>"));
}

#[test]
fn config_file_supplies_start_date() {
    let dir = tempdir().expect("temp dir");
    let config = dir.path().join("planner.json");
    fs::write(&config, r#"{ "start": "2025-03-03" }"#).expect("write config");

    schedule_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--json", "Plan: 1 day"])
        .assert()
        .success()
        .stdout(str_contains("\"begin\": \"2025-03-03\""));
}

#[test]
fn config_holiday_files_mask_days_without_hol_suffix() {
    let dir = tempdir().expect("temp dir");
    let holidays = dir.path().join("company_holidays.csv");
    fs::write(&holidays, "name,date\nConference,1/7/2025-1/10/2025\n").expect("write holidays");
    let config = dir.path().join("planner.json");
    let body = serde_json::json!({ "holidays": [holidays] });
    fs::write(&config, body.to_string()).expect("write config");

    let assert = schedule_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--start", "2025-01-06", "--no-align", "--json", "Migrate: 2 days"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");

    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["name"], "Migrate");
    assert_eq!(json[0]["begin"], "2025-01-06");
    assert_eq!(json[0]["end"], "2025-01-14");
    assert_eq!(json[0]["masked_days"], 4);
}

#[test]
fn invalid_duration_fails() {
    schedule_cmd()
        .args(["--start", "2025-01-06", "Fix the build: soon"])
        .assert()
        .failure()
        .stderr(str_contains("could not parse duration 'soon'"));
}

#[test]
fn oversized_duration_fails_cleanly() {
    schedule_cmd()
        .args(["--start", "2025-01-06", "Forever: 99999999 weeks"])
        .assert()
        .failure()
        .stderr(str_contains("could not parse duration '99999999 weeks'"));
}

#[test]
fn invalid_start_date_is_rejected() {
    schedule_cmd()
        .args(["--start", "someday", "Plan: 1 day"])
        .assert()
        .failure()
        .stderr(str_contains("could not parse date 'someday'"));
}
