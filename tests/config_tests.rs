use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use task_calendar::config::{ConfigError, PlannerConfig};
use task_calendar::markup::Markup;
use tempfile::tempdir;

#[test]
fn defaults_match_render_and_schedule_defaults() {
    let config = PlannerConfig::default();
    assert!(config.realign);
    assert_eq!(config.markup, Markup::Ansi);
    assert_eq!(config.table_width, 80);
    assert_eq!(config.description_width, 60);
    assert!(config.start.is_none());
    assert!(config.holidays.is_empty());
}

#[test]
fn partial_config_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planner.json");
    fs::write(
        &path,
        r#"{ "start": "2025-01-06", "markup": "html", "holidays": ["company.HOL"] }"#,
    )
    .unwrap();

    let config = PlannerConfig::load(&path).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    assert_eq!(config.start_or(today), NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
    assert_eq!(config.markup, Markup::Html);
    assert_eq!(config.holidays, vec![PathBuf::from("company.HOL")]);
    assert!(config.schedule_options().realign);
    assert_eq!(config.render_options().markup, Markup::Html);
    assert_eq!(config.render_options().description_width, 60);
}

#[test]
fn unset_start_falls_back_to_today() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    assert_eq!(PlannerConfig::default().start_or(today), today);
}

#[test]
fn realign_can_be_disabled() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planner.json");
    fs::write(&path, r#"{ "realign": false, "description_width": 40 }"#).unwrap();

    let config = PlannerConfig::load(&path).unwrap();
    assert!(!config.schedule_options().realign);
    assert_eq!(config.render_options().description_width, 40);
}

#[test]
fn malformed_config_reports_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ realign: ").unwrap();

    match PlannerConfig::load(&path) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_config_is_a_read_error() {
    let dir = tempdir().unwrap();
    let err = PlannerConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
