#![allow(clippy::unwrap_used, clippy::expect_used)]

//! File sink tests
//!
//! These run the facade on the `tracing` engine and read back the JSON
//! lines it writes.

use chrono::Local;
use seedlog_core::{FacadeConfig, LogFacade, Severity};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn todays_file(dir: &Path, base: &str) -> PathBuf {
    FacadeConfig::new(dir, base).log_file_path(Local::now().date_naive())
}

fn read_records(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn quiet_config(dir: &Path, base: &str) -> FacadeConfig {
    // Mirror on: no pretty console output during tests
    FacadeConfig::new(dir, base)
        .with_console_mirror(true)
        .with_min_severity(Severity::Trace)
}

#[test]
fn test_open_writes_todays_file() {
    let temp_dir = TempDir::new().unwrap();
    let logger = LogFacade::open(quiet_config(temp_dir.path(), "svc")).unwrap();

    logger.info("started", ["boot"]);
    drop(logger);

    let path = todays_file(temp_dir.path(), "svc");
    let records = read_records(&path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["message"], "started");
    assert_eq!(records[0]["severity"], "info");
    assert_eq!(records[0]["tags"], r#"["boot"]"#);
}

#[test]
fn test_seed_in_file_matches_returned_seed() {
    let temp_dir = TempDir::new().unwrap();
    let config = quiet_config(temp_dir.path(), "svc").with_seed_generation(true);
    let logger = LogFacade::open(config).unwrap();

    let seed = logger
        .error_with("disk failure", &json!({"code": 28}), ["io", "fatal"])
        .unwrap()
        .unwrap();
    logger.flush();

    let records = read_records(logger.engine().path());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["seed"], seed.as_str());
    assert_eq!(records[0]["data"], r#"{"code":28}"#);
    assert_eq!(records[0]["tags"], r#"["io","fatal"]"#);
}

#[test]
fn test_appends_across_instances() {
    let temp_dir = TempDir::new().unwrap();

    let first = LogFacade::open(quiet_config(temp_dir.path(), "svc")).unwrap();
    first.warn("one", ["a"]);
    drop(first);

    let second = LogFacade::open(quiet_config(temp_dir.path(), "svc")).unwrap();
    second.warn("two", ["b"]);
    drop(second);

    let messages: Vec<_> = read_records(&todays_file(temp_dir.path(), "svc"))
        .into_iter()
        .map(|r| r["message"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(messages, vec!["one", "two"]);
}

#[test]
fn test_two_facades_keep_separate_files_and_settings() {
    let temp_dir = TempDir::new().unwrap();
    let seeded = LogFacade::open(
        quiet_config(temp_dir.path(), "seeded")
            .with_seed_generation(true)
            .with_stack_capture(true),
    )
    .unwrap();
    let plain = LogFacade::open(quiet_config(temp_dir.path(), "plain")).unwrap();

    seeded.error("from seeded", ["s"]);
    plain.error("from plain", ["p"]);
    seeded.flush();
    plain.flush();

    let seeded_records = read_records(seeded.engine().path());
    let plain_records = read_records(plain.engine().path());

    assert_eq!(seeded_records.len(), 1);
    assert_eq!(plain_records.len(), 1);
    assert_eq!(seeded_records[0]["message"], "from seeded");
    assert!(seeded_records[0].get("seed").is_some());
    assert!(seeded_records[0].get("stack").is_some());
    assert_eq!(plain_records[0]["message"], "from plain");
    assert!(plain_records[0].get("seed").is_none());
    assert!(plain_records[0].get("stack").is_none());
}

#[test]
fn test_min_severity_filters_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = quiet_config(temp_dir.path(), "svc").with_min_severity(Severity::Error);
    let logger = LogFacade::open(config).unwrap();

    logger.debug("skip", ["t"]);
    logger.warn("skip", ["t"]);
    logger.error("keep", ["t"]);
    logger.fatal("keep", ["t"]);
    logger.flush();

    let records = read_records(logger.engine().path());
    let severities: Vec<_> = records.iter().map(|r| r["severity"].clone()).collect();
    assert_eq!(severities, vec![json!("error"), json!("fatal")]);
}

#[test]
fn test_pretty_console_sink_does_not_affect_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = FacadeConfig::new(temp_dir.path(), "svc").with_seed_generation(true);
    let logger = LogFacade::open(config).unwrap();

    let seed = logger.warn("pretty", ["console"]).unwrap();
    logger.flush();

    let records = read_records(logger.engine().path());
    assert_eq!(records[0]["seed"], seed.as_str());
}
