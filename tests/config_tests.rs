// Integration tests for loading lab configuration from disk

use std::fs;
use std::time::Duration;

use dsa_lab::config::{ConfigError, LabConfig};
use dsa_lab::engine::StepError;
use dsa_lab::lab::{open_lab, LabKind, LabRequest};
use tempfile::TempDir;

#[test]
fn test_load_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dsa-lab.toml");
    fs::write(
        &path,
        r#"
            [run]
            interval_ms = 250
            animation_ms = 0

            [limits]
            queue_capacity = 2
            circular_queue_capacity = 4

            [log]
            filter = "dsa_lab=debug"
            file = "lab.log"
        "#,
    )
    .unwrap();

    let config = LabConfig::load(Some(&path)).expect("config should load");
    assert_eq!(config.run.interval(), Duration::from_millis(250));
    assert_eq!(config.run.animation(), Duration::ZERO);
    assert_eq!(config.limits.queue_capacity, 2);
    assert_eq!(config.limits.circular_queue_capacity, 4);
    assert_eq!(config.limits.stack_capacity, 8);
    assert_eq!(config.defaults.array_size, 10);
    assert_eq!(config.log.filter, "dsa_lab=debug");
    assert_eq!(config.log.file.as_deref(), Some(std::path::Path::new("lab.log")));
}

#[test]
fn test_configured_capacity_reaches_the_lab() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("limits.toml");
    fs::write(&path, "[limits]\nqueue_capacity = 1\n").unwrap();
    let config = LabConfig::load(Some(&path)).unwrap();

    let mut sim = open_lab(LabKind::Queue, &config, &LabRequest::default(), false).unwrap();
    sim.command("enqueue 1").unwrap();
    assert_eq!(
        sim.command("enqueue 2"),
        Err(StepError::Overflow { capacity: 1 })
    );
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = LabConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[run\ninterval_ms = ").unwrap();

    assert!(matches!(
        LabConfig::load(Some(&path)),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_limit_is_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zero.toml");
    fs::write(&path, "[defaults]\narray_size = 0\n").unwrap();

    let err = LabConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("defaults.array_size"));
}
