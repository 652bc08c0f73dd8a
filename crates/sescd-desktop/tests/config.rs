use std::time::Duration;

use sescd_desktop::config::{load_config_from, save_config_to, LogFormat, SescdConfig, TimingConfig};
use sescd_voice::DialogueTiming;

#[test]
fn missing_config_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_config_from(dir.path()).unwrap();
    assert_eq!(loaded.migrated_from, None);
    let config = loaded.config;
    assert_eq!(config.language, "ja-JP");
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.timing, TimingConfig::default());
    assert_eq!(config.timing.continue_delay_ms, 500);
    assert_eq!(config.timing.completion_delay_ms, 800);
    assert_eq!(config.timing.error_cooldown_ms, 2000);
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = SescdConfig::default();
    config.log_format = LogFormat::Json;
    config.timing.continue_delay_ms = 250;

    let path = save_config_to(dir.path(), &config).unwrap();
    assert!(path.ends_with("config.json"));
    assert!(!dir.path().join("config.json.tmp").exists());

    let loaded = load_config_from(dir.path()).unwrap().config;
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.log_format, LogFormat::Json);
    assert_eq!(loaded.timing.continue_delay_ms, 250);
    assert_eq!(loaded.created_at, config.created_at);
}

#[test]
fn pre_versioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "log_format": "json", "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let loaded = load_config_from(dir.path()).unwrap();
    assert_eq!(loaded.migrated_from, Some(0));
    let config = loaded.config;
    assert_eq!(config.config_version, 1);
    assert_eq!(config.language, "ja-JP");
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.timing, TimingConfig::default());
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "config_version": 9, "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config_from(dir.path()).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn timing_converts_to_dialogue_delays() {
    let timing: DialogueTiming = TimingConfig {
        continue_delay_ms: 100,
        completion_delay_ms: 200,
        error_cooldown_ms: 300,
    }
    .into();
    assert_eq!(timing.continue_delay, Duration::from_millis(100));
    assert_eq!(timing.completion_delay, Duration::from_millis(200));
    assert_eq!(timing.error_cooldown, Duration::from_millis(300));
}

#[test]
fn language_survives_load_and_save() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "config_version": 1, "language": "en-US", "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let loaded = load_config_from(dir.path()).unwrap();
    assert_eq!(loaded.migrated_from, None);
    assert_eq!(loaded.config.language, "en-US");

    save_config_to(dir.path(), &loaded.config).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("config.json")).unwrap())
            .unwrap();
    assert_eq!(raw["language"], "en-US");
    assert_eq!(load_config_from(dir.path()).unwrap().config.language, "en-US");
}
