use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sescd_voice::DialogueTiming;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SescdConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Recognition language tag (BCP 47).
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Dictation delays. Added in v1.
    #[serde(default)]
    pub timing: TimingConfig,
    pub created_at: jiff::Timestamp,
}

impl Default for SescdConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            language: default_language(),
            log_format: LogFormat::default(),
            timing: TimingConfig::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn default_language() -> String {
    "ja-JP".to_string()
}

/// A loaded config, plus the on-disk version it was migrated from, if any.
/// Migrations run before logging is configured, so the caller reports them.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: SescdConfig,
    pub migrated_from: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    pub continue_delay_ms: u64,
    pub completion_delay_ms: u64,
    pub error_cooldown_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let timing = DialogueTiming::default();
        Self {
            continue_delay_ms: timing.continue_delay.as_millis() as u64,
            completion_delay_ms: timing.completion_delay.as_millis() as u64,
            error_cooldown_ms: timing.error_cooldown.as_millis() as u64,
        }
    }
}

impl From<TimingConfig> for DialogueTiming {
    fn from(t: TimingConfig) -> Self {
        DialogueTiming {
            continue_delay: Duration::from_millis(t.continue_delay_ms),
            completion_delay: Duration::from_millis(t.completion_delay_ms),
            error_cooldown: Duration::from_millis(t.error_cooldown_ms),
        }
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.sescd.desktop"))
}

/// Load the config from the default location, or defaults if none exists.
pub fn load_config() -> eyre::Result<LoadedConfig> {
    load_config_from(&config_dir()?)
}

pub fn load_config_from(dir: &Path) -> eyre::Result<LoadedConfig> {
    let path = dir.join("config.json");
    if !path.exists() {
        return Ok(LoadedConfig {
            config: SescdConfig::default(),
            migrated_from: None,
        });
    }
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: SescdConfig = serde_json::from_value(migrated)?;
    Ok(LoadedConfig {
        config,
        migrated_from: (on_disk_version < CURRENT_VERSION).then_some(on_disk_version),
    })
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update sescd."
        ));
    }

    // v0 → v1: pre-versioned configs had no dictation timing
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("timing")
            .or_insert(serde_json::to_value(TimingConfig::default())?);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
    }

    Ok(json)
}

pub fn save_config(config: &SescdConfig) -> eyre::Result<PathBuf> {
    save_config_to(&config_dir()?, config)
}

pub fn save_config_to(dir: &Path, config: &SescdConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}
