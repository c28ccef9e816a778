//! On-disk settings at `<config_dir>/com.medipredict/config.json`.
//!
//! The file is optional and only ever read. It holds generation settings and
//! the input policy; the API key itself is not in it, only the name of the
//! environment variable to read it from.

use std::path::{Path, PathBuf};

use medipredict_catalog::controller::{FormController, InputPolicy};
use medipredict_gemini::client::{
    DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    GenerationSettings, resolve_api_key,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Highest `config_version` this build understands.
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediPredictConfig {
    #[serde(default = "current_version")]
    pub config_version: u32,
    pub model_id: String,
    pub temperature: f32,
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    #[serde(default)]
    pub input_policy: InputPolicy,
    pub created_at: jiff::Timestamp,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

impl Default for MediPredictConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            model_id: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            input_policy: InputPolicy::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl MediPredictConfig {
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model_id: self.model_id.clone(),
            temperature: self.temperature,
            base_url: self.base_url.clone(),
            api_key_env: self.api_key_env.clone(),
        }
    }

    pub fn form_controller(&self) -> FormController {
        FormController::new(self.input_policy)
    }
}

/// Redacted config info safe to send to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfigInfo {
    pub model_id: String,
    pub temperature: f32,
    pub base_url: String,
    pub api_key_env: String,
    pub input_policy: InputPolicy,
    pub created_at: String,
    pub api_key_present: bool,
    pub api_key_hint: Option<String>,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.medipredict"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load settings from the standard location, or the defaults when no file
/// exists there.
pub fn load_config() -> eyre::Result<MediPredictConfig> {
    load_config_from(&config_path()?)
}

/// Load settings from `path`. A missing file yields the defaults; nothing is
/// ever written back.
pub fn load_config_from(path: &Path) -> eyre::Result<MediPredictConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(MediPredictConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Check the version on the raw JSON before deserializing the rest.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    check_version(&json)?;

    let config: MediPredictConfig = serde_json::from_value(json)?;
    tracing::info!(path = %path.display(), model = %config.model_id, "config loaded");
    Ok(config)
}

fn check_version(json: &serde_json::Value) -> eyre::Result<()> {
    let Some(raw) = json.get("config_version") else {
        return Ok(());
    };
    let version = raw
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| eyre::eyre!("config_version {raw} is not a valid version number"))?;

    if version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update MediPredict."
        ));
    }
    Ok(())
}

pub fn config_info(config: &MediPredictConfig) -> ConfigInfo {
    let key = resolve_api_key(&config.api_key_env);

    ConfigInfo {
        model_id: config.model_id.clone(),
        temperature: config.temperature,
        base_url: config.base_url.clone(),
        api_key_env: config.api_key_env.clone(),
        input_policy: config.input_policy,
        created_at: config.created_at.to_string(),
        api_key_present: key.is_some(),
        api_key_hint: key.as_deref().map(redact_api_key),
    }
}

fn redact_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_keys_are_fully_masked() {
        assert_eq!(redact_api_key("abc"), "****");
        assert_eq!(redact_api_key("12345678"), "****");
    }

    #[test]
    fn long_keys_keep_both_ends() {
        assert_eq!(redact_api_key("AIzaSyExampleKey1234"), "AIza...1234");
    }

    #[test]
    fn newer_version_is_refused() {
        let json = serde_json::json!({ "config_version": 9 });
        assert!(check_version(&json).is_err());
    }

    #[test]
    fn oversized_version_is_refused() {
        let json = serde_json::json!({ "config_version": 4_294_967_297_u64 });
        let err = check_version(&json).unwrap_err();
        assert!(err.to_string().contains("not a valid version number"));
    }

    #[test]
    fn negative_version_is_refused() {
        let json = serde_json::json!({ "config_version": -1 });
        assert!(check_version(&json).is_err());
    }

    #[test]
    fn absent_version_is_current() {
        assert!(check_version(&serde_json::json!({})).is_ok());
    }
}
