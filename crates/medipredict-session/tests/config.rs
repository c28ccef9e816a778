use std::path::Path;

use medipredict_catalog::controller::InputPolicy;
use medipredict_session::config::{
    MediPredictConfig, config_info, config_path, load_config, load_config_from,
};

fn write_config(dir: &Path, json: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, serde_json::to_string_pretty(json).unwrap()).unwrap();
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.model_id, "gemini-2.5-flash");
    assert_eq!(config.api_key_env, "API_KEY");
    assert_eq!(config.input_policy, InputPolicy::Reject);
    assert!(!path.exists());
}

#[test]
fn stored_settings_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let expected = MediPredictConfig {
        model_id: "gemini-2.5-pro".to_string(),
        temperature: 0.4,
        input_policy: InputPolicy::Clamp,
        ..MediPredictConfig::default()
    };
    let path = write_config(dir.path(), &serde_json::to_value(&expected).unwrap());

    assert_eq!(load_config_from(&path).unwrap(), expected);
}

#[test]
fn hand_written_file_without_version_or_policy_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        &serde_json::json!({
            "model_id": "gemini-2.5-flash",
            "temperature": 0.2,
            "base_url": "https://generativelanguage.googleapis.com",
            "api_key_env": "MEDIPREDICT_KEY",
            "created_at": "2025-11-02T09:30:00Z"
        }),
    );

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.api_key_env, "MEDIPREDICT_KEY");
    assert_eq!(config.input_policy, InputPolicy::Reject);
}

#[test]
fn newer_config_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let mut json = serde_json::to_value(MediPredictConfig::default()).unwrap();
    json["config_version"] = serde_json::json!(7);
    let path = write_config(dir.path(), &json);

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn version_beyond_u32_is_refused_not_wrapped() {
    let dir = tempfile::tempdir().unwrap();
    let mut json = serde_json::to_value(MediPredictConfig::default()).unwrap();
    json["config_version"] = serde_json::json!(4_294_967_297_u64);
    let path = write_config(dir.path(), &json);

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("not a valid version number"));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ model_id: ").unwrap();

    assert!(load_config_from(&path).is_err());
}

#[test]
fn standard_location_is_app_scoped() {
    let Ok(path) = config_path() else {
        return;
    };
    assert!(path.ends_with("com.medipredict/config.json"));
    if !path.exists() {
        assert_eq!(load_config().unwrap().model_id, "gemini-2.5-flash");
    }
}

#[test]
fn config_maps_onto_generation_settings() {
    let config = MediPredictConfig {
        base_url: "http://localhost:8080".to_string(),
        input_policy: InputPolicy::AcceptAsIs,
        ..MediPredictConfig::default()
    };

    let settings = config.generation_settings();
    assert_eq!(settings.base_url, "http://localhost:8080");
    assert_eq!(settings.model_id, "gemini-2.5-flash");
    assert_eq!(settings.temperature, 0.2);
    assert_eq!(config.form_controller().policy(), InputPolicy::AcceptAsIs);
}

#[test]
fn info_never_exposes_the_key() {
    let config = MediPredictConfig {
        api_key_env: "MEDIPREDICT_TEST_UNSET_KEY_VAR".to_string(),
        ..MediPredictConfig::default()
    };
    let info = config_info(&config);

    assert_eq!(info.api_key_env, "MEDIPREDICT_TEST_UNSET_KEY_VAR");
    // The fallback variable may be set on a developer machine.
    if std::env::var("GEMINI_API_KEY").is_err() {
        assert!(!info.api_key_present);
        assert_eq!(info.api_key_hint, None);
    }
    if let Some(hint) = info.api_key_hint {
        assert!(hint == "****" || hint.contains("..."));
    }
}
