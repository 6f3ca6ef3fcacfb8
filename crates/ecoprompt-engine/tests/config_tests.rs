// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for configuration files

use ecoprompt_engine::config::{load_config, write_default_config};
use ecoprompt_engine::{Config, EngineError, ProfileName, PromptType, Units};
use tempfile::TempDir;

#[test]
fn test_default_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    write_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_config(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_default_yaml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");

    write_default_config(&path).unwrap();
    let config = load_config(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_custom_toml_drives_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[defaults]\noutput_type = \"code\"\nprofile = \"DEEPSEEK_CHINA\"\n\n\
         [display]\nunits = \"imperial\"\neco_threshold = 40\n",
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    let options = config.impact_options();
    assert_eq!(options.output_type, PromptType::Code);
    assert_eq!(options.profile, ProfileName::DeepseekChina);
    assert_eq!(options.custom_output_tokens, None);
    assert_eq!(config.display.units, Units::Imperial);
    assert_eq!(config.display.eco_threshold, 40);
}

#[test]
fn test_malformed_toml_is_toml_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults\nprofile = ").unwrap();

    match load_config(&path) {
        Err(err @ EngineError::Toml(_)) => {
            assert!(err.to_string().starts_with("TOML parse error"))
        }
        other => panic!("expected TOML error, got {:?}", other),
    }
}

#[test]
fn test_malformed_yaml_is_yaml_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "defaults: [unclosed\n").unwrap();

    assert!(matches!(load_config(&path), Err(EngineError::Yaml(_))));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    assert!(matches!(load_config(&path), Err(EngineError::Config(_))));
    assert!(matches!(write_default_config(&path), Err(EngineError::Config(_))));
}
