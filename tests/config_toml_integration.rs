use serial_test::serial;
use std::fs;
use taskbook::cli::{ConfigDiscovery, TaskbookConfig};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_config_serialization_roundtrip() {
    let original_config = TaskbookConfig {
        today: Some("2023-05-01".to_string()),
        assignee: "Jane".to_string(),
        ..Default::default()
    };

    let toml_str = original_config
        .to_toml_string()
        .expect("Should be able to serialize config to TOML");
    assert!(toml_str.contains("log_filter"), "Should contain log_filter field");

    let deserialized_config =
        TaskbookConfig::from_toml_str(&toml_str).expect("Should be able to deserialize TOML string");
    assert_eq!(original_config, deserialized_config);
}

#[test]
fn test_config_file_operations() {
    let original_config = TaskbookConfig::default();
    let temp_file = NamedTempFile::new().expect("Should be able to create temporary file");

    original_config
        .to_toml_file(temp_file.path())
        .expect("Should be able to save config to file");
    let loaded_config = TaskbookConfig::from_toml_file(temp_file.path())
        .expect("Should be able to load config from file");

    assert_eq!(original_config, loaded_config);
}

#[test]
fn test_explicit_config_override() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "assignee = \"Ops\"\nreminder_message = \"Rotate keys\"\n").unwrap();

    let config = ConfigDiscovery::load(Some(path.as_path())).unwrap();
    assert_eq!(config.assignee, "Ops");
    assert_eq!(config.reminder_message, "Rotate keys");
    assert!(config.today.is_none());
}

#[test]
fn test_missing_override_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");
    assert!(ConfigDiscovery::load(Some(missing.as_path())).is_err());
}

#[test]
#[serial]
fn test_discovery_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let previous = std::env::current_dir().unwrap();
    fs::write(
        temp_dir.path().join("taskbook.toml"),
        "today = \"2023-05-01\"\n",
    )
    .unwrap();

    std::env::set_current_dir(temp_dir.path()).unwrap();
    let discovered = ConfigDiscovery::discover_config();
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(discovered.unwrap().today.as_deref(), Some("2023-05-01"));
}
