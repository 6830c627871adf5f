//! Integration tests for logging configuration

use medadmin::config::{parse_config, LoggingConfig};
use medadmin::domain::MedAdminError;
use medadmin::logging::init_logging;

#[test]
fn test_logging_config_defaults() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_logging_section_from_toml() {
    let config = parse_config(
        r#"
[storage]
backend = "memory"

[logging]
local_enabled = true
local_path = "/var/log/medadmin"
local_rotation = "never"
"#,
    )
    .unwrap();

    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/var/log/medadmin");
    assert_eq!(config.logging.local_rotation, "never");
}

#[test]
fn test_invalid_level_is_rejected_before_install() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("never-created");
    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_dir.to_string_lossy().to_string(),
        local_rotation: "daily".to_string(),
    };

    let result = init_logging("chatty", &config);
    assert!(matches!(result, Err(MedAdminError::Configuration(_))));
    assert!(!log_dir.exists());
}
