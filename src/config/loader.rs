//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{MedAdminConfig, StorageBackend};
use super::secret::secret_string;
use crate::domain::errors::MedAdminError;
use crate::domain::result::Result;
use crate::domain::TransitionPolicy;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MedAdminConfig
/// 4. Applies environment variable overrides (MEDADMIN_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns `MedAdminError::Configuration` if the file is missing or unreadable,
/// a referenced variable is unset, the TOML is malformed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use medadmin::config::loader::load_config;
///
/// let config = load_config("medadmin.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MedAdminConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MedAdminError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MedAdminError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text, applying substitution, overrides and validation
///
/// # Errors
///
/// Same as [`load_config`], minus file access.
pub fn parse_config(contents: &str) -> Result<MedAdminConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: MedAdminConfig = toml::from_str(&contents)
        .map_err(|e| MedAdminError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        MedAdminError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| MedAdminError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |cap: &regex::Captures<'_>| {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    cap[0].to_string()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MedAdminError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        MedAdminError::Configuration(format!("Invalid value '{value}' for {name}"))
    })
}

/// Applies environment variable overrides using MEDADMIN_* prefix
///
/// Variables follow the pattern `MEDADMIN_<SECTION>_<KEY>`, for example
/// `MEDADMIN_STORAGE_BACKEND` or `MEDADMIN_POSTGRESQL_CONNECTION_STRING`.
fn apply_env_overrides(config: &mut MedAdminConfig) -> Result<()> {
    if let Ok(val) = std::env::var("MEDADMIN_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("MEDADMIN_STORAGE_BACKEND") {
        config.storage.backend = match val.to_ascii_lowercase().as_str() {
            "postgresql" => StorageBackend::PostgreSQL,
            "memory" => StorageBackend::Memory,
            _ => {
                return Err(MedAdminError::Configuration(format!(
                    "Invalid value '{val}' for MEDADMIN_STORAGE_BACKEND"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("MEDADMIN_STORAGE_TABLE_NAME") {
        config.storage.table_name = val;
    }

    // PostgreSQL overrides (only if the section is configured)
    if let Some(ref mut pg_config) = config.postgresql {
        if let Ok(val) = std::env::var("MEDADMIN_POSTGRESQL_CONNECTION_STRING") {
            pg_config.connection_string = secret_string(val);
        }
        if let Ok(val) = std::env::var("MEDADMIN_POSTGRESQL_MAX_CONNECTIONS") {
            pg_config.max_connections =
                parse_override("MEDADMIN_POSTGRESQL_MAX_CONNECTIONS", &val)?;
        }
        if let Ok(val) = std::env::var("MEDADMIN_POSTGRESQL_CONNECTION_TIMEOUT_SECONDS") {
            pg_config.connection_timeout_seconds =
                parse_override("MEDADMIN_POSTGRESQL_CONNECTION_TIMEOUT_SECONDS", &val)?;
        }
        if let Ok(val) = std::env::var("MEDADMIN_POSTGRESQL_STATEMENT_TIMEOUT_SECONDS") {
            pg_config.statement_timeout_seconds =
                parse_override("MEDADMIN_POSTGRESQL_STATEMENT_TIMEOUT_SECONDS", &val)?;
        }
        if let Ok(val) = std::env::var("MEDADMIN_POSTGRESQL_SSL_MODE") {
            pg_config.ssl_mode = val;
        }
    }

    if let Ok(val) = std::env::var("MEDADMIN_SERVICE_TRANSITION_POLICY") {
        config.service.transition_policy = match val.to_ascii_lowercase().as_str() {
            "permissive" => TransitionPolicy::Permissive,
            "strict" => TransitionPolicy::Strict,
            _ => {
                return Err(MedAdminError::Configuration(format!(
                    "Invalid value '{val}' for MEDADMIN_SERVICE_TRANSITION_POLICY"
                )))
            }
        };
    }

    if let Ok(val) = std::env::var("MEDADMIN_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("MEDADMIN_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("MEDADMIN_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("MEDADMIN_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
