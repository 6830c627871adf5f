//! CLI command implementations
//!
//! Shared pieces live here: boundary validation for arguments, service
//! construction from configuration, and the mapping from errors to exit codes.
//!
//! Exit codes: 0 success, 2 configuration error, 3 validation error or not
//! found, 4 store connection error, 5 fatal.

pub mod init;
pub mod list;
pub mod migrate;
pub mod miss;
pub mod record;
pub mod schedule;
pub mod set_status;
pub mod show;
pub mod validate;

use crate::adapters::database::{create_repository, create_table_store};
use crate::config::load_config;
use crate::core::AdministrationService;
use crate::domain::{MedAdminError, MedicationAdministration};
use chrono::{DateTime, Utc};

/// Rejects empty and whitespace-only identifiers
pub(crate) fn parse_non_blank(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("value cannot be blank".to_string());
    }
    Ok(trimmed.to_string())
}

/// Accepts finite, strictly positive dosages
pub(crate) fn parse_dosage(value: &str) -> Result<f64, String> {
    let dosage: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !dosage.is_finite() || dosage <= 0.0 {
        return Err(format!("dosage must be positive, got {value}"));
    }
    Ok(dosage)
}

/// Parses an RFC 3339 timestamp in any offset, or `now`
pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    if value.trim().eq_ignore_ascii_case("now") {
        return Ok(Utc::now());
    }
    DateTime::parse_from_rfc3339(value.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("'{value}' is not an RFC 3339 timestamp: {e}"))
}

/// Exit code for a failed operation
pub(crate) fn exit_code(error: &MedAdminError) -> i32 {
    match error {
        MedAdminError::Configuration(_) => 2,
        MedAdminError::NotFound(_)
        | MedAdminError::Validation(_)
        | MedAdminError::InvalidTransition { .. } => 3,
        e if e.is_store_unavailable() => 4,
        _ => 5,
    }
}

/// Print an operation failure and return its exit code
pub(crate) fn report_failure(context: &str, error: &MedAdminError) -> i32 {
    crate::log_error_with_context!(error, context);
    println!("❌ {context}");
    println!("   Error: {error}");
    exit_code(error)
}

/// Load configuration and build the service, or return the exit code to use
pub(crate) async fn open_service(config_path: &str) -> Result<AdministrationService, i32> {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Failed to load configuration file");
            println!("   Error: {e}");
            return Err(2);
        }
    };

    let store = match create_table_store(&config).await {
        Ok(s) => s,
        Err(e) => return Err(report_failure("Failed to create table store", &e)),
    };

    Ok(AdministrationService::with_policy(
        create_repository(store),
        config.service.transition_policy,
    ))
}

/// Print administrations as JSON on stdout
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print one administration and report success
pub(crate) fn print_administration(administration: &MedicationAdministration) -> anyhow::Result<i32> {
    print_json(administration)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdministrationId, AdministrationStatus, StoreError};
    use chrono::TimeZone;

    #[test]
    fn test_parse_non_blank() {
        assert_eq!(parse_non_blank(" P1 ").unwrap(), "P1");
        assert!(parse_non_blank("").is_err());
        assert!(parse_non_blank("\t ").is_err());
    }

    #[test]
    fn test_parse_dosage() {
        assert_eq!(parse_dosage("500").unwrap(), 500.0);
        assert_eq!(parse_dosage("0.25").unwrap(), 0.25);
        assert!(parse_dosage("0").is_err());
        assert!(parse_dosage("-1").is_err());
        assert!(parse_dosage("inf").is_err());
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(
            parse_timestamp("2024-03-01T09:00:00+01:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
        );
        assert!(parse_timestamp("NOW").is_ok());
        assert!(parse_timestamp("2024-03-01").is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&MedAdminError::Configuration("x".into())), 2);
        assert_eq!(exit_code(&MedAdminError::NotFound(AdministrationId::new("a"))), 3);
        assert_eq!(
            exit_code(&MedAdminError::InvalidTransition {
                from: AdministrationStatus::Completed,
                to: AdministrationStatus::Scheduled,
            }),
            3
        );
        assert_eq!(
            exit_code(&StoreError::ConnectionFailed("down".into()).into()),
            4
        );
        assert_eq!(
            exit_code(&StoreError::DeserializationFailed("bad".into()).into()),
            5
        );
    }
}
