//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Console output with configurable level
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use medadmin::logging::init_logging;
//! use medadmin::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a status change of an administration
///
/// # Example
///
/// ```no_run
/// use medadmin::log_status_change;
/// use medadmin::domain::{AdministrationId, AdministrationStatus};
///
/// let id = AdministrationId::new("a-1");
/// log_status_change!(&id, AdministrationStatus::Scheduled, AdministrationStatus::Completed);
/// ```
#[macro_export]
macro_rules! log_status_change {
    ($administration_id:expr, $from:expr, $to:expr) => {
        tracing::info!(
            administration_id = %$administration_id,
            from = %$from,
            to = %$to,
            "Administration status changed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use medadmin::log_error_with_context;
/// use medadmin::domain::MedAdminError;
///
/// let error = MedAdminError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
