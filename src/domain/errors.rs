//! Domain error types
//!
//! The error hierarchy keeps "not found" apart from store failures and does not
//! expose third-party client types.

use super::ids::AdministrationId;
use super::status::AdministrationStatus;
use thiserror::Error;

/// Main medadmin error type
#[derive(Debug, Error)]
pub enum MedAdminError {
    /// No record exists for the requested administration
    #[error("Administration not found: {0}")]
    NotFound(AdministrationId),

    /// Backing store failures
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Status change rejected by the lifecycle table
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: AdministrationStatus,
        to: AdministrationStatus,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input rejected at the boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl MedAdminError {
    /// Returns true if the store could not be reached or failed at the transport level
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, MedAdminError::Store(e) if e.is_unavailable())
    }

    /// Returns true for a missing administration
    pub fn is_not_found(&self) -> bool {
        matches!(self, MedAdminError::NotFound(_))
    }
}

/// Errors raised by the backing table store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect or obtain a connection
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// A read against the table or an index failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A write against the table failed
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Table or index creation failed
    #[error("Failed to create schema: {0}")]
    SchemaCreationFailed(String),

    /// The request exceeded its time budget
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// A stored record could not be turned back into an administration
    #[error("Failed to decode stored record: {0}")]
    DeserializationFailed(String),
}

impl StoreError {
    /// Returns true for transport-level failures
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, StoreError::DeserializationFailed(_))
    }
}

impl From<std::io::Error> for MedAdminError {
    fn from(err: std::io::Error) -> Self {
        MedAdminError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MedAdminError {
    fn from(err: serde_json::Error) -> Self {
        MedAdminError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for MedAdminError {
    fn from(err: toml::de::Error) -> Self {
        MedAdminError::Configuration(format!("TOML parse error: {err}"))
    }
}
