//! Domain models and types for medadmin.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PatientId`], [`PrescriptionId`], [`AdministrationId`])
//! - **The administration entity** ([`MedicationAdministration`]) and its lifecycle
//!   ([`AdministrationStatus`], [`TransitionPolicy`])
//! - **Error types** ([`MedAdminError`], [`StoreError`]) and the [`Result`] alias
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern, so they cannot be mixed up:
//!
//! ```compile_fail
//! use medadmin::domain::{PatientId, PrescriptionId};
//!
//! let patient_id = PatientId::generate();
//! let wrong: PrescriptionId = patient_id; // Compile error!
//! ```

pub mod administration;
pub mod errors;
pub mod ids;
pub mod result;
pub mod status;

// Re-export commonly used types for convenience
pub use administration::{MedicationAdministration, MedicationAdministrationBuilder, NewAdministration};
pub use errors::{MedAdminError, StoreError};
pub use ids::{AdministrationId, PatientId, PrescriptionId};
pub use result::Result;
pub use status::{AdministrationStatus, TransitionPolicy};
