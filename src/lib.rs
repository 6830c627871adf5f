// medadmin - Medication administration records
// Copyright (c) 2025 medadmin Contributors
// Licensed under the MIT License

//! # medadmin - Medication Administration Records
//!
//! medadmin records scheduled and completed medication administrations and
//! answers the questions a ward asks of them: what is due today, what has this
//! patient received, what happened under this prescription.
//!
//! ## Overview
//!
//! - **Lifecycle**: every administration starts SCHEDULED and moves through
//!   IN_PROGRESS, COMPLETED, MISSED, CANCELLED or DELAYED, checked against a
//!   transition table under the strict policy
//! - **Single-table storage**: one table holds every administration, with
//!   composite keys for the patient, prescription, date and identifier access paths
//! - **Backends**: PostgreSQL for persistence, an in-memory table for tests and dry runs
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The administration service
//! - [`adapters`] - Repository port, key encoding and table backends
//! - [`domain`] - Identifiers, the administration entity and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::Utc;
//! use medadmin::adapters::memory::InMemoryTable;
//! use medadmin::adapters::table::TableAdministrationRepository;
//! use medadmin::core::AdministrationService;
//! use medadmin::domain::{AdministrationStatus, NewAdministration, PatientId, PrescriptionId};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = TableAdministrationRepository::new(InMemoryTable::new("administrations"));
//! let service = AdministrationService::new_with_repository(Arc::new(repository));
//!
//! let scheduled = service
//!     .create_administration(NewAdministration {
//!         patient_id: PatientId::new("P1"),
//!         prescription_id: PrescriptionId::new("Rx1"),
//!         scheduled_time: Utc::now(),
//!         dosage_given: Some(500.0),
//!         unit: "mg".to_string(),
//!         notes: None,
//!     })
//!     .await?;
//!
//! let given = service
//!     .record_administration(scheduled.administration_id(), Utc::now(), "Nurse Johnson", None, None)
//!     .await?;
//! assert_eq!(given.status(), AdministrationStatus::Completed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All library operations return [`domain::Result`], whose error type
//! [`domain::MedAdminError`] keeps "not found" apart from store failures:
//!
//! ```rust
//! use medadmin::domain::{AdministrationId, MedAdminError};
//!
//! let err = MedAdminError::NotFound(AdministrationId::new("a-1"));
//! assert!(err.is_not_found());
//! assert!(!err.is_store_unavailable());
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
