//! Storage adapters for medadmin.
//!
//! - [`database`] - Repository port, table store contract and backend factory
//! - [`table`] - Key encoding, stored record format and the table-backed repository
//! - [`postgresql`] - PostgreSQL table store
//! - [`memory`] - In-process table store
//!
//! # Example
//!
//! ```rust
//! use medadmin::adapters::database::AdministrationRepository;
//! use medadmin::adapters::memory::InMemoryTable;
//! use medadmin::adapters::table::TableAdministrationRepository;
//! use medadmin::domain::{MedicationAdministration, NewAdministration, PatientId, PrescriptionId};
//! use chrono::Utc;
//!
//! # async fn example() -> medadmin::domain::Result<()> {
//! let repository = TableAdministrationRepository::new(InMemoryTable::new("administrations"));
//!
//! let administration = MedicationAdministration::create(NewAdministration {
//!     patient_id: PatientId::new("P1"),
//!     prescription_id: PrescriptionId::new("Rx1"),
//!     scheduled_time: Utc::now(),
//!     dosage_given: Some(500.0),
//!     unit: "mg".to_string(),
//!     notes: None,
//! });
//! repository.save(&administration).await?;
//!
//! let history = repository.find_by_patient_id(&PatientId::new("P1")).await?;
//! assert_eq!(history.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod memory;
pub mod postgresql;
pub mod table;
