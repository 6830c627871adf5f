//! Storage abstraction traits
//!
//! Two seams live here:
//! - [`AdministrationRepository`], the port the application service depends on
//! - [`TableStore`], the single-table key-value contract a storage backend implements

use crate::adapters::table::record::AdministrationRecord;
use crate::domain::ids::{AdministrationId, PatientId, PrescriptionId};
use crate::domain::{MedicationAdministration, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;

/// Repository port for medication administrations
///
/// All operations are I/O against an external store and fail with a store
/// error if it cannot be reached. No retry policy is applied here.
#[async_trait]
pub trait AdministrationRepository: Send + Sync {
    /// Upsert an administration
    ///
    /// Does not check for an existing record with the same identifier.
    async fn save(&self, administration: &MedicationAdministration)
        -> Result<MedicationAdministration>;

    /// Look up an administration by identifier
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if no record exists.
    async fn find_by_id(&self, id: &AdministrationId) -> Result<Option<MedicationAdministration>>;

    /// All administrations for a patient, ascending by scheduled time
    async fn find_by_patient_id(
        &self,
        patient_id: &PatientId,
    ) -> Result<Vec<MedicationAdministration>>;

    /// All administrations for a prescription, ascending by scheduled time
    async fn find_by_prescription_id(
        &self,
        prescription_id: &PrescriptionId,
    ) -> Result<Vec<MedicationAdministration>>;

    /// All administrations scheduled on a UTC calendar date, across patients
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<MedicationAdministration>>;

    /// Overwrite an administration (last write wins)
    async fn update(
        &self,
        administration: &MedicationAdministration,
    ) -> Result<MedicationAdministration>;
}

/// Access paths of the single administrations table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableIndex {
    /// Primary key: `pk` / `sk`, partitioned by patient
    Primary,
    /// GSI1: `gsi1pk` / `gsi1sk`, partitioned by prescription
    ByPrescription,
    /// GSI2: `gsi2pk` / `gsi2sk`, partitioned by scheduled date
    ByDate,
    /// GSI3: `gsi3pk` / `gsi3sk`, one partition per administration
    ByAdministrationId,
}

impl TableIndex {
    /// Secondary indexes maintained alongside the primary key
    pub const SECONDARY: [TableIndex; 3] = [
        TableIndex::ByPrescription,
        TableIndex::ByDate,
        TableIndex::ByAdministrationId,
    ];

    /// Name of the index as used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::ByPrescription => "GSI1",
            Self::ByDate => "GSI2",
            Self::ByAdministrationId => "GSI3",
        }
    }

    /// Attribute names of the (partition, sort) key pair for this index
    pub fn key_attributes(&self) -> (&'static str, &'static str) {
        match self {
            Self::Primary => ("pk", "sk"),
            Self::ByPrescription => ("gsi1pk", "gsi1sk"),
            Self::ByDate => ("gsi2pk", "gsi2sk"),
            Self::ByAdministrationId => ("gsi3pk", "gsi3sk"),
        }
    }
}

impl fmt::Display for TableIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-table key-value store with secondary indexes
///
/// Implementations hold one logical table of [`AdministrationRecord`] items.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Test the store connection
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    async fn test_connection(&self) -> Result<()>;

    /// Ensure the table and its indexes exist, creating them if necessary
    async fn ensure_table_exists(&self) -> Result<()>;

    /// Write an item keyed by (`pk`, `sk`), replacing any previous version
    ///
    /// The previous version's index entries are replaced as well.
    async fn put_item(&self, record: &AdministrationRecord) -> Result<()>;

    /// Read one partition of one index
    ///
    /// # Returns
    ///
    /// Items whose partition key for `index` equals `partition_key`, ascending
    /// by that index's sort key.
    async fn query(
        &self,
        index: TableIndex,
        partition_key: &str,
    ) -> Result<Vec<AdministrationRecord>>;

    /// Get the table name
    fn table_name(&self) -> &str;
}
