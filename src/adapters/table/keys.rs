//! Key encoding for the single administrations table
//!
//! Every administration is projected into one primary key pair and three
//! secondary-index key pairs:
//!
//! | Index | Partition key | Sort key |
//! |---|---|---|
//! | Primary | `PATIENT#{patientId}` | `ADMIN#{scheduledTime}#{administrationId}` |
//! | GSI1 | `PRESCRIPTION#{prescriptionId}` | `ADMIN#{scheduledTime}#{administrationId}` |
//! | GSI2 | `DATE#{YYYY-MM-DD}` | `ADMIN#{scheduledTime}#{administrationId}` |
//! | GSI3 | `ADMINISTRATION#{administrationId}` | `ADMINISTRATION` |
//!
//! `scheduledTime` is rendered as fixed-width RFC 3339 UTC with nanoseconds, so
//! byte order of sort keys is chronological order. The trailing identifier keeps
//! two administrations due at the same instant from sharing a key.

use crate::adapters::database::traits::TableIndex;
use crate::domain::ids::{AdministrationId, PatientId, PrescriptionId};
use crate::domain::MedicationAdministration;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

pub const PATIENT_PREFIX: &str = "PATIENT#";
pub const PRESCRIPTION_PREFIX: &str = "PRESCRIPTION#";
pub const DATE_PREFIX: &str = "DATE#";
pub const ADMIN_PREFIX: &str = "ADMIN#";
pub const ADMINISTRATION_PREFIX: &str = "ADMINISTRATION#";

/// Sort key of the by-identifier index (one item per partition)
pub const ADMINISTRATION_SORT_KEY: &str = "ADMINISTRATION";

/// All key attributes of one stored administration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemKeys {
    pub pk: String,
    pub sk: String,
    pub gsi1pk: String,
    pub gsi1sk: String,
    pub gsi2pk: String,
    pub gsi2sk: String,
    pub gsi3pk: String,
    pub gsi3sk: String,
}

impl ItemKeys {
    /// Derives every key of an administration
    pub fn for_administration(administration: &MedicationAdministration) -> Self {
        let sort_key = administration_sort_key(
            administration.scheduled_time(),
            administration.administration_id(),
        );

        Self {
            pk: patient_partition_key(administration.patient_id()),
            sk: sort_key.clone(),
            gsi1pk: prescription_partition_key(administration.prescription_id()),
            gsi1sk: sort_key.clone(),
            gsi2pk: date_partition_key(scheduled_date(administration.scheduled_time())),
            gsi2sk: sort_key,
            gsi3pk: administration_partition_key(administration.administration_id()),
            gsi3sk: ADMINISTRATION_SORT_KEY.to_string(),
        }
    }

    /// The (partition, sort) pair for an index
    pub fn for_index(&self, index: TableIndex) -> (&str, &str) {
        match index {
            TableIndex::Primary => (&self.pk, &self.sk),
            TableIndex::ByPrescription => (&self.gsi1pk, &self.gsi1sk),
            TableIndex::ByDate => (&self.gsi2pk, &self.gsi2sk),
            TableIndex::ByAdministrationId => (&self.gsi3pk, &self.gsi3sk),
        }
    }
}

pub fn patient_partition_key(patient_id: &PatientId) -> String {
    format!("{PATIENT_PREFIX}{patient_id}")
}

pub fn prescription_partition_key(prescription_id: &PrescriptionId) -> String {
    format!("{PRESCRIPTION_PREFIX}{prescription_id}")
}

pub fn date_partition_key(date: NaiveDate) -> String {
    format!("{DATE_PREFIX}{}", date.format("%Y-%m-%d"))
}

pub fn administration_partition_key(administration_id: &AdministrationId) -> String {
    format!("{ADMINISTRATION_PREFIX}{administration_id}")
}

pub fn administration_sort_key(
    scheduled_time: DateTime<Utc>,
    administration_id: &AdministrationId,
) -> String {
    format!(
        "{ADMIN_PREFIX}{}#{administration_id}",
        format_timestamp(scheduled_time)
    )
}

/// UTC calendar date of a scheduled time
pub fn scheduled_date(scheduled_time: DateTime<Utc>) -> NaiveDate {
    scheduled_time.date_naive()
}

/// Fixed-width RFC 3339 rendering used in keys and stored attributes
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
