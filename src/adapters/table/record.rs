//! Stored record model
//!
//! [`AdministrationRecord`] is the item layout of the administrations table:
//! the denormalized key attributes followed by the entity attributes, with
//! timestamps as RFC 3339 strings and the status as its enum name. This is the
//! format external tooling and migration scripts read.

use super::keys::{format_timestamp, ItemKeys};
use crate::domain::ids::{AdministrationId, PatientId, PrescriptionId};
use crate::domain::{AdministrationStatus, MedicationAdministration, Result, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One item of the administrations table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrationRecord {
    pub pk: String,
    pub sk: String,
    pub gsi1pk: String,
    pub gsi1sk: String,
    pub gsi2pk: String,
    pub gsi2sk: String,
    pub gsi3pk: String,
    pub gsi3sk: String,

    pub administration_id: String,
    pub patient_id: String,
    pub prescription_id: String,
    pub scheduled_time: String,
    pub actual_time: Option<String>,
    pub dosage_given: Option<f64>,
    pub unit: String,
    pub administered_by: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: String,
}

impl AdministrationRecord {
    /// Encode an administration, deriving all of its keys
    pub fn from_domain(administration: &MedicationAdministration) -> Self {
        let keys = ItemKeys::for_administration(administration);

        Self {
            pk: keys.pk,
            sk: keys.sk,
            gsi1pk: keys.gsi1pk,
            gsi1sk: keys.gsi1sk,
            gsi2pk: keys.gsi2pk,
            gsi2sk: keys.gsi2sk,
            gsi3pk: keys.gsi3pk,
            gsi3sk: keys.gsi3sk,
            administration_id: administration.administration_id().to_string(),
            patient_id: administration.patient_id().to_string(),
            prescription_id: administration.prescription_id().to_string(),
            scheduled_time: format_timestamp(administration.scheduled_time()),
            actual_time: administration.actual_time().map(format_timestamp),
            dosage_given: administration.dosage_given(),
            unit: administration.unit().to_string(),
            administered_by: administration.administered_by().map(str::to_string),
            status: administration.status().as_str().to_string(),
            notes: administration.notes().map(str::to_string),
            created_at: format_timestamp(administration.created_at()),
        }
    }

    /// Decode the record back into an administration
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DeserializationFailed` if a timestamp or the status
    /// cannot be parsed.
    pub fn to_domain(&self) -> Result<MedicationAdministration> {
        let status: AdministrationStatus = self.status.parse().map_err(|e: String| {
            self.decode_error(format!("invalid status: {e}"))
        })?;

        let administration = MedicationAdministration::builder()
            .administration_id(AdministrationId::new(self.administration_id.clone()))
            .patient_id(PatientId::new(self.patient_id.clone()))
            .prescription_id(PrescriptionId::new(self.prescription_id.clone()))
            .scheduled_time(self.parse_timestamp("scheduledTime", &self.scheduled_time)?)
            .actual_time(
                self.actual_time
                    .as_deref()
                    .map(|t| self.parse_timestamp("actualTime", t))
                    .transpose()?,
            )
            .dosage_given(self.dosage_given)
            .unit(self.unit.clone())
            .administered_by(self.administered_by.clone())
            .status(status)
            .notes(self.notes.clone())
            .created_at(self.parse_timestamp("createdAt", &self.created_at)?)
            .build()
            .map_err(|e| self.decode_error(e))?;

        Ok(administration)
    }

    /// Key attributes of this record
    pub fn keys(&self) -> ItemKeys {
        ItemKeys {
            pk: self.pk.clone(),
            sk: self.sk.clone(),
            gsi1pk: self.gsi1pk.clone(),
            gsi1sk: self.gsi1sk.clone(),
            gsi2pk: self.gsi2pk.clone(),
            gsi2sk: self.gsi2sk.clone(),
            gsi3pk: self.gsi3pk.clone(),
            gsi3sk: self.gsi3sk.clone(),
        }
    }

    fn parse_timestamp(&self, field: &str, value: &str) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| self.decode_error(format!("invalid {field} '{value}': {e}")))
    }

    fn decode_error(&self, message: impl std::fmt::Display) -> crate::domain::MedAdminError {
        StoreError::DeserializationFailed(format!(
            "administration {}: {message}",
            self.administration_id
        ))
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MedAdminError, NewAdministration};
    use chrono::TimeZone;

    fn completed_administration() -> MedicationAdministration {
        MedicationAdministration::create(NewAdministration {
            patient_id: PatientId::new("P1"),
            prescription_id: PrescriptionId::new("Rx1"),
            scheduled_time: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            dosage_given: Some(500.0),
            unit: "mg".to_string(),
            notes: Some("with food".to_string()),
        })
        .mark_as_completed(
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 7, 30).unwrap(),
            "Nurse Johnson",
        )
    }

    #[test]
    fn test_decode_restores_every_field() {
        let administration = completed_administration();
        let record = AdministrationRecord::from_domain(&administration);
        assert_eq!(record.to_domain().unwrap(), administration);

        let scheduled = MedicationAdministration::create(NewAdministration {
            patient_id: PatientId::generate(),
            prescription_id: PrescriptionId::generate(),
            scheduled_time: Utc::now(),
            dosage_given: None,
            unit: "ml".to_string(),
            notes: None,
        });
        let record = AdministrationRecord::from_domain(&scheduled);
        assert_eq!(record.to_domain().unwrap(), scheduled);
    }

    #[test]
    fn test_record_attribute_layout() {
        let record = AdministrationRecord::from_domain(&completed_administration());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["pk"], "PATIENT#P1");
        assert_eq!(json["gsi2pk"], "DATE#2024-03-01");
        assert_eq!(json["scheduledTime"], "2024-03-01T08:00:00.000000000Z");
        assert_eq!(json["actualTime"], "2024-03-01T08:07:30.000000000Z");
        assert_eq!(json["status"], "COMPLETED");
        assert_eq!(json["administeredBy"], "Nurse Johnson");
        assert_eq!(json["dosageGiven"], 500.0);
    }

    #[test]
    fn test_nullable_attributes_serialize_as_null() {
        let scheduled = completed_administration().update_status(AdministrationStatus::Scheduled);
        let mut record = AdministrationRecord::from_domain(&scheduled);
        record.actual_time = None;
        record.administered_by = None;
        record.notes = None;

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["actualTime"].is_null());
        assert!(json["administeredBy"].is_null());
        assert!(json["notes"].is_null());
    }

    #[test]
    fn test_decode_rejects_unknown_status() {
        let mut record = AdministrationRecord::from_domain(&completed_administration());
        record.status = "PAUSED".to_string();

        let err = record.to_domain().unwrap_err();
        assert!(matches!(
            err,
            MedAdminError::Store(StoreError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_timestamp() {
        let mut record = AdministrationRecord::from_domain(&completed_administration());
        record.created_at = "yesterday".to_string();

        let err = record.to_domain().unwrap_err();
        assert!(err.to_string().contains("createdAt"));
    }

    #[test]
    fn test_decode_accepts_other_offsets() {
        let mut record = AdministrationRecord::from_domain(&completed_administration());
        record.scheduled_time = "2024-03-01T09:00:00+01:00".to_string();

        let administration = record.to_domain().unwrap();
        assert_eq!(
            administration.scheduled_time(),
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
        );
    }
}
