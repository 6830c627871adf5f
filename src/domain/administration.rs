//! Medication administration entity
//!
//! A [`MedicationAdministration`] is a value: every lifecycle operation
//! returns a new value and leaves the receiver untouched, so a caller holding
//! an older copy never observes a later change.

use super::ids::{AdministrationId, PatientId, PrescriptionId};
use super::status::AdministrationStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for scheduling a new administration
#[derive(Debug, Clone)]
pub struct NewAdministration {
    /// Patient receiving the dose
    pub patient_id: PatientId,

    /// Prescription the dose belongs to
    pub prescription_id: PrescriptionId,

    /// When the dose is due
    pub scheduled_time: DateTime<Utc>,

    /// Planned dosage, if known up front
    pub dosage_given: Option<f64>,

    /// Dosage unit (e.g. "mg")
    pub unit: String,

    /// Free-text notes
    pub notes: Option<String>,
}

/// A scheduled or completed medication administration
///
/// # Examples
///
/// ```
/// use medadmin::domain::{MedicationAdministration, NewAdministration, AdministrationStatus};
/// use medadmin::domain::ids::{PatientId, PrescriptionId};
/// use chrono::Utc;
///
/// let scheduled = MedicationAdministration::create(NewAdministration {
///     patient_id: PatientId::generate(),
///     prescription_id: PrescriptionId::generate(),
///     scheduled_time: Utc::now(),
///     dosage_given: Some(500.0),
///     unit: "mg".to_string(),
///     notes: None,
/// });
/// assert_eq!(scheduled.status(), AdministrationStatus::Scheduled);
///
/// let completed = scheduled.mark_as_completed(Utc::now(), "Nurse Johnson");
/// assert_eq!(completed.status(), AdministrationStatus::Completed);
/// assert_eq!(scheduled.status(), AdministrationStatus::Scheduled);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationAdministration {
    administration_id: AdministrationId,
    patient_id: PatientId,
    prescription_id: PrescriptionId,
    scheduled_time: DateTime<Utc>,
    actual_time: Option<DateTime<Utc>>,
    dosage_given: Option<f64>,
    unit: String,
    administered_by: Option<String>,
    status: AdministrationStatus,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl MedicationAdministration {
    /// Creates a new SCHEDULED administration with a fresh identifier
    pub fn create(new: NewAdministration) -> Self {
        Self {
            administration_id: AdministrationId::generate(),
            patient_id: new.patient_id,
            prescription_id: new.prescription_id,
            scheduled_time: new.scheduled_time,
            actual_time: None,
            dosage_given: new.dosage_given,
            unit: new.unit,
            administered_by: None,
            status: AdministrationStatus::Scheduled,
            notes: new.notes,
            created_at: Utc::now(),
        }
    }

    /// Creates a builder for rehydrating a stored administration
    pub fn builder() -> MedicationAdministrationBuilder {
        MedicationAdministrationBuilder::default()
    }

    /// Marks the dose as given
    pub fn mark_as_completed(
        &self,
        actual_time: DateTime<Utc>,
        administered_by: impl Into<String>,
    ) -> Self {
        Self {
            actual_time: Some(actual_time),
            administered_by: Some(administered_by.into()),
            status: AdministrationStatus::Completed,
            ..self.clone()
        }
    }

    /// Marks the dose as missed
    pub fn mark_as_missed(&self) -> Self {
        self.update_status(AdministrationStatus::Missed)
    }

    /// Sets the status without consulting the lifecycle table
    pub fn update_status(&self, new_status: AdministrationStatus) -> Self {
        Self {
            status: new_status,
            ..self.clone()
        }
    }

    /// Overlays the dosage; `None` keeps the current value
    pub fn with_dosage_given(&self, dosage_given: Option<f64>) -> Self {
        Self {
            dosage_given: dosage_given.or(self.dosage_given),
            ..self.clone()
        }
    }

    /// Overlays the notes; `None` keeps the current value
    pub fn with_notes(&self, notes: Option<String>) -> Self {
        Self {
            notes: notes.or_else(|| self.notes.clone()),
            ..self.clone()
        }
    }

    pub fn administration_id(&self) -> &AdministrationId {
        &self.administration_id
    }

    pub fn patient_id(&self) -> &PatientId {
        &self.patient_id
    }

    pub fn prescription_id(&self) -> &PrescriptionId {
        &self.prescription_id
    }

    pub fn scheduled_time(&self) -> DateTime<Utc> {
        self.scheduled_time
    }

    pub fn actual_time(&self) -> Option<DateTime<Utc>> {
        self.actual_time
    }

    pub fn dosage_given(&self) -> Option<f64> {
        self.dosage_given
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn administered_by(&self) -> Option<&str> {
        self.administered_by.as_deref()
    }

    pub fn status(&self) -> AdministrationStatus {
        self.status
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Builder for rehydrating [`MedicationAdministration`] values from storage
#[derive(Debug, Default)]
pub struct MedicationAdministrationBuilder {
    administration_id: Option<AdministrationId>,
    patient_id: Option<PatientId>,
    prescription_id: Option<PrescriptionId>,
    scheduled_time: Option<DateTime<Utc>>,
    actual_time: Option<DateTime<Utc>>,
    dosage_given: Option<f64>,
    unit: Option<String>,
    administered_by: Option<String>,
    status: Option<AdministrationStatus>,
    notes: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl MedicationAdministrationBuilder {
    pub fn administration_id(mut self, id: AdministrationId) -> Self {
        self.administration_id = Some(id);
        self
    }

    pub fn patient_id(mut self, patient_id: PatientId) -> Self {
        self.patient_id = Some(patient_id);
        self
    }

    pub fn prescription_id(mut self, prescription_id: PrescriptionId) -> Self {
        self.prescription_id = Some(prescription_id);
        self
    }

    pub fn scheduled_time(mut self, scheduled_time: DateTime<Utc>) -> Self {
        self.scheduled_time = Some(scheduled_time);
        self
    }

    pub fn actual_time(mut self, actual_time: Option<DateTime<Utc>>) -> Self {
        self.actual_time = actual_time;
        self
    }

    pub fn dosage_given(mut self, dosage_given: Option<f64>) -> Self {
        self.dosage_given = dosage_given;
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn administered_by(mut self, administered_by: Option<String>) -> Self {
        self.administered_by = administered_by;
        self
    }

    pub fn status(mut self, status: AdministrationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the administration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing required field
    pub fn build(self) -> Result<MedicationAdministration, String> {
        Ok(MedicationAdministration {
            administration_id: self
                .administration_id
                .ok_or("administration_id is required")?,
            patient_id: self.patient_id.ok_or("patient_id is required")?,
            prescription_id: self.prescription_id.ok_or("prescription_id is required")?,
            scheduled_time: self.scheduled_time.ok_or("scheduled_time is required")?,
            actual_time: self.actual_time,
            dosage_given: self.dosage_given,
            unit: self.unit.ok_or("unit is required")?,
            administered_by: self.administered_by,
            status: self.status.ok_or("status is required")?,
            notes: self.notes,
            created_at: self.created_at.ok_or("created_at is required")?,
        })
    }
}
