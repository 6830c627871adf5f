//! Administration service
//!
//! Orchestrates the administration lifecycle over the repository port. The
//! service owns not-found semantics: the repository reports absence as
//! `Ok(None)`, the service turns it into [`MedAdminError::NotFound`].

use crate::adapters::database::traits::AdministrationRepository;
use crate::domain::ids::{AdministrationId, PatientId, PrescriptionId};
use crate::domain::{
    AdministrationStatus, MedAdminError, MedicationAdministration, NewAdministration, Result,
    TransitionPolicy,
};
use crate::log_status_change;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;

/// Application service for medication administrations
pub struct AdministrationService {
    repository: Arc<dyn AdministrationRepository>,
    policy: TransitionPolicy,
}

impl AdministrationService {
    /// Create a service with the permissive transition policy
    pub fn new_with_repository(repository: Arc<dyn AdministrationRepository>) -> Self {
        Self::with_policy(repository, TransitionPolicy::default())
    }

    /// Create a service with an explicit transition policy
    pub fn with_policy(
        repository: Arc<dyn AdministrationRepository>,
        policy: TransitionPolicy,
    ) -> Self {
        Self { repository, policy }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Schedule a new administration
    ///
    /// The result is SCHEDULED, with a fresh identifier and no completion details.
    ///
    /// # Errors
    ///
    /// Returns a store error if the record cannot be written.
    pub async fn create_administration(
        &self,
        new: NewAdministration,
    ) -> Result<MedicationAdministration> {
        let administration = MedicationAdministration::create(new);

        tracing::info!(
            administration_id = %administration.administration_id(),
            patient_id = %administration.patient_id(),
            prescription_id = %administration.prescription_id(),
            scheduled_time = %administration.scheduled_time(),
            "Scheduling administration"
        );

        self.repository.save(&administration).await
    }

    /// Record that a dose was given
    ///
    /// Marks the administration COMPLETED with `actual_time` and
    /// `administered_by`. `dosage_given` and `notes` replace the stored values
    /// when present and keep them otherwise.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the administration does not exist,
    /// `InvalidTransition` if the policy rejects completion, or a store error.
    pub async fn record_administration(
        &self,
        id: &AdministrationId,
        actual_time: DateTime<Utc>,
        administered_by: impl Into<String>,
        dosage_given: Option<f64>,
        notes: Option<String>,
    ) -> Result<MedicationAdministration> {
        let current = self.get_administration(id).await?;
        self.check_transition(&current, AdministrationStatus::Completed)?;

        let completed = current
            .mark_as_completed(actual_time, administered_by)
            .with_dosage_given(dosage_given)
            .with_notes(notes);

        let saved = self.repository.update(&completed).await?;
        log_status_change!(id, current.status(), saved.status());
        Ok(saved)
    }

    /// Change the status of an administration
    ///
    /// Under [`TransitionPolicy::Permissive`] any target is accepted, including
    /// moves out of terminal states.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `InvalidTransition` (strict policy only) or a store error.
    pub async fn update_administration_status(
        &self,
        id: &AdministrationId,
        status: AdministrationStatus,
    ) -> Result<MedicationAdministration> {
        let current = self.get_administration(id).await?;
        self.check_transition(&current, status)?;

        let saved = self.repository.update(&current.update_status(status)).await?;
        log_status_change!(id, current.status(), saved.status());
        Ok(saved)
    }

    /// Mark an administration as missed
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `InvalidTransition` (strict policy only) or a store error.
    pub async fn mark_administration_missed(
        &self,
        id: &AdministrationId,
    ) -> Result<MedicationAdministration> {
        let current = self.get_administration(id).await?;
        self.check_transition(&current, AdministrationStatus::Missed)?;

        let saved = self.repository.update(&current.mark_as_missed()).await?;
        log_status_change!(id, current.status(), saved.status());
        Ok(saved)
    }

    /// Fetch one administration
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists, or a store error.
    pub async fn get_administration(&self, id: &AdministrationId) -> Result<MedicationAdministration> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| MedAdminError::NotFound(id.clone()))
    }

    /// All administrations for a patient, ascending by scheduled time
    pub async fn get_patient_administrations(
        &self,
        patient_id: &PatientId,
    ) -> Result<Vec<MedicationAdministration>> {
        self.repository.find_by_patient_id(patient_id).await
    }

    /// All administrations for a prescription, ascending by scheduled time
    pub async fn get_prescription_administrations(
        &self,
        prescription_id: &PrescriptionId,
    ) -> Result<Vec<MedicationAdministration>> {
        self.repository.find_by_prescription_id(prescription_id).await
    }

    /// All administrations scheduled on a UTC calendar date
    pub async fn get_daily_administrations(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<MedicationAdministration>> {
        self.repository.find_by_date(date).await
    }

    fn check_transition(
        &self,
        current: &MedicationAdministration,
        target: AdministrationStatus,
    ) -> Result<()> {
        if self.policy.permits(current.status(), target) {
            return Ok(());
        }

        tracing::warn!(
            administration_id = %current.administration_id(),
            from = %current.status(),
            to = %target,
            "Rejected status transition"
        );
        Err(MedAdminError::InvalidTransition {
            from: current.status(),
            to: target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTable;
    use crate::adapters::table::TableAdministrationRepository;

    fn service(policy: TransitionPolicy) -> AdministrationService {
        let repository = TableAdministrationRepository::new(InMemoryTable::new("administrations"));
        AdministrationService::with_policy(Arc::new(repository), policy)
    }

    fn new_administration() -> NewAdministration {
        NewAdministration {
            patient_id: PatientId::new("P1"),
            prescription_id: PrescriptionId::new("Rx1"),
            scheduled_time: Utc::now(),
            dosage_given: Some(500.0),
            unit: "mg".to_string(),
            notes: Some("Before breakfast".to_string()),
        }
    }

    #[tokio::test]
    async fn test_record_overlays_only_given_fields() {
        let service = service(TransitionPolicy::Permissive);
        let created = service.create_administration(new_administration()).await.unwrap();

        let recorded = service
            .record_administration(
                created.administration_id(),
                Utc::now(),
                "Nurse Johnson",
                None,
                Some("Patient tolerated well".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(recorded.dosage_given(), Some(500.0));
        assert_eq!(recorded.notes(), Some("Patient tolerated well"));
        assert_eq!(recorded.unit(), "mg");
    }

    #[tokio::test]
    async fn test_missing_administration_is_not_found() {
        let service = service(TransitionPolicy::Permissive);
        let id = AdministrationId::generate();

        let err = service.mark_administration_missed(&id).await.unwrap_err();
        assert!(matches!(err, MedAdminError::NotFound(ref missing) if missing == &id));

        let err = service
            .update_administration_status(&id, AdministrationStatus::Delayed)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_permissive_policy_allows_rewind() {
        let service = service(TransitionPolicy::Permissive);
        let created = service.create_administration(new_administration()).await.unwrap();
        let id = created.administration_id();

        service
            .record_administration(id, Utc::now(), "Nurse Johnson", None, None)
            .await
            .unwrap();
        let rewound = service
            .update_administration_status(id, AdministrationStatus::Scheduled)
            .await
            .unwrap();

        assert_eq!(rewound.status(), AdministrationStatus::Scheduled);
        assert_eq!(rewound.administered_by(), Some("Nurse Johnson"));
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_leaving_terminal_state() {
        let service = service(TransitionPolicy::Strict);
        let created = service.create_administration(new_administration()).await.unwrap();
        let id = created.administration_id();

        service.mark_administration_missed(id).await.unwrap();

        let err = service
            .record_administration(id, Utc::now(), "Nurse Johnson", None, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MedAdminError::InvalidTransition {
                from: AdministrationStatus::Missed,
                to: AdministrationStatus::Completed,
            }
        ));

        // The rejected change was not written
        let stored = service.get_administration(id).await.unwrap();
        assert_eq!(stored.status(), AdministrationStatus::Missed);
        assert!(stored.actual_time().is_none());
    }

    #[tokio::test]
    async fn test_strict_policy_follows_lifecycle() {
        let service = service(TransitionPolicy::Strict);
        let created = service.create_administration(new_administration()).await.unwrap();
        let id = created.administration_id();

        for status in [
            AdministrationStatus::Delayed,
            AdministrationStatus::InProgress,
            AdministrationStatus::InProgress,
        ] {
            let updated = service.update_administration_status(id, status).await.unwrap();
            assert_eq!(updated.status(), status);
        }

        let err = service
            .update_administration_status(id, AdministrationStatus::Delayed)
            .await
            .unwrap_err();
        assert!(matches!(err, MedAdminError::InvalidTransition { .. }));

        let cancelled = service
            .update_administration_status(id, AdministrationStatus::Cancelled)
            .await
            .unwrap();
        assert!(cancelled.status().is_terminal());
    }
}
