//! Repository over a single-table store
//!
//! [`TableAdministrationRepository`] implements the repository port by
//! encoding each administration into an [`AdministrationRecord`] and issuing
//! one write or one index query per call.

use super::keys::{
    administration_partition_key, date_partition_key, patient_partition_key,
    prescription_partition_key,
};
use super::record::AdministrationRecord;
use crate::adapters::database::traits::{AdministrationRepository, TableIndex, TableStore};
use crate::domain::ids::{AdministrationId, PatientId, PrescriptionId};
use crate::domain::{MedicationAdministration, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Administration repository backed by a [`TableStore`]
pub struct TableAdministrationRepository {
    store: Arc<dyn TableStore>,
}

impl TableAdministrationRepository {
    /// Create a new repository over a store
    pub fn new(store: impl TableStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a new repository with an Arc-wrapped store
    pub fn new_with_arc(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store
    pub fn store(&self) -> &Arc<dyn TableStore> {
        &self.store
    }

    async fn put(&self, administration: &MedicationAdministration) -> Result<MedicationAdministration> {
        let record = AdministrationRecord::from_domain(administration);
        self.store.put_item(&record).await?;

        tracing::debug!(
            administration_id = %administration.administration_id(),
            status = %administration.status(),
            table = self.store.table_name(),
            "Stored administration"
        );
        Ok(administration.clone())
    }

    async fn query(
        &self,
        index: TableIndex,
        partition_key: &str,
    ) -> Result<Vec<MedicationAdministration>> {
        let records = self.store.query(index, partition_key).await?;

        tracing::debug!(
            index = %index,
            partition_key,
            count = records.len(),
            "Queried administrations"
        );

        records.iter().map(AdministrationRecord::to_domain).collect()
    }
}

#[async_trait]
impl AdministrationRepository for TableAdministrationRepository {
    async fn save(
        &self,
        administration: &MedicationAdministration,
    ) -> Result<MedicationAdministration> {
        self.put(administration).await
    }

    async fn find_by_id(&self, id: &AdministrationId) -> Result<Option<MedicationAdministration>> {
        let found = self
            .query(
                TableIndex::ByAdministrationId,
                &administration_partition_key(id),
            )
            .await?;

        if found.len() > 1 {
            tracing::warn!(
                administration_id = %id,
                count = found.len(),
                "Multiple items share one administration id; using the first"
            );
        }

        Ok(found.into_iter().next())
    }

    async fn find_by_patient_id(
        &self,
        patient_id: &PatientId,
    ) -> Result<Vec<MedicationAdministration>> {
        self.query(TableIndex::Primary, &patient_partition_key(patient_id))
            .await
    }

    async fn find_by_prescription_id(
        &self,
        prescription_id: &PrescriptionId,
    ) -> Result<Vec<MedicationAdministration>> {
        self.query(
            TableIndex::ByPrescription,
            &prescription_partition_key(prescription_id),
        )
        .await
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<MedicationAdministration>> {
        self.query(TableIndex::ByDate, &date_partition_key(date))
            .await
    }

    async fn update(
        &self,
        administration: &MedicationAdministration,
    ) -> Result<MedicationAdministration> {
        self.put(administration).await
    }
}
