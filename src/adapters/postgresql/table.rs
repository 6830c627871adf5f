//! PostgreSQL implementation of [`TableStore`]

use crate::adapters::database::traits::{TableIndex, TableStore};
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::table::record::AdministrationRecord;
use crate::domain::{MedAdminError, Result, StoreError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_postgres::Row;

const MIGRATION: &str = include_str!("../../../migrations/001_administrations.sql");

const COLUMNS: &str = "pk, sk, gsi1pk, gsi1sk, gsi2pk, gsi2sk, gsi3pk, gsi3sk, \
    administration_id, patient_id, prescription_id, scheduled_time, actual_time, \
    dosage_given, unit, administered_by, status, notes, created_at";

/// Administrations table stored in PostgreSQL
pub struct PostgreSQLTable {
    client: Arc<PostgreSQLClient>,
    table_name: String,
    upsert_sql: String,
}

impl PostgreSQLTable {
    /// Create a new table over a client
    pub fn new(client: PostgreSQLClient, table_name: impl Into<String>) -> Self {
        Self::new_with_arc(Arc::new(client), table_name)
    }

    /// Create a new table with an Arc-wrapped client
    ///
    /// `table_name` must be a plain SQL identifier; configuration validation
    /// guarantees this.
    pub fn new_with_arc(client: Arc<PostgreSQLClient>, table_name: impl Into<String>) -> Self {
        let table_name = table_name.into();
        let upsert_sql = upsert_statement(&table_name);
        Self {
            client,
            table_name,
            upsert_sql,
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgreSQLClient> {
        &self.client
    }

    /// Schema script for this table
    pub fn migration_sql(&self) -> String {
        MIGRATION.replace("{table}", &self.table_name)
    }
}

fn upsert_statement(table_name: &str) -> String {
    format!(
        r#"
        INSERT INTO {table_name} ({COLUMNS})
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
        ON CONFLICT (pk, sk) DO UPDATE SET
            gsi1pk = EXCLUDED.gsi1pk,
            gsi1sk = EXCLUDED.gsi1sk,
            gsi2pk = EXCLUDED.gsi2pk,
            gsi2sk = EXCLUDED.gsi2sk,
            gsi3pk = EXCLUDED.gsi3pk,
            gsi3sk = EXCLUDED.gsi3sk,
            administration_id = EXCLUDED.administration_id,
            patient_id = EXCLUDED.patient_id,
            prescription_id = EXCLUDED.prescription_id,
            scheduled_time = EXCLUDED.scheduled_time,
            actual_time = EXCLUDED.actual_time,
            dosage_given = EXCLUDED.dosage_given,
            unit = EXCLUDED.unit,
            administered_by = EXCLUDED.administered_by,
            status = EXCLUDED.status,
            notes = EXCLUDED.notes,
            created_at = EXCLUDED.created_at,
            updated_at = NOW()
        "#
    )
}

fn query_statement(table_name: &str, index: TableIndex) -> String {
    let (partition_column, sort_column) = index.key_attributes();
    format!(
        "SELECT {COLUMNS} FROM {table_name} WHERE {partition_column} = $1 ORDER BY {sort_column}"
    )
}

fn record_from_row(row: &Row) -> Result<AdministrationRecord> {
    fn column<'a, T: tokio_postgres::types::FromSql<'a>>(row: &'a Row, name: &str) -> Result<T> {
        row.try_get(name).map_err(|e| {
            MedAdminError::Store(StoreError::DeserializationFailed(format!(
                "column {name}: {e}"
            )))
        })
    }

    Ok(AdministrationRecord {
        pk: column(row, "pk")?,
        sk: column(row, "sk")?,
        gsi1pk: column(row, "gsi1pk")?,
        gsi1sk: column(row, "gsi1sk")?,
        gsi2pk: column(row, "gsi2pk")?,
        gsi2sk: column(row, "gsi2sk")?,
        gsi3pk: column(row, "gsi3pk")?,
        gsi3sk: column(row, "gsi3sk")?,
        administration_id: column(row, "administration_id")?,
        patient_id: column(row, "patient_id")?,
        prescription_id: column(row, "prescription_id")?,
        scheduled_time: column(row, "scheduled_time")?,
        actual_time: column(row, "actual_time")?,
        dosage_given: column(row, "dosage_given")?,
        unit: column(row, "unit")?,
        administered_by: column(row, "administered_by")?,
        status: column(row, "status")?,
        notes: column(row, "notes")?,
        created_at: column(row, "created_at")?,
    })
}

#[async_trait]
impl TableStore for PostgreSQLTable {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn ensure_table_exists(&self) -> Result<()> {
        self.client.batch_execute(&self.migration_sql()).await?;
        tracing::info!(table = %self.table_name, "PostgreSQL schema initialized successfully");
        Ok(())
    }

    async fn put_item(&self, record: &AdministrationRecord) -> Result<()> {
        self.client
            .execute(
                &self.upsert_sql,
                &[
                    &record.pk,
                    &record.sk,
                    &record.gsi1pk,
                    &record.gsi1sk,
                    &record.gsi2pk,
                    &record.gsi2sk,
                    &record.gsi3pk,
                    &record.gsi3sk,
                    &record.administration_id,
                    &record.patient_id,
                    &record.prescription_id,
                    &record.scheduled_time,
                    &record.actual_time,
                    &record.dosage_given,
                    &record.unit,
                    &record.administered_by,
                    &record.status,
                    &record.notes,
                    &record.created_at,
                ],
            )
            .await?;
        Ok(())
    }

    async fn query(
        &self,
        index: TableIndex,
        partition_key: &str,
    ) -> Result<Vec<AdministrationRecord>> {
        let rows = self
            .client
            .query(&query_statement(&self.table_name, index), &[&partition_key])
            .await?;

        rows.iter().map(record_from_row).collect()
    }

    fn table_name(&self) -> &str {
        &self.table_name
    }
}
