//! Table store and repository factory
//!
//! Builds the configured storage backend.

use crate::adapters::database::traits::{AdministrationRepository, TableStore};
use crate::adapters::memory::InMemoryTable;
use crate::adapters::postgresql::{PostgreSQLClient, PostgreSQLTable};
use crate::adapters::table::TableAdministrationRepository;
use crate::config::schema::{MedAdminConfig, StorageBackend};
use crate::domain::{MedAdminError, Result};
use std::sync::Arc;

/// Create the table store selected by `storage.backend`
///
/// # Errors
///
/// Returns an error if the backend's configuration is missing or its client
/// cannot be created
pub async fn create_table_store(config: &MedAdminConfig) -> Result<Arc<dyn TableStore>> {
    let table_name = config.storage.table_name.clone();

    match config.storage.backend {
        StorageBackend::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                MedAdminError::Configuration(
                    "postgresql configuration is required when storage.backend = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::info!(table = %table_name, "Creating PostgreSQL table store");
            let client = PostgreSQLClient::new(pg_config.clone()).await?;

            Ok(Arc::new(PostgreSQLTable::new(client, table_name)) as Arc<dyn TableStore>)
        }
        StorageBackend::Memory => {
            tracing::info!(table = %table_name, "Creating in-memory table store");
            Ok(Arc::new(InMemoryTable::new(table_name)) as Arc<dyn TableStore>)
        }
    }
}

/// Create the repository over an existing store
pub fn create_repository(store: Arc<dyn TableStore>) -> Arc<dyn AdministrationRepository> {
    Arc::new(TableAdministrationRepository::new_with_arc(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[tokio::test]
    async fn test_memory_backend() {
        let config = parse_config(
            r#"
[storage]
backend = "memory"
table_name = "ward_administrations"
"#,
        )
        .unwrap();

        let store = create_table_store(&config).await.unwrap();
        assert_eq!(store.table_name(), "ward_administrations");
        store.test_connection().await.unwrap();

        let repository = create_repository(store);
        assert!(repository
            .find_by_date(chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_postgresql_backend_requires_section() {
        let mut config = MedAdminConfig::default();
        config.storage.backend = StorageBackend::PostgreSQL;

        let result = create_table_store(&config).await;
        assert!(matches!(result, Err(MedAdminError::Configuration(_))));
    }
}
