//! Migrate command implementation
//!
//! Creates the administrations table and its indexes if they do not exist.

use crate::adapters::database::create_table_store;
use crate::config::load_config;
use clap::Args;

use super::report_failure;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {}

impl MigrateArgs {
    /// Execute the migrate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Running schema migration");

        println!("🗄️  Preparing administrations table");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let store = match create_table_store(&config).await {
            Ok(s) => s,
            Err(e) => return Ok(report_failure("Failed to create table store", &e)),
        };

        if let Err(e) = store.test_connection().await {
            return Ok(report_failure("Failed to connect to the store", &e));
        }
        println!("✅ Connected to {} store", config.storage.backend);

        if let Err(e) = store.ensure_table_exists().await {
            return Ok(report_failure("Failed to create table", &e));
        }

        println!("✅ Table '{}' is ready", store.table_name());
        Ok(0)
    }
}
