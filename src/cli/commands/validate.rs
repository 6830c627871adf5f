//! Validate config command implementation

use crate::config::load_config;
use crate::config::schema::StorageBackend;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading validates; a failure here covers both parse and validation errors
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Storage Backend: {}", config.storage.backend);
        println!("  Table Name: {}", config.storage.table_name);

        if config.storage.backend == StorageBackend::PostgreSQL {
            if let Some(ref pg_config) = config.postgresql {
                use secrecy::ExposeSecret;
                println!(
                    "  PostgreSQL Server: {}",
                    pg_config
                        .connection_string
                        .expose_secret()
                        .as_str()
                        .rsplit('@')
                        .next()
                        .unwrap_or("***")
                );
                println!("  Max Connections: {}", pg_config.max_connections);
                println!("  SSL Mode: {}", pg_config.ssl_mode);
            }
        }

        println!(
            "  Transition Policy: {:?}",
            config.service.transition_policy
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();
        Ok(0)
    }
}
