//! Core business logic for medadmin.
//!
//! - [`service`] - The administration service: scheduling, recording,
//!   status changes and queries over the repository port
//!
//! # Example
//!
//! ```rust,no_run
//! use medadmin::adapters::database::{create_repository, create_table_store};
//! use medadmin::config::load_config;
//! use medadmin::core::AdministrationService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("medadmin.toml")?;
//! let store = create_table_store(&config).await?;
//! let service = AdministrationService::with_policy(
//!     create_repository(store),
//!     config.service.transition_policy,
//! );
//!
//! let today = chrono::Utc::now().date_naive();
//! for administration in service.get_daily_administrations(today).await? {
//!     println!("{} {}", administration.administration_id(), administration.status());
//! }
//! # Ok(())
//! # }
//! ```

pub mod service;

pub use service::AdministrationService;
