//! Single-table storage layout
//!
//! This module maps administrations onto one logical table: the key encoding,
//! the stored record format, and the repository that drives any
//! [`TableStore`](crate::adapters::database::traits::TableStore).

pub mod keys;
pub mod record;
pub mod repository;

pub use keys::ItemKeys;
pub use record::AdministrationRecord;
pub use repository::TableAdministrationRepository;
