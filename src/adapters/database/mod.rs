//! Storage abstraction layer
//!
//! The repository port and the single-table store contract, plus the factory
//! that picks a backend from configuration.

pub mod factory;
pub mod traits;

pub use factory::{create_repository, create_table_store};
pub use traits::{AdministrationRepository, TableIndex, TableStore};
