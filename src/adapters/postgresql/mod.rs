//! PostgreSQL table backend
//!
//! Stores the administrations table as one PostgreSQL table with a B-tree
//! index per access path.

pub mod client;
pub mod table;

pub use client::PostgreSQLClient;
pub use table::PostgreSQLTable;
