//! In-process table backend
//!
//! Holds the administrations table in memory with the same key layout and
//! ordering as the database backend. Used by tests and local dry runs.

pub mod table;

pub use table::InMemoryTable;
