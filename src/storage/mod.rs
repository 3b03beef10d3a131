//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite file with one table:
//! - entries(id, timestamp, food, calories)

pub mod registry;
pub mod schema;

pub use registry::Registry;
pub use schema::SchemaStatus;
