//! Record Store
//!
//! SQLite persistence for the two keyed mappings: accounts and family members.

pub mod connection;
pub mod models;
pub mod queries;
pub mod schema;

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

// Re-exports
pub use connection::{Store, StoreConfig};
pub use models::{Account, FamilyData, FamilyMember, Gender};
pub use queries::*;
