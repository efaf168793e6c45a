//! Family Member Registry
//!
//! Id uniqueness and write-through mutations over the member mapping.

pub mod members;

use thiserror::Error;

/// Registry errors. All recoverable and user-facing.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Member id '{0}' already exists")]
    DuplicateId(String),

    #[error("Member '{0}' not found")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

// Re-exports
pub use members::Registry;
