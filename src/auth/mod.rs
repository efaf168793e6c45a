//! Credential Manager
//!
//! Authenticates and registers users against the record store.

pub mod manager;

use thiserror::Error;

/// Authentication errors. All recoverable and user-facing.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username and password must not be empty")]
    Validation,

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Credential hashing failed: {0}")]
    Hash(String),

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),
}

pub type AuthResult<T> = Result<T, AuthError>;

// Re-exports
pub use manager::{ensure_default_account, login, register, DEFAULT_PASSWORD, DEFAULT_USERNAME};
