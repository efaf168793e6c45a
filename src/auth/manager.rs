//! Account Operations
//!
//! Registration, login, and first-run seeding of the default account.
//!
//! Credentials are stored as Argon2id hashes, never as plaintext. The login
//! interface stays credential-in/result-out.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use log::{info, warn};

use crate::store::{self, Account, Store};

use super::{AuthError, AuthResult};

/// Username seeded on first run
pub const DEFAULT_USERNAME: &str = "admin";
/// Password seeded on first run
pub const DEFAULT_PASSWORD: &str = "password123";

/// Hash a credential with a fresh random salt
fn hash_credential(credential: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(credential.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a credential against a stored hash
fn verify_credential(credential: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(credential.as_bytes(), &parsed)
        .is_ok()
}

/// Register a new account.
///
/// Fails with `Validation` when either field is empty, `DuplicateUsername`
/// when the username is taken. On failure the account mapping is untouched.
pub fn register(store: &mut Store, username: &str, credential: &str) -> AuthResult<()> {
    let username = username.trim();
    if username.is_empty() || credential.is_empty() {
        return Err(AuthError::Validation);
    }

    let mut accounts = store::load_accounts(store.conn())?;
    if accounts.contains_key(username) {
        return Err(AuthError::DuplicateUsername);
    }

    accounts.insert(username.to_string(), hash_credential(credential)?);
    store::save_accounts(store, &accounts)?;

    info!("registered account '{}'", username);
    Ok(())
}

/// Authenticate a user.
///
/// Absent username and credential mismatch are indistinguishable to the
/// caller: both fail with `InvalidCredentials`.
pub fn login(store: &Store, username: &str, credential: &str) -> AuthResult<Account> {
    let accounts = store::load_accounts(store.conn())?;

    let Some(stored_hash) = accounts.get(username) else {
        warn!("login failed for '{}'", username);
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_credential(credential, stored_hash) {
        warn!("login failed for '{}'", username);
        return Err(AuthError::InvalidCredentials);
    }

    info!("login succeeded for '{}'", username);
    Ok(Account {
        username: username.to_string(),
        credential_hash: stored_hash.clone(),
    })
}

/// Seed the default account when the account mapping is empty.
///
/// One-time, first-run initialization; call before any login attempt is
/// possible. Returns whether the default account was created.
pub fn ensure_default_account(store: &mut Store) -> AuthResult<bool> {
    let accounts = store::load_accounts(store.conn())?;
    if !accounts.is_empty() {
        return Ok(false);
    }

    register(store, DEFAULT_USERNAME, DEFAULT_PASSWORD)?;
    info!("seeded default account '{}'", DEFAULT_USERNAME);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::load_accounts;

    #[test]
    fn test_register_and_login() {
        let mut store = Store::open_in_memory().unwrap();

        register(&mut store, "marta", "hunter2").unwrap();
        let account = login(&store, "marta", "hunter2").unwrap();
        assert_eq!(account.username, "marta");
    }

    #[test]
    fn test_register_empty_fields_fail_without_mutation() {
        let mut store = Store::open_in_memory().unwrap();

        assert!(matches!(
            register(&mut store, "", "x"),
            Err(AuthError::Validation)
        ));
        assert!(matches!(
            register(&mut store, "x", ""),
            Err(AuthError::Validation)
        ));
        assert!(load_accounts(store.conn()).unwrap().is_empty());
    }

    #[test]
    fn test_register_duplicate_username() {
        let mut store = Store::open_in_memory().unwrap();

        register(&mut store, "marta", "first").unwrap();
        let result = register(&mut store, "marta", "second");
        assert!(matches!(result, Err(AuthError::DuplicateUsername)));

        // Original credential still valid
        assert!(login(&store, "marta", "first").is_ok());
    }

    #[test]
    fn test_login_rejects_wrong_password_and_unknown_user() {
        let mut store = Store::open_in_memory().unwrap();
        register(&mut store, "marta", "hunter2").unwrap();

        assert!(matches!(
            login(&store, "marta", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&store, "nobody", "hunter2"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_credentials_are_not_stored_in_plaintext() {
        let mut store = Store::open_in_memory().unwrap();
        register(&mut store, "marta", "hunter2").unwrap();

        let accounts = load_accounts(store.conn()).unwrap();
        let stored = &accounts["marta"];
        assert_ne!(stored, "hunter2");
        assert!(stored.starts_with("$argon2id$"));
    }

    #[test]
    fn test_ensure_default_account_seeds_once() {
        let mut store = Store::open_in_memory().unwrap();

        assert!(ensure_default_account(&mut store).unwrap());
        assert!(login(&store, DEFAULT_USERNAME, DEFAULT_PASSWORD).is_ok());

        // Second call is a no-op
        assert!(!ensure_default_account(&mut store).unwrap());
        assert_eq!(load_accounts(store.conn()).unwrap().len(), 1);
    }

    #[test]
    fn test_default_account_not_seeded_when_accounts_exist() {
        let mut store = Store::open_in_memory().unwrap();
        register(&mut store, "marta", "hunter2").unwrap();

        assert!(!ensure_default_account(&mut store).unwrap());
        assert!(matches!(
            login(&store, DEFAULT_USERNAME, DEFAULT_PASSWORD),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
