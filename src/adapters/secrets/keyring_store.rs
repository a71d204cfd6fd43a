//! OS keychain adapter. Implements SecretStorePort with the `keyring` crate.

use crate::domain::DomainError;
use crate::ports::{SecretKey, SecretStorePort};
use keyring::{Entry, Error as KeyringError};

const SERVICE_NAME: &str = "com.gavel.agenda";

/// Stores the two named secrets in the platform keychain, one keyring
/// entry per secret under a fixed service name.
pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(key: SecretKey) -> Result<Entry, DomainError> {
        Entry::new(SERVICE_NAME, key.account())
            .map_err(|e| DomainError::Secret(format!("Failed to access keyring: {e}")))
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStorePort for KeyringStore {
    fn get(&self, key: SecretKey) -> Result<Option<String>, DomainError> {
        match Self::entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(KeyringError::NoEntry) => Ok(None),
            Err(e) => Err(DomainError::Secret(format!(
                "Failed to read '{}': {e}",
                key.account()
            ))),
        }
    }

    fn set(&self, key: SecretKey, value: &str) -> Result<(), DomainError> {
        Self::entry(key)?
            .set_password(value)
            .map_err(|e| DomainError::Secret(format!("Failed to store '{}': {e}", key.account())))
    }
}
