//! Credential store adapter (platform keychain).

pub mod keyring_store;

pub use keyring_store::KeyringStore;
