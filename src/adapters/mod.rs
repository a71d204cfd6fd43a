//! Infrastructure adapters. Implement outbound ports.
//!
//! Calendar feed, issue tracker, keychain. Map errors to DomainError.

pub mod calendar;
pub mod github;
pub mod secrets;
