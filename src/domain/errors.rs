//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. "No upcoming meeting" is
//! not an error anywhere in the crate; it is an absent `MeetingWindow`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed calendar feed: {0}")]
    Parse(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Remote fetch failed: {0}")]
    Remote(String),

    #[error("Secret store error: {0}")]
    Secret(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
