//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CalendarEvent, DomainError, Issue};

/// Calendar feed gateway. Fetches and parses the interchange-format feed.
#[async_trait::async_trait]
pub trait CalendarFeedPort: Send + Sync {
    /// Fetch the feed and return its events in feed order.
    ///
    /// # Errors
    /// `DomainError::Remote` for transport failures or non-success
    /// responses, `DomainError::Parse` for a malformed payload.
    async fn fetch_events(&self) -> Result<Vec<CalendarEvent>, DomainError>;
}

/// Issue tracker gateway. Read-only queries per tracker id.
#[async_trait::async_trait]
pub trait IssueTrackerPort: Send + Sync {
    /// Fetch open issues from `tracker_id` carrying every label in `labels`,
    /// in the order the tracker returns them.
    ///
    /// # Errors
    /// `DomainError::Auth` when credentials are rejected,
    /// `DomainError::Remote` for any other failed query.
    async fn issues_with_labels(
        &self,
        tracker_id: &str,
        labels: &[&str],
    ) -> Result<Vec<Issue>, DomainError>;
}

/// Named secrets held by the credential store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKey {
    TrackerToken,
    CalendarUrl,
}

impl SecretKey {
    /// Account name under which the secret is stored.
    pub fn account(self) -> &'static str {
        match self {
            SecretKey::TrackerToken => "tracker-token",
            SecretKey::CalendarUrl => "calendar-url",
        }
    }
}

/// Credential store port. Two opaque named secrets, get/set.
///
/// Synchronous: backends are blocking one-shot lookups done at startup.
pub trait SecretStorePort: Send + Sync {
    /// Read a secret. `Ok(None)` when it was never set.
    fn get(&self, key: SecretKey) -> Result<Option<String>, DomainError>;

    /// Store (or overwrite) a secret.
    fn set(&self, key: SecretKey, value: &str) -> Result<(), DomainError>;
}
