//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the CLI shell calls use cases directly, infrastructure
//! sits behind these traits.

pub mod outbound;

pub use outbound::{CalendarFeedPort, IssueTrackerPort, SecretKey, SecretStorePort};
