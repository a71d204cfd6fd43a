//! GitHub issue tracker adapter.

pub mod client;

pub use client::GithubTracker;
