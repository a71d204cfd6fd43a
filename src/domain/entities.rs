//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/calendar-library types here — these are mapped from adapters.

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashMap;

/// One raw occurrence from the calendar feed.
///
/// Feed timestamps are parsed at the adapter boundary; ordering and merge
/// arithmetic work on real instants, never on the literal strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub summary: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// One day of a resolved meeting. `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingDay {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// The resolved next meeting occurrence. `days` is non-empty and ascending
/// by start; adjacent calendar days absorbed by the resolver land here as
/// extra entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingWindow {
    pub days: Vec<MeetingDay>,
    /// Video-conferencing link lifted from the first day's description.
    pub join_url: Option<String>,
}

impl MeetingWindow {
    pub fn is_multi_day(&self) -> bool {
        self.days.len() > 1
    }
}

/// One item from an issue tracker, in the tracker API's issue shape.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub title: String,
    pub number: u64,
    pub body: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub assignees: Vec<Assignee>,
}

impl Issue {
    /// Case-insensitive label membership test.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Assignee {
    pub login: String,
    pub html_url: String,
    pub avatar_url: String,
}

/// Issues grouped by tracker id. Per-tracker order is the tracker-returned
/// order; section ordering is decided by the renderer from configuration.
pub type IssueGroups = HashMap<String, Vec<Issue>>;
