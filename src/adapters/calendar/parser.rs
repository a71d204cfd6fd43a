//! Calendar feed parser. Raw interchange-format text to domain events.
//!
//! Timestamp values are read literally from DTSTART/DTEND; property
//! parameters (TZID and friends) are discarded. Values are parsed into
//! `NaiveDateTime` once, here, so downstream ordering is numeric rather
//! than relying on the zero-padded string format sorting lexically.

use crate::domain::{CalendarEvent, DomainError};
use chrono::{NaiveDate, NaiveDateTime};
use icalendar::{Calendar, CalendarComponent, Component, Event};
use tracing::warn;

/// Parse the raw feed into events, in feed order.
///
/// # Errors
/// `DomainError::Parse` when the payload is not well-formed interchange
/// text. Event blocks without a usable DTSTART/DTEND pair are skipped.
pub fn parse_feed(raw: &str) -> Result<Vec<CalendarEvent>, DomainError> {
    let calendar: Calendar = raw
        .parse()
        .map_err(|e| DomainError::Parse(format!("{e}")))?;

    let mut events = Vec::new();
    for component in &calendar.components {
        let CalendarComponent::Event(event) = component else {
            continue;
        };
        let summary = event.get_summary().unwrap_or_default().to_string();
        let (Some(start), Some(end)) = (
            timestamp_property(event, "DTSTART"),
            timestamp_property(event, "DTEND"),
        ) else {
            warn!(summary = %summary, "event without usable DTSTART/DTEND, skipped");
            continue;
        };
        events.push(CalendarEvent {
            summary,
            description: event.get_description().map(str::to_string),
            start,
            end,
        });
    }
    Ok(events)
}

/// Literal value of a timestamp property, parameters ignored.
fn timestamp_property(event: &Event, name: &str) -> Option<NaiveDateTime> {
    parse_stamp(event.properties().get(name)?.value())
}

/// Feed literals are `YYYYMMDDTHHMMSS`, optionally `Z`-suffixed, or a bare
/// `YYYYMMDD` date which expands to midnight.
fn parse_stamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.len() == 8 {
        return NaiveDate::parse_from_str(value, "%Y%m%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0));
    }
    let bare = value.strip_suffix('Z').unwrap_or(value);
    NaiveDateTime::parse_from_str(bare, "%Y%m%dT%H%M%S").ok()
}
