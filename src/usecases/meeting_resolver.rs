//! Meeting window resolution: series filter -> next future occurrence ->
//! adjacent-day merge.
//!
//! - Series filter is a hard exclusion by summary prefix, case-insensitive
//! - Candidacy compares dates only; an event starting "today" is excluded
//! - Absorption compares start-of-day gaps so a DST-shifted start time
//!   cannot wrongly split or merge adjacent days

use crate::domain::{CalendarEvent, MeetingDay, MeetingWindow};
use crate::shared::config::{CONFERENCING_HOSTS, MERGE_THRESHOLD_HOURS, SERIES_PREFIX};
use chrono::{Duration, NaiveDateTime};

/// Resolve the next meeting window after `reference`.
///
/// Returns `None` when no qualifying event lies in the future; callers
/// treat that as a normal outcome, not a failure.
pub fn resolve(events: &[CalendarEvent], reference: NaiveDateTime) -> Option<MeetingWindow> {
    let mut candidates: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| in_series(&e.summary))
        .filter(|e| e.start.date() > reference.date())
        .collect();
    candidates.sort_by_key(|e| e.start);

    let mut iter = candidates.into_iter();
    let first = iter.next()?;
    let mut days = vec![MeetingDay {
        start: first.start,
        end: first.end,
    }];

    let max_gap = Duration::hours(MERGE_THRESHOLD_HOURS);
    let mut prev_start = first.start;
    for event in iter {
        // Start-of-day gap, not full-timestamp gap
        if event.start.date() - prev_start.date() > max_gap {
            break;
        }
        days.push(MeetingDay {
            start: event.start,
            end: event.end,
        });
        prev_start = event.start;
    }

    Some(MeetingWindow {
        days,
        join_url: extract_join_url(first.description.as_deref()),
    })
}

fn in_series(summary: &str) -> bool {
    summary.to_ascii_lowercase().starts_with(SERIES_PREFIX)
}

/// First link in `description` whose host is a known conferencing domain.
/// Recognizes both scheme-prefixed and bare URLs embedded in free text.
fn extract_join_url(description: Option<&str>) -> Option<String> {
    let text = description?;
    text.split(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '(' | ')' | '"' | ','))
        .map(|t| t.trim_end_matches(|c| matches!(c, '.' | ';' | '!' | '?')))
        .filter(|t| !t.is_empty())
        .find_map(link_candidate)
}

fn link_candidate(token: &str) -> Option<String> {
    if let Some(rest) = token
        .strip_prefix("https://")
        .or_else(|| token.strip_prefix("http://"))
    {
        let host = rest.split('/').next()?;
        return is_conferencing_host(host).then(|| token.to_string());
    }
    let host = token.split('/').next()?;
    if !host.contains('.') {
        return None;
    }
    is_conferencing_host(host).then(|| format!("https://{token}"))
}

fn is_conferencing_host(host: &str) -> bool {
    CONFERENCING_HOSTS
        .iter()
        .any(|d| host == *d || host.ends_with(&format!(".{d}")))
}
