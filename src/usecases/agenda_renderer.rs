//! Agenda rendering. Pure function of the resolved window and the grouped
//! issues; never fails, every absent/empty combination renders.

use crate::domain::{Issue, IssueGroups, MeetingDay, MeetingWindow};
use crate::shared::config::{CLASSIFICATIONS, TRACKERS};

const TITLE: &str = "# Board of Directors Meeting Agenda";
const NO_MEETING: &str = "No upcoming meeting found in the calendar.";
const FILL_IN: &str = "@@@";
const AGENDA_REVIEW: &str =
    "Review of this agenda, call for additional items, and any other business.";
const UNKNOWN_CLASSIFICATION: &str = "UNKNOWN: for discussion or needs resolution";
const AVATAR_SIZE: u32 = 40;

/// Render the full agenda document.
///
/// Section order is the declared tracker order from configuration, not
/// alphabetical and not the order the aggregator discovered them.
pub fn render(window: Option<&MeetingWindow>, groups: &IssueGroups) -> String {
    let mut doc = String::new();
    doc.push_str(TITLE);
    doc.push_str("\n\n");

    doc.push_str("## Date\n\n");
    match window {
        None => {
            doc.push_str(NO_MEETING);
            doc.push('\n');
        }
        Some(w) if w.is_multi_day() => {
            for day in &w.days {
                doc.push_str(&format!("* {}\n", day_line(day)));
            }
        }
        Some(w) => {
            for day in &w.days {
                doc.push_str(&format!("{}\n", day_line(day)));
            }
        }
    }
    if let Some(url) = window.and_then(|w| w.join_url.as_deref()) {
        doc.push_str(&format!("\nJoin: {url}\n"));
    }

    doc.push_str("\n## Regrets\n\n");
    doc.push_str(FILL_IN);
    doc.push_str("\n\n## Minutes Approval\n\n");
    doc.push_str(FILL_IN);
    doc.push_str("\n\n## Agenda Review\n\n");
    doc.push_str(AGENDA_REVIEW);
    doc.push('\n');

    for section in TRACKERS {
        doc.push('\n');
        match groups.get(section.id).filter(|issues| !issues.is_empty()) {
            None => {
                doc.push_str(&format!(
                    "Nothing discussed for the {}.\n",
                    section.human_label
                ));
            }
            Some(issues) => {
                doc.push_str(&format!("## {}\n", section.human_label));
                for issue in issues {
                    doc.push('\n');
                    doc.push_str(&issue_entry(issue));
                }
            }
        }
    }

    doc
}

/// `<long weekday>, <month> <day>, <year> HH:MM - HH:MM UTC`.
fn day_line(day: &MeetingDay) -> String {
    format!(
        "{} {} - {} UTC",
        day.start.format("%A, %B %-d, %Y"),
        day.start.format("%H:%M"),
        day.end.format("%H:%M")
    )
}

fn issue_entry(issue: &Issue) -> String {
    let mut entry = format!(
        "### {} ([#{}]({}))\n\n",
        issue.title, issue.number, issue.html_url
    );

    let classification = CLASSIFICATIONS
        .iter()
        .find(|c| issue.has_label(c.label))
        .map(|c| c.text)
        .unwrap_or(UNKNOWN_CLASSIFICATION);
    entry.push_str(&format!("**{classification}**\n\n"));

    match issue.body.as_deref().map(str::trim) {
        Some(body) if !body.is_empty() => entry.push_str(&format!("{body}\n")),
        _ => entry.push_str("No description.\n"),
    }

    if !issue.assignees.is_empty() {
        let leads: Vec<String> = issue
            .assignees
            .iter()
            .map(|a| {
                format!(
                    "![{}]({}) [{}]({})",
                    a.login,
                    sized_avatar(&a.avatar_url),
                    a.login,
                    a.html_url
                )
            })
            .collect();
        entry.push_str(&format!("\nDiscussion led by: {}\n", leads.join(", ")));
    }

    entry
}

/// Append the fixed size query parameter with the right separator.
fn sized_avatar(url: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}s={AVATAR_SIZE}")
}
