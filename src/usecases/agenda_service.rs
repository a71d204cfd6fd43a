//! Agenda generation run: calendar branch and issue branch in parallel,
//! then render. Any branch error aborts the run; no partial agenda.

use crate::domain::{DomainError, MeetingWindow};
use crate::ports::{CalendarFeedPort, IssueTrackerPort};
use crate::usecases::{agenda_renderer, meeting_resolver, IssueAggregator};
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::info;

pub struct AgendaService {
    calendar: Arc<dyn CalendarFeedPort>,
    aggregator: IssueAggregator,
}

impl AgendaService {
    pub fn new(calendar: Arc<dyn CalendarFeedPort>, tracker: Arc<dyn IssueTrackerPort>) -> Self {
        Self {
            calendar,
            aggregator: IssueAggregator::new(tracker),
        }
    }

    /// Generate the agenda document for the next meeting after `reference`.
    ///
    /// The two upstream fetches are independent and run concurrently; both
    /// must succeed before anything is rendered.
    pub async fn generate(&self, reference: NaiveDateTime) -> Result<String, DomainError> {
        let (window, groups) =
            tokio::try_join!(self.resolve_window(reference), self.aggregator.aggregate())?;
        match &window {
            Some(w) => info!(days = w.days.len(), "resolved next meeting"),
            None => info!("no upcoming meeting in the feed"),
        }
        Ok(agenda_renderer::render(window.as_ref(), &groups))
    }

    async fn resolve_window(
        &self,
        reference: NaiveDateTime,
    ) -> Result<Option<MeetingWindow>, DomainError> {
        let events = self.calendar.fetch_events().await?;
        Ok(meeting_resolver::resolve(&events, reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalendarEvent, Issue};
    use chrono::NaiveDate;

    struct FakeCalendar {
        events: Vec<CalendarEvent>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl CalendarFeedPort for FakeCalendar {
        async fn fetch_events(&self) -> Result<Vec<CalendarEvent>, DomainError> {
            if self.fail {
                return Err(DomainError::Remote("feed unavailable".into()));
            }
            Ok(self.events.clone())
        }
    }

    struct EmptyTracker;

    #[async_trait::async_trait]
    impl IssueTrackerPort for EmptyTracker {
        async fn issues_with_labels(
            &self,
            _tracker_id: &str,
            _labels: &[&str],
        ) -> Result<Vec<Issue>, DomainError> {
            Ok(vec![])
        }
    }

    fn stamp(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_with_upcoming_meeting() {
        let calendar = FakeCalendar {
            events: vec![CalendarEvent {
                summary: "Board of Directors Meeting".to_string(),
                description: None,
                start: stamp(2099, 12, 31, 18),
                end: stamp(2099, 12, 31, 20),
            }],
            fail: false,
        };
        let service = AgendaService::new(Arc::new(calendar), Arc::new(EmptyTracker));
        let doc = service.generate(stamp(2099, 1, 1, 9)).await.unwrap();
        assert!(doc.contains("Thursday, December 31, 2099 18:00 - 20:00 UTC"));
    }

    #[tokio::test]
    async fn test_generate_without_meeting_still_renders() {
        let calendar = FakeCalendar {
            events: vec![],
            fail: false,
        };
        let service = AgendaService::new(Arc::new(calendar), Arc::new(EmptyTracker));
        let doc = service.generate(stamp(2099, 1, 1, 9)).await.unwrap();
        assert!(doc.contains("No upcoming meeting found"));
    }

    #[tokio::test]
    async fn test_calendar_failure_aborts_run() {
        let calendar = FakeCalendar {
            events: vec![],
            fail: true,
        };
        let service = AgendaService::new(Arc::new(calendar), Arc::new(EmptyTracker));
        let err = service.generate(stamp(2099, 1, 1, 9)).await.unwrap_err();
        assert!(matches!(err, DomainError::Remote(_)));
    }
}
