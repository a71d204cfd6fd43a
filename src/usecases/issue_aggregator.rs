//! Issue aggregation: one labeled query per configured tracker, grouped by
//! tracker id. All-or-nothing; a single failed tracker aborts the run.

use crate::domain::{DomainError, IssueGroups};
use crate::ports::IssueTrackerPort;
use crate::shared::config::{AGENDA_LABELS, TRACKERS};
use std::sync::Arc;
use tracing::info;

pub struct IssueAggregator {
    tracker: Arc<dyn IssueTrackerPort>,
}

impl IssueAggregator {
    pub fn new(tracker: Arc<dyn IssueTrackerPort>) -> Self {
        Self { tracker }
    }

    /// Query every configured tracker for issues carrying the agenda label
    /// pair. Per-tracker order is preserved; no retries, no partial results.
    pub async fn aggregate(&self) -> Result<IssueGroups, DomainError> {
        let mut groups = IssueGroups::new();
        for section in TRACKERS {
            let issues = self
                .tracker
                .issues_with_labels(section.id, &AGENDA_LABELS)
                .await?;
            info!(tracker = section.id, count = issues.len(), "aggregated issues");
            groups.insert(section.id.to_string(), issues);
        }
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Issue;

    /// Fake tracker port: canned per-tracker responses, records queries.
    struct FakeTracker {
        fail_on: Option<&'static str>,
        auth_fail: bool,
    }

    fn issue(title: &str, number: u64) -> Issue {
        serde_json::from_value(serde_json::json!({
            "title": title,
            "number": number,
            "body": null,
            "html_url": format!("https://example.org/{number}"),
            "labels": [],
            "assignees": [],
        }))
        .unwrap()
    }

    #[async_trait::async_trait]
    impl IssueTrackerPort for FakeTracker {
        async fn issues_with_labels(
            &self,
            tracker_id: &str,
            labels: &[&str],
        ) -> Result<Vec<Issue>, DomainError> {
            assert_eq!(labels, &AGENDA_LABELS[..]);
            if self.auth_fail {
                return Err(DomainError::Auth("bad token".into()));
            }
            if self.fail_on == Some(tracker_id) {
                return Err(DomainError::Remote(format!("{tracker_id} is down")));
            }
            match tracker_id {
                "finance" => Ok(vec![issue("Budget review", 12), issue("Audit firm", 13)]),
                _ => Ok(vec![]),
            }
        }
    }

    #[tokio::test]
    async fn test_aggregate_groups_by_tracker_in_returned_order() {
        let aggregator = IssueAggregator::new(Arc::new(FakeTracker {
            fail_on: None,
            auth_fail: false,
        }));
        let groups = aggregator.aggregate().await.unwrap();
        assert_eq!(groups.len(), TRACKERS.len());
        let finance = &groups["finance"];
        assert_eq!(finance.len(), 2);
        assert_eq!(finance[0].number, 12);
        assert_eq!(finance[1].number, 13);
        assert!(groups["board"].is_empty());
    }

    #[tokio::test]
    async fn test_one_failed_tracker_aborts_aggregation() {
        let aggregator = IssueAggregator::new(Arc::new(FakeTracker {
            fail_on: Some("governance"),
            auth_fail: false,
        }));
        let err = aggregator.aggregate().await.unwrap_err();
        assert!(matches!(err, DomainError::Remote(_)));
    }

    #[tokio::test]
    async fn test_auth_failure_propagates() {
        let aggregator = IssueAggregator::new(Arc::new(FakeTracker {
            fail_on: None,
            auth_fail: true,
        }));
        let err = aggregator.aggregate().await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(_)));
    }
}
