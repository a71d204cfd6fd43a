//! GitHub adapter. Implements IssueTrackerPort via the REST issues API.

use crate::domain::{DomainError, Issue};
use crate::ports::IssueTrackerPort;
use reqwest::Client;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use tracing::debug;

const API_ACCEPT: &str = "application/vnd.github+json";
const AGENT: &str = concat!("gavel/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API adapter. Tracker ids are repository names under `owner`.
///
/// Requires a personal access token with read access to the repositories.
pub struct GithubTracker {
    client: Client,
    api_base: String,
    owner: String,
    token: String,
}

impl GithubTracker {
    /// # Arguments
    /// * `api_base` - API root, e.g. `https://api.github.com`
    /// * `owner` - organization owning the tracker repositories
    /// * `token` - personal access token
    pub fn new(api_base: String, owner: String, token: String) -> Self {
        Self {
            client: Client::new(),
            api_base,
            owner,
            token,
        }
    }
}

#[async_trait::async_trait]
impl IssueTrackerPort for GithubTracker {
    async fn issues_with_labels(
        &self,
        tracker_id: &str,
        labels: &[&str],
    ) -> Result<Vec<Issue>, DomainError> {
        let url = format!(
            "{}/repos/{}/{}/issues",
            self.api_base, self.owner, tracker_id
        );

        let res = self
            .client
            .get(&url)
            .query(&[
                ("labels", labels.join(",")),
                ("state", "open".to_string()),
                ("per_page", "100".to_string()),
            ])
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, API_ACCEPT)
            .header(USER_AGENT, AGENT)
            .send()
            .await
            .map_err(|e| DomainError::Remote(format!("Request failed: {e}")))?;

        match res.status() {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(DomainError::Auth(format!(
                    "tracker '{tracker_id}' rejected the token ({})",
                    res.status()
                )));
            }
            s => {
                let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
                return Err(DomainError::Remote(format!(
                    "tracker '{tracker_id}' API error {s}: {text}"
                )));
            }
        }

        let issues: Vec<Issue> = res
            .json()
            .await
            .map_err(|e| DomainError::Remote(format!("tracker '{tracker_id}' bad payload: {e}")))?;
        debug!(tracker = tracker_id, count = issues.len(), "fetched issues");
        Ok(issues)
    }
}
