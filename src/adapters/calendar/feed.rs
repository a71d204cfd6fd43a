//! HTTP calendar feed adapter. Implements CalendarFeedPort with reqwest.

use crate::adapters::calendar::parser::parse_feed;
use crate::domain::{CalendarEvent, DomainError};
use crate::ports::CalendarFeedPort;
use reqwest::Client;
use tracing::debug;

/// Fetches the feed from a fixed URL and parses it into events.
pub struct HttpCalendarFeed {
    client: Client,
    url: String,
}

impl HttpCalendarFeed {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl CalendarFeedPort for HttpCalendarFeed {
    async fn fetch_events(&self) -> Result<Vec<CalendarEvent>, DomainError> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::Remote(format!("calendar feed request failed: {e}")))?;

        if !res.status().is_success() {
            return Err(DomainError::Remote(format!(
                "calendar feed returned {}",
                res.status()
            )));
        }

        let body = res
            .text()
            .await
            .map_err(|e| DomainError::Remote(format!("calendar feed body read failed: {e}")))?;
        debug!(bytes = body.len(), "fetched calendar feed");
        parse_feed(&body)
    }
}
