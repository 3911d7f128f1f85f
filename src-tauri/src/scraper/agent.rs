use tracing::{debug, info};

use super::{ParticipantScraper, ScraperConfig};
use crate::protocol::{QueryRequest, QueryResponse, RequestKind};

/// Supplies the latest HTML of a meeting page.
pub trait SnapshotSource: Send + Sync {
    /// None until the page has reported its DOM at least once.
    fn snapshot(&self) -> Option<String>;
}

/// The page-side end of the query channel.
pub struct ScraperAgent<S> {
    source: S,
    scraper: ParticipantScraper,
}

impl<S: SnapshotSource> ScraperAgent<S> {
    pub fn new(source: S, config: &ScraperConfig) -> Self {
        Self {
            source,
            scraper: ParticipantScraper::new(config),
        }
    }

    /// Answer a request. Attendee queries always get a response (possibly
    /// with no names); unrecognized actions are declined with `None`.
    pub async fn respond(&self, request: &QueryRequest) -> Option<QueryResponse> {
        let Some(kind) = request.kind() else {
            debug!("Ignoring unrecognized action '{}'", request.action);
            return None;
        };

        match kind {
            RequestKind::GetAttendees => {
                let html = self.source.snapshot().unwrap_or_default();
                let attendees = self.scraper.detect_in_html(&html);
                info!("Answering attendee query with {} names", attendees.len());
                Some(QueryResponse { attendees })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPage(Option<&'static str>);

    impl SnapshotSource for FixedPage {
        fn snapshot(&self) -> Option<String> {
            self.0.map(|s| s.to_string())
        }
    }

    #[tokio::test]
    async fn test_attendee_query_answered() {
        let agent = ScraperAgent::new(
            FixedPage(Some(r#"<div data-tab-id="2"><span>Alice Kim</span></div>"#)),
            &ScraperConfig::default(),
        );
        let response = agent.respond(&QueryRequest::get_attendees()).await;
        assert_eq!(
            response,
            Some(QueryResponse {
                attendees: vec!["Alice Kim".to_string()]
            })
        );
    }

    #[tokio::test]
    async fn test_empty_page_still_responds() {
        let agent = ScraperAgent::new(FixedPage(None), &ScraperConfig::default());
        let response = agent.respond(&QueryRequest::get_attendees()).await;
        assert_eq!(response, Some(QueryResponse::default()));
    }

    #[tokio::test]
    async fn test_unknown_action_declined() {
        let agent = ScraperAgent::new(
            FixedPage(Some("<div class=\"uGOf1d\">Kim</div>")),
            &ScraperConfig::default(),
        );
        let request = QueryRequest {
            action: "muteAll".to_string(),
        };
        assert_eq!(agent.respond(&request).await, None);
    }
}
