//! Messages exchanged between the panel-side controller and the page-side scraper.

use serde::{Deserialize, Serialize};

/// Action tag of the attendee query.
pub const GET_ATTENDEES: &str = "getAttendees";

/// A request addressed to a meeting tab's scraper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub action: String,
}

impl QueryRequest {
    pub fn get_attendees() -> Self {
        Self {
            action: GET_ATTENDEES.to_string(),
        }
    }

    /// The request kind, or None for actions the scraper does not handle.
    pub fn kind(&self) -> Option<RequestKind> {
        match self.action.as_str() {
            GET_ATTENDEES => Some(RequestKind::GetAttendees),
            _ => None,
        }
    }
}

/// Request kinds the scraper answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    GetAttendees,
}

/// The scraper's answer to an attendee query. `attendees` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub attendees: Vec<String>,
}
