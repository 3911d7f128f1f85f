use tracing::{error, info, warn};
use url::Url;

use crate::attendance::AttendanceReport;
use crate::browser::{TabLocator, TabMessenger};
use crate::error::AttendanceError;
use crate::protocol::QueryRequest;
use crate::roster::parse_roster;
use crate::store::RosterStore;

/// Saves and restores the raw roster text.
#[derive(Clone, Copy)]
pub struct RosterBook<'a> {
    store: &'a dyn RosterStore,
}

impl<'a> RosterBook<'a> {
    pub fn new(store: &'a dyn RosterStore) -> Self {
        Self { store }
    }

    /// Best-effort read of the saved roster text.
    pub async fn load(&self) -> Option<String> {
        match self.store.load().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to load team roster: {:#}", e);
                None
            }
        }
    }

    /// Persist the trimmed roster text as-is.
    pub async fn save(&self, text: &str) -> Result<(), AttendanceError> {
        let text = text.trim();
        self.store.save(text).await.map_err(|e| {
            error!("Failed to save team roster: {:#}", e);
            AttendanceError::Persistence(e)
        })?;
        info!("Saved team roster ({} bytes)", text.len());
        Ok(())
    }
}

/// Drives roster persistence and attendance checks over its collaborators.
pub struct Controller<'a> {
    store: &'a dyn RosterStore,
    locator: &'a dyn TabLocator,
    messenger: &'a dyn TabMessenger,
    meeting_host: String,
}

impl<'a> Controller<'a> {
    pub fn new(
        store: &'a dyn RosterStore,
        locator: &'a dyn TabLocator,
        messenger: &'a dyn TabMessenger,
        meeting_host: &str,
    ) -> Self {
        Self {
            store,
            locator,
            messenger,
            meeting_host: meeting_host.to_string(),
        }
    }

    pub async fn load_roster(&self) -> Option<String> {
        RosterBook::new(self.store).load().await
    }

    pub async fn save_roster(&self, text: &str) -> Result<(), AttendanceError> {
        RosterBook::new(self.store).save(text).await
    }

    /// Query the active meeting tab and compare it against the roster.
    pub async fn run_attendance_check(
        &self,
        roster_text: &str,
    ) -> Result<AttendanceReport, AttendanceError> {
        let roster_text = roster_text.trim();
        if roster_text.is_empty() {
            return Err(AttendanceError::EmptyRoster);
        }
        let roster = parse_roster(roster_text);

        let tab = self.locator.active_tab().await.map_err(unexpected)?;
        let tab = match tab {
            Some(tab) if tab.url.as_deref().map_or(false, |u| self.is_meeting_url(u)) => tab,
            other => {
                info!("Active tab is not a meeting page: {:?}", other);
                return Err(AttendanceError::WrongPage {
                    host: self.meeting_host.clone(),
                });
            }
        };

        let response = self
            .messenger
            .send(&tab.id, &QueryRequest::get_attendees())
            .await
            .map_err(unexpected)?;
        let detected = match response {
            Some(response) if !response.attendees.is_empty() => response.attendees,
            _ => {
                warn!("No participant list from tab '{}'", tab.id);
                return Err(AttendanceError::NoResponse);
            }
        };

        let report = AttendanceReport::compute(roster, detected);
        info!(
            "Attendance check: {}/{} present ({}%), {} detected",
            report.present.len(),
            report.roster.len(),
            report.rate,
            report.detected.len()
        );
        Ok(report)
    }

    /// True when `url` is served from the configured meeting host.
    pub fn is_meeting_url(&self, url: &str) -> bool {
        Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.eq_ignore_ascii_case(&self.meeting_host)))
            .unwrap_or(false)
    }
}

fn unexpected(e: anyhow::Error) -> AttendanceError {
    error!("Attendance check failed: {:#}", e);
    AttendanceError::Unexpected(e)
}
