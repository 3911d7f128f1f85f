pub mod agent;
pub mod detectors;
pub mod monitor;
pub mod snapshot;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::detectors::{all_detectors, Detector};
use self::snapshot::PageSnapshot;

/// Default localized people-panel label (Korean UI).
pub const DEFAULT_LOCALIZED_PANEL_LABEL: &str = "참가자";
/// English people-panel label, always tried last.
pub const DEFAULT_ENGLISH_PANEL_LABEL: &str = "People";

/// Settings that shape how participant names are located on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// People-panel aria label in the meeting UI's configured language.
    pub localized_panel_label: String,
    pub english_panel_label: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            localized_panel_label: DEFAULT_LOCALIZED_PANEL_LABEL.to_string(),
            english_panel_label: DEFAULT_ENGLISH_PANEL_LABEL.to_string(),
        }
    }
}

/// Runs the detector strategies in priority order.
pub struct ParticipantScraper {
    detectors: Vec<Box<dyn Detector>>,
}

impl ParticipantScraper {
    pub fn new(config: &ScraperConfig) -> Self {
        Self {
            detectors: all_detectors(config),
        }
    }

    /// Names from the first detector that finds any, or an empty list.
    pub fn detect_participants(&self, page: &PageSnapshot) -> Vec<String> {
        for detector in &self.detectors {
            let names = detector.detect(page);
            if !names.is_empty() {
                debug!("Detector '{}' found {} participants", detector.name(), names.len());
                return names;
            }
            debug!("Detector '{}' found no participants", detector.name());
        }
        Vec::new()
    }

    /// Parse `html` and detect participants in one step.
    pub fn detect_in_html(&self, html: &str) -> Vec<String> {
        let page = PageSnapshot::parse(html);
        self.detect_participants(&page)
    }
}
