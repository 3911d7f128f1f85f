use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::info;

use super::agent::SnapshotSource;
use super::detectors::{Detector, PeoplePanelDetector};
use super::snapshot::PageSnapshot;
use super::ScraperConfig;

/// Default period between background scans.
pub const DEFAULT_MONITOR_INTERVAL: Duration = Duration::from_secs(2);

/// Periodically re-reads the people panel and logs when the head count
/// changes. Purely observational: the last count lives here and nowhere else.
pub struct ParticipantMonitor<S> {
    source: S,
    detector: PeoplePanelDetector,
    last_count: usize,
}

impl<S: SnapshotSource> ParticipantMonitor<S> {
    pub fn new(source: S, config: &ScraperConfig) -> Self {
        Self {
            source,
            detector: PeoplePanelDetector::new(config),
            last_count: 0,
        }
    }

    /// Scan once. Returns the new list when the count changed.
    pub fn tick(&mut self) -> Option<Vec<String>> {
        let html = self.source.snapshot()?;
        let names = {
            let page = PageSnapshot::parse(&html);
            self.detector.detect(&page)
        };

        if names.len() == self.last_count {
            return None;
        }
        self.last_count = names.len();
        info!("Participant list updated ({}): {:?}", names.len(), names);
        Some(names)
    }

    /// Scan every `period` until the task is aborted.
    pub async fn run(mut self, period: Duration) {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            self.tick();
        }
    }
}
