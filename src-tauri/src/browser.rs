//! Meeting tabs: the windows showing a meeting page, the snapshots their page
//! script reports, and the query channel into each tab's scraper.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde::Serialize;
use tauri::async_runtime::JoinHandle;
use tracing::{debug, info};

use crate::protocol::{QueryRequest, QueryResponse};
use crate::scraper::agent::{ScraperAgent, SnapshotSource};
use crate::scraper::ScraperConfig;

/// The tab an attendance check runs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveTab {
    /// Opaque handle used to address messages to the tab.
    pub id: String,
    pub url: Option<String>,
}

/// Finds the tab the user is looking at.
#[async_trait]
pub trait TabLocator: Send + Sync {
    async fn active_tab(&self) -> anyhow::Result<Option<ActiveTab>>;
}

/// Delivers a request to a tab's scraper. `Ok(None)` means the channel
/// closed without a response.
#[async_trait]
pub trait TabMessenger: Send + Sync {
    async fn send(&self, tab_id: &str, request: &QueryRequest)
        -> anyhow::Result<Option<QueryResponse>>;
}

#[derive(Default)]
struct TabEntry {
    url: String,
    snapshot: Option<String>,
    monitor: Option<JoinHandle<()>>,
}

/// Registry of open meeting windows, keyed by window label.
#[derive(Clone, Default)]
pub struct MeetingTabs {
    tabs: Arc<Mutex<HashMap<String, TabEntry>>>,
    focused: Arc<Mutex<Option<String>>>,
}

impl MeetingTabs {
    pub fn new() -> Self {
        Self::default()
    }

    fn tabs(&self) -> MutexGuard<'_, HashMap<String, TabEntry>> {
        self.tabs.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn focused(&self) -> MutexGuard<'_, Option<String>> {
        self.focused.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Track a newly opened meeting window and make it the active tab.
    pub fn register(&self, label: &str, url: &str) {
        info!("Registered meeting tab '{}' at {}", label, url);
        self.tabs().insert(
            label.to_string(),
            TabEntry {
                url: url.to_string(),
                ..TabEntry::default()
            },
        );
        self.focus(label);
    }

    /// Keep the background monitor's handle so it stops with the tab.
    pub fn attach_monitor(&self, label: &str, handle: JoinHandle<()>) {
        match self.tabs().get_mut(label) {
            Some(entry) => {
                if let Some(old) = entry.monitor.replace(handle) {
                    old.abort();
                }
            }
            None => handle.abort(),
        }
    }

    /// Store the latest DOM of a tab. Returns false for unknown tabs.
    pub fn report_snapshot(&self, label: &str, url: &str, html: String) -> bool {
        let mut tabs = self.tabs();
        let Some(entry) = tabs.get_mut(label) else {
            debug!("Dropping snapshot from unknown tab '{}'", label);
            return false;
        };
        if entry.url != url {
            debug!("Tab '{}' navigated to {}", label, url);
            entry.url = url.to_string();
        }
        entry.snapshot = Some(html);
        true
    }

    /// Mark a meeting tab as the one the user last looked at.
    pub fn focus(&self, label: &str) {
        if self.tabs().contains_key(label) {
            *self.focused() = Some(label.to_string());
        }
    }

    /// Forget a closed tab and stop its monitor.
    pub fn remove(&self, label: &str) {
        if let Some(entry) = self.tabs().remove(label) {
            if let Some(monitor) = entry.monitor {
                monitor.abort();
            }
            info!("Closed meeting tab '{}'", label);
        }
        let mut focused = self.focused();
        if focused.as_deref() == Some(label) {
            *focused = None;
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.tabs().contains_key(label)
    }

    fn has_snapshot(&self, label: &str) -> bool {
        self.tabs()
            .get(label)
            .map_or(false, |entry| entry.snapshot.is_some())
    }

    /// Snapshot feed of one tab.
    pub fn source(&self, label: &str) -> TabSnapshotSource {
        TabSnapshotSource {
            tabs: self.clone(),
            label: label.to_string(),
        }
    }

    /// Query channel using the given scraper settings.
    pub fn messenger(&self, config: ScraperConfig) -> TabRouter {
        TabRouter {
            tabs: self.clone(),
            config,
        }
    }
}

#[async_trait]
impl TabLocator for MeetingTabs {
    async fn active_tab(&self) -> anyhow::Result<Option<ActiveTab>> {
        let Some(label) = self.focused().clone() else {
            return Ok(None);
        };
        let tabs = self.tabs();
        let tab = tabs.get(&label).map(|entry| ActiveTab {
            id: label.clone(),
            url: Some(entry.url.clone()),
        });
        Ok(tab)
    }
}

/// Reads the latest snapshot of a single tab.
pub struct TabSnapshotSource {
    tabs: MeetingTabs,
    label: String,
}

impl SnapshotSource for TabSnapshotSource {
    fn snapshot(&self) -> Option<String> {
        self.tabs
            .tabs()
            .get(&self.label)
            .and_then(|entry| entry.snapshot.clone())
    }
}

/// Routes queries to the scraper of the addressed tab.
pub struct TabRouter {
    tabs: MeetingTabs,
    config: ScraperConfig,
}

#[async_trait]
impl TabMessenger for TabRouter {
    async fn send(
        &self,
        tab_id: &str,
        request: &QueryRequest,
    ) -> anyhow::Result<Option<QueryResponse>> {
        // No snapshot yet means the page script never ran in that tab
        if !self.tabs.has_snapshot(tab_id) {
            debug!("Tab '{}' has no page script attached", tab_id);
            return Ok(None);
        }
        let agent = ScraperAgent::new(self.tabs.source(tab_id), &self.config);
        Ok(agent.respond(request).await)
    }
}
