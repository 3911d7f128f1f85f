use std::time::Duration;

use tauri::{AppHandle, Runtime};
use tauri_plugin_store::StoreExt;
use tracing::warn;

use crate::scraper::monitor::DEFAULT_MONITOR_INTERVAL;
use crate::scraper::ScraperConfig;

/// Store file holding the roster and user preferences.
pub const PREFERENCES_STORE: &str = "preferences.json";
/// Key of the raw roster text.
pub const ROSTER_KEY: &str = "teamMembers";
pub const DEFAULT_MEETING_HOST: &str = "meet.google.com";

/// User-editable settings kept in the preferences store. The roster has its
/// own commands and is not one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    MeetingHost,
    PanelLabel,
    MonitorIntervalSecs,
}

impl Preference {
    pub const ALL: [Preference; 3] = [
        Preference::MeetingHost,
        Preference::PanelLabel,
        Preference::MonitorIntervalSecs,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Preference::MeetingHost => "meeting_host",
            Preference::PanelLabel => "panel_label",
            Preference::MonitorIntervalSecs => "monitor_interval_secs",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pref| pref.key() == key)
    }

    /// Canonical form of a value about to be stored. An empty result clears
    /// the preference back to its default.
    pub fn normalize(self, value: &str) -> Result<String, String> {
        let value = value.trim();
        match self {
            Preference::MeetingHost => Ok(value.to_lowercase()),
            Preference::PanelLabel => Ok(value.to_string()),
            Preference::MonitorIntervalSecs => match value.parse::<u64>() {
                _ if value.is_empty() => Ok(String::new()),
                Ok(secs) if secs > 0 => Ok(secs.to_string()),
                _ => Err(format!("'{}' is not a positive number of seconds", value)),
            },
        }
    }
}

/// Runtime settings, read from preferences with defaults for anything unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Host a tab's URL must have for an attendance check to run.
    pub meeting_host: String,
    pub scraper: ScraperConfig,
    pub monitor_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            meeting_host: DEFAULT_MEETING_HOST.to_string(),
            scraper: ScraperConfig::default(),
            monitor_interval: DEFAULT_MONITOR_INTERVAL,
        }
    }
}

impl AppConfig {
    /// Build from a preference lookup. Blank or unparsable values fall back
    /// to the defaults.
    pub fn from_preferences(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let value = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(host) = value(Preference::MeetingHost.key()) {
            config.meeting_host = host.to_lowercase();
        }
        if let Some(label) = value(Preference::PanelLabel.key()) {
            config.scraper.localized_panel_label = label;
        }
        if let Some(secs) = value(Preference::MonitorIntervalSecs.key()) {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config.monitor_interval = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid monitor_interval_secs '{}'", secs),
            }
        }
        config
    }

    /// Read the current preferences from the app's store.
    pub fn load<R: Runtime>(app: &AppHandle<R>) -> Self {
        match app.store(PREFERENCES_STORE) {
            Ok(store) => Self::from_preferences(|key| {
                store.get(key).and_then(|v| v.as_str().map(|s| s.to_string()))
            }),
            Err(e) => {
                warn!("Failed to open store, using default config: {}", e);
                Self::default()
            }
        }
    }
}
