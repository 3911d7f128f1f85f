use std::sync::Mutex;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use tauri::{AppHandle, Runtime};
use tauri_plugin_store::StoreExt;

use crate::config::{PREFERENCES_STORE, ROSTER_KEY};

/// Key-value slot holding the raw roster text.
#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<String>>;
    async fn save(&self, text: &str) -> anyhow::Result<()>;
}

/// Roster slot in the app's `preferences.json` store.
pub struct TauriRosterStore<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriRosterStore<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

#[async_trait]
impl<R: Runtime> RosterStore for TauriRosterStore<R> {
    async fn load(&self) -> anyhow::Result<Option<String>> {
        let store = self
            .app
            .store(PREFERENCES_STORE)
            .context("Failed to open preferences store")?;
        Ok(store
            .get(ROSTER_KEY)
            .and_then(|v| v.as_str().map(|s| s.to_string())))
    }

    async fn save(&self, text: &str) -> anyhow::Result<()> {
        let store = self
            .app
            .store(PREFERENCES_STORE)
            .context("Failed to open preferences store")?;
        store.set(ROSTER_KEY, serde_json::json!(text));
        store.save().context("Failed to write preferences store")
    }
}

/// In-process roster slot, for tests and previews.
#[derive(Default)]
pub struct MemoryRosterStore {
    value: Mutex<Option<String>>,
    fail: bool,
}

impl MemoryRosterStore {
    pub fn with_value(text: &str) -> Self {
        Self {
            value: Mutex::new(Some(text.to_string())),
            fail: false,
        }
    }

    /// A store whose every operation fails.
    pub fn failing() -> Self {
        Self {
            value: Mutex::new(None),
            fail: true,
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }
}

#[async_trait]
impl RosterStore for MemoryRosterStore {
    async fn load(&self) -> anyhow::Result<Option<String>> {
        if self.fail {
            return Err(anyhow!("store unavailable"));
        }
        Ok(self.value())
    }

    async fn save(&self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            return Err(anyhow!("store unavailable"));
        }
        let mut value = self
            .value
            .lock()
            .map_err(|_| anyhow!("roster lock poisoned"))?;
        *value = Some(text.to_string());
        Ok(())
    }
}
