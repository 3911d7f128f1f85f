use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::config::{Preference, PREFERENCES_STORE};

fn preference(key: &str) -> Result<Preference, String> {
    Preference::from_key(key).ok_or_else(|| {
        warn!("Rejected unknown preference key: {}", key);
        format!("Unknown preference: {}", key)
    })
}

/// Stored value of a settings-page preference.
#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    let pref = preference(key)?;
    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    Ok(store
        .get(pref.key())
        .and_then(|v| v.as_str().map(|s| s.to_string())))
}

/// Validate and store a settings-page preference. Takes effect on the next
/// check or newly opened meeting.
#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    let pref = preference(key)?;
    let value = pref.normalize(value)?;
    info!("Setting {} = {:?}", pref.key(), value);

    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    store.set(pref.key(), serde_json::json!(value));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })
}
