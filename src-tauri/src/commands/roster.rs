use tauri::AppHandle;

use crate::controller::RosterBook;
use crate::store::TauriRosterStore;

/// Saved roster text, or None when nothing is saved or the store is unreadable.
#[tauri::command]
pub async fn load_roster(app: AppHandle) -> Result<Option<String>, String> {
    let store = TauriRosterStore::new(app);
    Ok(RosterBook::new(&store).load().await)
}

#[tauri::command]
pub async fn save_roster(app: AppHandle, roster: String) -> Result<(), String> {
    let store = TauriRosterStore::new(app);
    Ok(RosterBook::new(&store).save(&roster).await?)
}
