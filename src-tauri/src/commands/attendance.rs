use tauri::{AppHandle, State};
use tracing::info;

use crate::attendance::AttendanceReport;
use crate::browser::MeetingTabs;
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::store::TauriRosterStore;

/// Compare the active meeting tab's participants against `roster`.
/// Preferences are re-read on every call so settings changes apply at once.
#[tauri::command]
pub async fn run_attendance_check(
    app: AppHandle,
    tabs: State<'_, MeetingTabs>,
    roster: String,
) -> Result<AttendanceReport, String> {
    info!("run_attendance_check called");
    let config = AppConfig::load(&app);
    let store = TauriRosterStore::new(app.clone());
    let messenger = tabs.messenger(config.scraper.clone());
    let controller = Controller::new(&store, tabs.inner(), &messenger, &config.meeting_host);
    Ok(controller.run_attendance_check(&roster).await?)
}
