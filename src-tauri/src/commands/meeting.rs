use std::sync::atomic::{AtomicU32, Ordering};

use tauri::{AppHandle, State, WebviewUrl, WebviewWindow, WebviewWindowBuilder, WindowEvent};
use tracing::{info, warn};
use url::Url;

use crate::browser::MeetingTabs;
use crate::config::AppConfig;
use crate::scraper::monitor::ParticipantMonitor;

/// Window labels of meeting tabs start with this prefix.
pub const MEETING_LABEL_PREFIX: &str = "meeting-";

/// Injected into every meeting window. Pushes the page's DOM to the backend
/// so the scraper can read it.
const PAGE_BRIDGE_SCRIPT: &str = r#"
(function () {
  if (window.top !== window) return;
  function report() {
    var internals = window.__TAURI_INTERNALS__;
    if (!internals || !document.documentElement) return;
    internals
      .invoke('report_page_snapshot', {
        url: location.href,
        html: document.documentElement.outerHTML,
      })
      .catch(function () {});
  }
  document.addEventListener('DOMContentLoaded', report);
  setInterval(report, 1000);
})();
"#;

static NEXT_TAB: AtomicU32 = AtomicU32::new(1);

/// Open `url` in a new meeting window and start watching its participants.
/// Returns the new tab's id.
#[tauri::command]
pub async fn open_meeting(
    app: AppHandle,
    tabs: State<'_, MeetingTabs>,
    url: String,
) -> Result<String, String> {
    let parsed = Url::parse(url.trim()).map_err(|e| format!("Invalid meeting URL: {}", e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("Unsupported URL scheme: {}", parsed.scheme()));
    }

    let label = format!("{}{}", MEETING_LABEL_PREFIX, NEXT_TAB.fetch_add(1, Ordering::SeqCst));
    info!("Opening meeting window '{}' for {}", label, parsed);

    let window = WebviewWindowBuilder::new(&app, &label, WebviewUrl::External(parsed.clone()))
        .title("Meeting")
        .inner_size(1280.0, 800.0)
        .initialization_script(PAGE_BRIDGE_SCRIPT)
        .build()
        .map_err(|e| {
            warn!("Failed to open meeting window: {}", e);
            format!("Failed to open meeting window: {}", e)
        })?;

    let tabs = tabs.inner().clone();
    tabs.register(&label, parsed.as_str());

    let events = tabs.clone();
    let event_label = label.clone();
    window.on_window_event(move |event| match event {
        WindowEvent::Focused(true) => events.focus(&event_label),
        WindowEvent::Destroyed => events.remove(&event_label),
        _ => {}
    });

    let config = AppConfig::load(&app);
    let monitor = ParticipantMonitor::new(tabs.source(&label), &config.scraper);
    let handle = tauri::async_runtime::spawn(monitor.run(config.monitor_interval));
    tabs.attach_monitor(&label, handle);

    Ok(label)
}

/// Called by the page bridge script with the current DOM.
#[tauri::command]
pub fn report_page_snapshot(
    window: WebviewWindow,
    tabs: State<'_, MeetingTabs>,
    url: String,
    html: String,
) -> Result<(), String> {
    if !tabs.report_snapshot(window.label(), &url, html) {
        return Err(format!("'{}' is not a meeting tab", window.label()));
    }
    Ok(())
}
