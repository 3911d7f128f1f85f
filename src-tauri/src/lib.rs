pub mod attendance;
pub mod browser;
mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod protocol;
pub mod roster;
pub mod scraper;
pub mod store;

pub use attendance::AttendanceReport;
pub use error::AttendanceError;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .manage(browser::MeetingTabs::new())
        .invoke_handler(tauri::generate_handler![
            commands::config::get_preference,
            commands::config::set_preference,
            commands::roster::load_roster,
            commands::roster::save_roster,
            commands::attendance::run_attendance_check,
            commands::meeting::open_meeting,
            commands::meeting::report_page_snapshot,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
