use std::path::PathBuf;

use meet_attendance_tauri::browser::MeetingTabs;
use meet_attendance_tauri::controller::Controller;
use meet_attendance_tauri::scraper::ScraperConfig;
use meet_attendance_tauri::store::MemoryRosterStore;
use meet_attendance_tauri::AttendanceError;

const MEET_URL: &str = "https://meet.google.com/abc-defg-hij";

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}

fn meeting_with(page: &str) -> MeetingTabs {
    let tabs = MeetingTabs::new();
    tabs.register("meeting-1", MEET_URL);
    tabs.report_snapshot("meeting-1", MEET_URL, fixture(page));
    tabs
}

#[tokio::test]
async fn test_check_against_people_panel() {
    let tabs = meeting_with("people_panel_en.html");
    let messenger = tabs.messenger(ScraperConfig::default());
    let store = MemoryRosterStore::with_value("Alice Kim\nBob Lee\nDana Cho");
    let controller = Controller::new(&store, &tabs, &messenger, "meet.google.com");

    let roster = controller.load_roster().await.unwrap();
    let report = controller.run_attendance_check(&roster).await.unwrap();

    assert_eq!(report.roster, vec!["Alice Kim", "Bob Lee", "Dana Cho"]);
    assert_eq!(report.present, vec!["Alice Kim", "Dana Cho"]);
    assert_eq!(report.absent, vec!["Bob Lee"]);
    assert_eq!(report.rate, 67);
}

#[tokio::test]
async fn test_check_against_tiles_only_page() {
    let tabs = meeting_with("tiles_only.html");
    let messenger = tabs.messenger(ScraperConfig::default());
    let store = MemoryRosterStore::default();
    let controller = Controller::new(&store, &tabs, &messenger, "meet.google.com");

    let report = controller
        .run_attendance_check("Alice Kim\nBob Lee\nEvan Park\n")
        .await
        .unwrap();
    assert!(report.absent.is_empty());
    assert_eq!(report.rate, 100);
    assert_eq!(report.detected, vec!["Alice Kim", "Evan Park", "Bob Lee"]);
}

#[tokio::test]
async fn test_lobby_page_reports_no_response() {
    let tabs = meeting_with("no_participants.html");
    let messenger = tabs.messenger(ScraperConfig::default());
    let store = MemoryRosterStore::default();
    let controller = Controller::new(&store, &tabs, &messenger, "meet.google.com");

    let result = controller.run_attendance_check("Alice Kim").await;
    assert!(matches!(result, Err(AttendanceError::NoResponse)));
}

#[tokio::test]
async fn test_tab_navigated_away_is_wrong_page() {
    let tabs = meeting_with("people_panel_en.html");
    tabs.report_snapshot("meeting-1", "https://zoom.us/j/123", fixture("people_panel_en.html"));
    let messenger = tabs.messenger(ScraperConfig::default());
    let store = MemoryRosterStore::default();
    let controller = Controller::new(&store, &tabs, &messenger, "meet.google.com");

    let result = controller.run_attendance_check("Alice Kim").await;
    assert!(matches!(result, Err(AttendanceError::WrongPage { .. })));
}

#[tokio::test]
async fn test_tab_without_page_script_reports_no_response() {
    let tabs = MeetingTabs::new();
    tabs.register("meeting-1", MEET_URL);
    let messenger = tabs.messenger(ScraperConfig::default());
    let store = MemoryRosterStore::default();
    let controller = Controller::new(&store, &tabs, &messenger, "meet.google.com");

    let result = controller.run_attendance_check("Alice Kim").await;
    assert!(matches!(result, Err(AttendanceError::NoResponse)));
}
