use std::path::PathBuf;

use meet_attendance_tauri::scraper::detectors::{Detector, PageScanDetector, PeoplePanelDetector};
use meet_attendance_tauri::scraper::snapshot::PageSnapshot;
use meet_attendance_tauri::scraper::{ParticipantScraper, ScraperConfig};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}

fn assert_unique(names: &[String]) {
    for (i, name) in names.iter().enumerate() {
        assert!(
            !names[i + 1..].contains(name),
            "Duplicate name '{}' in {:?}",
            name,
            names
        );
    }
}

#[test]
fn test_english_people_panel() {
    let page = PageSnapshot::parse(&fixture("people_panel_en.html"));
    let names = PeoplePanelDetector::new(&ScraperConfig::default()).detect(&page);

    // Role labels are spans too; single glyphs, emails and icons are dropped
    assert_eq!(
        names,
        vec!["Alice Kim", "(You)", "Charlie Oh", "Meeting host", "Dana Cho"]
    );
    assert!(!names.iter().any(|n| n == "more_vert" || n == "mic_off"));
    assert_unique(&names);
}

#[test]
fn test_korean_people_panel() {
    let page = PageSnapshot::parse(&fixture("people_panel_ko.html"));
    let names = PeoplePanelDetector::new(&ScraperConfig::default()).detect(&page);
    assert_eq!(names, vec!["김민수", "(나)", "이지은", "주최자", "박서준"]);
}

#[test]
fn test_korean_panel_missed_with_other_locale() {
    let config = ScraperConfig {
        localized_panel_label: "Teilnehmer".to_string(),
        ..ScraperConfig::default()
    };
    let page = PageSnapshot::parse(&fixture("people_panel_ko.html"));
    assert!(PeoplePanelDetector::new(&config).detect(&page).is_empty());
}

#[test]
fn test_tiles_fall_back_to_page_scan() {
    let html = fixture("tiles_only.html");
    let page = PageSnapshot::parse(&html);
    assert!(PeoplePanelDetector::new(&ScraperConfig::default())
        .detect(&page)
        .is_empty());

    let names = ParticipantScraper::new(&ScraperConfig::default()).detect_in_html(&html);
    assert_eq!(names, vec!["Alice Kim", "Evan Park", "Bob Lee"]);
    assert_eq!(names, PageScanDetector.detect(&page));
    assert_unique(&names);
}

#[test]
fn test_lobby_page_has_no_participants() {
    let scraper = ParticipantScraper::new(&ScraperConfig::default());
    assert!(scraper.detect_in_html(&fixture("no_participants.html")).is_empty());
}
