use std::collections::HashSet;

use scraper::ElementRef;

use super::snapshot::{aria_label_selector, element_text, leaf_elements, PageSnapshot};
use super::ScraperConfig;

/// Name element selectors seen across Google Meet UI versions, in scan order.
pub const PAGE_SCAN_SELECTORS: &[&str] = &[
    "[data-participant-id]",
    "[data-self-name]",
    "[data-requested-participant-id]",
    r#"div[role="listitem"] span"#,
    ".uGOf1d",
    ".zWGUib",
];

/// Element carrying the local user's own display name.
pub const SELF_NAME_SELECTOR: &str = "[data-self-name]";

/// Attribute selector of the people panel tab.
pub const PEOPLE_PANEL_TAB_SELECTOR: &str = r#"[data-tab-id="2"]"#;

/// A strategy for pulling participant names out of a page snapshot.
/// Implementations are pure: same snapshot, same names.
pub trait Detector: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Candidate participant names, deduplicated, in first-seen order.
    fn detect(&self, page: &PageSnapshot) -> Vec<String>;
}

/// Return the detectors in priority order: people panel first, then the
/// whole-page scan.
pub fn all_detectors(config: &ScraperConfig) -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(PeoplePanelDetector::new(config)),
        Box::new(PageScanDetector),
    ]
}

/// Reads names from the dedicated participants panel.
pub struct PeoplePanelDetector {
    panel_selectors: Vec<String>,
}

impl PeoplePanelDetector {
    pub fn new(config: &ScraperConfig) -> Self {
        let mut panel_selectors = vec![PEOPLE_PANEL_TAB_SELECTOR.to_string()];
        let localized = config.localized_panel_label.trim();
        if !localized.is_empty() {
            panel_selectors.push(aria_label_selector(localized));
        }
        panel_selectors.push(aria_label_selector(&config.english_panel_label));
        Self { panel_selectors }
    }

    pub fn panel_selectors(&self) -> &[String] {
        &self.panel_selectors
    }
}

impl Detector for PeoplePanelDetector {
    fn name(&self) -> &str {
        "people-panel"
    }

    fn detect(&self, page: &PageSnapshot) -> Vec<String> {
        let Some(panel) = self
            .panel_selectors
            .iter()
            .find_map(|selector| page.select_first(selector))
        else {
            return Vec::new();
        };

        let mut names = NameList::default();
        for element in leaf_elements(panel).filter(is_name_span) {
            let text = element_text(&element);
            // Skip single glyphs (icons, initials) and account emails
            if text.chars().count() > 1 && !text.contains('@') {
                names.push(text);
            }
        }
        names.into_vec()
    }
}

/// Names sit in `span`s. Icon glyphs (`more_vert`, `mic_off`) are ligature
/// text in `i` elements or hidden from assistive tech, so they are skipped.
fn is_name_span(element: &ElementRef<'_>) -> bool {
    let value = element.value();
    value.name() == "span" && value.attr("aria-hidden") != Some("true")
}

/// Scans the whole page with the historical name selectors.
pub struct PageScanDetector;

impl Detector for PageScanDetector {
    fn name(&self) -> &str {
        "page-scan"
    }

    fn detect(&self, page: &PageSnapshot) -> Vec<String> {
        let mut names = NameList::default();

        for selector in PAGE_SCAN_SELECTORS {
            for element in page.select_all(selector) {
                let text = element_text(&element);
                if !text.is_empty() {
                    names.push(text);
                }
            }
        }

        if let Some(element) = page.select_first(SELF_NAME_SELECTOR) {
            let text = element_text(&element);
            if !text.is_empty() {
                names.push(text);
            }
        }

        names.into_vec()
    }
}

/// Order-preserving set of names.
#[derive(Default)]
struct NameList {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl NameList {
    fn push(&mut self, name: String) {
        if self.seen.insert(name.clone()) {
            self.names.push(name);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScraperConfig {
        ScraperConfig::default()
    }

    #[test]
    fn test_panel_selector_priority() {
        let detector = PeoplePanelDetector::new(&config());
        assert_eq!(
            detector.panel_selectors(),
            &[
                r#"[data-tab-id="2"]"#.to_string(),
                r#"[aria-label*="참가자"]"#.to_string(),
                r#"[aria-label*="People"]"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_blank_localized_label_is_skipped() {
        let cfg = ScraperConfig {
            localized_panel_label: "  ".to_string(),
            ..ScraperConfig::default()
        };
        let detector = PeoplePanelDetector::new(&cfg);
        assert_eq!(detector.panel_selectors().len(), 2);
    }

    #[test]
    fn test_panel_filters_short_and_email_text() {
        let page = PageSnapshot::parse(
            r#"<div data-tab-id="2">
                <div><span>Alice Kim</span><span>A</span></div>
                <div><span>bob@example.com</span><span>Bob Lee</span></div>
                <div><span>Alice Kim</span></div>
            </div>"#,
        );
        let names = PeoplePanelDetector::new(&config()).detect(&page);
        assert_eq!(names, vec!["Alice Kim", "Bob Lee"]);
    }

    #[test]
    fn test_panel_skips_icon_glyphs() {
        let page = PageSnapshot::parse(
            r#"<div aria-label="People">
                <div><span>Alice Kim</span><i class="material-icons">more_vert</i></div>
                <div>
                    <span>Bob Lee</span>
                    <span class="material-icons-extended" aria-hidden="true">mic_off</span>
                    <button><div>Pin</div></button>
                </div>
            </div>"#,
        );
        let names = PeoplePanelDetector::new(&config()).detect(&page);
        assert_eq!(names, vec!["Alice Kim", "Bob Lee"]);
    }

    #[test]
    fn test_panel_found_by_localized_label() {
        let page = PageSnapshot::parse(
            r#"<div aria-label="통화 중인 참가자"><span>김민수</span><span>이지은</span></div>"#,
        );
        let names = PeoplePanelDetector::new(&config()).detect(&page);
        assert_eq!(names, vec!["김민수", "이지은"]);
    }

    #[test]
    fn test_panel_found_by_english_label() {
        let page = PageSnapshot::parse(
            r#"<aside aria-label="People in call"><span>Dana Cho</span></aside>"#,
        );
        let names = PeoplePanelDetector::new(&config()).detect(&page);
        assert_eq!(names, vec!["Dana Cho"]);
    }

    #[test]
    fn test_attribute_panel_wins_over_labels() {
        let page = PageSnapshot::parse(
            r#"<aside aria-label="People"><span>From Label</span></aside>
               <div data-tab-id="2"><span>From Tab</span></div>"#,
        );
        let names = PeoplePanelDetector::new(&config()).detect(&page);
        assert_eq!(names, vec!["From Tab"]);
    }

    #[test]
    fn test_no_panel_yields_nothing() {
        let page = PageSnapshot::parse(r#"<div class="uGOf1d">Alice Kim</div>"#);
        assert!(PeoplePanelDetector::new(&config()).detect(&page).is_empty());
    }

    #[test]
    fn test_page_scan_order_and_self_name() {
        let page = PageSnapshot::parse(
            r#"<div class="zWGUib">Zed</div>
               <div class="uGOf1d">Uma</div>
               <div role="listitem"><span>Lee</span></div>
               <div data-self-name="me">Me Myself</div>
               <div data-participant-id="p1">Pat</div>"#,
        );
        let names = PageScanDetector.detect(&page);
        assert_eq!(names, vec!["Pat", "Me Myself", "Lee", "Uma", "Zed"]);
    }

    #[test]
    fn test_page_scan_keeps_single_characters() {
        let page = PageSnapshot::parse(r#"<div class="uGOf1d">J</div><div class="uGOf1d">  </div>"#);
        assert_eq!(PageScanDetector.detect(&page), vec!["J"]);
    }

    #[test]
    fn test_page_scan_dedups_across_selectors() {
        let page = PageSnapshot::parse(
            r#"<div data-participant-id="p1"><span class="zWGUib">Kim</span></div>
               <div class="uGOf1d">Kim</div>"#,
        );
        assert_eq!(PageScanDetector.detect(&page), vec!["Kim"]);
    }

    #[test]
    fn test_all_detectors_order() {
        let detectors = all_detectors(&config());
        let names: Vec<&str> = detectors.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["people-panel", "page-scan"]);
    }
}
