use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// A parsed, read-only copy of a meeting page's DOM.
///
/// `scraper::Html` is not `Send`, so snapshots are built and dropped inside
/// synchronous code and never held across an await point.
pub struct PageSnapshot {
    document: Html,
}

impl PageSnapshot {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// First element matching `selector`, in document order.
    pub fn select_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let selector = parse_selector(selector)?;
        self.document.select(&selector).next()
    }

    /// All elements matching `selector`, in document order.
    pub fn select_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match parse_selector(selector) {
            Some(selector) => self.document.select(&selector).collect(),
            None => Vec::new(),
        }
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!("Invalid selector '{}': {:?}", selector, e);
            None
        }
    }
}

/// Trimmed text content of an element and all its descendants.
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Descendant elements of `root` that have no element children.
pub fn leaf_elements<'a>(root: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| !el.children().any(|child| child.value().is_element()))
}

/// Build an `[aria-label*="..."]` selector, escaping quotes in the label.
pub fn aria_label_selector(label: &str) -> String {
    let escaped = label.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[aria-label*=\"{}\"]", escaped)
}
