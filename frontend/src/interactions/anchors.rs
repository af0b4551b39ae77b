use gloo_events::{EventListener, EventListenerOptions};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

const SAME_PAGE_LINKS: &str = "a[href^=\"#\"]";

/// The selector an in-page link points at. A bare `#` points nowhere.
pub fn fragment_selector(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Smooth scrolling for every `#fragment` link on the page.
pub struct SmoothAnchors {
    _clicks: Vec<EventListener>,
}

impl SmoothAnchors {
    pub fn install(document: &Document) -> Result<Self, JsValue> {
        let links = document.query_selector_all(SAME_PAGE_LINKS)?;
        let mut clicks = Vec::with_capacity(links.length() as usize);

        for i in 0..links.length() {
            let Some(link) = links.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let document = document.clone();
            let href_source = link.clone();
            let options = EventListenerOptions::enable_prevent_default();
            clicks.push(EventListener::new_with_options(&link, "click", options, move |e: &Event| {
                e.prevent_default();
                let href = href_source.get_attribute("href").unwrap_or_default();
                if let Some(target) = resolve_target(&document, &href) {
                    scroll_to_top_edge(&target);
                }
            }));
        }

        debug!("Smooth scrolling wired to {} links", clicks.len());
        Ok(Self { _clicks: clicks })
    }
}

// Invalid selectors behave like a missing target.
fn resolve_target(document: &Document, href: &str) -> Option<Element> {
    let selector = fragment_selector(href)?;
    document.query_selector(selector).ok().flatten()
}

fn scroll_to_top_edge(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_selectors() {
        assert_eq!(fragment_selector("#signup"), Some("#signup"));
    }

    #[test]
    fn bare_hash_and_foreign_links_point_nowhere() {
        assert_eq!(fragment_selector("#"), None);
        assert_eq!(fragment_selector(""), None);
        assert_eq!(fragment_selector("/pricing#plans"), None);
    }
}
