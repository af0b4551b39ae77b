use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::config;

const SCROLL_INDICATOR: &str = ".scroll-indicator";

pub fn indicator_hidden(scroll_y: f64) -> bool {
    scroll_y > config::INDICATOR_HIDE_AFTER_PX
}

/// Hides the "scroll down" hint once the visitor has started scrolling.
/// Nothing is toggled until the hint's entrance animation has played out.
pub struct ScrollIndicator {
    _animation_end: EventListener,
    scroll: Rc<RefCell<Option<EventListener>>>,
}

impl ScrollIndicator {
    pub fn install(window: &Window, document: &Document) -> Result<Option<Self>, JsValue> {
        let Some(indicator) = document.query_selector(SCROLL_INDICATOR)? else {
            debug!("No {} on page", SCROLL_INDICATOR);
            return Ok(None);
        };

        let scroll = Rc::new(RefCell::new(None));
        let animation_end = {
            let scroll = Rc::downgrade(&scroll);
            let window = window.clone();
            let target = indicator.clone();
            EventListener::new(&target, "animationend", move |_| {
                let _ = indicator.class_list().add_1("animated");

                let Some(scroll) = scroll.upgrade() else {
                    return;
                };
                if scroll.borrow().is_some() {
                    return;
                }
                *scroll.borrow_mut() = Some(watch_scroll(&window, indicator.clone()));
            })
        };

        Ok(Some(Self {
            _animation_end: animation_end,
            scroll,
        }))
    }

    #[cfg(test)]
    pub fn is_watching_scroll(&self) -> bool {
        self.scroll.borrow().is_some()
    }
}

// Listeners from gloo-events are passive unless asked otherwise.
fn watch_scroll(window: &Window, indicator: Element) -> EventListener {
    let source = window.clone();
    EventListener::new(window, "scroll", move |_| {
        let scroll_y = source.scroll_y().unwrap_or(0.0);
        let classes = indicator.class_list();
        let _ = if indicator_hidden(scroll_y) {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_strictly_above_threshold() {
        assert!(!indicator_hidden(0.0));
        assert!(!indicator_hidden(100.0));
        assert!(indicator_hidden(100.5));
        assert!(indicator_hidden(2_000.0));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn scroll_watch_starts_after_entrance_animation() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(r#"<div class="scroll-indicator"></div>"#);
        document.body().unwrap().append_child(&root).unwrap();

        let indicator = ScrollIndicator::install(&window, &document).unwrap().unwrap();
        assert!(!indicator.is_watching_scroll());

        let element = document.query_selector(SCROLL_INDICATOR).unwrap().unwrap();
        element
            .dispatch_event(&web_sys::Event::new("animationend").unwrap())
            .unwrap();

        assert!(indicator.is_watching_scroll());
        assert!(element.class_list().contains("animated"));
        root.remove();
    }
}
