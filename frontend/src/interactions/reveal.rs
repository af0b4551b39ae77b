use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;

const FEATURE_SECTIONS: &str = ".feature-section";
pub const IN_VIEW_CLASS: &str = "in-view";

/// One-shot reveal: each feature section gets `in-view` the first time a tenth
/// of it is on screen and keeps it for the rest of the visit.
pub struct SectionReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionReveal {
    pub fn install(document: &Document) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    reveal(&observer, &entry.target());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        options.set_root_margin(config::REVEAL_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let sections = document.query_selector_all(FEATURE_SECTIONS)?;
        for i in 0..sections.length() {
            if let Some(section) = sections.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&section);
            }
        }
        debug!("Watching {} feature sections for reveal", sections.length());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

// Marking is permanent, so the element no longer needs watching.
fn reveal(observer: &IntersectionObserver, section: &Element) {
    let _ = section.class_list().add_1(IN_VIEW_CLASS);
    observer.unobserve(section);
}

impl Drop for SectionReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn visible_section_is_marked_and_stays_marked() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(r#"<section class="feature-section" style="height: 50px"></section>"#);
        document.body().unwrap().prepend_with_node_1(&root).unwrap();

        let _reveal = SectionReveal::install(&document).unwrap();
        TimeoutFuture::new(200).await;

        let section = document.query_selector(FEATURE_SECTIONS).unwrap().unwrap();
        assert!(section.class_list().contains(IN_VIEW_CLASS));

        section.set_attribute("style", "height: 50px; display: none").unwrap();
        TimeoutFuture::new(200).await;
        assert!(section.class_list().contains(IN_VIEW_CLASS));
        root.remove();
    }
}
