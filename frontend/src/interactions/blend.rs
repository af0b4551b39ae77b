use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use super::frame::FrameLatch;
use crate::config;

pub const BLEND_ATTR: &str = "data-blend";
pub const OVERLAY_ATTR: &str = "data-blend-overlay";
const BLEND_CONTAINERS: &str = "[data-blend]";
const BLEND_OVERLAY: &str = "[data-blend-overlay]";

// Older pages mark a single pair by id instead of by attribute.
const LEGACY_CONTAINER_ID: &str = "blend-container";
const LEGACY_OVERLAY_ID: &str = "blend-overlay";

/// Where a container sits in the crossfade, 0 (not started) to 1 (complete),
/// given its vertical midpoint in viewport coordinates.
pub fn blend_progress(center: f64, viewport_height: f64) -> f64 {
    let start = viewport_height * config::BLEND_START;
    let end = viewport_height * config::BLEND_END;

    if center < end {
        1.0
    } else if center > start {
        0.0
    } else {
        1.0 - (center - end) / (start - end)
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn overlay_opacity(center: f64, viewport_height: f64) -> f64 {
    ease_in_out_cubic(blend_progress(center, viewport_height))
}

/// Moves the id-based pair into the attribute scheme so one code path drives both.
pub fn promote_legacy_pair(document: &Document) -> Result<bool, JsValue> {
    let Some(container) = document.get_element_by_id(LEGACY_CONTAINER_ID) else {
        return Ok(false);
    };
    if container.has_attribute(BLEND_ATTR) {
        return Ok(false);
    }

    container.set_attribute(BLEND_ATTR, "")?;
    if let Some(overlay) = document.get_element_by_id(LEGACY_OVERLAY_ID) {
        overlay.set_attribute(OVERLAY_ATTR, "")?;
    }
    Ok(true)
}

struct BlendState {
    window: Window,
    active: RefCell<Vec<Element>>,
    scroll: RefCell<Option<EventListener>>,
    latch: Rc<FrameLatch>,
}

impl BlendState {
    fn track(&self, container: Element, intersecting: bool) {
        let mut active = self.active.borrow_mut();
        let known = active.iter().position(|c| *c == container);
        match (intersecting, known) {
            (true, None) => active.push(container),
            (false, Some(index)) => {
                active.swap_remove(index);
            }
            _ => {}
        }
    }

    fn request_update(self: &Rc<Self>) {
        let state = Rc::downgrade(self);
        self.latch.schedule(move || {
            if let Some(state) = state.upgrade() {
                state.update_overlays();
            }
        });
    }

    fn update_overlays(&self) {
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);

        for container in self.active.borrow().iter() {
            let Some(overlay) = container
                .query_selector(BLEND_OVERLAY)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };

            let rect = container.get_bounding_client_rect();
            let center = rect.top() + rect.height() / 2.0;
            let opacity = overlay_opacity(center, viewport_height);
            let _ = overlay.style().set_property("opacity", &opacity.to_string());
        }
    }

    fn sync_scroll_listener(self: &Rc<Self>) {
        if self.active.borrow().is_empty() {
            if self.scroll.borrow_mut().take().is_some() {
                debug!("No blend containers on screen, scroll listener detached");
            }
            return;
        }

        if self.scroll.borrow().is_none() {
            let state = Rc::downgrade(self);
            let listener = EventListener::new(&self.window, "scroll", move |_| on_scroll(&state));
            *self.scroll.borrow_mut() = Some(listener);
        }
        self.request_update();
    }
}

fn on_scroll(state: &Weak<BlendState>) {
    if let Some(state) = state.upgrade() {
        state.request_update();
    }
}

/// Crossfades each `[data-blend-overlay]` over its `[data-blend]` container as
/// the container scrolls through the middle of the viewport. Scroll is only
/// listened to while at least one container is near the screen.
pub struct BlendEffect {
    state: Rc<BlendState>,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl BlendEffect {
    pub fn install(window: &Window, document: &Document) -> Result<Option<Self>, JsValue> {
        if promote_legacy_pair(document)? {
            debug!("Promoted #{} into the blend scheme", LEGACY_CONTAINER_ID);
        }

        let containers = document.query_selector_all(BLEND_CONTAINERS)?;
        if containers.length() == 0 {
            debug!("No blend containers on page");
            return Ok(None);
        }

        let state = Rc::new(BlendState {
            window: window.clone(),
            active: RefCell::new(Vec::new()),
            scroll: RefCell::new(None),
            latch: FrameLatch::new(),
        });

        let callback = {
            let state = Rc::downgrade(&state);
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                let Some(state) = state.upgrade() else {
                    return;
                };
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    state.track(entry.target(), entry.is_intersecting());
                }
                state.sync_scroll_listener();
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.0));
        options.set_root_margin(config::BLEND_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for i in 0..containers.length() {
            if let Some(container) = containers.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&container);
            }
        }
        debug!("Blend effect watching {} containers", containers.length());

        Ok(Some(Self {
            state,
            observer,
            _callback: callback,
        }))
    }

    #[cfg(test)]
    pub fn active_containers(&self) -> usize {
        self.state.active.borrow().len()
    }

    #[cfg(test)]
    pub fn is_listening(&self) -> bool {
        self.state.scroll.borrow().is_some()
    }
}

impl Drop for BlendEffect {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.state.scroll.borrow_mut().take();
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn legacy_pair_is_promoted_once() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(r#"<div id="blend-container"><div id="blend-overlay"></div></div>"#);
        document.body().unwrap().append_child(&root).unwrap();

        assert!(promote_legacy_pair(&document).unwrap());
        assert!(!promote_legacy_pair(&document).unwrap());
        let overlay = document.get_element_by_id(LEGACY_OVERLAY_ID).unwrap();
        assert!(overlay.has_attribute(OVERLAY_ATTR));
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn listens_only_while_a_container_is_on_screen() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(
            r#"<div data-blend style="height: 40px"><div data-blend-overlay style="opacity: 0"></div></div>"#,
        );
        document.body().unwrap().prepend_with_node_1(&root).unwrap();

        let blend = BlendEffect::install(&window, &document).unwrap().unwrap();
        TimeoutFuture::new(200).await;
        assert_eq!(blend.active_containers(), 1);
        assert!(blend.is_listening());

        let overlay: HtmlElement = document.query_selector(BLEND_OVERLAY).unwrap().unwrap().dyn_into().unwrap();
        assert!(!overlay.style().get_property_value("opacity").unwrap().is_empty());

        let container = document.query_selector(BLEND_CONTAINERS).unwrap().unwrap();
        container.set_attribute("style", "display: none").unwrap();
        TimeoutFuture::new(200).await;
        assert_eq!(blend.active_containers(), 0);
        assert!(!blend.is_listening());
        root.remove();
    }
}
