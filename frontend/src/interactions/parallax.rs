use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use super::frame::FrameLatch;
use crate::config;

const HERO_IMAGE: &str = ".hero-image";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    pub translate_y: f64,
    pub scale: f64,
}

impl ParallaxFrame {
    /// `None` once the hero has scrolled a full viewport away; the last
    /// transform is left in place.
    pub fn at(scrolled: f64, viewport_height: f64) -> Option<Self> {
        if scrolled >= viewport_height {
            return None;
        }
        Some(Self {
            translate_y: scrolled * config::PARALLAX_SHIFT_FACTOR,
            scale: 1.0 + scrolled * config::PARALLAX_ZOOM_FACTOR,
        })
    }

    pub fn to_css(&self) -> String {
        format!("translateY({}px) scale({})", self.translate_y, self.scale)
    }
}

pub struct HeroParallax {
    _scroll: EventListener,
    _latch: Rc<FrameLatch>,
}

impl HeroParallax {
    pub fn install(window: &Window, document: &Document) -> Result<Option<Self>, JsValue> {
        let Some(hero) = document
            .query_selector(HERO_IMAGE)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            debug!("No {} on page, parallax off", HERO_IMAGE);
            return Ok(None);
        };

        let latch = FrameLatch::new();
        let scroll = {
            let latch = Rc::downgrade(&latch);
            let frame_window = window.clone();
            EventListener::new(window, "scroll", move |_| {
                let Some(latch) = latch.upgrade() else {
                    return;
                };
                let window = frame_window.clone();
                let hero = hero.clone();
                latch.schedule(move || apply(&window, &hero));
            })
        };

        Ok(Some(Self {
            _scroll: scroll,
            _latch: latch,
        }))
    }
}

fn apply(window: &Window, hero: &HtmlElement) {
    let scrolled = window.page_y_offset().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    if let Some(frame) = ParallaxFrame::at(scrolled, viewport_height) {
        let _ = hero.style().set_property("transform", &frame.to_css());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_rest_is_identity() {
        let frame = ParallaxFrame::at(0.0, 900.0).unwrap();
        assert_eq!(frame.translate_y, 0.0);
        assert_eq!(frame.scale, 1.0);
        assert_eq!(frame.to_css(), "translateY(0px) scale(1)");
    }

    #[test]
    fn grows_with_scroll_inside_first_viewport() {
        let mut previous = ParallaxFrame::at(0.0, 900.0).unwrap();
        for y in (10..900).step_by(10) {
            let frame = ParallaxFrame::at(y as f64, 900.0).unwrap();
            assert!(frame.translate_y > previous.translate_y);
            assert!(frame.scale > previous.scale);
            previous = frame;
        }
    }

    #[test]
    fn factors_applied() {
        let frame = ParallaxFrame::at(500.0, 900.0).unwrap();
        assert!((frame.translate_y - 150.0).abs() < 1e-9);
        assert!((frame.scale - 1.1).abs() < 1e-9);
    }

    #[test]
    fn no_update_past_first_viewport() {
        assert_eq!(ParallaxFrame::at(900.0, 900.0), None);
        assert_eq!(ParallaxFrame::at(5_000.0, 900.0), None);
    }
}
