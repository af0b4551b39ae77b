use log::{info, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::aos::{self, AosOptions};
use super::anchors::SmoothAnchors;
use super::blend::BlendEffect;
use super::indicator::ScrollIndicator;
use super::parallax::HeroParallax;
use super::reveal::SectionReveal;
use super::signup::SignupForm;

/// Every scroll, click and submit behaviour of the landing page. Created once the
/// markup is in the document; dropping it unhooks everything it registered.
pub struct PageInteractions {
    pub signup: Option<SignupForm>,
    pub anchors: Option<SmoothAnchors>,
    pub parallax: Option<HeroParallax>,
    pub indicator: Option<ScrollIndicator>,
    pub reveal: Option<SectionReveal>,
    pub blend: Option<BlendEffect>,
}

impl PageInteractions {
    pub fn install(window: &Window, document: &Document) -> Self {
        if let Err(err) = aos::init(&AosOptions::default()) {
            warn!("Animate-on-scroll unavailable: {:?}", err);
        }

        let interactions = Self {
            signup: step("signup form", SignupForm::install(document)),
            anchors: step("anchor scrolling", SmoothAnchors::install(document).map(Some)),
            parallax: step("hero parallax", HeroParallax::install(window, document)),
            indicator: step("scroll indicator", ScrollIndicator::install(window, document)),
            reveal: step("section reveal", SectionReveal::install(document).map(Some)),
            blend: step("blend effect", BlendEffect::install(window, document)),
        };

        info!(
            "Page interactions ready: signup={} anchors={} parallax={} indicator={} reveal={} blend={}",
            interactions.signup.is_some(),
            interactions.anchors.is_some(),
            interactions.parallax.is_some(),
            interactions.indicator.is_some(),
            interactions.reveal.is_some(),
            interactions.blend.is_some(),
        );
        interactions
    }
}

// A failing feature is switched off; the rest of the page keeps working.
fn step<T>(name: &str, result: Result<Option<T>, JsValue>) -> Option<T> {
    match result {
        Ok(installed) => installed,
        Err(err) => {
            warn!("Could not set up {}: {:?}", name, err);
            None
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn empty_document_installs_only_unconditional_effects() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let interactions = PageInteractions::install(&window, &document);
        assert!(interactions.signup.is_none());
        assert!(interactions.parallax.is_none());
        assert!(interactions.indicator.is_none());
        assert!(interactions.blend.is_none());
        assert!(interactions.anchors.is_some());
        assert!(interactions.reveal.is_some());
    }
}
