use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config;

#[wasm_bindgen]
extern "C" {
    // Throws a ReferenceError when the AOS script tag never loaded.
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;
}

/// Options understood by the animate-on-scroll library's `init`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AosOptions {
    pub once: bool,
    pub offset: u32,
    pub duration: u32,
    pub easing: &'static str,
}

impl Default for AosOptions {
    fn default() -> Self {
        Self {
            once: config::AOS_ONCE,
            offset: config::AOS_OFFSET_PX,
            duration: config::AOS_DURATION_MS,
            easing: config::AOS_EASING,
        }
    }
}

pub fn init(options: &AosOptions) -> Result<(), JsValue> {
    let options_js = serde_wasm_bindgen::to_value(options)?;
    aos_init(&options_js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_page_settings() {
        let options = AosOptions::default();
        assert!(options.once);
        assert_eq!(options.offset, 100);
        assert_eq!(options.duration, 800);
        assert_eq!(options.easing, "ease-out-cubic");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_library_is_reported_not_thrown() {
        // The test runner page does not load AOS.
        assert!(init(&AosOptions::default()).is_err());
    }
}
