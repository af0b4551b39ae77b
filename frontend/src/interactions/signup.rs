use gloo_timers::future::TimeoutFuture;
use gloo_events::{EventListener, EventListenerOptions};
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::config;

pub const FORM_ID: &str = "signup-form";
const EMAIL_INPUT: &str = "input[type=\"email\"]";
const SUBMIT_BUTTON: &str = ".submit-button";

const WORKING_MARKUP: &str = r#"
        <span>Subscribing...</span>
        <svg class="spinner" xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <circle cx="12" cy="12" r="10" stroke-dasharray="32" stroke-dashoffset="32">
                <animate attributeName="stroke-dashoffset" values="32;0" dur="1s" repeatCount="indefinite"/>
            </circle>
        </svg>
    "#;

const SUCCESS_MARKUP: &str = r#"
            <span>Subscribed!</span>
            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <polyline points="20 6 9 17 4 12"></polyline>
            </svg>
        "#;

/// Returns the address to "subscribe", or `None` when the field is blank.
/// No format check beyond that.
pub fn submitted_email(raw: &str) -> Option<&str> {
    let email = raw.trim();
    (!email.is_empty()).then_some(email)
}

/// Cosmetic signup form. Submitting plays a working/success/reset cycle on the
/// submit button; nothing leaves the browser.
pub struct SignupForm {
    _submit: EventListener,
}

impl SignupForm {
    pub fn install(document: &Document) -> Result<Option<Self>, JsValue> {
        let Some(form) = document.get_element_by_id(FORM_ID) else {
            debug!("No #{} on page, signup handler not installed", FORM_ID);
            return Ok(None);
        };

        let target = form.clone();
        let options = EventListenerOptions::enable_prevent_default();
        let submit = EventListener::new_with_options(&target, "submit", options, move |e: &Event| {
            e.prevent_default();
            if let Err(err) = handle_submit(&form) {
                warn!("Signup submit failed: {:?}", err);
            }
        });

        Ok(Some(Self { _submit: submit }))
    }
}

fn handle_submit(form: &Element) -> Result<(), JsValue> {
    let Some(input) = form
        .query_selector(EMAIL_INPUT)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(());
    };
    let Some(button) = form
        .query_selector(SUBMIT_BUTTON)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    // A cycle is already running; its restore step owns the button.
    if is_disabled(&button) {
        return Ok(());
    }

    let value = input.value();
    let Some(email) = submitted_email(&value) else {
        return Ok(());
    };
    debug!("Simulating signup ({} chars)", email.len());

    set_disabled(&button, true);
    let original_markup = button.inner_html();
    button.set_inner_html(WORKING_MARKUP);

    // TODO: swap the simulated latency for the mailing list API call once one is chosen.
    spawn_local(async move {
        TimeoutFuture::new(config::SIGNUP_LATENCY_MS).await;

        button.set_inner_html(SUCCESS_MARKUP);
        let _ = button
            .style()
            .set_property("background", config::SIGNUP_SUCCESS_BACKGROUND);
        input.set_value("");

        TimeoutFuture::new(config::SIGNUP_RESET_MS).await;

        button.set_inner_html(&original_markup);
        let _ = button.style().set_property("background", "");
        set_disabled(&button, false);
        debug!("Signup button restored");
    });

    Ok(())
}

fn is_disabled(control: &HtmlElement) -> bool {
    match control.dyn_ref::<HtmlButtonElement>() {
        Some(button) => button.disabled(),
        None => control.has_attribute("disabled"),
    }
}

// The control may be a <button> or any element acting as one.
fn set_disabled(control: &HtmlElement, disabled: bool) {
    if let Some(button) = control.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        let _ = control.set_attribute("disabled", "");
    } else {
        let _ = control.remove_attribute("disabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_not_submitted() {
        assert_eq!(submitted_email(""), None);
        assert_eq!(submitted_email("   \t\n"), None);
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(submitted_email("  ada@example.com "), Some("ada@example.com"));
    }

    #[test]
    fn anything_non_blank_passes() {
        assert_eq!(submitted_email("not-an-email"), Some("not-an-email"));
    }
}
