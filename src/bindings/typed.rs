//! Typewriter Collaborator
//!
//! Binding for the global `Typed` constructor. Started once at page load
//! against the hero heading; skipped when the target element is absent.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    type Typed;

    #[wasm_bindgen(constructor)]
    fn new(selector: &str, options: &JsValue) -> Typed;
}

/// Typed.js configuration.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedOptions {
    pub strings: Vec<&'static str>,
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
    #[serde(rename = "loop")]
    pub loop_: bool,
    pub show_cursor: bool,
    pub cursor_char: &'static str,
}

/// Start the typewriter effect on the element with the given id.
pub fn start(target_id: &str, options: &TypedOptions) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(target_id).is_none() {
        return;
    }

    let Ok(json) = serde_json::to_string(options) else {
        return;
    };
    let Ok(js_options) = js_sys::JSON::parse(&json) else {
        return;
    };

    let selector = format!("#{}", target_id);
    let _typed = Typed::new(&selector, &js_options);
}
