//! Animation Collaborator
//!
//! Bindings for the global `anime()` engine. Property keyframes are built as
//! JSON and crossed into JS once; completion callbacks are single-shot
//! closures, matching the run-to-completion event-loop model.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = anime)]
    fn anime_js(params: &JsValue);

    #[wasm_bindgen(js_namespace = anime, js_name = stagger)]
    fn stagger_js(value: f64) -> JsValue;
}

/// Build an anime.js parameter object from a target and property keyframes.
///
/// `targets` may be a CSS selector string or a DOM element.
pub fn params(targets: &JsValue, props: &serde_json::Value) -> js_sys::Object {
    let obj = js_sys::JSON::parse(&props.to_string())
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Object>().ok())
        .unwrap_or_else(js_sys::Object::new);
    let _ = js_sys::Reflect::set(&obj, &"targets".into(), targets);
    obj
}

/// Run an animation.
pub fn run(params: &js_sys::Object) {
    anime_js(params);
}

/// Run an animation over a selector with per-element stagger delay.
pub fn run_staggered(selector: &str, props: &serde_json::Value, stagger_ms: f64) {
    let obj = params(&JsValue::from_str(selector), props);
    let _ = js_sys::Reflect::set(&obj, &"delay".into(), &stagger_js(stagger_ms));
    anime_js(&obj);
}

/// Run an animation and invoke `on_complete` exactly once when the visual
/// mutation has finished.
pub fn run_then(params: js_sys::Object, on_complete: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(on_complete);
    let _ = js_sys::Reflect::set(&params, &"complete".into(), &callback);
    anime_js(&params);
}
