//! Charting Collaborator
//!
//! Bindings for the global `echarts` object. Charts are rendered once from a
//! serialized option and afterwards owned by the library; this module only
//! re-locates mounted instances to ask for a re-layout.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// Opaque chart instance handle.
    pub type EChart;

    #[wasm_bindgen(js_namespace = echarts)]
    fn init(el: &web_sys::Element) -> EChart;

    #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
    fn get_instance_by_dom(el: &web_sys::Element) -> Option<EChart>;

    #[wasm_bindgen(method, js_name = setOption)]
    fn set_option(this: &EChart, option: &JsValue);

    #[wasm_bindgen(method)]
    fn resize(this: &EChart);
}

/// Render a chart into the container with the given id. Missing containers
/// and unserializable options are skipped silently.
pub fn render(container_id: &str, option: &serde_json::Value) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(el) = document.get_element_by_id(container_id) else {
        return;
    };

    let Ok(js_option) = js_sys::JSON::parse(&option.to_string()) else {
        web_sys::console::warn_1(&format!("invalid chart option for #{}", container_id).into());
        return;
    };

    // Reuse an existing instance on re-render, otherwise initialize one
    let chart = get_instance_by_dom(&el).unwrap_or_else(|| init(&el));
    chart.set_option(&js_option);
}

/// Re-layout every chart currently mounted under the `*-chart` container
/// naming convention. Containers without an instance are ignored.
pub fn resize_all() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all("[id$='-chart']") else {
        return;
    };

    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        if let Some(chart) = get_instance_by_dom(&el) {
            chart.resize();
        }
    }
}
