//! Responsive Behavior
//!
//! Debounced resize handling, mobile style optimization, touch feedback, and
//! double-tap zoom suppression. All listeners are registered once at startup
//! and live for the page session.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::charts;

/// Quiet window before a resize burst takes effect.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Two touch-end events within this window count as a double tap.
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

const MOBILE_STYLE_ID: &str = "mobile-overrides";

const MOBILE_OVERRIDES: &str = "\
@media (max-width: 768px) {
    .floating-element { display: none !important; }
    .card-hover:hover { transform: none !important; box-shadow: none !important; }
    * { -webkit-tap-highlight-color: transparent; }
}

@media (max-width: 480px) {
    .text-4xl { font-size: 1.75rem !important; }
    .text-2xl { font-size: 1.5rem !important; }
    .text-xl { font-size: 1.25rem !important; }
}";

/// Last-write-wins debouncer. Each call drops (and thereby cancels) any
/// pending timeout and schedules a fresh one; only the final call in a quiet
/// window runs its work.
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self, work: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, work);
        *self.pending.borrow_mut() = Some(timeout);
    }
}

/// True under the mobile breakpoint.
pub fn is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(max-width: 768px)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Inject the mobile style overrides. No-op above the breakpoint and when the
/// style element is already present.
pub fn optimize_for_mobile() {
    if !is_mobile() {
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(MOBILE_STYLE_ID).is_some() {
        return;
    }

    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(MOBILE_STYLE_ID);
    style.set_text_content(Some(MOBILE_OVERRIDES));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

/// Register all responsive listeners: debounced resize, touch feedback, and
/// double-tap suppression.
pub fn init() {
    init_resize_handling();
    init_touch_feedback();
    init_double_tap_suppression();
}

/// Coalesce resize bursts, then re-layout mounted charts and re-run the
/// mobile optimization pass.
fn init_resize_handling() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let debouncer = Debouncer::new(RESIZE_DEBOUNCE_MS);
    let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
        debouncer.call(|| {
            charts::resize_mounted();
            optimize_for_mobile();
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

/// Scale-down feedback on touch for interactive surfaces. Delegated at the
/// document level so panels re-rendered after a role switch stay covered.
fn init_touch_feedback() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_touch_start = Closure::wrap(Box::new(move |ev: web_sys::TouchEvent| {
        if let Some(el) = feedback_target(&ev) {
            let _ = el.style().set_property("transform", "scale(0.98)");
        }
    }) as Box<dyn FnMut(web_sys::TouchEvent)>);

    let on_touch_end = Closure::wrap(Box::new(move |ev: web_sys::TouchEvent| {
        if let Some(el) = feedback_target(&ev) {
            let _ = el.style().remove_property("transform");
        }
    }) as Box<dyn FnMut(web_sys::TouchEvent)>);

    let _ = document
        .add_event_listener_with_callback("touchstart", on_touch_start.as_ref().unchecked_ref());
    let _ = document
        .add_event_listener_with_callback("touchend", on_touch_end.as_ref().unchecked_ref());
    on_touch_start.forget();
    on_touch_end.forget();
}

fn feedback_target(ev: &web_sys::TouchEvent) -> Option<web_sys::HtmlElement> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    target
        .closest(".card-hover, .nav-item, button")
        .ok()
        .flatten()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Prevent iOS zoom on double tap: a touch-end within the tap window of the
/// previous one is suppressed.
fn init_double_tap_suppression() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let last_touch_end = Rc::new(Cell::new(0.0_f64));
    let on_touch_end = Closure::wrap(Box::new(move |ev: web_sys::TouchEvent| {
        let now = js_sys::Date::now();
        if now - last_touch_end.get() <= DOUBLE_TAP_WINDOW_MS {
            ev.prevent_default();
        }
        last_touch_end.set(now);
    }) as Box<dyn FnMut(web_sys::TouchEvent)>);

    let _ = document
        .add_event_listener_with_callback("touchend", on_touch_end.as_ref().unchecked_ref());
    on_touch_end.forget();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn burst_of_calls_runs_work_once() {
        let debouncer = Debouncer::new(RESIZE_DEBOUNCE_MS);
        let runs = Rc::new(Cell::new(0_u32));

        // Ten triggers inside a 100ms burst
        for _ in 0..10 {
            let runs = Rc::clone(&runs);
            debouncer.call(move || runs.set(runs.get() + 1));
            TimeoutFuture::new(10).await;
        }

        // Nothing fires during the burst
        assert_eq!(runs.get(), 0);

        TimeoutFuture::new(RESIZE_DEBOUNCE_MS + 100).await;
        assert_eq!(runs.get(), 1);

        // No stragglers after the quiet window
        TimeoutFuture::new(RESIZE_DEBOUNCE_MS).await;
        assert_eq!(runs.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn separate_quiet_windows_each_fire() {
        let debouncer = Debouncer::new(50);
        let runs = Rc::new(Cell::new(0_u32));

        let r = Rc::clone(&runs);
        debouncer.call(move || r.set(r.get() + 1));
        TimeoutFuture::new(120).await;

        let r = Rc::clone(&runs);
        debouncer.call(move || r.set(r.get() + 1));
        TimeoutFuture::new(120).await;

        assert_eq!(runs.get(), 2);
    }
}
