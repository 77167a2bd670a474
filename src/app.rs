//! App Root Component
//!
//! Wires the session state, document locale metadata, startup collaborators
//! (typewriter, intro animations, responsive listeners), and the page-facing
//! entry points exported through `wasm-bindgen`.

use std::cell::RefCell;

use leptos::*;
use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::bindings::{anime, typed};
use crate::components::{Dashboard, Hero, Nav, RoleSelect, Toast};
use crate::components::role_select::select_with_transition;
use crate::model::{Locale, Role, Severity};
use crate::responsive;
use crate::state::{provide_session, SessionState};

thread_local! {
    /// Session handle backing the exported page entry points.
    static PAGE_SESSION: RefCell<Option<SessionState>> = const { RefCell::new(None) };
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_session();
    PAGE_SESSION.with(|slot| *slot.borrow_mut() = Some(state.clone()));

    // Keep document language/direction metadata in sync with the locale
    create_effect(move |_| {
        apply_document_locale(state.language.get());
    });

    // One-time startup: collaborators and responsive listeners
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            init_page();
        }
    });

    view! {
        <div id="top" class="min-h-screen bg-dys-light-gray">
            <Nav />
            <main>
                <Hero />
                <RoleSelect />
                <Dashboard />
            </main>
            <Toast />
        </div>
    }
}

/// Page-facing role selection. Unknown role tags are silently ignored.
#[wasm_bindgen(js_name = selectRole)]
pub fn select_role(role: &str) {
    let Some(role) = Role::parse(role) else {
        return;
    };
    PAGE_SESSION.with(|slot| {
        if let Some(state) = slot.borrow().as_ref() {
            select_with_transition(state, role);
        }
    });
}

/// Page-facing notification announcer. Unknown severities fall back to info.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: &str) {
    PAGE_SESSION.with(|slot| {
        if let Some(state) = slot.borrow().as_ref() {
            state.notify(message, Severity::from_tag(severity));
        }
    });
}

fn apply_document_locale(locale: Locale) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("lang", locale.tag());
    let _ = root.set_attribute("dir", locale.dir());
}

fn init_page() {
    typed::start(
        "typed-text",
        &typed::TypedOptions {
            strings: vec!["DYS-CONNECT", "دعم متكامل", "تعلم ذكي", "مستقبل أفضل"],
            type_speed: 80,
            back_speed: 50,
            back_delay: 2000,
            loop_: true,
            show_cursor: true,
            cursor_char: "|",
        },
    );

    init_intro_animations();
    responsive::init();
    responsive::optimize_for_mobile();
}

/// Entrance animations for the landing surface. Skipped on small screens to
/// keep first paint cheap.
fn init_intro_animations() {
    if responsive::is_mobile() {
        return;
    }

    let floating = anime::params(
        &JsValue::from_str(".floating-element"),
        &json!({
            "translateY": [-20, 20],
            "duration": 4000,
            "easing": "easeInOutSine",
            "direction": "alternate",
            "loop": true,
        }),
    );
    anime::run(&floating);

    anime::run_staggered(
        ".role-card",
        &json!({
            "translateY": [50, 0],
            "opacity": [0, 1],
            "duration": 800,
            "easing": "easeOutExpo",
        }),
        200.0,
    );

    anime::run_staggered(
        ".activity-item",
        &json!({
            "opacity": [0, 1],
            "translateX": [-30, 0],
            "duration": 600,
            "easing": "easeOutExpo",
        }),
        200.0,
    );
}
