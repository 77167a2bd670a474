//! DYS-CONNECT Dashboard
//!
//! Multi-role educational support platform frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Role-driven dashboard (mother, teacher, specialist, institution, researcher)
//! - Per-role chart visualizations via the ECharts collaborator
//! - Arabic/French/English language switching with RTL handling
//! - Responsive behavior: debounced chart re-layout, mobile optimizations
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All dashboard data is in-memory mock data; the typewriter,
//! animation, and charting libraries are external JS collaborators reached
//! through `wasm-bindgen`.

use leptos::*;

mod app;
mod bindings;
mod charts;
mod components;
mod content;
mod locale;
mod model;
mod responsive;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
