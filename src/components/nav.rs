//! Navigation
//!
//! Header bar with brand, section links, the language switcher, and the
//! mobile hamburger menu. The mobile panel closes on outside clicks via a
//! document-level listener.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::model::Locale;
use crate::state::SessionState;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("الرئيسية", "#top"),
    ("الأدوات الذكية", "#tools"),
    ("لوحة التحكم", "#dashboard-content"),
    ("تواصل معنا", "#contact"),
];

const LANGUAGES: [(&str, &str); 3] = [("ar", "عربي"), ("fr", "FR"), ("en", "EN")];

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let (active, set_active) = create_signal(0_usize);
    let menu_open = create_rw_signal(false);

    // Close the mobile panel when a click lands outside it
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            init_outside_click_close(menu_open);
        }
    });

    let toggle_menu = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        menu_open.update(|open| *open = !*open);
    };

    view! {
        <nav class="bg-white shadow sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <a href="#top" class="flex items-center space-x-3">
                        <span class="text-xl font-bold text-dys-blue">"DYS-CONNECT"</span>
                    </a>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-1">
                        {NAV_ITEMS
                            .into_iter()
                            .enumerate()
                            .map(|(idx, (label, href))| {
                                view! {
                                    <a
                                        href=href
                                        class=move || {
                                            let base = "nav-item px-4 py-2 rounded-lg text-dys-gray transition-colors";
                                            if active.get() == idx {
                                                format!("{} active text-dys-blue font-semibold", base)
                                            } else {
                                                base.to_string()
                                            }
                                        }
                                        on:click=move |_| set_active.set(idx)
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center space-x-2">
                        <LanguageSwitcher />

                        // Hamburger, mobile only
                        <button
                            id="mobile-menu-button"
                            class="md:hidden p-2 rounded-lg text-dys-blue"
                            aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                            on:click=toggle_menu
                        >
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                ></path>
                            </svg>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile panel
            <div
                id="mobile-nav"
                class=move || {
                    if menu_open.get() {
                        "md:hidden border-t border-dys-light-gray px-4 py-2".to_string()
                    } else {
                        "hidden".to_string()
                    }
                }
            >
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <a
                                href=href
                                class="nav-item block px-4 py-3 text-dys-gray"
                                on:click=move |_| menu_open.set(false)
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

/// Language switch buttons (`data-lang` controls)
#[component]
fn LanguageSwitcher() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <div class="flex items-center space-x-1">
            {LANGUAGES
                .into_iter()
                .map(|(tag, label)| {
                    let state = state.clone();
                    let is_active = {
                        let state = state.clone();
                        move || state.language.get().tag() == tag
                    };
                    view! {
                        <button
                            data-lang=tag
                            class=move || {
                                let base = "px-2 py-1 rounded text-sm";
                                if is_active() {
                                    format!("{} bg-dys-cyan text-white", base)
                                } else {
                                    format!("{} text-dys-gray", base)
                                }
                            }
                            on:click=move |_| state.switch_language(Locale::from_tag(tag))
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn init_outside_click_close(menu_open: RwSignal<bool>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_click = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
        if !menu_open.get_untracked() {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let inside = target
            .closest("#mobile-nav, #mobile-menu-button")
            .ok()
            .flatten()
            .is_some();
        if !inside {
            menu_open.set(false);
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
