//! Dashboard
//!
//! Renders the structured [`DashboardContent`] for the selected role and
//! mounts the role's charts once the grid is in the DOM. This is the only
//! place where registry data becomes markup.

use leptos::*;
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::bindings::anime;
use crate::charts;
use crate::content::{self, Panel, PanelBody};
use crate::locale;
use crate::model::{Locale, Role};
use crate::state::SessionState;

/// Dashboard section component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    // Mount charts and play the entry animation after the grid for the
    // active role has been rendered.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        if let Some(role) = state_for_effect.role.get() {
            after_render(move || {
                charts::render_for(role);
                animate_entry();
            });
        }
    });

    view! {
        {move || {
            let Some(role) = state.role.get() else {
                return view! {}.into_view();
            };

            let state_for_title = state.clone();
            let title = move || {
                let lang = state_for_title.language.get();
                match (state_for_title.role.get(), lang) {
                    // Role titles exist in Arabic only; other locales show
                    // the generic dashboard title
                    (Some(role), Locale::Ar) => content::dashboard_title(role),
                    _ => locale::content(lang).dashboard_title,
                }
            };

            let state_for_subtitle = state.clone();
            let subtitle =
                move || locale::content(state_for_subtitle.language.get()).dashboard_subtitle;

            let dashboard = content::content_for(role);
            view! {
                <section id="dashboard-content" class="container mx-auto px-4 py-12">
                    <div class="mb-8">
                        <h3 id="dashboard-title" class="text-3xl font-bold text-dys-blue">
                            {title}
                        </h3>
                        <p id="dashboard-subtitle" class="text-dys-gray mt-1">
                            {subtitle}
                        </p>
                    </div>

                    <SummaryRow role=role />

                    <div id="dashboard-grid" class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {dashboard
                            .panels
                            .into_iter()
                            .map(|panel| view! { <PanelCard panel=panel /> })
                            .collect_view()}
                    </div>
                </section>
            }
            .into_view()
        }}
    }
}

/// Headline figures for the selected role
#[component]
fn SummaryRow(role: Role) -> impl IntoView {
    let summary = content::summary_for(role);

    view! {
        <div class="grid grid-cols-3 gap-4 mb-8">
            {summary
                .figures
                .iter()
                .map(|(label, value)| {
                    view! {
                        <div class="bg-white rounded-xl shadow p-4 text-center">
                            <div class="text-2xl font-bold text-dys-cyan">{value.to_string()}</div>
                            <div class="text-sm text-dys-gray">{*label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One dashboard panel
#[component]
fn PanelCard(panel: Panel) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-lg p-6 card-hover">
            <div class="flex items-center justify-between mb-4">
                <h4 class="text-lg font-semibold text-dys-blue">{panel.title}</h4>
                <div class=format!(
                    "w-12 h-12 {} rounded-xl flex items-center justify-center",
                    panel.accent.bg_soft_class()
                )>
                    <svg
                        class=format!("w-6 h-6 {}", panel.accent.text_class())
                        fill="none"
                        stroke="currentColor"
                        viewBox="0 0 24 24"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d=panel.icon.path()
                        ></path>
                    </svg>
                </div>
            </div>
            <PanelBodyView body=panel.body accent=panel.accent />
        </div>
    }
}

#[component]
fn PanelBodyView(body: PanelBody, accent: crate::content::Accent) -> impl IntoView {
    match body {
        PanelBody::Chart { container } => view! {
            <div id=container class="h-48"></div>
        }
        .into_view(),

        PanelBody::Actions(items) => view! {
            <div class="space-y-3">
                {items
                    .into_iter()
                    .map(|item| {
                        let href = item.href;
                        let on_click = move |_| {
                            if let Some(href) = href {
                                navigate_to(href);
                            }
                        };
                        view! {
                            <button
                                on:click=on_click
                                class=format!(
                                    "w-full text-right p-3 bg-dys-light-gray rounded-xl hover:{} transition-colors",
                                    accent.bg_soft_class()
                                )
                            >
                                <div class="font-semibold text-dys-blue">{item.label}</div>
                                <div class="text-sm text-dys-gray">{item.detail}</div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),

        PanelBody::Schedule(items) => view! {
            <div class="space-y-3">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <div class=format!(
                            "p-3 border-l-4 {} bg-dys-light-gray rounded-r-xl",
                            item.accent.border_class()
                        )>
                            <div class="font-semibold text-dys-blue">{item.title}</div>
                            <div class="text-sm text-dys-gray">{item.detail}</div>
                            {item.note.map(|note| view! {
                                <div class="text-xs text-dys-gray">{note}</div>
                            })}
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),

        PanelBody::Cases(items) => view! {
            <div class="space-y-3">
                {items
                    .into_iter()
                    .map(|item| {
                        let href = item.href;
                        let on_click = move |_| {
                            if let Some(href) = href {
                                navigate_to(href);
                            }
                        };
                        view! {
                            <div class=format!("p-3 {} rounded-xl", accent.bg_soft_class())>
                                <div class="flex justify-between items-center">
                                    <div>
                                        <div class="font-semibold text-dys-blue">{item.name}</div>
                                        <div class="text-sm text-dys-gray">{item.issue}</div>
                                        {item.note.map(|note| view! {
                                            <div class="text-xs text-dys-gray">{note}</div>
                                        })}
                                    </div>
                                    <button
                                        on:click=on_click
                                        class=format!(
                                            "{} text-white px-4 py-2 rounded-lg text-sm",
                                            accent.bg_class()
                                        )
                                    >
                                        {item.action}
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),

        PanelBody::Requests(items) => view! {
            <div class="space-y-3">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <div class=format!("p-3 {} rounded-xl", item.badge_accent.bg_soft_class())>
                            <div class="flex justify-between items-center">
                                <div>
                                    <div class="font-semibold text-dys-blue">{item.title}</div>
                                    <div class="text-sm text-dys-gray">{item.detail}</div>
                                </div>
                                <span class=format!(
                                    "{} text-white px-2 py-1 rounded text-xs",
                                    item.badge_accent.bg_class()
                                )>
                                    {item.badge}
                                </span>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),

        PanelBody::Stats { figures, cta } => view! {
            <div>
                <div class="grid grid-cols-2 gap-4 mb-4">
                    {figures
                        .into_iter()
                        .map(|figure| view! {
                            <div class="text-center p-3 bg-dys-light-gray rounded-xl">
                                <div class=format!("text-2xl font-bold {}", figure.accent.text_class())>
                                    {figure.value}
                                </div>
                                <div class="text-sm text-dys-gray">{figure.label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
                <button class=format!("w-full {} text-white py-2 rounded-xl", accent.bg_class())>
                    {cta}
                </button>
            </div>
        }
        .into_view(),
    }
}

/// Run a closure on the next animation frame, after pending DOM updates.
fn after_render(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let _ = window.request_animation_frame(callback.unchecked_ref());
}

fn animate_entry() {
    let params = anime::params(
        &JsValue::from_str("#dashboard-content"),
        &json!({
            "opacity": [0, 1],
            "translateY": [50, 0],
            "duration": 800,
            "easing": "easeOutExpo",
        }),
    );
    anime::run(&params);
}

fn navigate_to(href: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(href);
    }
}
