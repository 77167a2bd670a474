//! Role Selection
//!
//! The role card grid shown while the session has no role. Picking a card
//! animates the section away through the animation collaborator and then
//! hands the role to the session state; the dashboard takes over reactively.

use leptos::*;
use serde_json::json;
use wasm_bindgen::JsValue;

use crate::bindings::anime;
use crate::content::Icon;
use crate::model::Role;
use crate::state::SessionState;

const SECTION_ID: &str = "role-select";

/// Select a role, fading out the selection surface first when it is still
/// mounted. Re-selection after the surface is gone applies immediately.
pub fn select_with_transition(state: &SessionState, role: Role) {
    let section = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SECTION_ID));

    match section {
        Some(section) => {
            let params = anime::params(
                &JsValue::from(section),
                &json!({
                    "opacity": 0,
                    "translateY": -50,
                    "duration": 500,
                    "easing": "easeInExpo",
                }),
            );
            let state = state.clone();
            anime::run_then(params, move || state.select_role(role));
        }
        None => state.select_role(role),
    }
}

/// Role selection grid component
#[component]
pub fn RoleSelect() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        {move || {
            if state.role.get().is_some() {
                return view! {}.into_view();
            }

            let state = state.clone();
            view! {
                <section id=SECTION_ID class="container mx-auto px-4 py-16">
                    <h2 class="text-2xl font-bold text-dys-blue text-center mb-8">
                        "اختر دورك للمتابعة"
                    </h2>
                    <div class="grid md:grid-cols-3 lg:grid-cols-5 gap-6">
                        {Role::ALL
                            .into_iter()
                            .map(|role| {
                                let state = state.clone();
                                view! { <RoleCard role=role on_pick=move |r| select_with_transition(&state, r) /> }
                            })
                            .collect_view()}
                    </div>
                </section>
            }
            .into_view()
        }}
    }
}

/// One selectable role card
#[component]
fn RoleCard(
    role: Role,
    on_pick: impl Fn(Role) + 'static,
) -> impl IntoView {
    let (label, blurb) = role_card_copy(role);
    let icon = role_icon(role);

    view! {
        <div
            class="role-card card-hover bg-white rounded-2xl shadow-lg p-6 text-center"
            on:click=move |_| on_pick(role)
        >
            <div class="w-14 h-14 mx-auto mb-4 bg-dys-cyan/10 rounded-xl flex items-center justify-center">
                <svg class="w-7 h-7 text-dys-cyan" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon.path()></path>
                </svg>
            </div>
            <h3 class="text-lg font-semibold text-dys-blue mb-2">{label}</h3>
            <p class="text-sm text-dys-gray">{blurb}</p>
        </div>
    }
}

fn role_card_copy(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Mother => ("الأم", "تابعي تقدم أطفالك وتواصلي مع المختصين"),
        Role::Teacher => ("المعلم", "اكتشف الحالات مبكراً وتابع طلابك"),
        Role::Specialist => ("المختص", "أدر جلساتك وحالاتك وتقاريرك المهنية"),
        Role::Institution => ("المؤسسة", "أشرف على فريقك وتابع الإحصائيات"),
        Role::Researcher => ("الباحث", "اطلع على البيانات وتعاون مع فرق البحث"),
    }
}

fn role_icon(role: Role) -> Icon {
    match role {
        Role::Mother => Icon::Users,
        Role::Teacher => Icon::Clipboard,
        Role::Specialist => Icon::UserAdd,
        Role::Institution => Icon::Team,
        Role::Researcher => Icon::Database,
    }
}
