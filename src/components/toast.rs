//! Toast Notifications
//!
//! Renders the session's transient notifications. Lifetime is owned by
//! [`SessionState::notify`]; this component only displays whatever is live.

use leptos::*;

use crate::model::Severity;
use crate::state::{Notification, SessionState};

/// Toast notification host
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            <For
                each=move || state.notifications.get()
                key=|toast| toast.id
                children=move |toast: Notification| {
                    view! { <ToastCard toast=toast /> }
                }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Notification) -> impl IntoView {
    let color = match toast.severity {
        Severity::Info => "bg-dys-cyan",
        Severity::Success => "bg-dys-green",
        Severity::Warning => "bg-dys-orange",
        Severity::Error => "bg-red-500",
    };

    view! {
        <div class=format!(
            "{} text-white p-4 rounded-xl shadow-lg max-w-sm animate-slide-in",
            color
        )>
            {toast.message}
        </div>
    }
}
