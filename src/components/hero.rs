//! Hero Section
//!
//! Landing banner with the typewriter headline and decorative floating
//! elements. The typewriter collaborator is started from app initialization
//! and writes into `#typed-text`.

use leptos::*;

use crate::locale;
use crate::state::SessionState;

/// Hero banner component
#[component]
pub fn Hero() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <section class="relative overflow-hidden bg-dys-blue text-white py-20">
            // Decorative shapes, hidden on mobile by the override styles
            <div class="floating-element top-10 right-10 w-24 h-24 rounded-full bg-dys-cyan/20" />
            <div class="floating-element bottom-10 left-16 w-16 h-16 rounded-full bg-dys-orange/20" />

            <div class="container mx-auto px-4 text-center relative">
                <h1 class="text-4xl font-bold mb-4">
                    <span id="typed-text"></span>
                </h1>
                <p id="hero-subtitle" class="text-xl text-white/80 max-w-2xl mx-auto">
                    {move || locale::content(state.language.get()).hero_subtitle}
                </p>
            </div>
        </section>
    }
}
