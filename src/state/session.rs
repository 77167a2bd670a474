//! Session State
//!
//! Reactive state management using Leptos signals. One [`SessionState`] value
//! owns the whole page session: the selected role, the active locale, and the
//! transient notification queue. The struct is cloneable and instantiable, so
//! tests can drive independent sessions.

use leptos::*;

use crate::model::{Locale, Role, Severity};

/// How long a toast stays on the page, in milliseconds. Not cancellable; a
/// toast always lives its full duration.
pub const TOAST_DURATION_MS: u32 = 3000;

/// A transient user-facing notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Session-wide state provided to all components.
///
/// `role` is `None` until a role-selection action completes. Once set it
/// determines the active dashboard content and chart set; selecting again
/// simply re-renders for the new role.
#[derive(Clone)]
pub struct SessionState {
    /// Currently selected role, `None` while the selection surface is shown
    pub role: RwSignal<Option<Role>>,
    /// Active display language (defaults to Arabic)
    pub language: RwSignal<Locale>,
    /// Live notifications, newest last
    pub notifications: RwSignal<Vec<Notification>>,
    next_toast_id: RwSignal<u64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            role: create_rw_signal(None),
            language: create_rw_signal(Locale::default()),
            notifications: create_rw_signal(Vec::new()),
            next_toast_id: create_rw_signal(0),
        }
    }

    /// Transition to (or re-render for) the given role.
    pub fn select_role(&self, role: Role) {
        self.role.set(Some(role));
    }

    /// Switch the active display language. Document metadata and visible text
    /// follow reactively.
    pub fn switch_language(&self, locale: Locale) {
        self.language.set(locale);
    }

    /// Show a notification that dismisses itself after [`TOAST_DURATION_MS`].
    pub fn notify(&self, message: &str, severity: Severity) {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id + 1);

        self.notifications.update(|all| {
            all.push(Notification {
                id,
                message: message.to_string(),
                severity,
            })
        });

        // Removal is keyed by id, so it fires exactly once per toast even if
        // other toasts come and go in the meantime.
        let notifications = self.notifications;
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            notifications.update(|all| all.retain(|n| n.id != id));
        })
        .forget();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide session state to the component tree.
pub fn provide_session() -> SessionState {
    let state = SessionState::new();
    provide_context(state.clone());
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_session_starts_unselected_in_arabic() {
        let runtime = create_runtime();
        let state = SessionState::new();

        assert_eq!(state.role.get_untracked(), None);
        assert_eq!(state.language.get_untracked(), Locale::Ar);
        assert!(state.notifications.get_untracked().is_empty());

        runtime.dispose();
    }

    #[test]
    fn test_reselecting_a_role_transitions_content() {
        let runtime = create_runtime();
        let state = SessionState::new();

        state.select_role(Role::Teacher);
        let role = state.role.get_untracked().unwrap();
        assert_eq!(content::content_for(role).title, "لوحة تحكم المعلم");

        // Re-entrant transition: a second selection wins outright
        state.select_role(Role::Institution);
        let role = state.role.get_untracked().unwrap();
        assert_eq!(content::content_for(role).title, "لوحة تحكم المؤسسة");

        runtime.dispose();
    }

    #[test]
    fn test_language_switch_and_unknown_fallback() {
        let runtime = create_runtime();
        let state = SessionState::new();

        state.switch_language(Locale::from_tag("fr"));
        assert_eq!(state.language.get_untracked(), Locale::Fr);
        assert_eq!(state.language.get_untracked().dir(), "ltr");

        // Unknown tag folds back to Arabic content and RTL direction
        state.switch_language(Locale::from_tag("xx"));
        assert_eq!(state.language.get_untracked(), Locale::Ar);
        assert_eq!(state.language.get_untracked().dir(), "rtl");

        runtime.dispose();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn toast_removes_itself_exactly_once() {
        let runtime = create_runtime();
        let state = SessionState::new();

        state.notify("تم الحفظ", Severity::Success);
        assert_eq!(state.notifications.get_untracked().len(), 1);

        // Still visible before the duration elapses
        TimeoutFuture::new(TOAST_DURATION_MS - 500).await;
        assert_eq!(state.notifications.get_untracked().len(), 1);

        TimeoutFuture::new(700).await;
        assert!(state.notifications.get_untracked().is_empty());

        // Nothing left to remove later
        TimeoutFuture::new(200).await;
        assert!(state.notifications.get_untracked().is_empty());

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn overlapping_toasts_dismiss_independently() {
        let runtime = create_runtime();
        let state = SessionState::new();

        state.notify("الأولى", Severity::Info);
        TimeoutFuture::new(1000).await;
        state.notify("الثانية", Severity::Warning);
        assert_eq!(state.notifications.get_untracked().len(), 2);

        // First expires, second is still live
        TimeoutFuture::new(2300).await;
        let remaining = state.notifications.get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "الثانية");

        TimeoutFuture::new(1000).await;
        assert!(state.notifications.get_untracked().is_empty());

        runtime.dispose();
    }
}
