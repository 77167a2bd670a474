//! State Management
//!
//! Page-lifetime session state shared through Leptos context.

pub mod session;

pub use session::{provide_session, Notification, SessionState};
