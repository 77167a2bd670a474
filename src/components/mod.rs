//! UI Components
//!
//! Reusable Leptos components for the DYS-CONNECT page.

pub mod dashboard;
pub mod hero;
pub mod nav;
pub mod role_select;
pub mod toast;

pub use dashboard::Dashboard;
pub use hero::Hero;
pub use nav::Nav;
pub use role_select::RoleSelect;
pub use toast::Toast;
