//! External JS Collaborators
//!
//! `wasm-bindgen` bindings for the third-party UI libraries loaded by the
//! host page: the animation engine, the charting library, and the typewriter
//! effect. Everything here treats a missing element or library object as a
//! silent no-op.

pub mod anime;
pub mod echarts;
pub mod typed;
