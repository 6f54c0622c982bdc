//! stepper-ui - Dioxus components for the unit stepper widgets
//!
//! Views are thin: every state transition is delegated to `stepper-common`.

pub mod components;

pub use components::*;
