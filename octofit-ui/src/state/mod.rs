//! State Management
//!
//! Global application state and the per-page resource view hook.

pub mod global;
pub mod resource;

pub use global::{provide_global_state, GlobalState};
pub use resource::use_resource_view;
