//! Global Application State
//!
//! Reactive state shared by every page: the resolved endpoints and the
//! toast messages.

use leptos::*;
use octofit::Endpoints;

/// How long a success toast stays up
pub const SUCCESS_TIMEOUT_MS: u32 = 3000;

/// How long an error toast stays up
pub const ERROR_TIMEOUT_MS: u32 = 5000;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Endpoints resolved once at startup
    pub endpoints: Endpoints,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state(endpoints: Endpoints) {
    let state = GlobalState {
        endpoints,
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(SUCCESS_TIMEOUT_MS, move || {
            success_signal.try_set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(ERROR_TIMEOUT_MS, move || {
            error_signal.try_set(None);
        })
        .forget();
    }

    pub fn clear_success(&self) {
        self.success.set(None);
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
