//! Toast Notification Component
//!
//! Shows success and error messages.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success_state = state.clone();
    let error_state = state;

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            // Success toast
            {move || {
                let state = success_state.clone();
                success_state.success.get().map(|msg| view! {
                    <ToastMessage
                        message=msg
                        variant=ToastVariant::Success
                        on_dismiss=move || state.clear_success()
                    />
                })
            }}

            // Error toast
            {move || {
                let state = error_state.clone();
                error_state.error.get().map(|msg| view! {
                    <ToastMessage
                        message=msg
                        variant=ToastVariant::Error
                        on_dismiss=move || state.clear_error()
                    />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
    on_dismiss: impl Fn() + 'static,
) -> impl IntoView {
    let (icon, bg_class) = match variant {
        ToastVariant::Success => ("✓", "bg-green-600"),
        ToastVariant::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
            <button
                on:click=move |_| on_dismiss()
                class="text-white/70 hover:text-white"
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}
