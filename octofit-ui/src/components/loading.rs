//! Loading Component
//!
//! Loading spinner and error alert shown in place of a collection.

use leptos::*;

/// Centered spinner with a loading message
#[component]
pub fn Loading(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" role="status" />
            <p class="mt-3 text-gray-400">{message}</p>
        </div>
    }
}

/// Error alert; no stale data is shown alongside it
#[component]
pub fn ErrorPanel(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-900/40 border border-red-700 text-red-200 rounded-lg p-4" role="alert">
            <h4 class="font-semibold text-lg mb-1">"Error!"</h4>
            <p>{message}</p>
        </div>
    }
}
