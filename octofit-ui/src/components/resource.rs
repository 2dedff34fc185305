//! Resource Page Pieces
//!
//! Header and state-driven body shared by the five resource pages.

use leptos::*;
use octofit::{Resource, ResourceKind, ResourceView, ViewState};

use super::loading::{ErrorPanel, Loading};

/// Icon, title and subtitle of a resource page
#[component]
pub fn PageHeader(kind: ResourceKind) -> impl IntoView {
    view! {
        <div class="mb-6">
            <h1 class="text-3xl font-bold">{format!("{} {}", kind.icon(), kind.title())}</h1>
            <p class="text-gray-400 mt-1">{kind.subtitle()}</p>
        </div>
    }
}

/// Loading spinner, error alert, empty placeholder or the rendered rows
///
/// The total count follows the rows once the collection is ready.
#[component]
pub fn ResourceBody<R, F, IV>(resource: RwSignal<ResourceView<R>>, render: F) -> impl IntoView
where
    R: Resource,
    F: Fn(Vec<R>) -> IV + 'static,
    IV: IntoView + 'static,
{
    let kind = R::KIND;

    move || match resource.with(|v| v.state().clone()) {
        ViewState::Loading => view! { <Loading message=kind.loading_message() /> }.into_view(),
        ViewState::Failed(message) => view! { <ErrorPanel message=message /> }.into_view(),
        ViewState::Ready(rows) => {
            let count = rows.len();
            let body = if rows.is_empty() {
                view! {
                    <div class="text-center py-12 text-gray-400">{kind.empty_message()}</div>
                }
                .into_view()
            } else {
                render(rows).into_view()
            };

            view! {
                {body}
                <div class="mt-4">
                    <p class="text-gray-400">
                        {kind.count_label()}": "<strong class="text-white">{count}</strong>
                    </p>
                </div>
            }
            .into_view()
        }
    }
}
