//! Resource View Hook
//!
//! Binds a `ResourceView` to the component that mounts it: the fetch starts
//! on mount and the view is unmounted on cleanup, so a response arriving
//! after navigation is dropped.

use leptos::*;
use octofit::{fetch_collection, Resource, ResourceView};

use crate::api::GlooTransport;
use crate::state::global::GlobalState;

/// Mount a view for `R` and start its fetch
pub fn use_resource_view<R: Resource>() -> RwSignal<ResourceView<R>> {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let view = create_rw_signal(ResourceView::<R>::mount(&state.endpoints));

    load_view(view);

    on_cleanup(move || {
        view.try_update(|v| v.unmount());
    });

    view
}

/// Issue one fetch for `view` and settle it when the response lands
fn load_view<R: Resource>(view: RwSignal<ResourceView<R>>) {
    let Some((ticket, url)) = view.try_update(|v| (v.begin(), v.url().to_string())) else {
        return;
    };

    spawn_local(async move {
        let result = fetch_collection(&GlooTransport, &url).await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Error fetching {}: {}", R::KIND, e).into());
        }
        // Disposed once the page is gone
        view.try_update(|v| v.settle(ticket, result));
    });
}
