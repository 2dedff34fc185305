//! Activities Page
//!
//! Table of logged activities.

use leptos::*;
use octofit::{ActivityRow, ResourceKind};

use crate::components::{PageHeader, ResourceBody};
use crate::state::use_resource_view;

/// Activities page component
#[component]
pub fn Activities() -> impl IntoView {
    let activities = use_resource_view::<ActivityRow>();

    view! {
        <div>
            <PageHeader kind=ResourceKind::Activities />
            <ResourceBody
                resource=activities
                render=|rows: Vec<ActivityRow>| view! {
                    <div class="overflow-x-auto">
                        <table class="w-full text-left">
                            <thead class="text-gray-400 border-b border-gray-700">
                                <tr>
                                    <th class="py-2 px-3">"User"</th>
                                    <th class="py-2 px-3">"Activity Type"</th>
                                    <th class="py-2 px-3">"⏱️ Duration"</th>
                                    <th class="py-2 px-3">"📍 Distance"</th>
                                    <th class="py-2 px-3">"🔥 Calories"</th>
                                    <th class="py-2 px-3">"Date"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|activity| view! {
                                        <tr class="border-b border-gray-800 hover:bg-gray-800">
                                            <td class="py-2 px-3 font-semibold">{activity.user.clone()}</td>
                                            <td class="py-2 px-3">{activity.activity_type.clone()}</td>
                                            <td class="py-2 px-3">{activity.duration()}</td>
                                            <td class="py-2 px-3">{activity.distance()}</td>
                                            <td class="py-2 px-3">{activity.calories()}</td>
                                            <td class="py-2 px-3 text-gray-400">{activity.day()}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
            />
        </div>
    }
}
