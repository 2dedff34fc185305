//! Teams Page
//!
//! Card grid of the competitive teams.

use leptos::*;
use octofit::{ResourceKind, TeamRow};

use crate::components::{PageHeader, ResourceBody};
use crate::state::use_resource_view;

/// Teams page component
#[component]
pub fn Teams() -> impl IntoView {
    let teams = use_resource_view::<TeamRow>();

    view! {
        <div>
            <PageHeader kind=ResourceKind::Teams />
            <ResourceBody
                resource=teams
                render=|rows: Vec<TeamRow>| view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {rows.into_iter().map(|team| view! { <TeamCard team=team /> }).collect_view()}
                    </div>
                }
            />
        </div>
    }
}

#[component]
fn TeamCard(team: TeamRow) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex flex-col">
            <h3 class="text-lg font-semibold">{team.name.clone()}</h3>
            <p class="text-gray-400 text-sm mt-2 flex-1">{team.description.clone()}</p>
            <div class="flex items-center justify-between mt-4 text-sm">
                <span class="bg-primary-600 text-white px-2 py-0.5 rounded-full">
                    {team.members_label()}
                </span>
                <span class="text-gray-500">"Created: "{team.created()}</span>
            </div>
        </div>
    }
}
