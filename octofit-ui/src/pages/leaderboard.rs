//! Leaderboard Page
//!
//! Ranked table with medals for the podium.

use leptos::*;
use octofit::{LeaderboardRow, ResourceKind};

use crate::components::{PageHeader, ResourceBody};
use crate::state::use_resource_view;

/// Leaderboard page component
#[component]
pub fn Leaderboard() -> impl IntoView {
    let leaderboard = use_resource_view::<LeaderboardRow>();

    view! {
        <div>
            <PageHeader kind=ResourceKind::Leaderboard />
            <ResourceBody
                resource=leaderboard
                render=|rows: Vec<LeaderboardRow>| view! {
                    <div class="overflow-x-auto">
                        <table class="w-full text-left">
                            <thead class="text-gray-400 border-b border-gray-700">
                                <tr>
                                    <th class="py-2 px-3 w-20">"Rank"</th>
                                    <th class="py-2 px-3">"Hero Name"</th>
                                    <th class="py-2 px-3">"Team"</th>
                                    <th class="py-2 px-3">"Total Points"</th>
                                    <th class="py-2 px-3">"Last Updated"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|row| view! { <LeaderRow row=row /> }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
            />
        </div>
    }
}

#[component]
fn LeaderRow(row: LeaderboardRow) -> impl IntoView {
    let row_class = if row.is_top_three() {
        "border-b border-gray-800 bg-yellow-900/20"
    } else {
        "border-b border-gray-800 hover:bg-gray-800"
    };

    view! {
        <tr class=row_class>
            <td class="py-2 px-3 text-xl">{row.rank_badge()}</td>
            <td class="py-2 px-3 font-semibold">{row.user.clone()}</td>
            <td class="py-2 px-3">{row.team.clone()}</td>
            <td class="py-2 px-3 text-green-400 font-semibold">{row.points()}</td>
            <td class="py-2 px-3 text-gray-400">{row.updated()}</td>
        </tr>
    }
}
