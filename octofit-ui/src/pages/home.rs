//! Home Page
//!
//! Welcome banner with quick-access cards for every section.

use leptos::*;
use leptos_router::*;
use octofit::ResourceKind;

/// Order of the quick-access cards
const QUICK_ACCESS: [ResourceKind; 5] = [
    ResourceKind::Users,
    ResourceKind::Activities,
    ResourceKind::Leaderboard,
    ResourceKind::Teams,
    ResourceKind::Workouts,
];

fn blurb(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Users => "View all registered heroes and their stats",
        ResourceKind::Activities => "Track all fitness activities and achievements",
        ResourceKind::Leaderboard => "See who's leading the competition",
        ResourceKind::Teams => "Explore competitive fitness teams",
        ResourceKind::Workouts => "Browse workout programs and training plans",
    }
}

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <section class="text-center py-8">
                <h1 class="text-4xl font-bold">"🏋️ Welcome to OctoFit Tracker! 🎯"</h1>
                <p class="text-gray-300 text-lg mt-4">
                    "Track your fitness journey, compete with your team, and achieve your goals!"
                </p>
                <hr class="my-6 border-gray-700" />
                <p class="text-gray-400">"Quick access to the main sections:"</p>
            </section>

            <div class="grid md:grid-cols-3 gap-4">
                {QUICK_ACCESS
                    .into_iter()
                    .map(|kind| view! { <QuickAccessCard kind=kind /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn QuickAccessCard(kind: ResourceKind) -> impl IntoView {
    view! {
        <A href=format!("/{}", kind.name())>
            <div class="bg-gray-800 rounded-xl p-6 text-center h-full border border-gray-700
                        hover:border-gray-500 transition-colors">
                <div class="text-4xl mb-3">{kind.icon()}</div>
                <h3 class="text-lg font-semibold">{kind.title()}</h3>
                <p class="text-gray-400 text-sm mt-2">{blurb(kind)}</p>
            </div>
        </A>
    }
}
