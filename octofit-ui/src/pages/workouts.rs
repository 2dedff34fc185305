//! Workouts Page
//!
//! Card grid of the workout programs.

use leptos::*;
use octofit::{ResourceKind, WorkoutRow};

use crate::components::{PageHeader, ResourceBody};
use crate::state::use_resource_view;

/// Badge color for a difficulty value
fn difficulty_class(difficulty: &str) -> &'static str {
    match difficulty.to_ascii_lowercase().as_str() {
        "easy" | "beginner" => "bg-green-600",
        "medium" | "intermediate" => "bg-yellow-600",
        "hard" | "advanced" => "bg-red-600",
        _ => "bg-gray-600",
    }
}

/// Workouts page component
#[component]
pub fn Workouts() -> impl IntoView {
    let workouts = use_resource_view::<WorkoutRow>();

    view! {
        <div>
            <PageHeader kind=ResourceKind::Workouts />
            <ResourceBody
                resource=workouts
                render=|rows: Vec<WorkoutRow>| view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {rows
                            .into_iter()
                            .map(|workout| view! { <WorkoutCard workout=workout /> })
                            .collect_view()}
                    </div>
                }
            />
        </div>
    }
}

#[component]
fn WorkoutCard(workout: WorkoutRow) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex flex-col">
            <div class="flex items-start justify-between">
                <h3 class="text-lg font-semibold">{workout.name.clone()}</h3>
                <span class=format!(
                    "{} text-xs px-2 py-0.5 rounded-full text-white capitalize",
                    difficulty_class(&workout.difficulty)
                )>
                    {workout.difficulty.clone()}
                </span>
            </div>
            <p class="text-gray-400 text-sm mt-2 flex-1">{workout.description.clone()}</p>
            <div class="flex items-center space-x-4 mt-4 text-sm text-gray-300">
                <span>"⏱️ "{workout.duration()}</span>
                <span>"🔥 "{workout.calories()}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_class() {
        assert_eq!(difficulty_class("Hard"), "bg-red-600");
        assert_eq!(difficulty_class("beginner"), "bg-green-600");
        assert_eq!(difficulty_class("N/A"), "bg-gray-600");
    }
}
