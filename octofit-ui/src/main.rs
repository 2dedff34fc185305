//! OctoFit Tracker Dashboard
//!
//! Fitness tracker dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Users, teams, workouts, activities and leaderboard views
//! - User profile editing
//! - Codespace-aware API endpoint resolution
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Records, view state and the edit flow live in the `octofit`
//! crate; this crate supplies the browser transport and the components.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
