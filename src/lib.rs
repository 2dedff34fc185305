//! # OctoFit
//!
//! Client core for the OctoFit Tracker fitness dashboard: resolves the backend
//! API location, fetches the five resource collections, turns loosely shaped
//! records into display rows, and drives the user edit flow.
//!
//! ## Features
//!
//! - **Endpoint resolution**: codespace-forwarded URL or local development server
//! - **Tolerant normalization**: bare arrays and `{results: [...]}` envelopes
//! - **View lifecycle**: Loading / Ready / Failed with stale-response guards
//! - **User editing**: PUT the form, then refetch the collection
//!
//! ## Modules
//!
//! - [`config`]: Environment, endpoints and the configuration file
//! - [`records`]: Raw records and per-resource display rows
//! - [`fetch`]: Transport seam, normalization and view state
//! - [`edit`]: User edit modal state and submission
//! - [`display`]: Shared fallbacks and date formatting
//! - [`render`]: Terminal rendering for the command-line client
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octofit::{Endpoints, Environment, HttpTransport, ResourceView, UserRow};
//!
//! #[tokio::main]
//! async fn main() {
//!     let endpoints = Endpoints::resolve(&Environment::from_env());
//!     let transport = HttpTransport::new();
//!
//!     let mut users = ResourceView::<UserRow>::mount(&endpoints);
//!     let state = users.load(&transport).await;
//!
//!     println!("Loaded {} users", state.count());
//! }
//! ```

pub mod config;
pub mod display;
pub mod edit;
pub mod fetch;
pub mod records;
pub mod render;

pub use config::{
    ApiConfig, Config, Endpoints, Environment, ExecutionMode, LoggingConfig,
};

#[cfg(feature = "native")]
pub use config::ConfigError;

pub use records::{
    ActivityRow, Layout, LeaderboardRow, Record, Resource, ResourceKind, TeamRow, UserRow,
    WorkoutRow,
};

pub use fetch::{
    fetch_collection, normalize, FetchError, FetchTicket, ResourceView, Transport, ViewState,
};

#[cfg(feature = "native")]
pub use fetch::HttpTransport;

pub use edit::{
    load_team_options, submit_user_update, team_options, update_url, FitnessLevel,
    FormField, FormIssue, Notice, Submission, UserEditor, UserForm, UsersPanel,
};

pub use render::{render_view, Present};
