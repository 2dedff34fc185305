//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod edit_user;
pub mod loading;
pub mod nav;
pub mod resource;
pub mod toast;

pub use edit_user::EditUserModal;
pub use loading::{ErrorPanel, Loading};
pub use nav::Nav;
pub use resource::{PageHeader, ResourceBody};
pub use toast::Toast;
