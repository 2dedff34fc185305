//! API Access
//!
//! Browser transport and endpoint resolution for the OctoFit backend.

pub mod client;

pub use client::{endpoints, GlooTransport};
