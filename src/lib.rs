//! PDF-gated action button for Leptos front-ends.
//!
//! The [`Button`](components::Button) component renders as a link, an action
//! trigger or a hidden PDF picker. The decisions it makes live in [`core`]
//! and are plain Rust, testable without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
