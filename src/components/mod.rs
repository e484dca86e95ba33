//! UI components built with Leptos.
//!
//! - [`Button`] - Link / action / PDF-upload button
//! - [`router`] - Hash routing and [`RouteContext`]
//! - [`pages`] - Demo pages, one per route
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod button;
pub mod icons;
pub mod pages;
pub mod router;

pub use button::Button;
pub use router::{AppRouter, RouteContext};
