//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ButtonSize`], [`ButtonColor`], [`ButtonVariant`] - Button presentation options
//! - [`AppRoute`] - Hash-based navigation

mod button;
mod route;

pub use button::{ButtonColor, ButtonSize, ButtonVariant};
pub use route::AppRoute;
