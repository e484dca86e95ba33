//! Utility modules for DOM access and class composition.
//!
//! Provides:
//! - [`ClassList`] - Conditional class-name composition
//! - [`dom`] - Window, URL hash and alert helpers

mod classes;
pub mod dom;

pub use classes::ClassList;
