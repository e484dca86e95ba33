//! Core button logic, independent of rendering.
//!
//! - [`dispatch`] - what an activation does (chooser, callback or default)
//! - [`validate`] - what happens once the chooser yields a file
//! - [`error`] - configuration errors

pub mod dispatch;
pub mod error;
pub mod validate;

pub use dispatch::{Activation, ActivationConfig, ActivationEvent, Dispatched, FileChooser, dispatch};
pub use error::PolicyError;
pub use validate::{
    AcceptPolicy, Navigator, Notifier, SelectedFile, ValidationOutcome, handle_selection,
};
