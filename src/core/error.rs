//! Error types for upload gate configuration.
//!
//! - [`PolicyError`] - an [`AcceptPolicy`](super::AcceptPolicy) that cannot be built
//!
//! A picked file of the wrong type is not an error here: it is a
//! [`ValidationOutcome::Rejected`](super::ValidationOutcome::Rejected) and is
//! shown to the user directly.

use thiserror::Error;

/// Reasons an accept policy is refused at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// No media type was given.
    #[error("at least one accepted media type is required")]
    NoAcceptedTypes,
    /// A media type is not of the form `type/subtype`.
    #[error("malformed media type '{0}' (expected type/subtype)")]
    MalformedMediaType(String),
    /// The navigation target does not start with `/`.
    #[error("navigation target '{0}' must be an absolute path")]
    RelativeTarget(String),
}
