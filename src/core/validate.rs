//! Selection validation for file-mode buttons.
//!
//! Once the chooser closes, the picked file's declared media type decides
//! the outcome. Only the declared type is inspected; file content is never
//! read.
//!
//! ```text
//! Idle ──(selection)──┬─> Accepted ──navigate──> Idle
//!                     └─> Rejected ──notify────> Idle
//! ```
//!
//! A dismissed chooser produces no selection and leaves everything as it was.

use log::debug;

use super::dispatch::FileChooser;
use super::error::PolicyError;
use crate::config::{ACCEPTED_LABEL, ACCEPTED_MEDIA_TYPE, UPLOAD_PATH};

/// Routing service used after an accepted selection.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Blocking user notice used after a rejected selection.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// The one file a chooser yielded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the browser.
    pub name: String,
    /// Declared media type (may be empty when the browser cannot tell).
    pub media_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
        }
    }
}

/// Result of validating a non-empty selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Type accepted; navigate to `target`.
    Accepted { target: String },
    /// Type refused; show `reason` to the user.
    Rejected { reason: String },
}

/// Which media types a chooser accepts and where an accepted pick leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptPolicy {
    accepted: Vec<String>,
    label: String,
    target: String,
}

impl AcceptPolicy {
    /// Builds a policy, checking every media type and the target path.
    ///
    /// `label` names the accepted kind in the rejection notice
    /// (`"Only {label} files are allowed."`).
    pub fn new<I, S>(
        accepted: I,
        label: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let accepted: Vec<String> = accepted.into_iter().map(Into::into).collect();
        if accepted.is_empty() {
            return Err(PolicyError::NoAcceptedTypes);
        }
        if let Some(bad) = accepted.iter().find(|t| !is_media_type(t)) {
            return Err(PolicyError::MalformedMediaType(bad.clone()));
        }

        let target = target.into();
        if !target.starts_with('/') {
            return Err(PolicyError::RelativeTarget(target));
        }

        Ok(Self {
            accepted,
            label: label.into(),
            target,
        })
    }

    /// The upload gate used by every file-mode button: PDF only, then `/upload`.
    pub fn pdf_upload() -> Self {
        Self {
            accepted: vec![ACCEPTED_MEDIA_TYPE.to_string()],
            label: ACCEPTED_LABEL.to_string(),
            target: UPLOAD_PATH.to_string(),
        }
    }

    /// Exact, case-sensitive match against the accepted set.
    pub fn accepts(&self, media_type: &str) -> bool {
        self.accepted.iter().any(|t| t == media_type)
    }

    /// Value for the chooser's `accept` attribute.
    pub fn accept_attr(&self) -> String {
        self.accepted.join(",")
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn rejection_notice(&self) -> String {
        format!("Only {} files are allowed.", self.label)
    }

    /// Validates a selection. `None` means the chooser was dismissed.
    pub fn validate(&self, selection: Option<&SelectedFile>) -> Option<ValidationOutcome> {
        let file = selection?;
        let outcome = if self.accepts(&file.media_type) {
            ValidationOutcome::Accepted {
                target: self.target.clone(),
            }
        } else {
            ValidationOutcome::Rejected {
                reason: self.rejection_notice(),
            }
        };
        Some(outcome)
    }
}

impl Default for AcceptPolicy {
    fn default() -> Self {
        Self::pdf_upload()
    }
}

fn is_media_type(value: &str) -> bool {
    match value.split_once('/') {
        Some((kind, subtype)) => {
            !kind.is_empty()
                && !subtype.is_empty()
                && !subtype.contains('/')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Runs one selection cycle: validate, then navigate or notify.
///
/// After any non-empty selection the chooser is reset, so picking the same
/// file again is validated again.
pub fn handle_selection<C, N, A>(
    policy: &AcceptPolicy,
    selection: Option<SelectedFile>,
    chooser: &C,
    navigator: &N,
    notifier: &A,
) -> Option<ValidationOutcome>
where
    C: FileChooser + ?Sized,
    N: Navigator + ?Sized,
    A: Notifier + ?Sized,
{
    let outcome = policy.validate(selection.as_ref())?;
    chooser.reset();

    match &outcome {
        ValidationOutcome::Accepted { target } => {
            debug!("selection accepted, navigating to {}", target);
            navigator.navigate(target);
        }
        ValidationOutcome::Rejected { reason } => notifier.notify(reason),
    }

    Some(outcome)
}
