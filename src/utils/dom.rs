//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. A missing window or a
//! failing browser call degrades to a no-op.

use log::warn;
use web_sys::Window;

use crate::core::{Navigator, Notifier};
use crate::models::AppRoute;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window()
        && window.location().set_hash(hash).is_err()
    {
        warn!("failed to set location hash to {}", hash);
    }
}

/// Navigates by rewriting the URL hash only.
///
/// Used when no router context is present; the router picks the change up
/// through `hashchange` if it is mounted later.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashNavigator;

impl Navigator for HashNavigator {
    fn navigate(&self, path: &str) {
        AppRoute::from_path(path).push();
    }
}

// =============================================================================
// Notices
// =============================================================================

/// Show a blocking `window.alert` with `message`.
pub fn alert(message: &str) {
    if let Some(window) = window()
        && window.alert_with_message(message).is_err()
    {
        warn!("window.alert failed");
    }
}

/// Blocking notice via `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        alert(message);
    }
}
