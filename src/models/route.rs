//! Hash-based routes for the demo shell.
//!
//! URL format: `#/path` (e.g. `#/upload`, `#/pricing`).

use crate::config::{HOME_PATH, PRICING_PATH, UPLOAD_PATH};
use crate::utils::dom;

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page: `#/` or empty hash
    Home,
    /// Shown after an accepted document pick: `#/upload`
    Upload,
    /// Pricing page: `#/pricing`
    Pricing,
    /// Anything else (path without leading slash)
    NotFound(String),
}

impl AppRoute {
    /// Parse an absolute path like `/upload`.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Self::Home;
        }

        let absolute = format!("/{}", path);
        if absolute == UPLOAD_PATH {
            Self::Upload
        } else if absolute == PRICING_PATH {
            Self::Pricing
        } else {
            Self::NotFound(path.to_string())
        }
    }

    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        Self::from_path(hash.trim_start_matches('#'))
    }

    /// Absolute path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => HOME_PATH.to_string(),
            Self::Upload => UPLOAD_PATH.to_string(),
            Self::Pricing => PRICING_PATH.to_string(),
            Self::NotFound(path) => format!("/{}", path),
        }
    }

    /// Convert route to URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Update the browser URL to this route (fires `hashchange`).
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }
}
