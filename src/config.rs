//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "docgate";

/// Tagline shown under the application name.
pub const APP_TAGLINE: &str = "Eligibility and compliance review for tender documents";

// =============================================================================
// Upload Gate
// =============================================================================

/// The only media type a file-mode button accepts.
pub const ACCEPTED_MEDIA_TYPE: &str = "application/pdf";

/// Human-readable name of the accepted document kind, used in notices.
pub const ACCEPTED_LABEL: &str = "PDF";

/// Path navigated to once an accepted document has been picked.
pub const UPLOAD_PATH: &str = "/upload";

// =============================================================================
// Routes
// =============================================================================

/// Path of the landing page.
pub const HOME_PATH: &str = "/";

/// Path of the pricing page.
pub const PRICING_PATH: &str = "/pricing";

// =============================================================================
// Logging
// =============================================================================

/// Console log level: verbose in debug builds, quiet in release.
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
