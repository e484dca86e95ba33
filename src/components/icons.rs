//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuArrowRight as ArrowRight, LuBookOpen as FilePdf,
        LuUpload as Upload,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as ArrowLeft, BsArrowRight as ArrowRight, BsFileEarmarkPdf as FilePdf,
        BsUpload as Upload,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(UPLOAD, Upload);
