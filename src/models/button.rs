//! Presentation options for the [`Button`](crate::components::Button) component.

/// Button size (padding, text and icon size).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Regular size (default)
    #[default]
    Base,
    /// Compact size
    Small,
}

/// Button palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonColor {
    /// Brand color; the only palette with a distinct link variant
    Primary,
    /// Dark fill (default), inverted in dark mode
    #[default]
    Dark,
    /// Light fill, inverted in dark mode
    Light,
    /// White fill
    White,
    /// No fill
    Transparent,
}

/// Visual variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled pill (default)
    #[default]
    Solid,
    /// Inline text link with a sliding icon
    Link,
}
