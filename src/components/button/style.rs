//! Class and element resolution for [`Button`](super::Button).

use crate::models::{ButtonColor, ButtonSize, ButtonVariant};
use crate::utils::ClassList;

stylance::import_crate_style!(css, "src/components/button/button.module.css");

/// Element a button renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// `<a href>`: plain link navigation
    Anchor,
    /// `<button type="button">`
    Button,
}

impl ElementKind {
    /// Links render as anchors unless the button opens a file chooser.
    pub fn resolve(has_href: bool, file_mode: bool) -> Self {
        if has_href && !file_mode {
            Self::Anchor
        } else {
            Self::Button
        }
    }
}

/// Presentation options that decide a button's classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub size: ButtonSize,
    pub color: ButtonColor,
    pub variant: ButtonVariant,
    pub block: bool,
}

impl ButtonStyle {
    /// Classes for the clickable element; `extra` goes last.
    pub fn button_class(&self, extra: Option<&str>) -> String {
        ClassList::new()
            .add(css::button)
            .add(self.size_class())
            .add(self.palette_class())
            .add_if(self.variant != ButtonVariant::Link, css::pressable)
            .add_if(self.block, css::block)
            .add_opt(extra)
            .to_string()
    }

    /// Classes for the icon wrapper.
    pub fn icon_class(&self) -> String {
        ClassList::new()
            .add(match self.size {
                ButtonSize::Base => css::iconBase,
                ButtonSize::Small => css::iconSmall,
            })
            .add_if(self.variant == ButtonVariant::Link, css::iconSlide)
            .to_string()
    }

    fn size_class(&self) -> &'static str {
        match self.size {
            ButtonSize::Base => css::sizeBase,
            ButtonSize::Small => css::sizeSmall,
        }
    }

    // Only the primary palette distinguishes solid from link.
    fn palette_class(&self) -> &'static str {
        match (self.color, self.variant) {
            (ButtonColor::Primary, ButtonVariant::Solid) => css::primarySolid,
            (ButtonColor::Primary, ButtonVariant::Link) => css::primaryLink,
            (ButtonColor::Dark, _) => css::dark,
            (ButtonColor::Light, _) => css::light,
            (ButtonColor::White, _) => css::white,
            (ButtonColor::Transparent, _) => css::transparent,
        }
    }
}
