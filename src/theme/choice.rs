//! Theme selection for a render pass.

use super::adaptive::{AdaptiveTheme, ColorMode};
use super::theme::Theme;

/// Reference to either a static theme or an adaptive theme.
///
/// This enum lets hosts hand either a fixed theme or a light/dark pair to
/// the code that builds a [`StyleContext`](crate::StyleContext).
#[derive(Debug, Clone, Copy)]
pub enum ThemeChoice<'a> {
    /// A fixed theme that doesn't change based on color mode.
    Theme(&'a Theme),
    /// A light/dark pair, selected by the color mode passed to [`resolve`](Self::resolve).
    Adaptive(&'a AdaptiveTheme),
}

impl<'a> ThemeChoice<'a> {
    /// Resolves to a concrete theme for `mode`.
    ///
    /// Fixed themes ignore the mode.
    pub fn resolve(&self, mode: ColorMode) -> &'a Theme {
        match *self {
            ThemeChoice::Theme(theme) => theme,
            ThemeChoice::Adaptive(adaptive) => adaptive.theme_for(mode),
        }
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}
