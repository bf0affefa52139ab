//! Light/dark theme pairs.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Queries the operating system for its current color mode.
    ///
    /// This probes the OS every time it is called. Hosts call it when the
    /// appearance may have changed and pass the result along; style
    /// resolution itself never detects anything. Unknown OS settings map to
    /// [`ColorMode::Light`].
    pub fn detect() -> Self {
        match detect_os_theme() {
            OsThemeMode::Dark => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }
}

/// A pair of themes, one per color mode.
///
/// Both variants normally share a breakpoint table and differ in their
/// `colors` category. The mode is always chosen by the caller.
///
/// # Example
///
/// ```rust
/// use restyle::{AdaptiveTheme, ColorMode, Theme};
/// use serde_json::json;
///
/// let light = Theme::new().token("colors", "background", "#ffffff");
/// let dark = Theme::new().token("colors", "background", "#000000");
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// let theme = adaptive.theme_for(ColorMode::Dark);
/// assert_eq!(theme.token_value("colors", "background"), Some(&json!("#000000")));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the variant for a color mode.
    pub fn theme_for(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}
