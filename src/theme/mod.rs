//! Theme system: token categories, breakpoints, and light/dark selection.
//!
//! This module provides:
//!
//! - [`Theme`]: Token categories plus a breakpoint table, with a fluent builder API
//! - [`Breakpoints`] / [`Breakpoint`]: Named viewport thresholds for responsive values
//! - [`Dimensions`]: The viewport snapshot a render pass is resolved against
//! - [`AdaptiveTheme`] / [`ColorMode`]: Light/dark theme pairs, selected by an explicit mode
//! - [`ThemeChoice`]: Reference type for selecting themes at render time
//!
//! The well-known category names are collected in [`keys`].

mod adaptive;
mod breakpoint;
mod choice;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{AdaptiveTheme, ColorMode};
pub use breakpoint::{Breakpoint, Breakpoints, Dimensions};
pub use choice::ThemeChoice;
pub use theme::Theme;

/// Well-known theme category names used by the built-in property tables.
pub mod keys {
    pub const COLORS: &str = "colors";
    pub const SPACING: &str = "spacing";
    pub const BORDER_RADII: &str = "borderRadii";
    pub const Z_INDICES: &str = "zIndices";
}
