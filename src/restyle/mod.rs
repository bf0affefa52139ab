//! Restyle functions and their composition.
//!
//! This module provides the prop-composition engine:
//!
//! - [`PropertyDeclaration`]: How one prop maps onto the native style
//! - [`RestyleFunction`]: The function built from a declaration (or a custom closure)
//! - [`compose_restyle_functions`] / [`ComposedStyle`]: Many functions combined
//!   into one style builder
//! - [`properties`]: The built-in property tables
//! - [`BOX_STYLE`] / [`TEXT_STYLE`]: Ready-made builders for box and text components

mod compose;
mod function;
pub mod properties;
mod presets;

pub use compose::{compose_restyle_functions, ComposedStyle, RestyleGroup};
pub use function::{create_restyle_function, PropertyDeclaration, RestyleFn, RestyleFunction};
pub use presets::{box_restyle_functions, text_restyle_functions, BOX_STYLE, TEXT_STYLE};
