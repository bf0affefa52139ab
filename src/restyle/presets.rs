//! Prop sets for the standard box and text components.

use once_cell::sync::Lazy;

use super::compose::{compose_restyle_functions, ComposedStyle, RestyleGroup};
use super::properties;

/// Restyle functions accepted by box (view) components.
pub fn box_restyle_functions() -> Vec<RestyleGroup> {
    vec![
        properties::background_color().into(),
        properties::background_color_shorthand().into(),
        properties::opacity().into(),
        properties::visible().into(),
        properties::transform().into(),
        properties::layout().into(),
        properties::spacing().into(),
        properties::spacing_shorthand().into(),
        properties::border().into(),
        properties::shadow().into(),
        properties::position().into(),
    ]
}

/// Restyle functions accepted by text components.
pub fn text_restyle_functions() -> Vec<RestyleGroup> {
    vec![
        properties::color().into(),
        properties::opacity().into(),
        properties::visible().into(),
        properties::typography().into(),
        properties::spacing().into(),
        properties::spacing_shorthand().into(),
        properties::text_shadow().into(),
    ]
}

/// Shared builder for box components.
pub static BOX_STYLE: Lazy<ComposedStyle> =
    Lazy::new(|| compose_restyle_functions(box_restyle_functions()));

/// Shared builder for text components.
pub static TEXT_STYLE: Lazy<ComposedStyle> =
    Lazy::new(|| compose_restyle_functions(text_restyle_functions()));
