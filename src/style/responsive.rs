//! Responsive value selection.
//!
//! A responsive value is an object keyed by breakpoint names:
//!
//! ```json
//! { "phone": 8, "tablet": 16 }
//! ```
//!
//! Selection is mobile-first: a value set at a small breakpoint applies until
//! a larger matching breakpoint overrides it. Breakpoints whose value is
//! `null` inherit from the next smaller breakpoint that defines one.

use serde_json::{Map, Value};

use super::context::StyleContext;
use super::resolve::{get_theme_value, ThemeLookup};
use crate::error::StyleError;
use crate::theme::{Breakpoints, Dimensions, Theme};

/// Returns `true` if `value` is an object keyed only by the theme's breakpoints.
///
/// Objects with any other key (a shadow offset, a transform literal) are
/// ordinary style values and are passed through untouched.
///
/// An empty object `{}` has no key outside the breakpoints, so it counts as
/// responsive and resolves to undefined: `shadowOffset: {}` writes nothing.
pub fn is_responsive_object(value: &Value, theme: &Theme) -> bool {
    match value {
        Value::Object(map) => map
            .keys()
            .all(|key| theme.breakpoints().contains(key)),
        _ => false,
    }
}

/// Selects the value of a responsive object for the given viewport.
///
/// Walks breakpoints from smallest to largest and keeps the last one that
/// both matches the viewport and defines a value. Returns `None` when no
/// matching breakpoint defines one.
pub fn value_for_dimensions<'v>(
    responsive: &'v Map<String, Value>,
    breakpoints: &Breakpoints,
    dimensions: Dimensions,
) -> Option<&'v Value> {
    breakpoints
        .iter()
        .filter(|(_, breakpoint)| breakpoint.matches(dimensions))
        .filter_map(|(name, _)| responsive.get(name).filter(|v| !v.is_null()))
        .last()
}

/// Returns the scalar a prop value stands for at the given viewport.
///
/// Plain values are returned as-is; responsive objects go through
/// [`value_for_dimensions`]. `null` is treated as undefined.
pub fn resolve_responsive<'v>(
    value: &'v Value,
    theme: &Theme,
    dimensions: Dimensions,
) -> Option<&'v Value> {
    match value {
        Value::Null => None,
        Value::Object(map) if is_responsive_object(value, theme) => {
            value_for_dimensions(map, theme.breakpoints(), dimensions)
        }
        _ => Some(value),
    }
}

/// Resolves a single, possibly responsive prop outside a composed builder.
///
/// Components that read one prop directly (an icon size, a gap used for
/// manual layout) use this to get the same breakpoint and theme semantics
/// as composed style props.
///
/// # Example
///
/// ```rust
/// use restyle::{resolve_responsive_prop, Dimensions, StyleContext, Theme};
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .breakpoint("phone", 0)
///     .breakpoint("tablet", 768)
///     .token("spacing", "s", 8)
///     .token("spacing", "l", 24);
/// let cx = StyleContext::new(&theme, Dimensions::new(1024.0, 768.0));
///
/// let gap = resolve_responsive_prop(&json!({"phone": "s", "tablet": "l"}), Some("spacing"), &cx)
///     .unwrap();
/// assert_eq!(gap, Some(json!(24)));
/// ```
pub fn resolve_responsive_prop(
    value: &Value,
    theme_key: Option<&str>,
    cx: &StyleContext<'_>,
) -> Result<Option<Value>, StyleError> {
    let selected = resolve_responsive(value, cx.theme, cx.dimensions);
    if theme_key.is_none() {
        return Ok(selected.cloned());
    }
    let lookup = ThemeLookup::new(cx.theme, cx.policy).theme_key(theme_key);
    get_theme_value(selected, &lookup)
}
