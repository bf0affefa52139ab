//! # Restyle - Theme-aware style props for UI components
//!
//! `restyle` compiles typed, theme-aware style props (spacing, color,
//! layout, ...) into flat native style objects. Prop values can name theme
//! tokens and can vary per breakpoint.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: Token categories (`colors`, `spacing`, ...) and breakpoints
//! - [`PropertyDeclaration`]: Maps one prop to a style key and theme category
//! - [`RestyleFunction`]: Turns one prop into a style fragment
//! - [`ComposedStyle`]: Many restyle functions combined into one style builder
//! - [`StyleContext`]: The theme, viewport and token policy of a render pass
//!
//! ## Quick Start
//!
//! ```rust
//! use restyle::{Dimensions, StyleContext, Theme, BOX_STYLE};
//! use serde_json::json;
//!
//! let theme = Theme::new()
//!     .breakpoint("phone", 0)
//!     .breakpoint("tablet", 768)
//!     .token("colors", "primary", "#336699")
//!     .token("spacing", "s", 8)
//!     .token("spacing", "m", 16);
//!
//! let props = json!({
//!     "bg": "primary",
//!     "padding": {"phone": "s", "tablet": "m"},
//!     "flexDirection": "row",
//!     "onPress": "handled-by-host",
//! });
//!
//! let cx = StyleContext::new(&theme, Dimensions::new(1024.0, 768.0));
//! let style = BOX_STYLE.build_style(props.as_object().unwrap(), &cx).unwrap();
//!
//! assert_eq!(
//!     json!(style),
//!     json!({"backgroundColor": "#336699", "padding": 16, "flexDirection": "row"})
//! );
//! ```
//!
//! ## Resolution
//!
//! For every prop the composed builder recognizes:
//!
//! 1. **Responsive selection**: objects keyed by breakpoint names pick the
//!    value of the largest matching breakpoint, inheriting from smaller ones
//! 2. **Theme lookup**: values of themed props are looked up as tokens;
//!    `spacing`, `colors`, `zIndices` and `borderRadii` accept raw literals
//!    too, other categories reject unknown tokens (see [`TokenPolicy`])
//! 3. **Merge**: fragments are merged in prop order, later props winning
//!
//! Props without a restyle function are ignored, so host props can be passed
//! alongside style props. [`ComposedStyle::split_props`] separates the two.
//!
//! ## Custom Props
//!
//! Listing a declaration after the built-in tables overrides the built-in
//! behavior for that prop:
//!
//! ```rust
//! use restyle::{box_restyle_functions, compose_restyle_functions, PropertyDeclaration, RestyleGroup};
//!
//! let mut groups = box_restyle_functions();
//! groups.push(RestyleGroup::from(
//!     PropertyDeclaration::new("bg").style_property("borderColor").theme_key("colors"),
//! ));
//! let outlined = compose_restyle_functions(groups);
//! assert!(outlined.recognizes("bg"));
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (composition at `debug`, per-prop work at
//! `trace`) and never installs a subscriber.

mod error;
mod restyle;
mod style;
mod theme;

pub use error::StyleError;

pub use restyle::properties;
pub use restyle::{
    box_restyle_functions, compose_restyle_functions, create_restyle_function,
    text_restyle_functions, ComposedStyle, PropertyDeclaration, RestyleFn, RestyleFunction,
    RestyleGroup, BOX_STYLE, TEXT_STYLE,
};

pub use style::{
    get_theme_value, is_responsive_object, resolve_responsive, resolve_responsive_prop,
    value_for_dimensions, Props, StyleContext, StyleFragment, StyleObject, ThemeLookup,
    TokenPolicy, TransformArgs, TransformFn, DEFAULT_LENIENT_CATEGORIES,
};

pub use theme::{
    keys, AdaptiveTheme, Breakpoint, Breakpoints, ColorMode, Dimensions, Theme, ThemeChoice,
};
