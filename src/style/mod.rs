//! Value resolution: theme tokens, responsive values and the render context.
//!
//! This module provides the leaf resolvers used by every restyle function:
//!
//! - [`get_theme_value`]: Token lookup with a [`TokenPolicy`] for unknown values
//! - [`resolve_responsive`]: Breakpoint selection for responsive objects
//! - [`StyleContext`]: The theme/viewport/policy snapshot for one render pass
//!
//! Props and styles are plain JSON objects; [`Props`], [`StyleFragment`] and
//! [`StyleObject`] name their roles.

mod context;
mod resolve;
mod responsive;

pub use context::StyleContext;
pub use resolve::{
    get_theme_value, ThemeLookup, TokenPolicy, TransformArgs, TransformFn,
    DEFAULT_LENIENT_CATEGORIES,
};
pub use responsive::{
    is_responsive_object, resolve_responsive, resolve_responsive_prop, value_for_dimensions,
};

use serde_json::{Map, Value};

/// A component's props, in the order they were given.
pub type Props = Map<String, Value>;

/// The partial style produced by one restyle function.
pub type StyleFragment = Map<String, Value>;

/// The merged, flat style handed to the host framework.
pub type StyleObject = Map<String, Value>;
