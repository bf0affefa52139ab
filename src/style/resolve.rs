//! Theme token resolution for prop values.
//!
//! [`get_theme_value`] turns a raw prop value into a concrete style value:
//!
//! 1. A transform, when present, decides the result on its own.
//! 2. Otherwise the value is looked up as a token in its theme category.
//! 3. Unknown tokens fall back to the raw value in lenient categories and
//!    fail with [`StyleError::MissingThemeToken`] everywhere else.
//!
//! Which categories are lenient is decided by the [`TokenPolicy`].

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use crate::error::StyleError;
use crate::theme::{keys, Theme};

/// Categories that accept raw literals alongside theme tokens by default.
///
/// A spacing prop may name a token (`"m"`) or give a pixel value (`12`);
/// a color prop may name a token (`"primary"`) or give a color (`"#fff"`).
pub const DEFAULT_LENIENT_CATEGORIES: &[&str] = &[
    keys::SPACING,
    keys::COLORS,
    keys::Z_INDICES,
    keys::BORDER_RADII,
];

/// Decides what happens when a value is not a token of its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenPolicy {
    /// Only the listed categories fall back to the raw value; unknown
    /// values in any other category are an error.
    Strict { lenient: BTreeSet<String> },
    /// Every category falls back to the raw value.
    Lenient,
}

impl TokenPolicy {
    /// Strict policy with the [`DEFAULT_LENIENT_CATEGORIES`].
    pub fn strict() -> Self {
        Self::strict_with(DEFAULT_LENIENT_CATEGORIES.iter().copied())
    }

    /// Strict policy with a custom set of lenient categories.
    pub fn strict_with<I, S>(lenient: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenPolicy::Strict {
            lenient: lenient.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if unknown values in `category` pass through unchanged.
    pub fn allows_literal(&self, category: &str) -> bool {
        match self {
            TokenPolicy::Strict { lenient } => lenient.contains(category),
            TokenPolicy::Lenient => true,
        }
    }
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Arguments handed to a [`TransformFn`].
#[derive(Debug, Clone, Copy)]
pub struct TransformArgs<'a> {
    /// The (responsive-selected) prop value, `None` when undefined.
    pub value: Option<&'a Value>,
    pub theme: &'a Theme,
    pub theme_key: Option<&'a str>,
}

/// A custom value mapping that replaces theme lookup entirely.
///
/// Returning `None` leaves the output key unset.
pub type TransformFn = dyn Fn(TransformArgs<'_>) -> Option<Value> + Send + Sync;

/// Everything [`get_theme_value`] needs besides the value itself.
#[derive(Clone, Copy)]
pub struct ThemeLookup<'a> {
    pub theme: &'a Theme,
    pub theme_key: Option<&'a str>,
    pub transform: Option<&'a TransformFn>,
    pub policy: &'a TokenPolicy,
}

impl<'a> ThemeLookup<'a> {
    /// Creates a lookup with no theme key, no transform and the given policy.
    pub fn new(theme: &'a Theme, policy: &'a TokenPolicy) -> Self {
        Self {
            theme,
            theme_key: None,
            transform: None,
            policy,
        }
    }

    /// Sets the theme category to look tokens up in.
    pub fn theme_key(mut self, theme_key: Option<&'a str>) -> Self {
        self.theme_key = theme_key;
        self
    }

    /// Sets a transform, which takes over resolution entirely.
    pub fn transform(mut self, transform: Option<&'a TransformFn>) -> Self {
        self.transform = transform;
        self
    }
}

impl std::fmt::Debug for ThemeLookup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeLookup")
            .field("theme_key", &self.theme_key)
            .field("transform", &self.transform.is_some())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Resolves a prop value against the theme.
///
/// # Example
///
/// ```rust
/// use restyle::{get_theme_value, Theme, ThemeLookup, TokenPolicy};
/// use serde_json::json;
///
/// let theme = Theme::new().token("colors", "primary", "#000");
/// let policy = TokenPolicy::default();
/// let lookup = ThemeLookup::new(&theme, &policy).theme_key(Some("colors"));
///
/// // Tokens resolve through the theme
/// let value = get_theme_value(Some(&json!("primary")), &lookup).unwrap();
/// assert_eq!(value, Some(json!("#000")));
///
/// // Colors are lenient: literals pass through
/// let value = get_theme_value(Some(&json!("#fff")), &lookup).unwrap();
/// assert_eq!(value, Some(json!("#fff")));
/// ```
pub fn get_theme_value(
    value: Option<&Value>,
    lookup: &ThemeLookup<'_>,
) -> Result<Option<Value>, StyleError> {
    if let Some(transform) = lookup.transform {
        return Ok(transform(TransformArgs {
            value,
            theme: lookup.theme,
            theme_key: lookup.theme_key,
        }));
    }

    let (Some(theme_key), Some(value)) = (lookup.theme_key, value) else {
        return Ok(value.cloned());
    };
    let Some(tokens) = lookup.theme.category_tokens(theme_key) else {
        return Ok(Some(value.clone()));
    };
    let Some(name) = token_name(value) else {
        return Ok(Some(value.clone()));
    };

    if let Some(resolved) = tokens.get(name.as_ref()) {
        return Ok(Some(resolved.clone()));
    }
    if lookup.policy.allows_literal(theme_key) {
        return Ok(Some(value.clone()));
    }

    debug!(token = %name, theme_key, "theme token missing from strict category");
    Err(StyleError::MissingThemeToken {
        value: name.into_owned(),
        theme_key: theme_key.to_string(),
    })
}

/// The token name a value would be looked up under.
///
/// Only strings and numbers can name tokens; other values are never tokens.
fn token_name(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}
