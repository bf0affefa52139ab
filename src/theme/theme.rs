//! Theme struct holding token categories and breakpoints.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;

use super::breakpoint::{Breakpoint, Breakpoints};
use crate::error::StyleError;

/// A design-token theme used to resolve style props.
///
/// A theme maps category names (`colors`, `spacing`, `borderRadii`,
/// `zIndices`, ...) to named tokens, and carries the breakpoint table used
/// for responsive values. Themes are read-only while styles are built.
///
/// # Example
///
/// ```rust
/// use restyle::Theme;
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .breakpoint("phone", 0)
///     .breakpoint("tablet", 768)
///     .token("colors", "primary", "#336699")
///     .token("spacing", "m", 16);
///
/// assert_eq!(theme.token_value("colors", "primary"), Some(&json!("#336699")));
/// assert!(theme.breakpoints().contains("tablet"));
/// ```
///
/// Themes can also be loaded from YAML or JSON documents, where every
/// top-level key other than `breakpoints` is a token category:
///
/// ```rust
/// use restyle::Theme;
/// use serde_json::json;
///
/// let theme = Theme::from_yaml(r##"
/// breakpoints:
///   phone: 0
///   tablet: 768
/// colors:
///   primary: "#336699"
/// spacing:
///   s: 8
///   m: 16
/// "##).unwrap();
///
/// assert_eq!(theme.token_value("spacing", "m"), Some(&json!(16)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    breakpoints: Breakpoints,
    #[serde(flatten)]
    categories: BTreeMap<String, Value>,
}

impl Theme {
    /// Creates an empty theme with no breakpoints and no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a width breakpoint, returning the updated theme for chaining.
    pub fn breakpoint<W: Into<f64>>(mut self, name: &str, min_width: W) -> Self {
        self.breakpoints
            .insert(name, Breakpoint::Width(min_width.into()));
        self
    }

    /// Adds a breakpoint that requires both a minimum width and height.
    pub fn breakpoint_size(mut self, name: &str, width: f64, height: f64) -> Self {
        self.breakpoints
            .insert(name, Breakpoint::Size { width, height });
        self
    }

    /// Adds a single token to a category, creating the category if needed.
    pub fn token<V: Into<Value>>(mut self, category: &str, name: &str, value: V) -> Self {
        let slot = self
            .categories
            .entry(category.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(tokens) = slot {
            tokens.insert(name.to_string(), value.into());
        }
        self
    }

    /// Adds a whole category of tokens at once.
    pub fn category<I, K, V>(self, category: &str, tokens: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        tokens.into_iter().fold(self, |theme, (name, value)| {
            theme.token(category, name.as_ref(), value)
        })
    }

    /// Returns the breakpoint table.
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Returns the tokens of a category, if it exists and is a mapping.
    pub fn category_tokens(&self, category: &str) -> Option<&Map<String, Value>> {
        self.categories.get(category).and_then(Value::as_object)
    }

    /// Returns `true` if the theme defines the category.
    pub fn has_category(&self, category: &str) -> bool {
        self.category_tokens(category).is_some()
    }

    /// Looks up `theme[category][name]`.
    pub fn token_value(&self, category: &str, name: &str) -> Option<&Value> {
        self.category_tokens(category)
            .and_then(|tokens| tokens.get(name))
    }

    /// Iterates category names in sorted order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Parses a theme from a YAML document.
    ///
    /// Scalar mapping keys are read as strings, so `zIndices: {0: 0, 1: 10}`
    /// defines tokens `"0"` and `"1"`.
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        let parse_error = |e: serde_yaml::Error| StyleError::ThemeParse {
            format: "yaml",
            message: e.to_string(),
        };
        let document: YamlValue = serde_yaml::from_str(source).map_err(parse_error)?;
        serde_yaml::from_value(stringify_keys(document)).map_err(parse_error)
    }

    /// Parses a theme from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        serde_json::from_str(source).map_err(|e| StyleError::ThemeParse {
            format: "json",
            message: e.to_string(),
        })
    }

    /// Loads a theme file, choosing the parser by extension.
    ///
    /// `.json` files are parsed as JSON; everything else (`.yaml`, `.yml`,
    /// or no extension) is parsed as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| StyleError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&source),
            _ => Self::from_yaml(&source),
        }
    }
}

/// Rewrites number and boolean mapping keys as strings, recursively.
fn stringify_keys(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Mapping(mapping) => YamlValue::Mapping(
            mapping
                .into_iter()
                .map(|(key, value)| (string_key(key), stringify_keys(value)))
                .collect(),
        ),
        YamlValue::Sequence(items) => {
            YamlValue::Sequence(items.into_iter().map(stringify_keys).collect())
        }
        other => other,
    }
}

fn string_key(key: YamlValue) -> YamlValue {
    match key {
        YamlValue::Number(n) => YamlValue::String(n.to_string()),
        YamlValue::Bool(b) => YamlValue::String(b.to_string()),
        other => other,
    }
}
