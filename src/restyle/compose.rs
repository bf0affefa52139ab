//! Composition of restyle functions into one style builder.
//!
//! [`compose_restyle_functions`] takes a nested list of restyle functions,
//! flattens it and indexes the functions by prop name. The resulting
//! [`ComposedStyle`] is built once per component definition and turns live
//! props into a flat [`StyleObject`] on every render.
//!
//! # Precedence
//!
//! - **Registration**: when two functions handle the same prop, the one
//!   registered last wins. Listing a custom declaration after the built-in
//!   tables overrides the built-in behavior.
//! - **Merging**: fragments are merged in the order props appear. When two
//!   props write the same style key, the later prop wins.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use super::function::{PropertyDeclaration, RestyleFunction};
use crate::error::StyleError;
use crate::style::{Props, StyleContext, StyleObject};

/// A restyle function or a (possibly nested) group of them.
#[derive(Debug, Clone)]
pub enum RestyleGroup {
    Single(RestyleFunction),
    Group(Vec<RestyleGroup>),
}

impl RestyleGroup {
    fn flatten_into(self, out: &mut Vec<RestyleFunction>) {
        match self {
            RestyleGroup::Single(func) => out.push(func),
            RestyleGroup::Group(groups) => {
                for group in groups {
                    group.flatten_into(out);
                }
            }
        }
    }
}

impl From<RestyleFunction> for RestyleGroup {
    fn from(func: RestyleFunction) -> Self {
        RestyleGroup::Single(func)
    }
}

impl From<PropertyDeclaration> for RestyleGroup {
    fn from(declaration: PropertyDeclaration) -> Self {
        RestyleGroup::Single(declaration.into())
    }
}

impl From<Vec<RestyleFunction>> for RestyleGroup {
    fn from(funcs: Vec<RestyleFunction>) -> Self {
        RestyleGroup::Group(funcs.into_iter().map(RestyleGroup::Single).collect())
    }
}

impl From<Vec<RestyleGroup>> for RestyleGroup {
    fn from(groups: Vec<RestyleGroup>) -> Self {
        RestyleGroup::Group(groups)
    }
}

/// A set of restyle functions indexed by the prop they handle.
///
/// Immutable after construction and `Send + Sync`, so one instance can be
/// shared by every render of a component, across threads.
///
/// # Example
///
/// ```rust
/// use restyle::properties;
/// use restyle::{compose_restyle_functions, Dimensions, RestyleGroup, StyleContext, Theme};
/// use serde_json::json;
///
/// let card = compose_restyle_functions([
///     RestyleGroup::from(properties::background_color()),
///     RestyleGroup::from(properties::spacing()),
/// ]);
///
/// let theme = Theme::new()
///     .token("colors", "surface", "#fafafa")
///     .token("spacing", "m", 16);
/// let cx = StyleContext::new(&theme, Dimensions::new(390.0, 844.0));
///
/// let props = json!({"backgroundColor": "surface", "padding": "m", "onPress": "noop"});
/// let style = card.build_style(props.as_object().unwrap(), &cx).unwrap();
///
/// assert_eq!(json!(style), json!({"backgroundColor": "#fafafa", "padding": 16}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComposedStyle {
    properties: Vec<String>,
    properties_map: HashSet<String>,
    funcs: HashMap<String, RestyleFunction>,
}

/// Composes restyle functions into a [`ComposedStyle`].
///
/// Nested groups are flattened in order. Duplicate prop names overwrite
/// earlier registrations.
pub fn compose_restyle_functions<I, G>(groups: I) -> ComposedStyle
where
    I: IntoIterator<Item = G>,
    G: Into<RestyleGroup>,
{
    let mut flat = Vec::new();
    for group in groups {
        group.into().flatten_into(&mut flat);
    }

    let mut composed = ComposedStyle::default();
    let mut overridden = 0usize;
    for func in flat {
        let property = func.property().to_string();
        if composed.properties_map.insert(property.clone()) {
            composed.properties.push(property.clone());
        } else {
            overridden += 1;
            trace!(property = %property, "restyle function overrides an earlier registration");
        }
        composed.funcs.insert(property, func);
    }

    debug!(
        properties = composed.properties.len(),
        overridden, "composed restyle functions"
    );
    composed
}

impl ComposedStyle {
    /// Builds the style object for `props`.
    ///
    /// Props are visited in their own order. Props without a restyle
    /// function are skipped, so host-native props can travel alongside
    /// style props. The first error aborts the whole build.
    #[instrument(level = "trace", skip_all, fields(props = props.len()))]
    pub fn build_style(
        &self,
        props: &Props,
        cx: &StyleContext<'_>,
    ) -> Result<StyleObject, StyleError> {
        let mut style = StyleObject::new();
        for key in props.keys() {
            let Some(func) = self.funcs.get(key) else {
                trace!(prop = %key, "no restyle function for prop; skipped");
                continue;
            };
            for (style_key, value) in func.apply(props, cx)? {
                style.insert(style_key, value);
            }
        }
        Ok(style)
    }

    /// Builds the style object from a typed props value.
    ///
    /// `props` must serialize to a JSON object. Use
    /// `#[serde(skip_serializing_if = "Option::is_none")]` (or rely on `null`
    /// being treated as undefined) for optional fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use restyle::{Dimensions, StyleContext, Theme, BOX_STYLE};
    /// use serde::Serialize;
    /// use serde_json::json;
    ///
    /// #[derive(Serialize)]
    /// #[serde(rename_all = "camelCase")]
    /// struct CardProps {
    ///     background_color: &'static str,
    ///     margin_top: Option<u32>,
    /// }
    ///
    /// let theme = Theme::new().token("colors", "surface", "#fafafa");
    /// let cx = StyleContext::new(&theme, Dimensions::default());
    ///
    /// let style = BOX_STYLE
    ///     .build_style_from(&CardProps { background_color: "surface", margin_top: None }, &cx)
    ///     .unwrap();
    /// assert_eq!(json!(style), json!({"backgroundColor": "#fafafa"}));
    /// ```
    pub fn build_style_from<T: Serialize + ?Sized>(
        &self,
        props: &T,
        cx: &StyleContext<'_>,
    ) -> Result<StyleObject, StyleError> {
        match serde_json::to_value(props) {
            Ok(Value::Object(map)) => self.build_style(&map, cx),
            Ok(other) => Err(StyleError::InvalidProps {
                message: format!("expected an object, got {}", value_kind(&other)),
            }),
            Err(e) => Err(StyleError::InvalidProps {
                message: e.to_string(),
            }),
        }
    }

    /// Splits props into (style props, remaining host props).
    ///
    /// Both halves keep the original prop order.
    pub fn split_props(&self, props: Props) -> (Props, Props) {
        props
            .into_iter()
            .partition(|(key, _)| self.properties_map.contains(key))
    }

    /// Recognized prop names in first-registration order.
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Recognized prop names as a set.
    pub fn properties_map(&self) -> &HashSet<String> {
        &self.properties_map
    }

    /// Returns `true` if `prop` has a restyle function.
    pub fn recognizes(&self, prop: &str) -> bool {
        self.properties_map.contains(prop)
    }

    /// Number of recognized props.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restyle::function::create_restyle_function;
    use crate::theme::{Dimensions, Theme};
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap()
    }

    fn theme() -> Theme {
        Theme::new()
            .breakpoint("phone", 0)
            .breakpoint("tablet", 768)
            .token("colors", "primary", "#000")
            .token("spacing", "m", 16)
            .token("sizes", "card", 320)
    }

    fn decl(prop: &str, output: &str) -> RestyleFunction {
        create_restyle_function(PropertyDeclaration::new(prop).style_property(output))
    }

    #[test]
    fn test_last_registration_wins() {
        let composed = compose_restyle_functions([decl("x", "left"), decl("x", "right")]);
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));

        let style = composed.build_style(&props(json!({"x": 5})), &cx).unwrap();
        assert_eq!(style, props(json!({"right": 5})));
        assert_eq!(composed.properties(), &["x".to_string()]);
        assert_eq!(composed.len(), 1);
    }

    #[test]
    fn test_later_prop_wins_on_key_collision() {
        let composed = compose_restyle_functions([
            decl("bg", "backgroundColor"),
            decl("backgroundColor", "backgroundColor"),
        ]);
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));

        let style = composed
            .build_style(&props(json!({"backgroundColor": "red", "bg": "blue"})), &cx)
            .unwrap();
        assert_eq!(style, props(json!({"backgroundColor": "blue"})));

        let style = composed
            .build_style(&props(json!({"bg": "blue", "backgroundColor": "red"})), &cx)
            .unwrap();
        assert_eq!(style, props(json!({"backgroundColor": "red"})));
    }

    #[test]
    fn test_unrecognized_props_are_skipped() {
        let composed = compose_restyle_functions([decl("width", "width")]);
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));

        let style = composed
            .build_style(
                &props(json!({"testID": "card", "width": 100, "onPress": null})),
                &cx,
            )
            .unwrap();
        assert_eq!(style, props(json!({"width": 100})));
    }

    #[test]
    fn test_nested_groups_flatten_in_order() {
        let inner = RestyleGroup::from(vec![decl("a", "alpha"), decl("b", "beta")]);
        let outer = RestyleGroup::from(vec![inner, RestyleGroup::from(decl("c", "gamma"))]);
        let composed = compose_restyle_functions([outer, RestyleGroup::from(decl("a", "omega"))]);

        assert_eq!(composed.properties(), &["a", "b", "c"]);
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let style = composed.build_style(&props(json!({"a": 1})), &cx).unwrap();
        assert_eq!(style, props(json!({"omega": 1})));
    }

    #[test]
    fn test_declarations_compose_directly() {
        let composed = compose_restyle_functions([
            PropertyDeclaration::new("margin").theme_key("spacing"),
            PropertyDeclaration::new("color").theme_key("colors"),
        ]);
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let style = composed
            .build_style(&props(json!({"margin": "m", "color": "primary"})), &cx)
            .unwrap();
        assert_eq!(style, props(json!({"margin": 16, "color": "#000"})));
    }

    #[test]
    fn test_missing_token_fails_whole_build() {
        let composed = compose_restyle_functions([
            PropertyDeclaration::new("margin").theme_key("spacing"),
            PropertyDeclaration::new("width").theme_key("sizes"),
        ]);
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let err = composed
            .build_style(&props(json!({"margin": "m", "width": "poster"})), &cx)
            .unwrap_err();
        assert_eq!(
            err,
            StyleError::MissingThemeToken {
                value: "poster".to_string(),
                theme_key: "sizes".to_string(),
            }
        );
    }

    #[test]
    fn test_output_follows_prop_order() {
        let composed = compose_restyle_functions([decl("a", "a"), decl("b", "b"), decl("c", "c")]);
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let style = composed
            .build_style(&props(json!({"c": 3, "a": 1, "b": 2})), &cx)
            .unwrap();
        let keys: Vec<_> = style.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_split_props() {
        let composed = compose_restyle_functions([decl("width", "width"), decl("bg", "backgroundColor")]);
        let (style_props, rest) =
            composed.split_props(props(json!({"onPress": 1, "width": 10, "testID": "x", "bg": "red"})));

        assert_eq!(style_props, props(json!({"width": 10, "bg": "red"})));
        assert_eq!(rest, props(json!({"onPress": 1, "testID": "x"})));
    }

    #[test]
    fn test_build_style_from_rejects_non_objects() {
        let composed = compose_restyle_functions([decl("width", "width")]);
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let err = composed.build_style_from(&[1, 2, 3], &cx).unwrap_err();
        assert!(matches!(err, StyleError::InvalidProps { .. }));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_empty_composition() {
        let composed = compose_restyle_functions(Vec::<RestyleGroup>::new());
        assert!(composed.is_empty());
        assert!(!composed.recognizes("width"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::restyle::function::create_restyle_function;
    use crate::theme::{Dimensions, Theme};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn plain_values_pass_through(
            names in prop::collection::btree_set("[a-z]{1,8}", 1..8),
            value in any::<i64>(),
        ) {
            let composed = compose_restyle_functions(
                names.iter().map(|n| create_restyle_function(PropertyDeclaration::new(n.as_str()))),
            );
            let theme = Theme::new();
            let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));

            let props: Props = names.iter().map(|n| (n.clone(), Value::from(value))).collect();
            let style = composed.build_style(&props, &cx).unwrap();

            for name in &names {
                prop_assert_eq!(style.get(name), Some(&Value::from(value)));
            }

            // Same inputs, same output
            let again = composed.build_style(&props, &cx).unwrap();
            prop_assert_eq!(style, again);
        }

        #[test]
        fn last_registration_always_wins(outputs in prop::collection::vec("[a-z]{1,6}", 1..6)) {
            let composed = compose_restyle_functions(
                outputs
                    .iter()
                    .map(|o| create_restyle_function(PropertyDeclaration::new("x").style_property(o.as_str()))),
            );
            let theme = Theme::new();
            let cx = StyleContext::new(&theme, Dimensions::default());

            let mut props = Props::new();
            props.insert("x".to_string(), Value::from(1));
            let style = composed.build_style(&props, &cx).unwrap();

            prop_assert_eq!(style.len(), 1);
            prop_assert_eq!(style.get(outputs.last().unwrap()), Some(&Value::from(1)));
        }
    }
}
