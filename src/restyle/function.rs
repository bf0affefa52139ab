//! Restyle functions and the declarations they are built from.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use crate::error::StyleError;
use crate::style::{
    get_theme_value, resolve_responsive, Props, StyleContext, StyleFragment, ThemeLookup,
    TransformArgs, TransformFn,
};

/// The signature shared by every restyle function.
pub type RestyleFn =
    dyn Fn(&Props, &StyleContext<'_>) -> Result<StyleFragment, StyleError> + Send + Sync;

/// A named function mapping one prop to a style fragment.
///
/// Most restyle functions come from a [`PropertyDeclaration`]; custom ones
/// can wrap any closure with [`RestyleFunction::new`]. Cloning is cheap.
#[derive(Clone)]
pub struct RestyleFunction {
    property: Arc<str>,
    func: Arc<RestyleFn>,
}

impl RestyleFunction {
    /// Wraps a custom closure as the restyle function for `property`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use restyle::{Dimensions, Props, RestyleFunction, StyleContext, StyleFragment, Theme};
    /// use serde_json::json;
    ///
    /// let elevated = RestyleFunction::new("elevated", |props: &Props, _cx: &StyleContext<'_>| {
    ///     let mut fragment = StyleFragment::new();
    ///     if props.get("elevated") == Some(&json!(true)) {
    ///         fragment.insert("shadowOpacity".into(), json!(0.3));
    ///         fragment.insert("elevation".into(), json!(4));
    ///     }
    ///     Ok(fragment)
    /// });
    ///
    /// let theme = Theme::new();
    /// let cx = StyleContext::new(&theme, Dimensions::default());
    /// let props = json!({"elevated": true}).as_object().cloned().unwrap();
    /// assert_eq!(elevated.apply(&props, &cx).unwrap().len(), 2);
    /// ```
    pub fn new<F>(property: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&Props, &StyleContext<'_>) -> Result<StyleFragment, StyleError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            property: property.into(),
            func: Arc::new(func),
        }
    }

    /// The prop name this function handles.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Produces this function's style fragment for `props`.
    pub fn apply(&self, props: &Props, cx: &StyleContext<'_>) -> Result<StyleFragment, StyleError> {
        (self.func)(props, cx)
    }
}

impl fmt::Debug for RestyleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestyleFunction")
            .field("property", &self.property)
            .finish_non_exhaustive()
    }
}

impl From<PropertyDeclaration> for RestyleFunction {
    fn from(declaration: PropertyDeclaration) -> Self {
        create_restyle_function(declaration)
    }
}

/// Declares how one prop maps onto the native style.
///
/// # Example
///
/// ```rust
/// use restyle::PropertyDeclaration;
///
/// // `bg="primary"` sets `backgroundColor` from `theme.colors.primary`
/// let bg = PropertyDeclaration::new("bg")
///     .style_property("backgroundColor")
///     .theme_key("colors");
///
/// assert_eq!(bg.property(), "bg");
/// assert_eq!(bg.output_property(), "backgroundColor");
/// ```
#[derive(Clone)]
pub struct PropertyDeclaration {
    property: String,
    style_property: Option<String>,
    theme_key: Option<String>,
    transform: Option<Arc<TransformFn>>,
    expand: bool,
}

impl PropertyDeclaration {
    /// Declares a prop whose output key is the prop name itself.
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            style_property: None,
            theme_key: None,
            transform: None,
            expand: false,
        }
    }

    /// Writes the resolved value under a different style key.
    pub fn style_property(mut self, style_property: impl Into<String>) -> Self {
        self.style_property = Some(style_property.into());
        self
    }

    /// Resolves values as tokens of this theme category.
    pub fn theme_key(mut self, theme_key: impl Into<String>) -> Self {
        self.theme_key = Some(theme_key.into());
        self
    }

    /// Replaces theme lookup with a custom mapping.
    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(TransformArgs<'_>) -> Option<Value> + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// Merges the transform's object result into the fragment instead of
    /// writing a single key.
    pub fn expand(mut self) -> Self {
        self.expand = true;
        self
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    /// The style key written by a non-expanding declaration.
    pub fn output_property(&self) -> &str {
        self.style_property.as_deref().unwrap_or(&self.property)
    }

    pub fn theme_key_name(&self) -> Option<&str> {
        self.theme_key.as_deref()
    }

    pub fn is_expand(&self) -> bool {
        self.expand
    }
}

impl fmt::Debug for PropertyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDeclaration")
            .field("property", &self.property)
            .field("style_property", &self.style_property)
            .field("theme_key", &self.theme_key)
            .field("transform", &self.transform.is_some())
            .field("expand", &self.expand)
            .finish()
    }
}

/// Builds the restyle function for a declaration.
///
/// The produced function reads its prop, selects the responsive value for
/// the current viewport, resolves it through the theme and writes the
/// result. Undefined props and undefined results produce an empty fragment.
pub fn create_restyle_function(declaration: PropertyDeclaration) -> RestyleFunction {
    let property: Arc<str> = Arc::from(declaration.property.as_str());
    let output = declaration.output_property().to_string();
    let PropertyDeclaration {
        property: prop_name,
        theme_key,
        transform,
        expand,
        ..
    } = declaration;

    let func = move |props: &Props, cx: &StyleContext<'_>| -> Result<StyleFragment, StyleError> {
        let mut fragment = StyleFragment::new();
        let Some(raw) = props.get(&prop_name).filter(|v| !v.is_null()) else {
            return Ok(fragment);
        };

        let selected = resolve_responsive(raw, cx.theme, cx.dimensions);
        let lookup = ThemeLookup::new(cx.theme, cx.policy)
            .theme_key(theme_key.as_deref())
            .transform(transform.as_deref());
        let resolved = get_theme_value(selected, &lookup)?;

        match resolved {
            None | Some(Value::Null) => {}
            Some(Value::Object(expanded)) if expand => {
                fragment.extend(expanded.into_iter().filter(|(_, v)| !v.is_null()));
            }
            Some(value) if !expand => {
                fragment.insert(output.clone(), value);
            }
            Some(other) => {
                trace!(property = %prop_name, value = %other, "expanding prop resolved to a non-object; ignored");
            }
        }
        Ok(fragment)
    };

    RestyleFunction {
        property,
        func: Arc::new(func),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Dimensions, Theme};
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap()
    }

    fn theme() -> Theme {
        Theme::new()
            .breakpoint("phone", 0)
            .breakpoint("tablet", 768)
            .token("colors", "primary", "#336699")
            .token("spacing", "m", 16)
            .token("spacing", "l", 24)
    }

    #[test]
    fn test_absent_prop_gives_empty_fragment() {
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let func = create_restyle_function(PropertyDeclaration::new("opacity"));
        let fragment = func.apply(&props(json!({"width": 10})), &cx).unwrap();
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_null_prop_gives_empty_fragment() {
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let func = create_restyle_function(PropertyDeclaration::new("opacity"));
        let fragment = func.apply(&props(json!({"opacity": null})), &cx).unwrap();
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_shorthand_writes_output_key() {
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let func: RestyleFunction = PropertyDeclaration::new("bg")
            .style_property("backgroundColor")
            .theme_key("colors")
            .into();

        assert_eq!(func.property(), "bg");
        let fragment = func.apply(&props(json!({"bg": "primary"})), &cx).unwrap();
        assert_eq!(fragment, props(json!({"backgroundColor": "#336699"})));
    }

    #[test]
    fn test_responsive_value_resolved_through_theme() {
        let theme = theme();
        let func = create_restyle_function(PropertyDeclaration::new("padding").theme_key("spacing"));
        let p = props(json!({"padding": {"phone": "m", "tablet": "l"}}));

        let phone = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        assert_eq!(func.apply(&p, &phone).unwrap(), props(json!({"padding": 16})));

        let tablet = StyleContext::new(&theme, Dimensions::new(1024.0, 768.0));
        assert_eq!(func.apply(&p, &tablet).unwrap(), props(json!({"padding": 24})));
    }

    #[test]
    fn test_responsive_value_undefined_at_width() {
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let func = create_restyle_function(PropertyDeclaration::new("padding").theme_key("spacing"));
        let fragment = func
            .apply(&props(json!({"padding": {"tablet": "l"}})), &cx)
            .unwrap();
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_transform_maps_value() {
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let func = create_restyle_function(
            PropertyDeclaration::new("visible")
                .style_property("display")
                .transform(|args| {
                    Some(json!(if args.value == Some(&json!(false)) {
                        "none"
                    } else {
                        "flex"
                    }))
                }),
        );

        let hidden = func.apply(&props(json!({"visible": false})), &cx).unwrap();
        assert_eq!(hidden, props(json!({"display": "none"})));
        let shown = func.apply(&props(json!({"visible": true})), &cx).unwrap();
        assert_eq!(shown, props(json!({"display": "flex"})));
    }

    #[test]
    fn test_expand_merges_object_result() {
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let func = create_restyle_function(
            PropertyDeclaration::new("paddingXY")
                .expand()
                .transform(|args| {
                    args.value
                        .map(|v| json!({"paddingHorizontal": v, "paddingVertical": v}))
                }),
        );

        let fragment = func.apply(&props(json!({"paddingXY": 4})), &cx).unwrap();
        assert_eq!(
            fragment,
            props(json!({"paddingHorizontal": 4, "paddingVertical": 4}))
        );
    }

    #[test]
    fn test_expand_ignores_non_object_result() {
        let theme = theme();
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let func = create_restyle_function(PropertyDeclaration::new("odd").expand());
        let fragment = func.apply(&props(json!({"odd": 4})), &cx).unwrap();
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_missing_token_propagates() {
        let theme = theme().token("sizes", "card", 320);
        let cx = StyleContext::new(&theme, Dimensions::new(400.0, 800.0));
        let func = create_restyle_function(PropertyDeclaration::new("width").theme_key("sizes"));
        let err = func.apply(&props(json!({"width": "poster"})), &cx).unwrap_err();
        assert!(err.is_missing_token());
    }

    #[test]
    fn test_declaration_accessors() {
        let decl = PropertyDeclaration::new("inset").expand();
        assert_eq!(decl.output_property(), "inset");
        assert!(decl.is_expand());
        assert_eq!(decl.theme_key_name(), None);
        assert!(format!("{:?}", decl).contains("inset"));
    }
}
