//! Built-in property tables.
//!
//! Each function returns the restyle functions for one family of style
//! props. The tables are plain data: which prop writes which style key and
//! which theme category its values are tokens of.
//!
//! | Family | Theme category |
//! |--------|----------------|
//! | [`color`], [`background_color`], border/shadow colors | `colors` |
//! | [`spacing`], [`spacing_shorthand`] | `spacing` |
//! | border radii | `borderRadii` |
//! | `zIndex` | `zIndices` |
//! | everything else | none (values pass through) |

use serde_json::{json, Value};

use super::compose::RestyleGroup;
use super::function::{create_restyle_function, PropertyDeclaration, RestyleFunction};
use crate::style::TransformArgs;
use crate::theme::keys;

const SPACING_PROPERTIES: &[&str] = &[
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "marginHorizontal",
    "marginVertical",
    "marginStart",
    "marginEnd",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "paddingHorizontal",
    "paddingVertical",
    "paddingStart",
    "paddingEnd",
    "columnGap",
    "rowGap",
    "gap",
];

const SPACING_SHORTHAND: &[(&str, &str)] = &[
    ("m", "margin"),
    ("mt", "marginTop"),
    ("mr", "marginRight"),
    ("mb", "marginBottom"),
    ("ml", "marginLeft"),
    ("mx", "marginHorizontal"),
    ("my", "marginVertical"),
    ("ms", "marginStart"),
    ("me", "marginEnd"),
    ("p", "padding"),
    ("pt", "paddingTop"),
    ("pr", "paddingRight"),
    ("pb", "paddingBottom"),
    ("pl", "paddingLeft"),
    ("px", "paddingHorizontal"),
    ("py", "paddingVertical"),
    ("ps", "paddingStart"),
    ("pe", "paddingEnd"),
    ("g", "gap"),
    ("rg", "rowGap"),
    ("cg", "columnGap"),
];

const TYPOGRAPHY_PROPERTIES: &[&str] = &[
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontWeight",
    "includeFontPadding",
    "fontVariant",
    "letterSpacing",
    "lineHeight",
    "textAlign",
    "textAlignVertical",
    "textDecorationLine",
    "textDecorationStyle",
    "textTransform",
    "verticalAlign",
    "writingDirection",
];

const LAYOUT_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "minWidth",
    "maxWidth",
    "minHeight",
    "maxHeight",
    "overflow",
    "aspectRatio",
    "alignContent",
    "alignItems",
    "alignSelf",
    "justifyContent",
    "flex",
    "flexBasis",
    "flexDirection",
    "flexGrow",
    "flexShrink",
    "flexWrap",
];

const POSITION_PROPERTIES: &[&str] = &["position", "top", "right", "bottom", "left", "start", "end"];

const BORDER_PROPERTIES: &[&str] = &[
    "borderBottomWidth",
    "borderLeftWidth",
    "borderRightWidth",
    "borderStyle",
    "borderTopWidth",
    "borderStartWidth",
    "borderEndWidth",
    "borderWidth",
];

const BORDER_RADIUS_PROPERTIES: &[&str] = &[
    "borderRadius",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomStartRadius",
    "borderBottomEndRadius",
    "borderTopStartRadius",
    "borderTopEndRadius",
];

const BORDER_COLOR_PROPERTIES: &[&str] = &[
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderLeftColor",
    "borderBottomColor",
    "borderStartColor",
    "borderEndColor",
];

const SHADOW_PROPERTIES: &[&str] = &["shadowOpacity", "shadowOffset", "shadowRadius", "elevation"];

const TEXT_SHADOW_PROPERTIES: &[&str] = &["textShadowOffset", "textShadowRadius"];

fn plain(properties: &'static [&'static str]) -> impl Iterator<Item = RestyleFunction> {
    properties
        .iter()
        .map(|property| create_restyle_function(PropertyDeclaration::new(*property)))
}

fn themed(
    properties: &'static [&'static str],
    theme_key: &'static str,
) -> impl Iterator<Item = RestyleFunction> {
    properties.iter().map(move |property| {
        create_restyle_function(PropertyDeclaration::new(*property).theme_key(theme_key))
    })
}

/// `backgroundColor`, resolved through `colors`.
pub fn background_color() -> RestyleFunction {
    create_restyle_function(PropertyDeclaration::new("backgroundColor").theme_key(keys::COLORS))
}

/// `bg`, shorthand for `backgroundColor`.
pub fn background_color_shorthand() -> RestyleFunction {
    create_restyle_function(
        PropertyDeclaration::new("bg")
            .style_property("backgroundColor")
            .theme_key(keys::COLORS),
    )
}

/// `color` and `textDecorationColor`, resolved through `colors`.
pub fn color() -> Vec<RestyleFunction> {
    themed(&["color", "textDecorationColor"], keys::COLORS).collect()
}

pub fn opacity() -> RestyleFunction {
    create_restyle_function(PropertyDeclaration::new("opacity"))
}

/// `visible`: `false` hides the element (`display: none`), anything else shows it.
pub fn visible() -> RestyleFunction {
    create_restyle_function(
        PropertyDeclaration::new("visible")
            .style_property("display")
            .transform(|args: TransformArgs<'_>| {
                let display = if args.value == Some(&Value::Bool(false)) {
                    "none"
                } else {
                    "flex"
                };
                Some(Value::from(display))
            }),
    )
}

/// `transform`, passed through as-is.
pub fn transform() -> RestyleFunction {
    create_restyle_function(PropertyDeclaration::new("transform"))
}

/// Margins, paddings and gaps, resolved through `spacing`.
pub fn spacing() -> Vec<RestyleFunction> {
    themed(SPACING_PROPERTIES, keys::SPACING).collect()
}

/// `m`, `mt`, ..., `p`, `pt`, ..., `g`, `rg`, `cg`.
pub fn spacing_shorthand() -> Vec<RestyleFunction> {
    SPACING_SHORTHAND
        .iter()
        .map(|(property, style_property)| {
            create_restyle_function(
                PropertyDeclaration::new(*property)
                    .style_property(*style_property)
                    .theme_key(keys::SPACING),
            )
        })
        .collect()
}

pub fn typography() -> Vec<RestyleFunction> {
    plain(TYPOGRAPHY_PROPERTIES).collect()
}

pub fn layout() -> Vec<RestyleFunction> {
    plain(LAYOUT_PROPERTIES).collect()
}

/// Offsets, `zIndex` (through `zIndices`) and the `inset` shorthand.
pub fn position() -> Vec<RestyleFunction> {
    plain(POSITION_PROPERTIES)
        .chain(themed(&["zIndex"], keys::Z_INDICES))
        .chain(std::iter::once(inset()))
        .collect()
}

/// `inset`, expanded to `top`/`right`/`bottom`/`left`.
///
/// Follows the CSS shorthand: one value sets all four sides, two values
/// set vertical then horizontal, three set top, horizontal, bottom.
pub fn inset() -> RestyleFunction {
    create_restyle_function(
        PropertyDeclaration::new("inset")
            .expand()
            .transform(|args: TransformArgs<'_>| args.value.map(expand_inset)),
    )
}

fn expand_inset(value: &Value) -> Value {
    let Value::Array(sides) = value else {
        return json!({"top": value, "right": value, "bottom": value, "left": value});
    };

    let side = |i: usize| sides.get(i).cloned().unwrap_or(Value::Null);
    let top = side(0);
    let (right, bottom, left) = match sides.len() {
        0 | 1 => (top.clone(), top.clone(), top.clone()),
        2 => (side(1), top.clone(), side(1)),
        3 => (side(1), side(2), side(1)),
        _ => (side(1), side(2), side(3)),
    };
    json!({"top": top, "right": right, "bottom": bottom, "left": left})
}

/// Border widths, colors (through `colors`), radii (through `borderRadii`)
/// and `borderCurve`.
pub fn border() -> Vec<RestyleFunction> {
    plain(BORDER_PROPERTIES)
        .chain(themed(BORDER_COLOR_PROPERTIES, keys::COLORS))
        .chain(themed(BORDER_RADIUS_PROPERTIES, keys::BORDER_RADII))
        .chain(plain(&["borderCurve"]))
        .collect()
}

/// Shadow geometry plus `shadowColor` (through `colors`).
pub fn shadow() -> Vec<RestyleFunction> {
    plain(SHADOW_PROPERTIES)
        .chain(themed(&["shadowColor"], keys::COLORS))
        .collect()
}

/// Text shadow geometry plus `textShadowColor` (through `colors`).
pub fn text_shadow() -> Vec<RestyleFunction> {
    plain(TEXT_SHADOW_PROPERTIES)
        .chain(themed(&["textShadowColor"], keys::COLORS))
        .collect()
}

/// Every built-in table.
pub fn all() -> Vec<RestyleGroup> {
    vec![
        color().into(),
        opacity().into(),
        background_color().into(),
        background_color_shorthand().into(),
        spacing().into(),
        spacing_shorthand().into(),
        typography().into(),
        layout().into(),
        position().into(),
        border().into(),
        shadow().into(),
        text_shadow().into(),
    ]
}
