//! Per-render resolution context.

use once_cell::sync::Lazy;

use super::resolve::TokenPolicy;
use crate::theme::{ColorMode, Dimensions, Theme, ThemeChoice};

static DEFAULT_POLICY: Lazy<TokenPolicy> = Lazy::new(TokenPolicy::default);

/// The theme, viewport and token policy a render pass resolves against.
///
/// Contexts are cheap to create and are built fresh for every pass; nothing
/// in them is mutated while styles are built.
///
/// # Example
///
/// ```rust
/// use restyle::{Dimensions, StyleContext, Theme, TokenPolicy};
///
/// let theme = Theme::new().breakpoint("phone", 0);
/// let lenient = TokenPolicy::Lenient;
///
/// let cx = StyleContext::new(&theme, Dimensions::new(390.0, 844.0)).with_policy(&lenient);
/// assert_eq!(cx.dimensions.width, 390.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    pub theme: &'a Theme,
    pub dimensions: Dimensions,
    pub policy: &'a TokenPolicy,
}

impl<'a> StyleContext<'a> {
    /// Creates a context using the default strict [`TokenPolicy`].
    pub fn new(theme: &'a Theme, dimensions: Dimensions) -> Self {
        Self {
            theme,
            dimensions,
            policy: &DEFAULT_POLICY,
        }
    }

    /// Creates a context from a fixed or adaptive theme selection.
    ///
    /// Adaptive themes pick the variant for `mode`; fixed themes ignore it.
    pub fn from_choice(choice: ThemeChoice<'a>, mode: ColorMode, dimensions: Dimensions) -> Self {
        Self::new(choice.resolve(mode), dimensions)
    }

    /// Replaces the token policy.
    pub fn with_policy(mut self, policy: &'a TokenPolicy) -> Self {
        self.policy = policy;
        self
    }
}
