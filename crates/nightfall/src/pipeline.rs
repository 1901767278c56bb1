//! The theme derivation pipeline.
//!
//! [`ThemePipeline`] owns the two input trees — a complete light theme and
//! a possibly-incomplete hand-authored dark theme — and derives the final
//! dark and black variants in four stages:
//!
//! 1. **Direct substitution**: every swatch the dark theme authors wrote
//!    overrides the light value at matching nodes.
//! 2. **Heuristic inversion**: light swatches with no dark counterpart that
//!    read as near-white are inverted, except those whose key names a
//!    foreground role (`text`, `title`, `label`) and must stay legible.
//! 3. **Cleanup**: a whole-tree re-scan inverts anything still near-white,
//!    unless its key names a role that should stay light — with
//!    `background`/`border`/`fill` keys re-included even when they also
//!    match an excluded role (a `HoverBackground` is still a background).
//! 4. **Black variant**: near-black values in the finished dark tree are
//!    forced to pure `#000000`.
//!
//! Identity keys encode semantic role (`TitleText`, `ButtonBackground`),
//! which is why the stages reason about key substrings at all.

use crate::color::classify::{is_near_black, is_near_white};
use crate::color::codec::AlphaPosition;
use crate::color::transform::invert;
use crate::document::Document;
use crate::swatch::{apply_overrides, extract_swatches, Swatch};

/// Attribute that names a swatch's identity key in XAML-style themes.
pub const DEFAULT_KEY_ATTRIBUTE: &str = "x:Key";

/// Forced value for near-black swatches in the black variant.
const BLACK: &str = "#000000";

/// Roles presumed to be foreground text; never inverted in stage 2.
const FOREGROUND_ROLES: [&str; 3] = ["text", "title", "label"];

/// Roles excluded from the stage-3 cleanup inversion.
const KEEP_LIGHT_ROLES: [&str; 9] = [
    "text",
    "title",
    "label",
    "grey",
    "gray",
    "hover",
    "normal",
    "white",
    "foreground",
];

/// Roles that are safe to darken even when they also match an excluded
/// role; this re-inclusion takes precedence over [`KEEP_LIGHT_ROLES`].
const DARKEN_ANYWAY_ROLES: [&str; 3] = ["background", "border", "fill"];

/// Both derived output trees.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedThemes {
    pub dark: Document,
    pub black: Document,
}

/// One-shot derivation of dark and black theme variants.
///
/// # Example
///
/// ```rust
/// use nightfall::{Document, ThemePipeline};
///
/// # fn main() -> Result<(), nightfall::DocumentError> {
/// let light = Document::parse(
///     r#"<Theme>
///         <Color x:Key="PanelBackground">#FFFFFF</Color>
///         <Color x:Key="PanelBackground">#FFFFFF</Color>
///     </Theme>"#,
/// )?;
/// let dark = Document::parse("<Theme></Theme>")?;
///
/// let derived = ThemePipeline::new(light, dark).derive();
/// assert!(derived.dark.to_xml()?.contains("#1e1e1e"));
/// assert!(derived.black.to_xml()?.contains("#000000"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ThemePipeline {
    light: Document,
    dark: Document,
    key_attribute: String,
    alpha: AlphaPosition,
}

impl ThemePipeline {
    /// Builds a pipeline from a complete light theme and a partial dark
    /// theme, with the default key attribute and alpha-first hex ordering.
    pub fn new(light: Document, dark: Document) -> Self {
        Self {
            light,
            dark,
            key_attribute: DEFAULT_KEY_ATTRIBUTE.to_string(),
            alpha: AlphaPosition::Leading,
        }
    }

    /// Overrides the attribute used as the identity key.
    pub fn key_attribute(mut self, name: impl Into<String>) -> Self {
        self.key_attribute = name.into();
        self
    }

    /// Overrides the alpha byte position for hex decoding/encoding.
    pub fn alpha_position(mut self, alpha: AlphaPosition) -> Self {
        self.alpha = alpha;
        self
    }

    /// Runs all four stages and returns both output trees.
    pub fn derive(self) -> DerivedThemes {
        let ThemePipeline {
            light,
            dark,
            key_attribute,
            alpha,
        } = self;
        let key_attribute = key_attribute.as_str();

        let colors_light = extract_swatches(&light, key_attribute);
        let colors_dark = extract_swatches(&dark, key_attribute);

        // Light swatches the dark theme says nothing about. Counterpart
        // lookup is bidirectional: the identities must agree exactly.
        let remaining: Vec<Swatch> = colors_light
            .iter()
            .filter(|light_swatch| {
                !colors_dark
                    .iter()
                    .any(|dark_swatch| dark_swatch.identity.same_identity(&light_swatch.identity))
            })
            .cloned()
            .collect();

        // Stage 1: hand-authored dark values win wherever they exist.
        let substituted = apply_overrides(light, &colors_dark);

        // Stage 2: invert unmatched near-whites, keeping foreground roles
        // light for contrast. The whole mapped list is applied, unchanged
        // entries included, so earlier broader matches keep their slot in
        // first-match-wins resolution.
        let stage2_overrides: Vec<Swatch> = remaining
            .iter()
            .map(|swatch| {
                if is_near_white(&swatch.value, alpha)
                    && !key_matches(swatch, key_attribute, &FOREGROUND_ROLES)
                {
                    swatch.with_value(invert(&swatch.value, alpha))
                } else {
                    swatch.clone()
                }
            })
            .collect();
        let inverted = apply_overrides(substituted, &stage2_overrides);

        // Stage 3: whole-tree cleanup of anything still near-white.
        let cleanup: Vec<Swatch> = extract_swatches(&inverted, key_attribute)
            .iter()
            .filter(|swatch| {
                is_near_white(&swatch.value, alpha)
                    && (!key_matches(swatch, key_attribute, &KEEP_LIGHT_ROLES)
                        || key_matches(swatch, key_attribute, &DARKEN_ANYWAY_ROLES))
            })
            .map(|swatch| swatch.with_value(invert(&swatch.value, alpha)))
            .collect();
        let dark_theme = apply_overrides(inverted, &cleanup);

        // Stage 4: the black variant bottoms out every near-black value.
        let black_overrides: Vec<Swatch> = extract_swatches(&dark_theme, key_attribute)
            .iter()
            .map(|swatch| {
                if is_near_black(&swatch.value, alpha) {
                    swatch.with_value(BLACK)
                } else {
                    swatch.clone()
                }
            })
            .collect();
        let black_theme = apply_overrides(dark_theme.clone(), &black_overrides);

        DerivedThemes {
            dark: dark_theme,
            black: black_theme,
        }
    }
}

/// Whether the swatch's identity key (lowercased) contains any of the role
/// patterns. A swatch with no key attribute matches nothing.
fn key_matches(swatch: &Swatch, key_attribute: &str, roles: &[&str]) -> bool {
    let key = swatch
        .key(key_attribute)
        .map(str::to_lowercase)
        .unwrap_or_default();
    roles.iter().any(|role| key.contains(role))
}
