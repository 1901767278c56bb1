//! # Nightfall - Dark Theme Derivation
//!
//! `nightfall` derives dark-mode and high-contrast black theme documents
//! from a single canonical light theme, so maintainers keep one source of
//! truth and generate the variants instead of hand-authoring them.
//!
//! ## Core Concepts
//!
//! - [`Document`]: an ordered markup tree with tagged color-entry leaves
//! - [`Swatch`]: one named color entry (identity attributes + value)
//! - [`ThemePipeline`]: the four-stage derivation producing both variants
//! - [`color`]: hex codec, luminance heuristics, and safe transforms
//!
//! ## How derivation works
//!
//! A hand-authored (possibly partial) dark theme supplies explicit
//! overrides; every light swatch it covers is substituted directly. For the
//! rest, luminance heuristics take over: near-white colors are inverted to
//! dark greys — unless their identity key says they are foreground text
//! that must stay legible — and a final cleanup pass re-scans the whole
//! tree. The black variant then bottoms out anything near-black to pure
//! `#000000`.
//!
//! ## Quick Start
//!
//! ```rust
//! use nightfall::{Document, ThemePipeline};
//!
//! # fn main() -> Result<(), nightfall::DocumentError> {
//! let light = Document::parse(
//!     r#"<ResourceDictionary>
//!         <Color x:Key="WindowBackground">#FFFFFF</Color>
//!         <Color x:Key="WindowBackground">#FFFFFF</Color>
//!         <Color x:Key="TitleText">#FFFFFF</Color>
//!         <Color x:Key="TitleText">#FFFFFF</Color>
//!     </ResourceDictionary>"#,
//! )?;
//! let dark = Document::parse("<ResourceDictionary></ResourceDictionary>")?;
//!
//! let derived = ThemePipeline::new(light, dark).derive();
//!
//! let dark_xml = derived.dark.to_xml()?;
//! // Backgrounds darken; foreground text stays light.
//! assert!(dark_xml.contains(r#"<Color x:Key="WindowBackground">#1e1e1e</Color>"#));
//! assert!(dark_xml.contains(r#"<Color x:Key="TitleText">#FFFFFF</Color>"#));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Structurally broken markup is fatal ([`DocumentError`]); broken *colors*
//! never are. Malformed hex decodes to `NaN` channels, classification
//! treats them as neither near-white nor near-black, and transforms fall
//! back to safe values — a visibly wrong-but-valid color beats a crash.

pub mod color;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod swatch;

pub use color::codec::AlphaPosition;
pub use document::{AttrMap, ColorLeaf, Document, Element, Node};
pub use error::DocumentError;
pub use pipeline::{DerivedThemes, ThemePipeline, DEFAULT_KEY_ATTRIBUTE};
pub use swatch::{apply_overrides, extract_swatches, Swatch};
