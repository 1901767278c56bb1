//! Color parsing, classification, and transformation.
//!
//! Everything here operates on theme color strings: hex colors
//! (`#RRGGBB`, `#AARRGGBB` under the alpha-first convention, `#RGB`
//! shorthand, or bare digits) and named CSS colors.
//!
//! The modules build on each other:
//!
//! - [`codec`]: hex string ⟷ numeric channels, validation, clamping
//! - [`classify`]: grey / near-white / near-black heuristics
//! - [`transform`]: inversion and lightening with safe fallbacks
//!
//! Channels are `f64` rather than `u8` so that malformed hex digits decode
//! to `NaN` and flow through arithmetic and classification as an
//! invalid-color condition; the codec's validation step catches them before
//! anything is written back into a document. A visibly wrong-but-valid
//! color always beats a panic.

pub mod classify;
pub mod codec;
pub mod transform;

pub use classify::{is_grey, is_near_black, is_near_white};
pub use codec::{build_hex, parse_hex, validate_hex, AlphaPosition, Channels};
pub use transform::{invert, lighten, INVERT_FALLBACK};
