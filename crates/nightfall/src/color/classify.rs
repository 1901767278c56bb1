//! Luminance heuristics: grey, near-white, near-black.
//!
//! These are hand-tuned channel-average tests, not colorimetric
//! conversions. They only need to be good enough to decide which theme
//! entries are safe to darken.

use super::codec::{self, AlphaPosition};

/// Channels within this fraction of their mean count as grey.
const GREY_TOLERANCE: f64 = 0.05;

/// Mean RGB above this is near-white.
const NEAR_WHITE_FLOOR: f64 = 200.0;

/// Mean RGB at or below this is near-black.
const NEAR_BLACK_CEIL: f64 = 50.0;

/// Whether every channel lies within ±5% of the mean of all channels.
///
/// A tolerance band rather than exact equality, so slightly tinted greys
/// (`#f5f4f2` and friends) still qualify. `NaN` channels pass the band test
/// (both comparisons are false); the mean checks in the callers reject them
/// instead.
pub fn is_grey(channels: &[f64]) -> bool {
    let mean = channels.iter().sum::<f64>() / channels.len() as f64;
    let min = mean * (1.0 - GREY_TOLERANCE);
    let max = mean * (1.0 + GREY_TOLERANCE);
    channels.iter().all(|&c| !(c < min || c > max))
}

/// Whether a color value reads as near-white.
///
/// Hex values qualify when their RGB channels are mutually grey and average
/// above 200. Non-hex values are named colors; only the literal substring
/// `"white"` is recognized — the rest of the CSS near-white family
/// (`snow`, `ivory`, `linen`, ...) passes through unclassified, matching
/// the behavior of the tool this replaces.
pub fn is_near_white(value: &str, alpha: AlphaPosition) -> bool {
    if !codec::validate_hex(value) {
        return value.contains("white");
    }
    let [r, g, b, _] = codec::parse_hex(value, alpha);
    is_grey(&[r, g, b]) && (r + g + b) / 3.0 > NEAR_WHITE_FLOOR
}

/// Whether a color value reads as near-black.
///
/// Defined for hex values only: named colors decode to `NaN` channels,
/// which fail the mean comparison and are never near-black.
pub fn is_near_black(value: &str, alpha: AlphaPosition) -> bool {
    let [r, g, b, _] = codec::parse_hex(value, alpha);
    is_grey(&[r, g, b]) && (r + g + b) / 3.0 <= NEAR_BLACK_CEIL
}
