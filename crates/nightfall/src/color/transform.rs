//! Color transformations: inversion and lightening.
//!
//! Both transforms re-validate their output and fall back rather than
//! fail: [`invert`] to a fixed dark grey, [`lighten`] to the original
//! value. The difference is intentional — inversion is load-bearing for
//! dark-theme derivation and must always yield a usable dark color, while
//! lightening is cosmetic and may simply not happen.

use super::codec::{self, AlphaPosition};

/// Returned by [`invert`] when the inverted value does not validate,
/// e.g. for named colors.
pub const INVERT_FALLBACK: &str = "#262626";

/// Added to each inverted channel so pure white lands on a dark grey
/// rather than pure black, keeping some contrast headroom.
const INVERT_LIFT: f64 = 30.0;

/// Inverts a light color into a dark-safe one: `255 - c + 30` per RGB
/// channel. The alpha pair is carried through only when the input actually
/// had one, so 6-digit input stays 6-digit.
///
/// Never fails: anything that does not survive re-validation becomes
/// [`INVERT_FALLBACK`].
pub fn invert(value: &str, alpha: AlphaPosition) -> String {
    let [r, g, b, a] = codec::parse_hex(value, alpha);
    let a = has_alpha_pair(value).then_some(a);
    let inverted = codec::build_hex(
        255.0 - r + INVERT_LIFT,
        255.0 - g + INVERT_LIFT,
        255.0 - b + INVERT_LIFT,
        a,
        alpha,
    );
    if codec::validate_hex(&inverted) {
        inverted
    } else {
        INVERT_FALLBACK.to_string()
    }
}

/// Brightens a color by adding `amount` to each RGB channel, clamped.
///
/// Falls back to the original string when the result does not validate.
pub fn lighten(value: &str, amount: f64, alpha: AlphaPosition) -> String {
    let [r, g, b, a] = codec::parse_hex(value, alpha);
    let a = has_alpha_pair(value).then_some(a);
    let lightened = codec::build_hex(r + amount, g + amount, b + amount, a, alpha);
    if codec::validate_hex(&lightened) {
        lightened
    } else {
        value.to_string()
    }
}

/// Whether the raw string carries an alpha byte pair after the same
/// normalization `parse_hex` applies (shorthand expansion, odd-length
/// truncation).
fn has_alpha_pair(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() == 3 {
        return false;
    }
    digits.len() - digits.len() % 2 >= 8
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEADING: AlphaPosition = AlphaPosition::Leading;

    // =========================================================================
    // invert
    // =========================================================================

    #[test]
    fn test_invert_pure_white() {
        // 255 - 255 + 30 = 30 = 0x1e per channel.
        assert_eq!(invert("#FFFFFF", LEADING), "#1e1e1e");
    }

    #[test]
    fn test_invert_near_white() {
        // 255 - 245 + 30 = 40 = 0x28.
        assert_eq!(invert("#f5f5f5", LEADING), "#282828");
    }

    #[test]
    fn test_invert_preserves_alpha_pair() {
        assert_eq!(invert("#80ffffff", LEADING), "#801e1e1e");
    }

    #[test]
    fn test_invert_clamps_dark_input() {
        // 255 - 0 + 30 = 285, clamped to 255.
        assert_eq!(invert("#000000", LEADING), "#ffffff");
    }

    #[test]
    fn test_invert_named_color_falls_back() {
        assert_eq!(invert("white", LEADING), INVERT_FALLBACK);
        assert_eq!(invert("", LEADING), INVERT_FALLBACK);
    }

    // =========================================================================
    // lighten
    // =========================================================================

    #[test]
    fn test_lighten_adds_per_channel() {
        assert_eq!(lighten("#101010", 16.0, LEADING), "#202020");
    }

    #[test]
    fn test_lighten_clamps_at_white() {
        assert_eq!(lighten("#f0f0f0", 100.0, LEADING), "#ffffff");
    }

    #[test]
    fn test_lighten_preserves_alpha_pair() {
        assert_eq!(lighten("#c8101010", 16.0, LEADING), "#c8202020");
    }

    #[test]
    fn test_lighten_invalid_input_returns_original() {
        assert_eq!(lighten("cornflowerblue", 16.0, LEADING), "cornflowerblue");
    }
}
