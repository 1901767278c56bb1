//! Hex color codec: string ⟷ channel conversion under a configurable
//! alpha byte position.
//!
//! The project convention for 8-digit colors is **alpha-first**
//! (`#AARRGGBB`), matching how XAML resources store opacity. Every codec
//! function takes the position as an explicit [`AlphaPosition`] argument so
//! the convention is named at each call site rather than buried in slicing
//! arithmetic.
//!
//! # Example
//!
//! ```rust
//! use nightfall::color::codec::{build_hex, parse_hex, AlphaPosition};
//!
//! let [r, g, b, a] = parse_hex("#80ff6b35", AlphaPosition::Leading);
//! assert_eq!((r, g, b, a), (255.0, 107.0, 53.0, 128.0));
//!
//! let rebuilt = build_hex(r, g, b, Some(a), AlphaPosition::Leading);
//! assert_eq!(rebuilt, "#80ff6b35");
//! ```

/// Where the alpha byte pair sits in an 8-digit hex color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlphaPosition {
    /// `#AARRGGBB` — the project convention.
    #[default]
    Leading,
    /// `#RRGGBBAA` — CSS-style ordering.
    Trailing,
}

/// Decoded color channels in `(r, g, b, a)` order, each nominally in
/// `[0, 255]`. Channels decoded from malformed input are `NaN`.
pub type Channels = [f64; 4];

/// Decodes a hex color string into channels.
///
/// Accepts 3-, 6-, or 8-digit hex with or without a leading `#`. 3-digit
/// shorthand doubles each digit; an odd-length string drops its final
/// character; 8-digit input has its alpha pair moved from the convention
/// position to the tail before slicing, so channels always come out in
/// `(r, g, b, a)` order. Alpha defaults to 255 when absent or when it
/// decodes to zero.
///
/// Never fails: digit pairs that are not hex decode to `NaN`.
pub fn parse_hex(value: &str, alpha: AlphaPosition) -> Channels {
    let digits = value.strip_prefix('#').unwrap_or(value);
    let mut digits = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        digits.to_string()
    };
    if digits.len() % 2 != 0 {
        digits.pop();
    }
    if digits.len() == 8 && matches!(alpha, AlphaPosition::Leading) {
        if let (Some(rgb), Some(a)) = (digits.get(2..8), digits.get(..2)) {
            digits = format!("{rgb}{a}");
        }
    }

    let r = channel_at(&digits, 0);
    let g = channel_at(&digits, 2);
    let b = channel_at(&digits, 4);
    let a = channel_at(&digits, 6);
    // A missing or fully transparent alpha byte means opaque.
    let a = if a == 0.0 || a.is_nan() { 255.0 } else { a };
    [r, g, b, a]
}

/// Reads the two-digit pair starting at `start` as one channel.
fn channel_at(digits: &str, start: usize) -> f64 {
    digits
        .get(start..start + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .map(f64::from)
        .unwrap_or(f64::NAN)
}

/// Whether `value` is a strict 6- or 8-digit hex color, with or without a
/// leading `#`.
///
/// Rotating the alpha pair to the tail cannot change whether every digit is
/// hex, so the check is position-independent and takes no [`AlphaPosition`].
pub fn validate_hex(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Encodes channels as a hex color string.
///
/// Channels are clamped to `[0, 255]` and formatted as zero-padded
/// lowercase pairs. When `a` is supplied the alpha pair is placed per the
/// convention; when it is `None` the result is a plain 6-digit color.
///
/// A non-finite or fractional channel renders as a non-hex marker pair so
/// that [`validate_hex`] rejects the result instead of a truncated value
/// sneaking through.
pub fn build_hex(r: f64, g: f64, b: f64, a: Option<f64>, alpha: AlphaPosition) -> String {
    let rr = hex_pair(clamp_channel(r));
    let gg = hex_pair(clamp_channel(g));
    let bb = hex_pair(clamp_channel(b));
    match a {
        Some(a) => {
            let aa = hex_pair(clamp_channel(a));
            match alpha {
                AlphaPosition::Leading => format!("#{aa}{rr}{gg}{bb}"),
                AlphaPosition::Trailing => format!("#{rr}{gg}{bb}{aa}"),
            }
        }
        None => format!("#{rr}{gg}{bb}"),
    }
}

/// Clamps a channel to `[0, 255]`. `NaN` passes through untouched so the
/// invalid-color condition survives until encoding.
pub fn clamp_channel(c: f64) -> f64 {
    if c < 0.0 {
        0.0
    } else if c > 255.0 {
        255.0
    } else {
        c
    }
}

fn hex_pair(c: f64) -> String {
    if c.is_finite() && c.fract() == 0.0 {
        format!("{:02x}", c as u32)
    } else {
        "--".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEADING: AlphaPosition = AlphaPosition::Leading;

    // =========================================================================
    // parse_hex
    // =========================================================================

    #[test]
    fn test_parse_six_digit() {
        assert_eq!(
            parse_hex("#ff6b35", LEADING),
            [255.0, 107.0, 53.0, 255.0]
        );
        assert_eq!(parse_hex("000000", LEADING), [0.0, 0.0, 0.0, 255.0]);
    }

    #[test]
    fn test_parse_three_digit_shorthand() {
        assert_eq!(parse_hex("#f80", LEADING), [255.0, 136.0, 0.0, 255.0]);
        assert_eq!(parse_hex("#fff", LEADING), [255.0, 255.0, 255.0, 255.0]);
    }

    #[test]
    fn test_parse_eight_digit_alpha_first() {
        assert_eq!(
            parse_hex("#80ff6b35", LEADING),
            [255.0, 107.0, 53.0, 128.0]
        );
    }

    #[test]
    fn test_parse_eight_digit_alpha_last() {
        assert_eq!(
            parse_hex("#ff6b3580", AlphaPosition::Trailing),
            [255.0, 107.0, 53.0, 128.0]
        );
    }

    #[test]
    fn test_parse_odd_length_drops_last_digit() {
        // "#ff6b357" -> "ff6b35"
        assert_eq!(
            parse_hex("#ff6b357", LEADING),
            [255.0, 107.0, 53.0, 255.0]
        );
    }

    #[test]
    fn test_parse_zero_alpha_defaults_to_opaque() {
        assert_eq!(parse_hex("#00ffffff", LEADING), [255.0; 4]);
    }

    #[test]
    fn test_parse_malformed_yields_nan_channels() {
        let [r, g, b, a] = parse_hex("cornflowerblue", LEADING);
        assert!(r.is_nan());
        assert!(g.is_nan());
        assert!(b.is_nan());
        assert_eq!(a, 255.0);
    }

    #[test]
    fn test_parse_short_input_yields_nan_tail() {
        let [r, g, b, _] = parse_hex("#ff6b", LEADING);
        assert_eq!((r, g), (255.0, 107.0));
        assert!(b.is_nan());
    }

    // =========================================================================
    // validate_hex
    // =========================================================================

    #[test]
    fn test_validate_accepts_six_and_eight() {
        assert!(validate_hex("#ff6b35"));
        assert!(validate_hex("ff6b35"));
        assert!(validate_hex("#80ff6b35"));
    }

    #[test]
    fn test_validate_rejects_other_shapes() {
        assert!(!validate_hex("#fff"));
        assert!(!validate_hex("#ff6b3"));
        assert!(!validate_hex("#gg6b35"));
        assert!(!validate_hex("white"));
        assert!(!validate_hex(""));
    }

    // =========================================================================
    // build_hex
    // =========================================================================

    #[test]
    fn test_build_without_alpha() {
        assert_eq!(build_hex(255.0, 107.0, 53.0, None, LEADING), "#ff6b35");
        assert_eq!(build_hex(0.0, 0.0, 0.0, None, LEADING), "#000000");
    }

    #[test]
    fn test_build_alpha_position() {
        assert_eq!(
            build_hex(255.0, 107.0, 53.0, Some(128.0), LEADING),
            "#80ff6b35"
        );
        assert_eq!(
            build_hex(255.0, 107.0, 53.0, Some(128.0), AlphaPosition::Trailing),
            "#ff6b3580"
        );
    }

    #[test]
    fn test_build_clamps_channels() {
        assert_eq!(build_hex(-20.0, 300.0, 53.0, None, LEADING), "#00ff35");
    }

    #[test]
    fn test_build_nan_channel_is_invalid() {
        let built = build_hex(f64::NAN, 0.0, 0.0, None, LEADING);
        assert!(!validate_hex(&built));
    }

    #[test]
    fn test_build_fractional_channel_is_invalid() {
        let built = build_hex(12.5, 0.0, 0.0, None, LEADING);
        assert!(!validate_hex(&built));
    }

    // =========================================================================
    // round trip
    // =========================================================================

    #[test]
    fn test_round_trip_six_digit() {
        let channels = parse_hex("#1e1e1e", LEADING);
        let [r, g, b, _] = channels;
        let rebuilt = build_hex(r, g, b, None, LEADING);
        assert_eq!(parse_hex(&rebuilt, LEADING), channels);
    }

    #[test]
    fn test_round_trip_alpha_first() {
        let channels = parse_hex("#c81e2d3c", LEADING);
        let [r, g, b, a] = channels;
        assert_eq!(build_hex(r, g, b, Some(a), LEADING), "#c81e2d3c");
    }
}
