//! Conversion between HEX strings and RGB colors.

use rgb::RGB8;
use crate::{Error, Result, RGBColor};

/// Parse a HEX color.
///
/// The leading `#` is optional.  The allowed forms are `rrggbb` and
/// `rrggbbaa`; the alpha pair is validated but discarded.  Surrounding
/// whitespace is not accepted here, callers trim their input.
///
/// ```
/// use rgb::RGB8;
/// use color_ramp::hex;
/// assert_eq!(hex::decode("#036A8B"), Ok(RGB8::new(3, 106, 139)));
/// assert!(hex::decode("#12").is_err());
/// ```
pub fn decode(text: &str) -> Result<RGB8> {
    let invalid = || Error::InvalidFormat(text.to_string());
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return Err(invalid())
    }
    let byte = |i: usize| {
        let pair = &digits[2 * i .. 2 * i + 2];
        // `from_str_radix` accepts a leading `+`.
        if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid())
        }
        u8::from_str_radix(pair, 16).map_err(|_| invalid())
    };
    let color = RGB8 { r: byte(0)?, g: byte(1)?, b: byte(2)? };
    if digits.len() == 8 {
        byte(3)?;
    }
    Ok(color)
}

/// Format a color as `#rrggbb` (lowercase).  Components are rounded
/// and clamped to \[0, 255\] first, so interpolation overshoot below 0
/// encodes as `00`.
///
/// ```
/// use rgb::{RGB, RGB8};
/// use color_ramp::hex;
/// assert_eq!(hex::encode(RGB8::new(3, 106, 139)), "#036a8b");
/// assert_eq!(hex::encode(RGB { r: -13.2, g: 0., b: 300. }), "#0000ff");
/// ```
pub fn encode<C: RGBColor>(color: C) -> String {
    let c = RGB8::from_rgb(color.to_rgb());
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_forms() {
        let c = RGB8::new(0x03, 0x6a, 0x8b);
        assert_eq!(decode("#036A8B"), Ok(c));
        assert_eq!(decode("036a8b"), Ok(c));
        assert_eq!(decode("#036a8bff"), Ok(c));
        assert_eq!(decode("036a8b00"), Ok(c));
    }

    #[test]
    fn decode_rejects() {
        for s in ["#12", "", "#", "#036a8", "#036a8b0", "#036a8b001",
                  "##036a8b", "#036a8g", "#+36a8b", "#036a8bzz", " #036a8b",
                  "#0é6a8b"] {
            assert_eq!(decode(s), Err(Error::InvalidFormat(s.to_string())),
                       "{s:?}");
        }
    }

    #[test]
    fn encode_pads_and_lowercases() {
        assert_eq!(encode(RGB8::new(0, 10, 255)), "#000aff");
        assert_eq!(encode(RGB8::new(0xAB, 0xCD, 0xEF)), "#abcdef");
    }

    #[test]
    fn round_trip() {
        for r in (0 ..= 255).step_by(15) {
            for g in [0, 1, 127, 128, 254, 255] {
                let c = RGB8::new(r, g, 255 - r);
                assert_eq!(decode(&encode(c)), Ok(c));
            }
        }
    }
}
