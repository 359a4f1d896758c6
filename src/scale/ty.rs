use std::{fmt, str::FromStr};
use rgb::RGB8;
use serde::{Serialize, Serializer};
use crate::Error;

/// A rung of a color scale, such as `050`, `500` or `1000`.
///
/// Levels order numerically and display zero-padded to three digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaleLevel(u16);

impl ScaleLevel {
    #[inline]
    pub const fn new(value: u16) -> Self { ScaleLevel(value) }

    /// The numeric value of the level (`50` for `050`).
    #[inline]
    pub const fn value(self) -> u16 { self.0 }
}

impl fmt::Display for ScaleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Accepts plain digits, with or without zero padding (`"50"`,
/// `"050"`).  Whether the level belongs to a scale is checked by the
/// generator.
impl FromStr for ScaleLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidLevel(s.to_string()))
        }
        s.parse().map(ScaleLevel).map_err(|_| Error::InvalidLevel(s.to_string()))
    }
}

impl Serialize for ScaleLevel {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// How the scale is laid out around the seed color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleScheme {
    /// Levels `000 ..= 1000` with white and black as (unreported)
    /// endpoints.  The anchor is derived from the luma of the seed.
    #[default]
    Symmetric,
    /// Levels `050 ..= 900` without fixed endpoints.  The anchor is
    /// given by the caller; darker levels keep the slope from white to
    /// the seed.
    AnchorRelative,
}

impl ScaleScheme {
    pub fn name(self) -> &'static str {
        match self {
            ScaleScheme::Symmetric => "symmetric",
            ScaleScheme::AnchorRelative => "anchor-relative",
        }
    }
}

impl fmt::Display for ScaleScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The level holding the seed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub level: ScaleLevel,
    /// Grayscale version of the seed the anchor was derived from
    /// (symmetric scheme only).
    #[serde(serialize_with = "serialize_gray")]
    pub gray: Option<RGB8>,
}

fn serialize_gray<S: Serializer>(gray: &Option<RGB8>, s: S)
                                 -> Result<S::Ok, S::Error> {
    match gray {
        Some(c) => s.serialize_some(&crate::hex::encode(*c)),
        None => s.serialize_none(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_labels() {
        assert_eq!(ScaleLevel::new(0).to_string(), "000");
        assert_eq!(ScaleLevel::new(50).to_string(), "050");
        assert_eq!(ScaleLevel::new(500).to_string(), "500");
        assert_eq!(ScaleLevel::new(1000).to_string(), "1000");
    }

    #[test]
    fn level_parse() {
        assert_eq!("050".parse(), Ok(ScaleLevel::new(50)));
        assert_eq!("50".parse(), Ok(ScaleLevel::new(50)));
        assert_eq!("1000".parse(), Ok(ScaleLevel::new(1000)));
        for s in ["", "+50", "-1", "5o0", " 500", "99999"] {
            assert_eq!(s.parse::<ScaleLevel>(),
                       Err(Error::InvalidLevel(s.to_string())));
        }
    }

    #[test]
    fn level_order() {
        let mut v: Vec<ScaleLevel> = ["900", "100", "050", "1000"].iter()
            .map(|s| s.parse().unwrap()).collect();
        v.sort();
        let labels: Vec<_> = v.iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, ["050", "100", "900", "1000"]);
    }

    #[test]
    fn scheme_names() {
        assert_eq!(ScaleScheme::default(), ScaleScheme::Symmetric);
        assert_eq!(ScaleScheme::AnchorRelative.to_string(), "anchor-relative");
    }
}
