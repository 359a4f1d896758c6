//! Scale generation.

use lazy_static::lazy_static;
use log::{debug, trace};
use rgb::{RGB, RGB8};
use serde::{Serialize, Serializer, ser::SerializeMap};
use crate::{hex, blend, advance, Error, Result, RGBColor, WHITE, BLACK};

pub(crate) mod ty;
use ty::*;

/// Reference tables of the symmetric scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymmetricConfig {
    /// Ordered levels; the first and last are the white and black
    /// endpoints and are not part of the generated scale.
    pub levels: Vec<ScaleLevel>,
    /// Expected gray intensity of each level, searched in order to find
    /// the anchor of a seed color.
    pub gray_reference: Vec<(ScaleLevel, u8)>,
}

/// Reference tables of the anchor-relative scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorRelativeConfig {
    /// Generated levels.
    pub levels: Vec<ScaleLevel>,
    /// Levels a caller may pick as anchor.
    pub anchors: Vec<ScaleLevel>,
}

/// Level sets and reference tables used by the generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaleConfig {
    pub symmetric: SymmetricConfig,
    pub anchor_relative: AnchorRelativeConfig,
}

fn levels(values: &[u16]) -> Vec<ScaleLevel> {
    values.iter().map(|&v| ScaleLevel::new(v)).collect()
}

lazy_static! {
    static ref DEFAULT_CONFIG: ScaleConfig = ScaleConfig {
        symmetric: SymmetricConfig {
            levels: levels(&[0, 100, 200, 300, 400, 500,
                             600, 700, 800, 900, 1000]),
            gray_reference: [(0, 255), (100, 230), (200, 204), (300, 179),
                             (400, 153), (500, 128), (600, 102), (700, 77),
                             (800, 51), (900, 26), (1000, 0)].iter()
                .map(|&(l, g)| (ScaleLevel::new(l), g))
                .collect(),
        },
        anchor_relative: AnchorRelativeConfig {
            levels: levels(&[50, 100, 200, 300, 400, 500, 600, 700, 800, 900]),
            anchors: levels(&[100, 200, 300, 400, 500, 600, 700, 800, 900]),
        },
    };
}

impl ScaleConfig {
    /// The design-token level sets: `000 ..= 1000` for the symmetric
    /// scheme and `050 ..= 900` (anchors `100 ..= 900`) for the
    /// anchor-relative one.
    pub fn standard() -> &'static ScaleConfig { &DEFAULT_CONFIG }
}

impl Default for ScaleConfig {
    fn default() -> Self { DEFAULT_CONFIG.clone() }
}

/// A generated scale: one color per level, ascending by level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorScale {
    scheme: ScaleScheme,
    seed: RGB8,
    anchor: Anchor,
    colors: Vec<(ScaleLevel, RGB8)>, // sorted by level
}

/// Generate the scale of `seed` (a HEX color) with the standard level
/// sets.  `anchor` is required by [`ScaleScheme::AnchorRelative`] and
/// ignored by [`ScaleScheme::Symmetric`], which derives its own.
///
/// ```
/// use color_ramp::{generate_scale, ScaleScheme, Error};
/// let scale = generate_scale("#036A8B", ScaleScheme::AnchorRelative,
///                            Some("500"))?;
/// let hex: Vec<_> = scale.hex().map(|(_, h)| h).collect();
/// assert_eq!(hex[0], "#e6f0f3");
/// assert_eq!(hex[5], "#036a8b");
/// assert_eq!(generate_scale("#036A8B", ScaleScheme::AnchorRelative,
///                           Some("050")),
///            Err(Error::InvalidLevel("050".into())));
/// # Ok::<(), Error>(())
/// ```
pub fn generate_scale(seed: &str, scheme: ScaleScheme, anchor: Option<&str>)
                      -> Result<ColorScale> {
    let seed = hex::decode(seed)?;
    let anchor = anchor.map(str::parse::<ScaleLevel>).transpose()?;
    ColorScale::with_config(seed, scheme, anchor, ScaleConfig::standard())
}

impl ColorScale {
    /// Generate the scale of `seed` using the level sets of `config`.
    pub fn with_config(seed: RGB8, scheme: ScaleScheme,
                       anchor: Option<ScaleLevel>, config: &ScaleConfig)
                       -> Result<Self> {
        match scheme {
            ScaleScheme::Symmetric =>
                symmetric(seed, &config.symmetric),
            ScaleScheme::AnchorRelative => {
                let anchor = anchor.ok_or_else(|| {
                    Error::InvalidLevel("none".to_string()) })?;
                anchor_relative(seed, anchor, &config.anchor_relative)
            }
        }
    }

    pub fn scheme(&self) -> ScaleScheme { self.scheme }

    /// The seed color the scale was generated from.
    pub fn seed(&self) -> RGB8 { self.seed }

    pub fn anchor(&self) -> Anchor { self.anchor }

    /// Number of generated levels.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Return the color at `level` (e.g. `"050"` or `"50"`), if the
    /// scale has it.
    pub fn get(&self, level: &str) -> Option<RGB8> {
        let level: ScaleLevel = level.parse().ok()?;
        self.color(level)
    }

    pub fn color(&self, level: ScaleLevel) -> Option<RGB8> {
        self.colors.binary_search_by_key(&level, |&(l, _)| l).ok()
            .map(|i| self.colors[i].1)
    }

    /// Iterate on levels and colors, lightest level first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (ScaleLevel, RGB8)>
        + DoubleEndedIterator + '_ {
        self.colors.iter().copied()
    }

    /// Iterate on levels and HEX colors, lightest level first.
    pub fn hex(&self) -> impl Iterator<Item = (ScaleLevel, String)> + '_ {
        self.iter().map(|(l, c)| (l, hex::encode(c)))
    }
}

/// Serialized as an ordered map from level label to HEX color.
impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.colors.len()))?;
        for (level, hex) in self.hex() {
            map.serialize_entry(&level, &hex)?;
        }
        map.end()
    }
}

/// Return the level of `reference` whose gray intensity is closest to
/// `gray`.  Ties go to the earliest entry.
fn closest_gray_level(reference: &[(ScaleLevel, u8)], gray: u8)
                      -> Option<ScaleLevel> {
    let dist = |g: u8| (g as i16 - gray as i16).abs();
    let mut best: Option<(ScaleLevel, i16)> = None;
    for &(level, g) in reference {
        match best {
            Some((_, d)) if dist(g) >= d => (),
            _ => best = Some((level, dist(g))),
        }
    }
    best.map(|(level, _)| level)
}

fn symmetric(seed: RGB8, config: &SymmetricConfig) -> Result<ColorScale> {
    let gray = seed.to_gray();
    let level = closest_gray_level(&config.gray_reference, gray.r)
        .ok_or_else(|| Error::InvalidLevel("none".to_string()))?;
    let center = config.levels.iter().position(|&l| l == level)
        .ok_or_else(|| Error::InvalidLevel(level.to_string()))?;
    debug!("seed {}: grayscale {} closest to level {level}",
           hex::encode(seed), hex::encode(gray));
    let last = config.levels.len() - 1;
    let (white, black, c) = (WHITE.to_rgb(), BLACK.to_rgb(), seed.to_rgb());
    let ratio = |n: usize, d: usize| {
        if d == 0 { 0. } else { n as f64 / d as f64 } };
    let mut colors = Vec::with_capacity(last.saturating_sub(1));
    for (i, &l) in config.levels.iter().enumerate().take(last).skip(1) {
        let color = if i < center {
            let t = ratio(i, center);
            trace!("level {l}: white → seed, factor {t}");
            RGB8::from_rgb(blend(white, c, t))
        } else if i > center {
            let t = ratio(i - center, last - center);
            trace!("level {l}: seed → black, factor {t}");
            RGB8::from_rgb(blend(c, black, t))
        } else {
            seed
        };
        colors.push((l, color));
    }
    colors.sort_by_key(|&(l, _)| l);
    Ok(ColorScale { scheme: ScaleScheme::Symmetric, seed,
                    anchor: Anchor { level, gray: Some(gray) }, colors })
}

fn anchor_relative(seed: RGB8, anchor: ScaleLevel,
                   config: &AnchorRelativeConfig) -> Result<ColorScale> {
    if anchor.value() == 0 || !config.anchors.contains(&anchor) {
        return Err(Error::InvalidLevel(anchor.to_string()))
    }
    let center = anchor.value() as f64;
    let (white, c) = (WHITE.to_rgb(), seed.to_rgb());
    // Change of color per 100 level units.
    let steps = center / 100.;
    let diff = RGB { r: (c.r - white.r) / steps, g: (c.g - white.g) / steps,
                     b: (c.b - white.b) / steps };
    debug!("seed {} anchored at {anchor}: step {diff:?} per 100",
           hex::encode(seed));
    let mut colors: Vec<_> = config.levels.iter().map(|&l| {
        let level = l.value() as f64;
        let color = if l < anchor {
            RGB8::from_rgb(advance(white, diff, level / 100.))
        } else if l > anchor {
            RGB8::from_rgb(advance(c, diff, (level - center) / 100.))
        } else {
            seed
        };
        (l, color)
    }).collect();
    colors.sort_by_key(|&(l, _)| l);
    Ok(ColorScale { scheme: ScaleScheme::AnchorRelative, seed,
                    anchor: Anchor { level: anchor, gray: None }, colors })
}
