//! Tonal color scales from a single seed color.
//!
//! A [`ColorScale`] maps every rung of a fixed set of [`ScaleLevel`]s
//! (`050`, `100`, …, `900`) to a color, the way design-system color
//! tokens do.  The seed color sits at an anchor level; lighter levels
//! blend toward white and darker levels toward black (or continue the
//! seed's slope away from white).  Two [`ScaleScheme`]s are provided:
//!
//! - [`ScaleScheme::Symmetric`]: eleven levels `000 ..= 1000` with white
//!   and black as fixed endpoints; the anchor is the level whose gray
//!   reference is closest to the luma of the seed.
//! - [`ScaleScheme::AnchorRelative`]: ten levels `050 ..= 900`, the anchor
//!   chosen by the caller among `100 ..= 900`.
//!
//! Blending is done linearly in RGB space, see [`blend`].
//!
//! ```
//! use color_ramp::{generate_scale, ScaleScheme};
//! let scale = generate_scale("#036A8B", ScaleScheme::Symmetric, None)?;
//! assert_eq!(scale.anchor().level.to_string(), "700");
//! assert_eq!(scale.get("700").map(color_ramp::hex::encode),
//!            Some("#036a8b".to_string()));
//! # Ok::<(), color_ramp::Error>(())
//! ```

use rgb::{ComponentMap, RGB, RGB8};

mod error;
pub mod hex;
mod scale;

pub use error::{Error, Result};
pub use scale::{generate_scale, ColorScale, ScaleConfig,
                SymmetricConfig, AnchorRelativeConfig};
pub use scale::ty::{Anchor, ScaleLevel, ScaleScheme};

/// Pure white, the light end of every scale.
pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
/// Pure black, the dark end of the symmetric scale.
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 255\], although intermediate values may lie outside).
    fn to_rgb(&self) -> RGB<f64>;

    /// Create a color from its RGB components.  Encodings with a
    /// bounded range round and clamp the components.
    fn from_rgb(rgb: RGB<f64>) -> Self;

    /// Linear blend from `self` to `end`, see [`blend`].
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_ramp::{RGBColor, WHITE, BLACK};
    /// assert_eq!(WHITE.blend(&BLACK, 0.5), RGB8::new(128, 128, 128));
    /// ```
    fn blend(&self, end: &Self, factor: f64) -> Self {
        Self::from_rgb(blend(self.to_rgb(), end.to_rgb(), factor))
    }

    /// Convert the color to grayscale using the luma weights
    /// 0.299 R + 0.587 G + 0.114 B.
    fn to_gray(&self) -> Self {
        let x = luma(self.to_rgb());
        Self::from_rgb(RGB { r: x, g: x, b: x })
    }
}

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { *self }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 }
    }

    /// Rounds half away from zero and clamps to \[0, 255\].
    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        c.map(|x| x.round().clamp(0., 255.) as u8)
    }
}

#[inline]
fn luma(c: RGB<f64>) -> f64 { 0.299 * c.r + 0.587 * c.g + 0.114 * c.b }

/// Component-wise linear blend `round(start + (end - start) * factor)`.
///
/// `factor` is not restricted to \[0, 1\] and the result is not
/// clamped; rounding is half away from zero.
pub fn blend(start: RGB<f64>, end: RGB<f64>, factor: f64) -> RGB<f64> {
    let mix = |s: f64, e: f64| (s + (e - s) * factor).round();
    RGB { r: mix(start.r, end.r), g: mix(start.g, end.g),
          b: mix(start.b, end.b) }
}

/// Move `n` increments of `step` away from `start`, rounding each
/// component: `round(start + step * n)`.  The result is not clamped.
pub fn advance(start: RGB<f64>, step: RGB<f64>, n: f64) -> RGB<f64> {
    let mv = |s: f64, d: f64| (s + d * n).round();
    RGB { r: mv(start.r, step.r), g: mv(start.g, step.g),
          b: mv(start.b, step.b) }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: f64, g: f64, b: f64) -> RGB<f64> { RGB { r, g, b } }

    #[test]
    fn blend_endpoints() {
        let s = rgb(3., 106., 139.);
        assert_eq!(blend(s, WHITE.to_rgb(), 0.), s);
        assert_eq!(blend(s, WHITE.to_rgb(), 1.), WHITE.to_rgb());
    }

    #[test]
    fn blend_rounds_half_away_from_zero() {
        // 0 + 5 * 0.5 = 2.5 and 0 - 5 * 0.5 = -2.5
        assert_eq!(blend(rgb(0., 0., 0.), rgb(5., -5., 1.), 0.5),
                   rgb(3., -3., 1.));
    }

    #[test]
    fn blend_extrapolates_without_clamping() {
        let c = blend(rgb(10., 100., 250.), rgb(0., 50., 255.), 3.);
        assert_eq!(c, rgb(-20., -50., 265.));
        assert_eq!(RGB8::from_rgb(c), RGB8::new(0, 0, 255));
    }

    #[test]
    fn advance_steps() {
        let step = rgb(-50.4, -29.8, -23.2);
        assert_eq!(advance(WHITE.to_rgb(), step, 1.), rgb(205., 225., 232.));
        assert_eq!(advance(WHITE.to_rgb(), step, 0.5), rgb(230., 240., 243.));
    }

    #[test]
    fn gray() {
        let c = RGB8::new(0x03, 0x6a, 0x8b);
        assert_eq!(c.to_gray(), RGB8::new(79, 79, 79));
        assert_eq!(WHITE.to_gray(), WHITE);
        assert_eq!(BLACK.to_gray(), BLACK);
    }
}
