// SPDX-License-Identifier: MIT
//
// The color conversion seam.
//
// Three conversions are needed by the theme engine:
//
//   RGB   → OKLCH   (hex import)
//   OKLCH → RGB     (export, as the first half of OKLCH → HSL)
//   RGB   → HSL     (export fallback syntax)
//
// `ColorConverter` is the trait at the seam; `PaletteConverter` is the
// production implementation backed by the `palette` crate. Callers never
// hold a converter directly. They hold an `Adapter`, which is either
// `Available` or explicitly `Unavailable`, so the "no color library"
// case is a value to match on rather than a missing global.

use std::fmt;

use palette::convert::FromColorUnclamped;
use palette::{FromColor, Hsl as PaletteHsl, Oklch as PaletteOklch, Srgb};
use thiserror::Error;

use crate::color::{Hsl, Oklch, OklchReading, Rgb};

/// Chroma below this is treated as achromatic: the hue angle is noise.
pub const ACHROMATIC_EPSILON: f32 = 1e-4;

// ─── ColorConverter ──────────────────────────────────────────────────────────

/// Color-space conversions used by the theme engine.
///
/// Implementations return `None` when they cannot produce a result (for
/// example on non-finite input). They must never panic.
pub trait ColorConverter {
    /// Convert normalized sRGB to OKLCH. Achromatic colors report `h = None`.
    fn rgb_to_oklch(&self, rgb: Rgb) -> Option<OklchReading>;

    /// Convert OKLCH to normalized sRGB without clamping to the gamut.
    fn oklch_to_rgb(&self, color: Oklch) -> Rgb;

    /// Convert normalized sRGB to HSL.
    fn rgb_to_hsl(&self, rgb: Rgb) -> Option<Hsl>;
}

/// Saturation below this prints as `0%`; the hue of such a color is noise.
pub const GRAY_SATURATION: f64 = 0.005;

/// Converter backed by the `palette` crate.
///
/// Math runs in `f64` so that grays and near-blacks do not pick up
/// hue drift from single-precision rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteConverter;

impl PaletteConverter {
    fn srgb(rgb: Rgb) -> Srgb<f64> {
        Srgb::new(f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b))
    }
}

#[allow(clippy::cast_possible_truncation)]
impl ColorConverter for PaletteConverter {
    fn rgb_to_oklch(&self, rgb: Rgb) -> Option<OklchReading> {
        if !rgb.is_finite() {
            return None;
        }
        let lch: PaletteOklch<f64> = PaletteOklch::from_color(Self::srgb(rgb));
        let h = (lch.chroma >= f64::from(ACHROMATIC_EPSILON))
            .then(|| lch.hue.into_positive_degrees() as f32);
        Some(OklchReading { l: lch.l as f32, c: lch.chroma as f32, h })
    }

    fn oklch_to_rgb(&self, color: Oklch) -> Rgb {
        let lch = PaletteOklch::new(f64::from(color.l), f64::from(color.c), f64::from(color.h));
        let srgb: Srgb<f64> = Srgb::from_color_unclamped(lch);
        Rgb::new(srgb.red as f32, srgb.green as f32, srgb.blue as f32)
    }

    fn rgb_to_hsl(&self, rgb: Rgb) -> Option<Hsl> {
        if !rgb.is_finite() {
            return None;
        }
        let hsl: PaletteHsl<palette::encoding::Srgb, f64> =
            PaletteHsl::from_color_unclamped(Self::srgb(rgb));
        let h = if hsl.saturation.abs() < GRAY_SATURATION {
            0.0
        } else {
            hsl.hue.into_positive_degrees()
        };
        let out = Hsl::new(h as f32, hsl.saturation as f32, hsl.lightness as f32);
        (out.h.is_finite() && out.s.is_finite() && out.l.is_finite()).then_some(out)
    }
}

// ─── ConversionError ─────────────────────────────────────────────────────────

/// Why a conversion through an [`Adapter`] produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No color converter is installed.
    #[error("color conversion is unavailable")]
    Unavailable,

    /// The converter ran but returned no result.
    #[error("color conversion produced no result")]
    NoResult,
}

// ─── Adapter ─────────────────────────────────────────────────────────────────

/// A possibly-absent color converter.
///
/// ```
/// use okhue_color::{Adapter, ConversionError, Oklch};
///
/// let red = Oklch::new(0.628, 0.2577, 29.23);
/// assert!(Adapter::palette().oklch_to_hsl(red).is_ok());
/// assert_eq!(Adapter::Unavailable.oklch_to_hsl(red), Err(ConversionError::Unavailable));
/// ```
#[derive(Clone, Copy)]
pub enum Adapter<'a> {
    Available(&'a dyn ColorConverter),
    Unavailable,
}

impl Adapter<'static> {
    /// The adapter backed by [`PaletteConverter`].
    #[must_use]
    pub fn palette() -> Self {
        Self::Available(&PaletteConverter)
    }
}

impl Adapter<'_> {
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Convert normalized sRGB to OKLCH.
    ///
    /// # Errors
    ///
    /// [`ConversionError::Unavailable`] without a converter,
    /// [`ConversionError::NoResult`] if the converter yields nothing.
    pub fn rgb_to_oklch(self, rgb: Rgb) -> Result<OklchReading, ConversionError> {
        match self {
            Self::Available(conv) => conv.rgb_to_oklch(rgb).ok_or(ConversionError::NoResult),
            Self::Unavailable => Err(ConversionError::Unavailable),
        }
    }

    /// Convert an OKLCH triple to HSL by way of unclamped sRGB.
    ///
    /// # Errors
    ///
    /// [`ConversionError::Unavailable`] without a converter,
    /// [`ConversionError::NoResult`] if the converter yields nothing.
    pub fn oklch_to_hsl(self, color: Oklch) -> Result<Hsl, ConversionError> {
        match self {
            Self::Available(conv) => {
                if !color.is_finite() {
                    return Err(ConversionError::NoResult);
                }
                let rgb = conv.oklch_to_rgb(color);
                conv.rgb_to_hsl(rgb).ok_or(ConversionError::NoResult)
            }
            Self::Unavailable => Err(ConversionError::Unavailable),
        }
    }
}

impl Default for Adapter<'static> {
    fn default() -> Self {
        Self::palette()
    }
}

impl fmt::Debug for Adapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(_) => f.write_str("Adapter::Available"),
            Self::Unavailable => f.write_str("Adapter::Unavailable"),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
