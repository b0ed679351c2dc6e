// SPDX-License-Identifier: MIT
//
// Color value types — the data that crosses the conversion seam.
//
// Single-character field names (l, c, h, r, g, b, s) are the standard
// convention in color science and match how the values are written in
// CSS color functions.
#![allow(clippy::many_single_char_names)]
//
// None of these types do color-space math. They carry values and know
// how to print themselves in the syntax a stylesheet expects:
//
//   Oklch → `oklch(0.15 0.06 250)`
//   Hsl   → `hsl(217 91% 60%)`

use std::fmt;

// ─── Oklch ───────────────────────────────────────────────────────────────────

/// A perceptual color in OKLCH space.
///
/// Values are stored exactly as computed, without gamut mapping. The
/// `Display` impl prints the shortest decimal that round-trips each
/// component, so a lightness of `1.0` prints as `1` and a chroma of
/// `0.06` prints as `0.06`.
///
/// ```
/// use okhue_color::Oklch;
///
/// let bg = Oklch::new(0.15, 0.06, 250.0);
/// assert_eq!(bg.to_string(), "oklch(0.15 0.06 250)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f32,

    /// Chroma (colorfulness): 0.0 (gray) upward.
    pub c: f32,

    /// Hue angle in degrees: 0.0 to 360.0.
    pub h: f32,
}

impl Oklch {
    #[inline]
    #[must_use]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Whether all three components are finite numbers.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.l.is_finite() && self.c.is_finite() && self.h.is_finite()
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {})", self.l, self.c, self.h)
    }
}

// ─── OklchReading ────────────────────────────────────────────────────────────

/// An OKLCH value as reported by a converter reading from RGB.
///
/// Achromatic colors (grays, black, white) have no meaningful hue, so the
/// converter reports `h = None` for them instead of an arbitrary angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklchReading {
    pub l: f32,
    pub c: f32,
    pub h: Option<f32>,
}

impl OklchReading {
    /// Resolve into a full triple, using `fallback_hue` for achromatic readings.
    #[must_use]
    pub fn with_hue_or(self, fallback_hue: f32) -> Oklch {
        Oklch::new(self.l, self.c, self.h.unwrap_or(fallback_hue))
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// Normalized sRGB, each channel nominally 0.0 to 1.0.
///
/// Values coming back from OKLCH conversion are not clamped: colors
/// outside the sRGB gamut show up as channels below 0 or above 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create from 8-bit channels (0 to 255).
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse exactly six hex digits (`RRGGBB`, any case, no `#`).
    ///
    /// Returns `None` for any other length or a non-hex character.
    #[must_use]
    pub fn from_hex6(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 6 {
            return None;
        }
        let r = parse_hex_byte(&bytes[0..2])?;
        let g = parse_hex_byte(&bytes[2..4])?;
        let b = parse_hex_byte(&bytes[4..6])?;
        Some(Self::from_rgb8(r, g, b))
    }

    /// Whether all three channels are finite numbers.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// An HSL color: hue in degrees, saturation and lightness as fractions.
///
/// `Display` prints the CSS Color 4 space-separated form with integer
/// degrees and integer percentages. A percentage that rounds outside
/// 0–100 is printed as `100`, which is how out-of-gamut conversions are
/// reported in the exported stylesheet.
///
/// ```
/// use okhue_color::Hsl;
///
/// assert_eq!(Hsl::new(216.7, 0.912, 0.598).to_string(), "hsl(217 91% 60%)");
/// assert_eq!(Hsl::new(10.0, 1.3, -0.02).to_string(), "hsl(10 100% 100%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// The literal printed when a converter yields nothing at all.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Hue rounded to whole degrees.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn degrees(self) -> i32 {
        if self.h.is_finite() { self.h.round() as i32 } else { 0 }
    }

    /// Saturation as a whole percentage, coerced into 0–100.
    #[must_use]
    pub fn saturation_percent(self) -> u8 {
        coerce_percent(self.s)
    }

    /// Lightness as a whole percentage, coerced into 0–100.
    #[must_use]
    pub fn lightness_percent(self) -> u8 {
        coerce_percent(self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({} {}% {}%)",
            self.degrees(),
            self.saturation_percent(),
            self.lightness_percent()
        )
    }
}

/// Round a fraction to a whole percentage. Anything outside 0–100
/// (including NaN) becomes 100.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn coerce_percent(fraction: f32) -> u8 {
    let percent = (fraction * 100.0).round();
    if (0.0..=100.0).contains(&percent) {
        // Safe: range check above guarantees 0 <= percent <= 100.
        percent as u8
    } else {
        100
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
