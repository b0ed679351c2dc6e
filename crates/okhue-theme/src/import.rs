//! Hex import — derive a hue/chroma pair from a `#RRGGBB` color.
//!
//! The importer validates the string, hands the RGB channels to the
//! conversion adapter, and returns the hue/chroma pair clamped to the
//! working range so it can be fed straight back into the palette input.
//! Lightness is discarded: the palette tables own lightness.

use okhue_color::{Adapter, Rgb};
use thiserror::Error;

use crate::palette::{PaletteInput, clamp_chroma, normalize_hue};

/// Why a hex string could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidHexError {
    /// Nothing was entered.
    #[error("please enter a hex color code")]
    Empty,

    /// Not six hex digits after an optional `#`.
    #[error("invalid hex color `{input}`, expected a format like #3B82F6")]
    Malformed { input: String },

    /// The digits were valid but no conversion result was available.
    #[error("could not convert `{input}` to OKLCH")]
    Unconvertible { input: String },
}

/// A hue/chroma pair extracted from a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueChroma {
    /// Hue rounded to whole degrees in [0, 360) (achromatic colors give 0).
    pub hue: f32,
    /// Chroma clamped into [0, 0.2].
    pub chroma: f32,
}

impl HueChroma {
    /// Quantize to slider resolution: whole degrees in 0–359 and chroma
    /// in hundredths.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn slider_values(self) -> (u16, f32) {
        // Safe: normalize_hue returns [0, 360) and the value is already whole.
        let hue = normalize_hue(self.hue.round()) as u16;
        let chroma = (self.chroma * 100.0).round() / 100.0;
        (hue, chroma)
    }

    /// Build a palette input from this pair.
    #[must_use]
    pub fn to_input(self, is_light: bool) -> PaletteInput {
        PaletteInput::new(self.hue, self.chroma, is_light)
    }
}

/// Import a hex color as a hue/chroma pair.
///
/// Accepts exactly six hex digits (any case), optionally prefixed with
/// `#`. Surrounding whitespace is ignored.
///
/// ```
/// use okhue_color::Adapter;
/// use okhue_theme::import_hex;
///
/// let hc = import_hex("#3B82F6", Adapter::palette()).unwrap();
/// assert!((255.0..=265.0).contains(&hc.hue));
/// assert!(hc.chroma <= 0.2);
/// ```
///
/// # Errors
///
/// [`InvalidHexError::Empty`] for blank input, [`InvalidHexError::Malformed`]
/// when the digits are wrong, and [`InvalidHexError::Unconvertible`] when the
/// adapter is unavailable or yields no result.
pub fn import_hex(input: &str, adapter: Adapter<'_>) -> Result<HueChroma, InvalidHexError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InvalidHexError::Empty);
    }

    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let rgb = Rgb::from_hex6(digits).ok_or_else(|| InvalidHexError::Malformed {
        input: input.to_string(),
    })?;

    let reading = adapter.rgb_to_oklch(rgb).map_err(|err| {
        tracing::debug!(%err, input, "hex import conversion failed");
        InvalidHexError::Unconvertible { input: input.to_string() }
    })?;

    let color = reading.with_hue_or(0.0);
    let hue = normalize_hue(color.h.round());
    let chroma = clamp_chroma(color.c);
    tracing::debug!(input, hue, chroma, "imported hex color");

    Ok(HueChroma { hue, chroma })
}

/// Clean up hex text as it is typed: drop everything that is not `#` or a
/// hex digit, then make sure a non-empty result starts with `#`.
///
/// ```
/// use okhue_theme::sanitize_hex_input;
///
/// assert_eq!(sanitize_hex_input("3b 82-f6"), "#3b82f6");
/// assert_eq!(sanitize_hex_input("xyz"), "");
/// ```
#[must_use]
pub fn sanitize_hex_input(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| *c == '#' || c.is_ascii_hexdigit())
        .collect();
    if kept.is_empty() || kept.starts_with('#') {
        kept
    } else {
        format!("#{kept}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
