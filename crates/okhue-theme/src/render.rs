//! Stylesheet rendering — palette to copy-pasteable CSS custom properties.
//!
//! Every format is line-oriented and renders roles in palette order:
//!
//! | Format   | Output                                                    |
//! |----------|-----------------------------------------------------------|
//! | `oklch`  | `--bg: oklch(0.15 0.06 250);` per role                    |
//! | `hsl`    | `--bg: hsl(250 40% 12%);` per role                        |
//! | `hybrid` | HSL block as fallback, then OKLCH block, for one theme    |
//! | `theme`  | `:root` (dark) and `body.light` blocks, each hybrid       |
//!
//! Rendering never fails. When the adapter is unavailable, HSL values
//! degrade to the OKLCH syntax they were converted from.

use std::fmt;
use std::str::FromStr;

use okhue_color::{Adapter, ConversionError, Hsl, Oklch};
use thiserror::Error;

use crate::palette::{Palette, Theme, generate_palette};

/// Comment that introduces the HSL fallback block.
pub const HSL_COMMENT: &str = "/* hsl (fallback color) */";
/// Comment that introduces the OKLCH block.
pub const OKLCH_COMMENT: &str = "/* oklch */";

// ---------------------------------------------------------------------------
// RenderFormat
// ---------------------------------------------------------------------------

/// How a palette is serialized to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Native `oklch(L C H)` syntax.
    #[default]
    Native,
    /// `hsl(H S% L%)` syntax.
    Hsl,
    /// HSL fallback block followed by the OKLCH block, current theme only.
    Hybrid,
    /// Dark and light hybrid blocks under `:root` and `body.light`.
    Theme,
}

impl RenderFormat {
    pub const ALL: [Self; 4] = [Self::Native, Self::Hsl, Self::Hybrid, Self::Theme];

    /// The token used on the command line and in `format=` options.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Native => "oklch",
            Self::Hsl => "hsl",
            Self::Hybrid => "hybrid",
            Self::Theme => "theme",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A format name that matches no [`RenderFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown render format `{0}`")]
pub struct UnknownFormat(pub String);

impl FromStr for RenderFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oklch" | "native" => Ok(Self::Native),
            "hsl" => Ok(Self::Hsl),
            "hybrid" | "fallback" => Ok(Self::Hybrid),
            "theme" | "theme-export" => Ok(Self::Theme),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render `palette` as text in `format`.
///
/// [`RenderFormat::Theme`] regenerates both the dark and the light
/// palette from the hue and chroma of `palette`, ignoring its theme.
#[must_use]
pub fn render(palette: &Palette, format: RenderFormat, adapter: Adapter<'_>) -> String {
    tracing::trace!(%format, available = adapter.is_available(), "rendering palette");
    match format {
        RenderFormat::Native => join_lines(palette, "", |c| c.to_string()),
        RenderFormat::Hsl => join_lines(palette, "", |c| hsl_value(c, adapter)),
        RenderFormat::Hybrid => hybrid_block(palette, "", adapter).trim_end().to_string(),
        RenderFormat::Theme => theme_export(palette, adapter),
    }
}

/// The HSL text for one OKLCH color, with the degraded fallbacks:
/// no adapter echoes the OKLCH syntax, an empty result prints black.
pub(crate) fn hsl_value(color: Oklch, adapter: Adapter<'_>) -> String {
    match adapter.oklch_to_hsl(color) {
        Ok(hsl) => hsl.to_string(),
        Err(ConversionError::Unavailable) => {
            tracing::debug!(%color, "no color converter, keeping oklch syntax");
            color.to_string()
        }
        Err(ConversionError::NoResult) => {
            tracing::debug!(%color, "conversion produced nothing, using black");
            Hsl::BLACK.to_string()
        }
    }
}

/// One `--role: value;` line per entry, joined with newlines.
fn join_lines(palette: &Palette, indent: &str, value: impl Fn(Oklch) -> String) -> String {
    palette
        .iter()
        .map(|entry| format!("{indent}{}: {};", entry.role.css_var(), value(entry.color)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// HSL comment, HSL lines, OKLCH comment, OKLCH lines. Every line ends
/// with a newline.
fn hybrid_block(palette: &Palette, indent: &str, adapter: Adapter<'_>) -> String {
    format!(
        "{indent}{HSL_COMMENT}\n{}\n{indent}{OKLCH_COMMENT}\n{}\n",
        join_lines(palette, indent, |c| hsl_value(c, adapter)),
        join_lines(palette, indent, |c| c.to_string()),
    )
}

/// Both themes, each as an indented hybrid block under its selector.
fn theme_export(palette: &Palette, adapter: Adapter<'_>) -> String {
    let input = palette.input();
    let dark = generate_palette(input.with_theme(Theme::Dark));
    let light = generate_palette(input.with_theme(Theme::Light));

    format!(
        ":root {{\n{}}}\nbody.light {{\n{}}}",
        hybrid_block(&dark, "  ", adapter),
        hybrid_block(&light, "  ", adapter),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
