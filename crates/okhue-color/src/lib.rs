// SPDX-License-Identifier: MIT
//
// okhue-color — color values and the conversion seam for okhue.
//
// The theme engine thinks in OKLCH, but stylesheets still need HSL
// fallbacks and users still paste hex codes. This crate holds the plain
// value types that flow between those worlds and the adapter boundary
// that performs the actual color-space math.
//
// The math itself is not implemented here. It is delegated to the
// `palette` crate behind the `ColorConverter` trait, and callers hold
// an `Adapter` that may explicitly be `Unavailable`. Every consumer has
// to decide what degraded output looks like when conversion is absent.
//
//   hex ──► Rgb ──► ColorConverter ──► OklchReading
//   Oklch ──► ColorConverter ──► Rgb ──► Hsl

pub mod color;
pub mod convert;

pub use color::{Hsl, Oklch, OklchReading, Rgb};
pub use convert::{Adapter, ColorConverter, ConversionError, PaletteConverter};
