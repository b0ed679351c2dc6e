//! # okhue-theme — OKLCH palette engine
//!
//! Turns one hue/chroma pair into a complete 14-role stylesheet palette
//! and renders it as copy-pasteable CSS custom properties. One parameter
//! shift (hue, chroma, dark/light) produces an entirely new palette.
//!
//! # Architecture
//!
//! ```text
//! hex string ──► import.rs: validate, convert, clamp ──┐
//!                                                      ▼
//! PaletteInput { hue, chroma, is_light }
//!     │
//!     ▼
//! palette.rs: derive sub-chromas, pick dark/light table,
//!             emit 14 roles in fixed order (pure)
//!     │
//!     ▼
//! render.rs:  oklch / hsl / hybrid / theme-export text
//!
//! legacy.rs:  reparse previously rendered text (degraded path)
//! ```
//!
//! # Color Space
//!
//! Every palette entry is an OKLCH triple. HSL appears only at render
//! time, through an [`okhue_color::Adapter`] that may be unavailable; in
//! that case rendering degrades to echoing the OKLCH syntax.

// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod import;
pub mod legacy;
pub mod palette;
pub mod render;
pub mod role;

pub use import::{HueChroma, InvalidHexError, import_hex, sanitize_hex_input};
pub use palette::{Palette, PaletteInput, RoleColor, Theme, generate_palette};
pub use render::{RenderFormat, render};
pub use role::Role;
