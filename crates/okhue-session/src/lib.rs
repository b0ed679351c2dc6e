//! Session layer for okhue — the input surface around the palette engine.
//!
//! Holds the user-adjustable inputs (hue, chroma, theme, format), parses
//! `:set`-style option directives, and keeps the rendered stylesheet text
//! in sync with every change.

pub mod options;
pub mod session;

pub use options::{OptionError, OptionName, SetDirective, Switch};
pub use session::{Command, Session, SessionError};
