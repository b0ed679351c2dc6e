//! Session options — the `:set` system.
//!
//! Turns `:set` arguments into resolved directives. Every option name is
//! checked here, so a line with a bad word is rejected before the
//! [`Session`](crate::Session) applies any of it. Values are validated
//! when applied.
//!
//! # Supported syntax
//!
//! | Syntax                    | Effect                            |
//! |---------------------------|-----------------------------------|
//! | `set light` / `set li`    | Switch to the light theme         |
//! | `set nolight` / `set noli`| Switch to the dark theme          |
//! | `set light!`              | Flip the theme                    |
//! | `set hue` / `set hue?`    | Print a value (`light?` too)      |
//! | `set hue=V`               | Assign hue, chroma, format or hex |
//! | `set`                     | Print options that differ from the defaults |
//! | `set all`                 | Print every readable option       |
//!
//! `hex` can only be assigned: it has no value of its own once imported.
//!
//! # Option names
//!
//! | Full name | Abbrev | Type    | Default |
//! |-----------|--------|---------|---------|
//! | `hue`     | `h`    | integer | 250     |
//! | `chroma`  | `c`    | decimal | 0.1     |
//! | `light`   | `li`   | bool    | false   |
//! | `format`  | `fmt`  | text    | oklch   |
//! | `hex`     |        | text    | (none)  |

use thiserror::Error;

/// How a `light` directive changes the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
    Toggle,
}

impl Switch {
    /// The new value of a boolean currently set to `current`.
    #[must_use]
    pub const fn apply(self, current: bool) -> bool {
        match self {
            Self::On => true,
            Self::Off => false,
            Self::Toggle => !current,
        }
    }
}

/// One resolved `:set` word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `light`, `nolight`, `light!`.
    Light(Switch),

    /// `name=value`. The value is still raw text.
    Assign(OptionName, String),

    /// `name?`, or a bare non-boolean name.
    Query(OptionName),

    /// `set` on its own.
    ShowChanged,

    /// `set all`.
    ShowAll,
}

/// A resolved option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionName {
    Hue,
    Chroma,
    Light,
    Format,
    Hex,
}

impl OptionName {
    /// Options in `set all` display order. `hex` is write-only.
    pub const LISTED: [Self; 4] = [Self::Hue, Self::Chroma, Self::Light, Self::Format];

    /// Resolve a full name or abbreviation.
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        Some(match name {
            "hue" | "h" => Self::Hue,
            "chroma" | "c" => Self::Chroma,
            "light" | "li" => Self::Light,
            "format" | "fmt" => Self::Format,
            "hex" => Self::Hex,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Chroma => "chroma",
            Self::Light => "light",
            Self::Format => "format",
            Self::Hex => "hex",
        }
    }
}

/// Errors from parsing or applying a `:set` directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    Unknown(String),

    #[error("not a boolean option: {0}")]
    NotBoolean(String),

    #[error("boolean option takes no value: {0}")]
    IsBoolean(String),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },

    #[error("option has no readable value: {0}")]
    WriteOnly(String),
}

/// Parse a whole `:set` argument string.
///
/// Blank input asks for the changed options. Otherwise each
/// whitespace-separated word becomes one directive, in order.
///
/// # Errors
///
/// The first word that names no option, or uses one the wrong way.
pub fn parse_set(args: &str) -> Result<Vec<SetDirective>, OptionError> {
    let words: Vec<&str> = args.split_whitespace().collect();
    if words.is_empty() {
        return Ok(vec![SetDirective::ShowChanged]);
    }
    words.into_iter().map(SetDirective::parse).collect()
}

impl SetDirective {
    /// Parse a single `:set` word.
    ///
    /// # Errors
    ///
    /// See [`parse_set`].
    pub fn parse(word: &str) -> Result<Self, OptionError> {
        if word == "all" {
            return Ok(Self::ShowAll);
        }

        if let Some((name, value)) = word.split_once('=') {
            return match lookup(name)? {
                OptionName::Light => Err(OptionError::IsBoolean(name.to_string())),
                option => Ok(Self::Assign(option, value.to_string())),
            };
        }

        if let Some(name) = word.strip_suffix('?') {
            return query(lookup(name)?, name);
        }

        if let Some(name) = word.strip_suffix('!') {
            return match lookup(name)? {
                OptionName::Light => Ok(Self::Light(Switch::Toggle)),
                _ => Err(OptionError::NotBoolean(name.to_string())),
            };
        }

        // `no` only negates the boolean; `nohue` falls through as unknown.
        if word.strip_prefix("no").and_then(OptionName::resolve) == Some(OptionName::Light) {
            return Ok(Self::Light(Switch::Off));
        }

        match lookup(word)? {
            OptionName::Light => Ok(Self::Light(Switch::On)),
            option => query(option, word),
        }
    }
}

fn lookup(name: &str) -> Result<OptionName, OptionError> {
    OptionName::resolve(name).ok_or_else(|| OptionError::Unknown(name.to_string()))
}

fn query(option: OptionName, name: &str) -> Result<SetDirective, OptionError> {
    match option {
        OptionName::Hex => Err(OptionError::WriteOnly(name.to_string())),
        _ => Ok(SetDirective::Query(option)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
