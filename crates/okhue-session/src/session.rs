//! Session state — the inputs a user manipulates and the text on display.
//!
//! A [`Session`] owns the slider-resolution inputs (whole-degree hue,
//! hundredth chroma), the theme, the selected render format, and the
//! rendered text. Every mutation re-renders the display in full, so the
//! display always reflects the latest input (last write wins).
//!
//! # Commands
//!
//! | Command          | Effect                                        |
//! |------------------|-----------------------------------------------|
//! | `set ARGS`       | Apply `:set` directives (see [`options`])     |
//! | `hex #RRGGBB`    | Import hue/chroma from a hex color            |
//! | `format NAME`    | Select a render format                        |
//! | `toggle`         | Switch between dark and light                 |
//! | `show`           | Print the display                             |
//! | `quit`           | Leave the session                             |
//!
//! [`options`]: crate::options

use okhue_color::Adapter;
use okhue_theme::import::InvalidHexError;
use okhue_theme::legacy::reformat_text;
use okhue_theme::palette::{clamp_chroma, normalize_hue};
use okhue_theme::{Palette, PaletteInput, RenderFormat, Theme, generate_palette, import_hex, render};
use thiserror::Error;

use crate::options::{OptionError, OptionName, SetDirective, parse_set};

/// Hue the session starts with.
pub const DEFAULT_HUE: u16 = 250;
/// Chroma the session starts with.
pub const DEFAULT_CHROMA: f32 = 0.1;

/// Errors surfaced to the user by a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Hex(#[from] InvalidHexError),

    #[error(transparent)]
    Option(#[from] OptionError),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(String),
    Hex(String),
    Format(String),
    Toggle,
    Show,
    Quit,
}

impl Command {
    /// Parse a command line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownCommand`] for an unrecognized verb and
    /// [`SessionError::MissingArgument`] when `hex` or `format` has none.
    pub fn parse(line: &str) -> Result<Option<Self>, SessionError> {
        let line = line.trim();
        let line = line.strip_prefix(':').unwrap_or(line);
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let cmd = match verb {
            "set" | "se" => Self::Set(rest.to_string()),
            "hex" => Self::Hex(required(rest, "hex")?),
            "format" | "fmt" => Self::Format(required(rest, "format")?),
            "toggle" => Self::Toggle,
            "show" | "print" | "p" => Self::Show,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(SessionError::UnknownCommand(verb.to_string())),
        };
        Ok(Some(cmd))
    }
}

fn required(arg: &str, command: &'static str) -> Result<String, SessionError> {
    if arg.is_empty() {
        Err(SessionError::MissingArgument(command))
    } else {
        Ok(arg.to_string())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Interactive palette state plus the rendered display text.
#[derive(Debug)]
pub struct Session<'a> {
    hue: u16,
    chroma: f32,
    theme: Theme,
    format: RenderFormat,
    adapter: Adapter<'a>,
    display: String,
}

impl<'a> Session<'a> {
    /// A session with default inputs, rendered in OKLCH.
    #[must_use]
    pub fn new(adapter: Adapter<'a>) -> Self {
        let mut session = Self {
            hue: DEFAULT_HUE,
            chroma: DEFAULT_CHROMA,
            theme: Theme::Dark,
            format: RenderFormat::Native,
            adapter,
            display: String::new(),
        };
        session.refresh();
        session
    }

    // ── Accessors ────────────────────────────────────────────────────────

    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    #[must_use]
    pub const fn chroma(&self) -> f32 {
        self.chroma
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn format(&self) -> RenderFormat {
        self.format
    }

    /// The text currently on display.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// A snapshot of the current inputs.
    #[must_use]
    pub fn input(&self) -> PaletteInput {
        PaletteInput::new(f32::from(self.hue), self.chroma, self.theme.is_light())
    }

    /// The palette for the current inputs.
    #[must_use]
    pub fn palette(&self) -> Palette {
        generate_palette(self.input())
    }

    // ── Mutations ────────────────────────────────────────────────────────

    /// Set the hue, rounded to whole degrees and wrapped into 0–359.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_hue(&mut self, hue: f32) {
        // Safe: normalize_hue returns a whole number in [0, 360).
        self.hue = normalize_hue(hue.round()) as u16;
        self.refresh();
    }

    /// Set the chroma, clamped into 0–0.2 and rounded to hundredths.
    pub fn set_chroma(&mut self, chroma: f32) {
        self.chroma = (clamp_chroma(chroma) * 100.0).round() / 100.0;
        self.refresh();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.refresh();
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggle());
    }

    /// Import hue and chroma from a hex color into the sliders.
    ///
    /// On error the session is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the importer's [`InvalidHexError`].
    pub fn apply_hex(&mut self, hex: &str) -> Result<(), SessionError> {
        let (hue, chroma) = import_hex(hex, self.adapter)?.slider_values();
        self.hue = hue;
        self.chroma = chroma;
        self.refresh();
        Ok(())
    }

    /// Select a render format by name.
    ///
    /// A name that is not a known format keeps the current format and
    /// reformats the text already on display instead, converting the
    /// OKLCH declarations it can recognize.
    pub fn select_format(&mut self, name: &str) {
        match name.parse::<RenderFormat>() {
            Ok(format) => {
                self.format = format;
                self.refresh();
            }
            Err(err) => {
                tracing::warn!(%err, "reformatting displayed text");
                self.display = reformat_text(&self.display, self.adapter);
            }
        }
    }

    fn refresh(&mut self) {
        self.display = render(&self.palette(), self.format, self.adapter);
    }

    // ── Command dispatch ─────────────────────────────────────────────────

    /// Run one command and return any lines to report back.
    ///
    /// [`Command::Quit`] is a no-op here; the caller decides when to stop.
    ///
    /// # Errors
    ///
    /// Hex import and option errors are returned as [`SessionError`].
    pub fn execute(&mut self, cmd: &Command) -> Result<Vec<String>, SessionError> {
        match cmd {
            Command::Set(args) => self.apply_set(args),
            Command::Hex(hex) => self.apply_hex(hex).map(|()| Vec::new()),
            Command::Format(name) => {
                self.select_format(name);
                Ok(Vec::new())
            }
            Command::Toggle => {
                self.toggle_theme();
                Ok(Vec::new())
            }
            Command::Show => Ok(vec![self.display.clone()]),
            Command::Quit => Ok(Vec::new()),
        }
    }

    /// Apply `:set` arguments.
    ///
    /// The whole line is parsed first, so an unknown or misused option
    /// changes nothing. A value that fails to apply stops processing, and
    /// the directives before it stay applied.
    ///
    /// # Errors
    ///
    /// [`OptionError`] from parsing, or the first directive that fails.
    pub fn apply_set(&mut self, args: &str) -> Result<Vec<String>, SessionError> {
        let directives = parse_set(args)?;
        let mut messages = Vec::new();
        for directive in directives {
            match directive {
                SetDirective::Light(switch) => {
                    let light = switch.apply(self.theme.is_light());
                    self.set_theme(Theme::from_is_light(light));
                }
                SetDirective::Assign(option, value) => self.assign(option, &value)?,
                SetDirective::Query(option) => messages.extend(self.query(option)),
                SetDirective::ShowChanged => messages.extend(self.changed_options()),
                SetDirective::ShowAll => {
                    messages.extend(OptionName::LISTED.into_iter().filter_map(|o| self.query(o)));
                }
            }
        }
        Ok(messages)
    }

    fn assign(&mut self, option: OptionName, value: &str) -> Result<(), SessionError> {
        let invalid = || OptionError::InvalidValue {
            name: option.full_name().to_string(),
            value: value.to_string(),
        };
        match option {
            OptionName::Hue => {
                let hue = value.parse::<f32>().ok().filter(|v| v.is_finite()).ok_or_else(invalid)?;
                self.set_hue(hue);
            }
            OptionName::Chroma => {
                let chroma = value.parse::<f32>().ok().filter(|v| v.is_finite()).ok_or_else(invalid)?;
                self.set_chroma(chroma);
            }
            OptionName::Light => {
                return Err(OptionError::IsBoolean(option.full_name().to_string()).into());
            }
            OptionName::Format => self.select_format(value),
            OptionName::Hex => self.apply_hex(value)?,
        }
        Ok(())
    }

    /// `name=value` for an option, `light`/`nolight` for the theme, and
    /// nothing for the write-only `hex`.
    fn query(&self, option: OptionName) -> Option<String> {
        Some(match option {
            OptionName::Hue => format!("hue={}", self.hue),
            OptionName::Chroma => format!("chroma={}", self.chroma),
            OptionName::Light if self.theme.is_light() => "light".to_string(),
            OptionName::Light => "nolight".to_string(),
            OptionName::Format => format!("format={}", self.format),
            OptionName::Hex => return None,
        })
    }

    fn changed_options(&self) -> Vec<String> {
        let mut changed = Vec::new();
        if self.hue != DEFAULT_HUE {
            changed.extend(self.query(OptionName::Hue));
        }
        if (self.chroma - DEFAULT_CHROMA).abs() > f32::EPSILON {
            changed.extend(self.query(OptionName::Chroma));
        }
        if self.theme.is_light() {
            changed.extend(self.query(OptionName::Light));
        }
        if self.format != RenderFormat::default() {
            changed.extend(self.query(OptionName::Format));
        }
        changed
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
