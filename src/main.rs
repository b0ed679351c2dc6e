// SPDX-License-Identifier: MIT
//
// okhue — OKLCH theme palettes for stylesheets.
//
// This is the main binary that wires together the crates:
//
//   okhue-color   → color values, conversion adapter (palette crate)
//   okhue-theme   → palette generation, hex import, rendering
//   okhue-session → input state, :set options, command dispatch
//
// One-shot mode renders a single palette to stdout:
//
//   okhue --hue 250 --chroma 0.12 --format theme > theme.css
//   okhue --hex '#3B82F6' --light --format hsl
//
// Interactive mode reads commands from stdin and reprints the display
// after every change. Logs go to stderr (filter with OKHUE_LOG) so
// stdout stays copy-pasteable.

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use okhue_color::Adapter;
use okhue_session::session::{DEFAULT_CHROMA, DEFAULT_HUE};
use okhue_session::{Command, Session};
use okhue_theme::{RenderFormat, Theme};

// ─── Command line ───────────────────────────────────────────────────────────

/// Generate a 14-role OKLCH palette from a hue and chroma.
#[derive(Debug, Parser)]
#[command(name = "okhue", version, about)]
struct Cli {
    /// Base hue in degrees (0–359).
    #[arg(long, default_value_t = f32::from(DEFAULT_HUE), allow_negative_numbers = true)]
    hue: f32,

    /// Base chroma (0.00–0.20).
    #[arg(long, default_value_t = DEFAULT_CHROMA)]
    chroma: f32,

    /// Use the light theme table.
    #[arg(long)]
    light: bool,

    /// Take hue and chroma from a hex color instead (`#RRGGBB`).
    #[arg(long, value_name = "HEX")]
    hex: Option<String>,

    /// Output format: oklch, hsl, hybrid or theme.
    #[arg(long, short, default_value_t = RenderFormat::Native)]
    format: RenderFormat,

    /// Render without a color converter (HSL output keeps OKLCH syntax).
    #[arg(long)]
    no_convert: bool,

    /// Read commands from stdin (`set hue=10`, `hex #3B82F6`, `toggle`, ...).
    #[arg(long, short)]
    interactive: bool,
}

// ─── Logging ────────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_env("OKHUE_LOG")
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

// ─── Session setup ──────────────────────────────────────────────────────────

/// Build a session from the command-line inputs.
fn session_from_cli(cli: &Cli, adapter: Adapter<'static>) -> Result<Session<'static>> {
    let mut session = Session::new(adapter);
    session.set_theme(Theme::from_is_light(cli.light));
    session.set_hue(cli.hue);
    session.set_chroma(cli.chroma);
    if let Some(hex) = &cli.hex {
        session
            .apply_hex(hex)
            .with_context(|| format!("cannot use --hex {hex}"))?;
    }
    session.select_format(cli.format.token());
    tracing::debug!(
        hue = session.hue(),
        chroma = session.chroma(),
        light = session.theme().is_light(),
        format = %session.format(),
        "session ready"
    );
    Ok(session)
}

/// Run commands from `input` until EOF or `quit`, echoing the display
/// to `out` after every command that changes it.
fn run_interactive(session: &mut Session<'_>, input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "{}", session.display())?;
    for line in input.lines() {
        let line = line.context("reading command")?;
        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("okhue: {e}");
                continue;
            }
        };
        if cmd == Command::Quit {
            break;
        }

        let before = session.display().to_string();
        match session.execute(&cmd) {
            Ok(messages) => {
                for message in messages {
                    writeln!(out, "{message}")?;
                }
                if session.display() != before {
                    writeln!(out, "{}", session.display())?;
                }
            }
            Err(e) => eprintln!("okhue: {e}"),
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let adapter = if cli.no_convert { Adapter::Unavailable } else { Adapter::palette() };
    let mut session = session_from_cli(cli, adapter)?;

    let stdout = io::stdout();
    if cli.interactive {
        run_interactive(&mut session, io::stdin().lock(), stdout.lock())
    } else {
        writeln!(stdout.lock(), "{}", session.display())?;
        Ok(())
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("okhue: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("okhue").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let c = cli(&[]);
        assert_eq!(c.hue, 250.0);
        assert_eq!(c.chroma, 0.1);
        assert!(!c.light);
        assert_eq!(c.format, RenderFormat::Native);
    }

    #[test]
    fn parses_all_flags() {
        let c = cli(&["--hue", "10", "--chroma", "0.05", "--light", "-f", "theme", "--no-convert"]);
        assert_eq!(c.hue, 10.0);
        assert_eq!(c.chroma, 0.05);
        assert!(c.light);
        assert_eq!(c.format, RenderFormat::Theme);
        assert!(c.no_convert);
    }

    #[test]
    fn rejects_unknown_format() {
        let args = ["okhue", "--format", "rgb"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn hex_overrides_hue_and_chroma() {
        let c = cli(&["--hue", "10", "--hex", "#3B82F6"]);
        let s = session_from_cli(&c, Adapter::palette()).unwrap();
        assert!((255..=265).contains(&s.hue()));
    }

    #[test]
    fn bad_hex_is_an_error() {
        let c = cli(&["--hex", "not-a-color"]);
        let err = session_from_cli(&c, Adapter::palette()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid hex color"));
    }

    #[test]
    fn interactive_echoes_changes() {
        let mut s = Session::new(Adapter::palette());
        let input = b"set hue?\n\nbogus\nset hue=10\nshow\nquit\nset hue=20\n";
        let mut out = Vec::new();
        run_interactive(&mut s, &input[..], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        // Initial display, query answer, display after hue=10, show output.
        assert_eq!(lines.len(), 14 + 1 + 14 + 14);
        assert_eq!(lines[14], "hue=250");
        assert_eq!(lines[15], "--bg-dark: oklch(0.1 0.05 10);");
        assert_eq!(s.hue(), 10);
    }
}
