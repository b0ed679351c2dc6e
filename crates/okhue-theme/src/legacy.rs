//! Legacy text reformatting — rewrite OKLCH declarations as HSL in
//! already-rendered text.
//!
//! This is the degraded path used when a format request does not name a
//! known [`RenderFormat`](crate::RenderFormat): instead of rendering from
//! a palette, it scans the text currently on display line by line and
//! converts whatever `: oklch(L C H)` declarations it can recognize.
//! Lines that do not match are kept verbatim, so partially malformed
//! text never fails the whole pass.
//!
//! Prefer [`render`](crate::render) whenever a palette is available.

use std::sync::LazyLock;

use okhue_color::{Adapter, Oklch};
use regex::Regex;

use crate::render::hsl_value;

/// A declaration value: `: oklch(...)` with anything inside the parens.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(:\s*)(oklch\([^)]+\))").expect("declaration pattern is valid")
});

/// Three unsigned decimals inside `oklch(...)`.
static OKLCH_ARGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)oklch\(([\d.]+)\s+([\d.]+)\s+([\d.]+)\)").expect("oklch pattern is valid")
});

/// Parse the first `oklch(L C H)` in `s`.
///
/// Returns `None` if there is none or a component is not a number.
#[must_use]
pub fn parse_oklch(s: &str) -> Option<Oklch> {
    let caps = OKLCH_ARGS.captures(s)?;
    let l = caps[1].parse().ok()?;
    let c = caps[2].parse().ok()?;
    let h = caps[3].parse().ok()?;
    Some(Oklch::new(l, c, h))
}

/// Rewrite one line, or return it unchanged if nothing in it converts.
#[must_use]
pub fn reformat_line(line: &str, adapter: Adapter<'_>) -> String {
    let Some(value) = DECLARATION.captures(line).and_then(|caps| caps.get(2)) else {
        return line.to_string();
    };
    let Some(color) = parse_oklch(value.as_str()) else {
        tracing::debug!(line, "no oklch match, leaving line unchanged");
        return line.to_string();
    };
    line.replacen(value.as_str(), &hsl_value(color, adapter), 1)
}

/// Rewrite every recognizable OKLCH declaration in `text` as HSL.
///
/// Surrounding whitespace of the whole text is dropped; the result is
/// newline-joined with no trailing newline.
#[must_use]
pub fn reformat_text(text: &str, adapter: Adapter<'_>) -> String {
    text.trim()
        .split('\n')
        .map(|line| reformat_line(line, adapter))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{PaletteInput, generate_palette};
    use crate::render::{RenderFormat, render};
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_plain_triple() {
        assert_eq!(parse_oklch("oklch(0.5 0.1 250)"), Some(Oklch::new(0.5, 0.1, 250.0)));
        assert_eq!(parse_oklch("OKLCH(1 0 0)"), Some(Oklch::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn rejects_other_syntax() {
        assert_eq!(parse_oklch("oklch(50% 0.1 250)"), None);
        assert_eq!(parse_oklch("oklch(0.5 0.1)"), None);
        assert_eq!(parse_oklch("oklch(1.2.3 0.1 250)"), None);
        assert_eq!(parse_oklch("hsl(10 20% 30%)"), None);
    }

    #[test]
    fn reformatting_native_matches_hsl_render() {
        let p = generate_palette(PaletteInput::new(250.0, 0.12, false));
        let adapter = Adapter::palette();
        let native = render(&p, RenderFormat::Native, adapter);
        assert_eq!(reformat_text(&native, adapter), render(&p, RenderFormat::Hsl, adapter));
    }

    #[test]
    fn non_matching_lines_are_untouched() {
        let text = "/* header */\n--a: oklch(0.5 0.1 250);\n--b: oklch(50% 0.1 250);\n--c: #fff;";
        let out = reformat_text(text, Adapter::palette());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "/* header */");
        assert!(lines[1].starts_with("--a: hsl("), "{}", lines[1]);
        assert_eq!(lines[2], "--b: oklch(50% 0.1 250);");
        assert_eq!(lines[3], "--c: #fff;");
    }

    #[test]
    fn keeps_indentation_inside_blocks() {
        let out = reformat_line("  --bg: oklch(0.15 0.06 250);", Adapter::palette());
        assert!(out.starts_with("  --bg: hsl("), "{out}");
        assert!(out.ends_with(");"));
    }

    #[test]
    fn unavailable_adapter_leaves_text_as_is() {
        let text = "--a: oklch(0.5 0.1 250);\n--b: oklch(0.7 0.05 30);";
        assert_eq!(reformat_text(text, Adapter::Unavailable), text);
    }

    #[test]
    fn trims_outer_whitespace() {
        assert_eq!(reformat_text("\n\nplain\n\n", Adapter::palette()), "plain");
    }
}
