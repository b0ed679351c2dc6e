//! Palette generation — from one hue/chroma pair to fourteen role colors.
//!
//! The generator is a pure function of [`PaletteInput`]. It derives four
//! sub-chromas from the base chroma, picks the dark or light assignment
//! table, and emits every [`Role`] in fixed order. There is no hidden
//! state: equal inputs give bit-identical palettes.
//!
//! The two tables are deliberately asymmetric. Dark backgrounds climb
//! 0.1 → 0.15 → 0.2 while light backgrounds climb 0.92 → 0.96 → 1.0, and
//! light text uses the full base chroma where dark text caps it, so the
//! same hue/chroma reads well in either theme without per-role tuning.

use okhue_color::Oklch;

use crate::role::Role;

/// Upper bound of the working chroma range.
pub const MAX_CHROMA: f32 = 0.2;

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Which assignment table a palette uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn from_is_light(is_light: bool) -> Self {
        if is_light { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// The other theme.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

// ---------------------------------------------------------------------------
// PaletteInput
// ---------------------------------------------------------------------------

/// Everything a palette is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteInput {
    /// Base hue in degrees, 0 to 360 exclusive.
    pub hue: f32,
    /// Base chroma, 0 to [`MAX_CHROMA`].
    pub chroma: f32,
    pub is_light: bool,
}

impl PaletteInput {
    /// Build an input with hue wrapped into [0, 360) and chroma clamped
    /// into [0, 0.2].
    #[must_use]
    pub fn new(hue: f32, chroma: f32, is_light: bool) -> Self {
        Self {
            hue: normalize_hue(hue),
            chroma: clamp_chroma(chroma),
            is_light,
        }
    }

    #[must_use]
    pub const fn theme(self) -> Theme {
        Theme::from_is_light(self.is_light)
    }

    /// Same hue and chroma, other table.
    #[must_use]
    pub const fn with_theme(self, theme: Theme) -> Self {
        Self { is_light: theme.is_light(), ..self }
    }
}

/// Clamp chroma into the working range. NaN becomes 0.
#[must_use]
pub fn clamp_chroma(chroma: f32) -> f32 {
    if chroma.is_nan() { 0.0 } else { chroma.clamp(0.0, MAX_CHROMA) }
}

/// Wrap a hue angle into [0, 360). Non-finite hues become 0.
#[must_use]
pub fn normalize_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// The color-wheel complement of `hue`.
#[must_use]
pub fn complement(hue: f32) -> f32 {
    (hue + 180.0).rem_euclid(360.0)
}

/// Round to three decimal places.
fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}

// ---------------------------------------------------------------------------
// Assignment tables
// ---------------------------------------------------------------------------

/// Which derived chroma a role uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChromaSource {
    /// Half the base chroma.
    Background,
    /// Base chroma capped at 0.1.
    Text,
    /// Base chroma raised to at least 0.1.
    Action,
    /// Base chroma raised to at least 0.05.
    Alert,
    /// The base chroma as given.
    Base,
}

/// Derived chroma values for one base chroma.
#[derive(Debug, Clone, Copy)]
struct Chromas {
    base: f32,
    background: f32,
    text: f32,
    action: f32,
    alert: f32,
}

impl Chromas {
    fn derive(base: f32) -> Self {
        Self {
            base,
            background: round3(base * 0.5),
            text: round3(base.min(0.1)),
            action: round3(base.max(0.1)),
            alert: round3(base.max(0.05)),
        }
    }

    const fn get(self, source: ChromaSource) -> f32 {
        match source {
            ChromaSource::Background => self.background,
            ChromaSource::Text => self.text,
            ChromaSource::Action => self.action,
            ChromaSource::Alert => self.alert,
            ChromaSource::Base => self.base,
        }
    }
}

/// One row of an assignment table. Rows are in [`Role::ALL`] order.
type Slot = (f32, ChromaSource);

const DARK_TABLE: [Slot; Role::COUNT] = [
    (0.1, ChromaSource::Background),  // bg-dark
    (0.15, ChromaSource::Background), // bg
    (0.2, ChromaSource::Background),  // bg-light
    (0.96, ChromaSource::Text),       // text
    (0.76, ChromaSource::Text),       // text-muted
    (0.5, ChromaSource::Base),        // highlight
    (0.4, ChromaSource::Base),        // border
    (0.3, ChromaSource::Base),        // border-muted
    (0.76, ChromaSource::Action),     // primary
    (0.76, ChromaSource::Action),     // secondary
    (0.7, ChromaSource::Alert),       // danger
    (0.7, ChromaSource::Alert),       // warning
    (0.7, ChromaSource::Alert),       // success
    (0.7, ChromaSource::Alert),       // info
];

const LIGHT_TABLE: [Slot; Role::COUNT] = [
    (0.92, ChromaSource::Background), // bg-dark
    (0.96, ChromaSource::Background), // bg
    (1.0, ChromaSource::Background),  // bg-light
    (0.15, ChromaSource::Base),       // text
    (0.4, ChromaSource::Base),        // text-muted
    (1.0, ChromaSource::Base),        // highlight
    (0.6, ChromaSource::Base),        // border
    (0.7, ChromaSource::Base),        // border-muted
    (0.4, ChromaSource::Action),      // primary
    (0.4, ChromaSource::Action),      // secondary
    (0.5, ChromaSource::Alert),       // danger
    (0.5, ChromaSource::Alert),       // warning
    (0.5, ChromaSource::Alert),       // success
    (0.5, ChromaSource::Alert),       // info
];

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// One palette entry: a role and its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleColor {
    pub role: Role,
    pub color: Oklch,
}

/// A complete palette: fourteen role colors in [`Role::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    input: PaletteInput,
    entries: [RoleColor; Role::COUNT],
}

impl Palette {
    /// The input this palette was generated from.
    #[must_use]
    pub const fn input(&self) -> PaletteInput {
        self.input
    }

    #[must_use]
    pub const fn entries(&self) -> &[RoleColor] {
        &self.entries
    }

    /// The color assigned to `role`.
    #[must_use]
    pub const fn get(&self, role: Role) -> Oklch {
        self.entries[role.index()].color
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoleColor> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a RoleColor;
    type IntoIter = std::slice::Iter<'a, RoleColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Generate the palette for `input`.
///
/// Total over every input: hue and chroma are used as given, so callers
/// that want the working ranges should build the input with
/// [`PaletteInput::new`].
#[must_use]
pub fn generate_palette(input: PaletteInput) -> Palette {
    let chromas = Chromas::derive(input.chroma);
    let secondary_hue = complement(input.hue);
    let table = if input.is_light { &LIGHT_TABLE } else { &DARK_TABLE };

    let entries = Role::ALL.map(|role| {
        let (l, source) = table[role.index()];
        let h = match role {
            Role::Secondary => secondary_hue,
            _ => role.fixed_hue().unwrap_or(input.hue),
        };
        RoleColor { role, color: Oklch::new(l, chromas.get(source), h) }
    });

    tracing::trace!(
        hue = input.hue,
        chroma = input.chroma,
        is_light = input.is_light,
        "generated palette"
    );

    Palette { input, entries }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dark(hue: f32, chroma: f32) -> Palette {
        generate_palette(PaletteInput::new(hue, chroma, false))
    }

    fn light(hue: f32, chroma: f32) -> Palette {
        generate_palette(PaletteInput::new(hue, chroma, true))
    }

    #[test]
    fn fourteen_roles_in_order() {
        for is_light in [false, true] {
            let p = generate_palette(PaletteInput::new(200.0, 0.1, is_light));
            assert_eq!(p.len(), 14);
            let roles: Vec<_> = p.iter().map(|e| e.role).collect();
            assert_eq!(roles, Role::ALL.to_vec());
        }
    }

    #[test]
    fn deterministic_across_grid() {
        for hue in [0.0, 45.0, 180.0, 359.0] {
            for chroma in [0.0, 0.05, 0.1, 0.2] {
                for is_light in [false, true] {
                    let input = PaletteInput::new(hue, chroma, is_light);
                    let a = generate_palette(input);
                    let b = generate_palette(input);
                    assert_eq!(a, b);
                    for (x, y) in a.iter().zip(&b) {
                        assert_eq!(x.color.l.to_bits(), y.color.l.to_bits());
                        assert_eq!(x.color.c.to_bits(), y.color.c.to_bits());
                        assert_eq!(x.color.h.to_bits(), y.color.h.to_bits());
                    }
                }
            }
        }
    }

    #[test]
    fn secondary_is_complement() {
        assert_eq!(dark(10.0, 0.1).get(Role::Secondary).h, 190.0);
        assert_eq!(dark(300.0, 0.1).get(Role::Secondary).h, 120.0);
        assert_eq!(light(180.0, 0.1).get(Role::Secondary).h, 0.0);
    }

    #[test]
    fn alert_hues_ignore_input_hue() {
        for hue in [0.0, 359.0] {
            for p in [dark(hue, 0.12), light(hue, 0.12)] {
                assert_eq!(p.get(Role::Danger).h, 30.0);
                assert_eq!(p.get(Role::Warning).h, 100.0);
                assert_eq!(p.get(Role::Success).h, 160.0);
                assert_eq!(p.get(Role::Info).h, 260.0);
            }
        }
    }

    #[test]
    fn base_hue_roles_follow_input() {
        let p = dark(42.0, 0.1);
        for role in [Role::BgDark, Role::Text, Role::Border, Role::Primary] {
            assert_eq!(p.get(role).h, 42.0, "{role}");
        }
    }

    #[test]
    fn derived_chromas() {
        let p = dark(250.0, 0.12);
        assert_eq!(p.get(Role::Bg).c, 0.06);
        assert_eq!(p.get(Role::Text).c, 0.1);
        assert_eq!(p.get(Role::Highlight).c, 0.12);
        assert_eq!(p.get(Role::Primary).c, 0.12);
        assert_eq!(p.get(Role::Danger).c, 0.12);

        let muted = dark(250.0, 0.02);
        assert_eq!(muted.get(Role::Bg).c, 0.01);
        assert_eq!(muted.get(Role::Text).c, 0.02);
        assert_eq!(muted.get(Role::Primary).c, 0.1);
        assert_eq!(muted.get(Role::Danger).c, 0.05);
    }

    #[test]
    fn light_text_uses_full_chroma() {
        let p = light(250.0, 0.18);
        assert_eq!(p.get(Role::Text).c, 0.18);
        assert_eq!(p.get(Role::TextMuted).c, 0.18);
        assert_eq!(dark(250.0, 0.18).get(Role::Text).c, 0.1);
    }

    #[test]
    fn background_ordering() {
        let d = dark(120.0, 0.1);
        assert_eq!(
            [d.get(Role::BgDark).l, d.get(Role::Bg).l, d.get(Role::BgLight).l],
            [0.1, 0.15, 0.2]
        );
        let l = light(120.0, 0.1);
        assert_eq!(
            [l.get(Role::BgDark).l, l.get(Role::Bg).l, l.get(Role::BgLight).l],
            [0.92, 0.96, 1.0]
        );
    }

    #[test]
    fn input_is_clamped() {
        let input = PaletteInput::new(-30.0, 0.5, false);
        assert_eq!(input.hue, 330.0);
        assert_eq!(input.chroma, MAX_CHROMA);

        let input = PaletteInput::new(720.0, -0.1, true);
        assert_eq!(input.hue, 0.0);
        assert_eq!(input.chroma, 0.0);

        let input = PaletteInput::new(f32::NAN, f32::NAN, true);
        assert_eq!(input.hue, 0.0);
        assert_eq!(input.chroma, 0.0);
    }

    #[test]
    fn generation_is_total_on_raw_input() {
        let raw = PaletteInput { hue: 500.0, chroma: 0.9, is_light: false };
        let p = generate_palette(raw);
        assert_eq!(p.len(), 14);
        assert_eq!(p.get(Role::Highlight).c, 0.9);
        assert_eq!(p.get(Role::Secondary).h, 320.0);
    }

    #[test]
    fn theme_toggle_and_with_theme() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        let input = PaletteInput::new(10.0, 0.1, false).with_theme(Theme::Light);
        assert!(input.is_light);
        assert_eq!(input.theme(), Theme::Light);
    }

    #[test]
    fn input_stored_on_palette() {
        let input = PaletteInput::new(77.0, 0.07, true);
        assert_eq!(generate_palette(input).input(), input);
    }
}
