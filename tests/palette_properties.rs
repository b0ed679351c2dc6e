// SPDX-License-Identifier: MIT
//
// End-to-end properties of the palette pipeline: import → generate →
// render, exercised through the public crate APIs the binary uses.

use okhue_color::Adapter;
use okhue_session::{Command, Session};
use okhue_theme::{
    InvalidHexError, PaletteInput, RenderFormat, Role, generate_palette, import_hex, render,
};
use pretty_assertions::assert_eq;

#[test]
fn every_input_yields_fourteen_ordered_roles() {
    for hue in (0..360).step_by(15) {
        for chroma in [0.0, 0.01, 0.07, 0.1, 0.15, 0.2] {
            for is_light in [false, true] {
                #[allow(clippy::cast_precision_loss)]
                let p = generate_palette(PaletteInput::new(hue as f32, chroma, is_light));
                let roles: Vec<Role> = p.iter().map(|e| e.role).collect();
                assert_eq!(roles, Role::ALL.to_vec());
            }
        }
    }
}

#[test]
fn imported_hex_feeds_the_generator() {
    let adapter = Adapter::palette();
    let with_hash = import_hex("#3B82F6", adapter).unwrap();
    let without_hash = import_hex("3B82F6", adapter).unwrap();
    assert_eq!(with_hash, without_hash);
    assert!(with_hash.chroma <= 0.2);

    let p = generate_palette(with_hash.to_input(false));
    assert_eq!(p.len(), 14);
}

#[test]
fn invalid_hex_is_rejected() {
    let adapter = Adapter::palette();
    for bad in ["not-a-color", "#ZZZZZZ"] {
        assert!(matches!(
            import_hex(bad, adapter),
            Err(InvalidHexError::Malformed { .. })
        ));
    }
}

#[test]
fn alert_hues_are_fixed_at_both_ends_of_the_wheel() {
    for hue in [0.0, 359.0] {
        for is_light in [false, true] {
            let text = render(
                &generate_palette(PaletteInput::new(hue, 0.1, is_light)),
                RenderFormat::Native,
                Adapter::palette(),
            );
            let alerts: Vec<_> = text.lines().skip(10).collect();
            assert!(alerts[0].starts_with("--danger:") && alerts[0].ends_with(" 30);"));
            assert!(alerts[1].starts_with("--warning:") && alerts[1].ends_with(" 100);"));
            assert!(alerts[2].starts_with("--success:") && alerts[2].ends_with(" 160);"));
            assert!(alerts[3].starts_with("--info:") && alerts[3].ends_with(" 260);"));
        }
    }
}

#[test]
fn secondary_hue_in_rendered_text() {
    let line = |hue: f32| {
        render(
            &generate_palette(PaletteInput::new(hue, 0.1, false)),
            RenderFormat::Native,
            Adapter::palette(),
        )
        .lines()
        .nth(Role::Secondary.index())
        .map(str::to_string)
    };
    assert_eq!(line(10.0).as_deref(), Some("--secondary: oklch(0.76 0.1 190);"));
    assert_eq!(line(300.0).as_deref(), Some("--secondary: oklch(0.76 0.1 120);"));
}

#[test]
fn theme_export_has_two_blocks_of_hsl_then_oklch() {
    let p = generate_palette(PaletteInput::new(250.0, 0.12, false));
    let text = render(&p, RenderFormat::Theme, Adapter::palette());

    let blocks: Vec<&str> = text.split_inclusive("\n}").collect();
    assert_eq!(blocks.len(), 2);
    for block in blocks {
        let decls: Vec<_> = block.lines().filter(|l| l.trim_start().starts_with("--")).collect();
        assert_eq!(decls.len(), 28);
        assert!(decls[..14].iter().all(|l| l.contains("hsl(")));
        assert!(decls[14..].iter().all(|l| l.contains("oklch(")));
    }
}

#[test]
fn session_commands_drive_the_display() {
    let mut session = Session::new(Adapter::palette());
    for line in ["set hue=10 chroma=0.08", "toggle", "format hybrid"] {
        let cmd = Command::parse(line).unwrap().unwrap();
        session.execute(&cmd).unwrap();
    }
    let expected = render(
        &generate_palette(PaletteInput::new(10.0, 0.08, true)),
        RenderFormat::Hybrid,
        Adapter::palette(),
    );
    assert_eq!(session.display(), expected);
}

#[test]
fn missing_converter_degrades_instead_of_failing() {
    let p = generate_palette(PaletteInput::new(250.0, 0.12, false));
    let native = render(&p, RenderFormat::Native, Adapter::Unavailable);
    assert_eq!(render(&p, RenderFormat::Hsl, Adapter::Unavailable), native);
    assert!(import_hex("#3B82F6", Adapter::Unavailable).is_err());
}
