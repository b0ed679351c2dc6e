//! Palette roles — the named semantic slots a palette fills.
//!
//! Roles are fixed and ordered. The order is the order lines appear in
//! every rendered stylesheet, and the declaration order of [`Role`]
//! matches [`Role::ALL`] so a role doubles as an index into a palette.

use std::fmt;

/// A named semantic color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    // ── Backgrounds ───────────────────────────────────────────
    BgDark,
    Bg,
    BgLight,

    // ── Text ──────────────────────────────────────────────────
    Text,
    TextMuted,

    // ── Surfaces ──────────────────────────────────────────────
    Highlight,
    Border,
    BorderMuted,

    // ── Actions ───────────────────────────────────────────────
    Primary,
    /// Uses the complement of the base hue.
    Secondary,

    // ── Alerts (fixed semantic hues) ──────────────────────────
    Danger,
    Warning,
    Success,
    Info,
}

impl Role {
    /// Number of roles in every palette.
    pub const COUNT: usize = 14;

    /// All roles in render order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::BgDark,
        Self::Bg,
        Self::BgLight,
        Self::Text,
        Self::TextMuted,
        Self::Highlight,
        Self::Border,
        Self::BorderMuted,
        Self::Primary,
        Self::Secondary,
        Self::Danger,
        Self::Warning,
        Self::Success,
        Self::Info,
    ];

    /// Position of this role in [`Role::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The role name without the custom-property prefix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BgDark => "bg-dark",
            Self::Bg => "bg",
            Self::BgLight => "bg-light",
            Self::Text => "text",
            Self::TextMuted => "text-muted",
            Self::Highlight => "highlight",
            Self::Border => "border",
            Self::BorderMuted => "border-muted",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }

    /// The CSS custom property this role is exported as (`--bg-dark`).
    #[must_use]
    pub fn css_var(self) -> String {
        format!("--{}", self.name())
    }

    /// The hue an alert role always uses, regardless of the base hue.
    ///
    /// Returns `None` for roles that follow the input hue.
    #[must_use]
    pub const fn fixed_hue(self) -> Option<f32> {
        match self {
            Self::Danger => Some(30.0),
            Self::Warning => Some(100.0),
            Self::Success => Some(160.0),
            Self::Info => Some(260.0),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_roles_in_index_order() {
        assert_eq!(Role::ALL.len(), 14);
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i, "{role} out of order");
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Role::ALL.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Role::COUNT);
    }

    #[test]
    fn css_var_has_prefix() {
        assert_eq!(Role::BgDark.css_var(), "--bg-dark");
        assert_eq!(Role::Info.css_var(), "--info");
    }

    #[test]
    fn alert_roles_have_fixed_hues() {
        assert_eq!(Role::Danger.fixed_hue(), Some(30.0));
        assert_eq!(Role::Warning.fixed_hue(), Some(100.0));
        assert_eq!(Role::Success.fixed_hue(), Some(160.0));
        assert_eq!(Role::Info.fixed_hue(), Some(260.0));
        let fixed = Role::ALL.iter().filter(|r| r.fixed_hue().is_some()).count();
        assert_eq!(fixed, 4);
    }
}
