//! The usage roles a foreground color can be requested for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// A named foreground usage.
///
/// Primary, Secondary and Link are threshold roles: their policies aim for
/// a contrast-ratio floor. `NeonLink` is a transformation of the background
/// itself and only checks its floor in strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContrastRole {
    /// Body text.
    Primary,
    /// De-emphasized text (captions, metadata).
    Secondary,
    /// Links and accents.
    Link,
    /// A saturated, brightened variant of the background hue.
    NeonLink,
}

impl ContrastRole {
    /// Every role, in display order.
    pub const ALL: [Self; 4] = [Self::Primary, Self::Secondary, Self::Link, Self::NeonLink];

    /// The kebab-case name used on the command line and in options files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Link => "link",
            Self::NeonLink => "neon-link",
        }
    }
}

impl fmt::Display for ContrastRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContrastRole {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|role| role.name() == wanted || (wanted == "neonlink" && *role == Self::NeonLink))
            .ok_or_else(|| OptionsError::UnknownRole(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip_through_from_str() {
        for role in ContrastRole::ALL {
            assert_eq!(role.name().parse::<ContrastRole>().unwrap(), role);
        }
    }

    #[test]
    fn from_str_accepts_common_spellings() {
        assert_eq!("NeonLink".parse::<ContrastRole>().unwrap(), ContrastRole::NeonLink);
        assert_eq!("neon_link".parse::<ContrastRole>().unwrap(), ContrastRole::NeonLink);
        assert_eq!(" Primary ".parse::<ContrastRole>().unwrap(), ContrastRole::Primary);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "tertiary".parse::<ContrastRole>().unwrap_err();
        assert!(matches!(err, OptionsError::UnknownRole(ref s) if s == "tertiary"));
    }

    #[test]
    fn display_uses_kebab_case() {
        assert_eq!(ContrastRole::NeonLink.to_string(), "neon-link");
    }
}
