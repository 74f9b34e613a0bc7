//! Role dispatch.
//!
//! [`contrasting_color`] is the single entry point the presentation layer
//! needs: background in, foreground out. [`foregrounds`] computes all four
//! roles at once.

use legible_color::Color;
use tracing::{debug, trace};

use crate::options::ContrastOptions;
use crate::policy::{LinkPolicy, SecondaryPolicy, black_or_white, neon_boost, soften};
use crate::role::ContrastRole;

/// Foreground color for `role` on `background`.
///
/// Uses the link policy configured in `options`. The background is clamped
/// to 0.0–1.0 before any policy sees it.
#[must_use]
pub fn contrasting_color(background: Color, role: ContrastRole, options: &ContrastOptions) -> Color {
    contrasting_color_with(background, role, options, &options.link)
}

/// Like [`contrasting_color`], with a caller-supplied link policy.
///
/// `link` is only consulted for [`ContrastRole::Link`].
#[must_use]
pub fn contrasting_color_with(
    background: Color,
    role: ContrastRole,
    options: &ContrastOptions,
    link: &dyn LinkPolicy,
) -> Color {
    let background = background.clamped();
    let primary = black_or_white(background, options.primary_threshold);

    let foreground = match role {
        ContrastRole::Primary => primary,
        ContrastRole::Secondary => {
            let secondary = match options.secondary {
                SecondaryPolicy::Binary => black_or_white(background, options.secondary_threshold),
                SecondaryPolicy::Shifted { delta } => soften(primary, delta),
            };
            validated(role, secondary, background, options.secondary_threshold, primary, options)
        }
        ContrastRole::Link => link.link_color(background, options.formula).clamped(),
        ContrastRole::NeonLink => {
            let neon = neon_boost(background, options.neon_boost);
            validated(role, neon, background, options.neon_threshold, primary, options)
        }
    };

    trace!(%role, %background, %foreground, "picked foreground");
    foreground
}

/// In strict mode, swap `candidate` for `fallback` when it misses `threshold`.
fn validated(
    role: ContrastRole,
    candidate: Color,
    background: Color,
    threshold: f64,
    fallback: Color,
    options: &ContrastOptions,
) -> Color {
    if !options.strict {
        return candidate;
    }

    let ratio = options.formula.ratio(candidate, background);
    if ratio >= threshold {
        candidate
    } else {
        debug!(
            %role, %background, %candidate, %fallback, ratio, threshold,
            "below contrast floor, falling back"
        );
        fallback
    }
}

// ---------------------------------------------------------------------------
// Foregrounds
// ---------------------------------------------------------------------------

/// One foreground per role, all for the same background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Foregrounds {
    pub primary: Color,
    pub secondary: Color,
    pub link: Color,
    pub neon_link: Color,
}

impl Foregrounds {
    /// The foreground for `role`.
    #[must_use]
    pub const fn get(&self, role: ContrastRole) -> Color {
        match role {
            ContrastRole::Primary => self.primary,
            ContrastRole::Secondary => self.secondary,
            ContrastRole::Link => self.link,
            ContrastRole::NeonLink => self.neon_link,
        }
    }

    /// `(role, color)` pairs in [`ContrastRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ContrastRole, Color)> + '_ {
        ContrastRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// Compute every role's foreground for `background`.
#[must_use]
pub fn foregrounds(background: Color, options: &ContrastOptions) -> Foregrounds {
    let pick = |role| contrasting_color(background, role, options);
    Foregrounds {
        primary: pick(ContrastRole::Primary),
        secondary: pick(ContrastRole::Secondary),
        link: pick(ContrastRole::Link),
        neon_link: pick(ContrastRole::NeonLink),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
