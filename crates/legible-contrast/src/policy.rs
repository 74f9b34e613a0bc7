//! Role policies — the rules that turn a background into a foreground.
//!
//! - Primary: black or white, from the background's ratio against black.
//! - Secondary: either the same binary choice, or the primary color pulled
//!   toward the background by a fixed channel delta.
//! - Link: pluggable through [`LinkPolicy`]. Two stock policies ship, a
//!   fixed candidate with a fallback and a plain luminance split.
//! - Neon link: the background's own hue with saturation and brightness
//!   pushed up.
//!
//! None of these look at anything but their arguments.

use legible_color::Color;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::luminance::{FLARE, RatioFormula, relative_luminance};

// ---------------------------------------------------------------------------
// Primary
// ---------------------------------------------------------------------------

/// Whether black text fails `threshold` on `background`.
///
/// The test is the background's ratio against pure black,
/// `(L_bg + 0.05) / 0.05`.
#[must_use]
pub fn is_dark(background: Color, threshold: f64) -> bool {
    (relative_luminance(background) + FLARE) / FLARE < threshold
}

/// White on dark backgrounds, black on everything else.
#[must_use]
pub fn black_or_white(background: Color, threshold: f64) -> Color {
    if is_dark(background, threshold) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

// ---------------------------------------------------------------------------
// Secondary
// ---------------------------------------------------------------------------

/// Channel delta of the default shifted secondary policy.
pub const SECONDARY_DELTA: f64 = 0.2;

/// How the secondary foreground is derived.
///
/// In an options file this is the `[secondary]` table. `policy` defaults to
/// `"shifted"` and `delta` to [`SECONDARY_DELTA`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum SecondaryPolicy {
    /// Black or white, decided with the secondary threshold.
    Binary,
    /// The primary color with every channel moved `delta` toward the
    /// background: white becomes `1 - delta` gray, black becomes `delta`.
    Shifted { delta: f64 },
}

impl Default for SecondaryPolicy {
    fn default() -> Self {
        Self::Shifted {
            delta: SECONDARY_DELTA,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
enum SecondaryKind {
    Binary,
    Shifted,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SecondaryTable {
    policy: Option<SecondaryKind>,
    delta: Option<f64>,
}

impl<'de> Deserialize<'de> for SecondaryPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let table = SecondaryTable::deserialize(deserializer)?;
        match table.policy.unwrap_or(SecondaryKind::Shifted) {
            SecondaryKind::Binary => {
                reject_keys("binary secondary", &[("delta", table.delta.is_some())])?;
                Ok(Self::Binary)
            }
            SecondaryKind::Shifted => Ok(Self::Shifted {
                delta: table.delta.unwrap_or(SECONDARY_DELTA),
            }),
        }
    }
}

/// Fail on the first key that is set but means nothing to `policy`.
fn reject_keys<E: de::Error>(policy: &str, keys: &[(&str, bool)]) -> Result<(), E> {
    match keys.iter().find(|(_, set)| *set) {
        Some((key, _)) => Err(E::custom(format!(
            "`{key}` does not apply to the {policy} policy"
        ))),
        None => Ok(()),
    }
}

/// Shift every RGB channel by `delta` and clamp to 0.0–1.0. Alpha is kept.
#[must_use]
pub fn shift_channels(color: Color, delta: f64) -> Color {
    Color::rgba(
        (color.r + delta).clamp(0.0, 1.0),
        (color.g + delta).clamp(0.0, 1.0),
        (color.b + delta).clamp(0.0, 1.0),
        color.alpha,
    )
}

/// Move `primary` by `delta` toward mid-gray: light colors darken, dark
/// colors lighten.
#[must_use]
pub fn soften(primary: Color, delta: f64) -> Color {
    let signed = if relative_luminance(primary) > 0.5 {
        -delta
    } else {
        delta
    };
    shift_channels(primary, signed)
}

// ---------------------------------------------------------------------------
// Link
// ---------------------------------------------------------------------------

/// A rule that picks a link color for a background.
///
/// Implemented by the stock policies below and by any
/// `Fn(Color, RatioFormula) -> Color`, so callers can plug in their own.
pub trait LinkPolicy: Send + Sync {
    /// Pick the link color for `background`. `formula` is the ratio the
    /// caller wants used for any contrast test the policy performs.
    fn link_color(&self, background: Color, formula: RatioFormula) -> Color;
}

impl<F> LinkPolicy for F
where
    F: Fn(Color, RatioFormula) -> Color + Send + Sync,
{
    fn link_color(&self, background: Color, formula: RatioFormula) -> Color {
        self(background, formula)
    }
}

/// Use `candidate` when it reaches `threshold` against the background,
/// otherwise `fallback`.
///
/// The fallback is not tested. Under the asymmetric ratio a candidate darker
/// than the background can never pass, so on light backgrounds this always
/// yields the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CandidateWithFallback {
    pub candidate: Color,
    pub fallback: Color,
    pub threshold: f64,
}

impl Default for CandidateWithFallback {
    fn default() -> Self {
        Self {
            candidate: Color::BLUE,
            fallback: Color::YELLOW,
            threshold: 4.5,
        }
    }
}

impl LinkPolicy for CandidateWithFallback {
    fn link_color(&self, background: Color, formula: RatioFormula) -> Color {
        if formula.passes(self.candidate, background, self.threshold) {
            self.candidate
        } else {
            self.fallback
        }
    }
}

/// `dark` on backgrounds brighter than `pivot` luminance, `light` otherwise.
///
/// No contrast test is performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LuminanceSplit {
    pub pivot: f64,
    pub dark: Color,
    pub light: Color,
}

impl Default for LuminanceSplit {
    fn default() -> Self {
        Self {
            pivot: 0.5,
            dark: Color::BLUE,
            light: Color::YELLOW,
        }
    }
}

impl LinkPolicy for LuminanceSplit {
    fn link_color(&self, background: Color, _formula: RatioFormula) -> Color {
        if relative_luminance(background) > self.pivot {
            self.dark
        } else {
            self.light
        }
    }
}

/// The stock link policies, in a form that options files can name.
///
/// In an options file this is the `[link]` table. `policy` defaults to
/// `"candidate-with-fallback"`, and every other key falls back to that
/// policy's default. Keys belonging to the other policy are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum LinkSelection {
    CandidateWithFallback(CandidateWithFallback),
    LuminanceSplit(LuminanceSplit),
}

impl LinkSelection {
    /// The contrast floor this policy tests against, if it tests at all.
    #[must_use]
    pub const fn threshold(&self) -> Option<f64> {
        match self {
            Self::CandidateWithFallback(p) => Some(p.threshold),
            Self::LuminanceSplit(_) => None,
        }
    }
}

impl Default for LinkSelection {
    fn default() -> Self {
        Self::CandidateWithFallback(CandidateWithFallback::default())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
enum LinkKind {
    CandidateWithFallback,
    LuminanceSplit,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LinkTable {
    policy: Option<LinkKind>,
    candidate: Option<Color>,
    fallback: Option<Color>,
    threshold: Option<f64>,
    pivot: Option<f64>,
    dark: Option<Color>,
    light: Option<Color>,
}

impl<'de> Deserialize<'de> for LinkSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let t = LinkTable::deserialize(deserializer)?;
        match t.policy.unwrap_or(LinkKind::CandidateWithFallback) {
            LinkKind::CandidateWithFallback => {
                reject_keys(
                    "candidate-with-fallback link",
                    &[
                        ("pivot", t.pivot.is_some()),
                        ("dark", t.dark.is_some()),
                        ("light", t.light.is_some()),
                    ],
                )?;
                let d = CandidateWithFallback::default();
                Ok(Self::CandidateWithFallback(CandidateWithFallback {
                    candidate: t.candidate.unwrap_or(d.candidate),
                    fallback: t.fallback.unwrap_or(d.fallback),
                    threshold: t.threshold.unwrap_or(d.threshold),
                }))
            }
            LinkKind::LuminanceSplit => {
                reject_keys(
                    "luminance-split link",
                    &[
                        ("candidate", t.candidate.is_some()),
                        ("fallback", t.fallback.is_some()),
                        ("threshold", t.threshold.is_some()),
                    ],
                )?;
                let d = LuminanceSplit::default();
                Ok(Self::LuminanceSplit(LuminanceSplit {
                    pivot: t.pivot.unwrap_or(d.pivot),
                    dark: t.dark.unwrap_or(d.dark),
                    light: t.light.unwrap_or(d.light),
                }))
            }
        }
    }
}

impl LinkPolicy for LinkSelection {
    fn link_color(&self, background: Color, formula: RatioFormula) -> Color {
        match self {
            Self::CandidateWithFallback(p) => p.link_color(background, formula),
            Self::LuminanceSplit(p) => p.link_color(background, formula),
        }
    }
}

// ---------------------------------------------------------------------------
// Neon link
// ---------------------------------------------------------------------------

/// Raise the background's saturation and brightness by `boost` each,
/// clamped to 1.0, keeping its hue and alpha.
///
/// Grays and black have hue 0, so they boost toward red.
#[must_use]
pub fn neon_boost(background: Color, boost: f64) -> Color {
    let (h, s, b, alpha) = background.to_hsba();
    Color::hsba(
        h,
        (s + boost).clamp(0.0, 1.0),
        (b + boost).clamp(0.0, 1.0),
        alpha,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    // ── Primary ─────────────────────────────────────────────────────

    #[test]
    fn black_background_is_dark_at_aa_and_aaa() {
        assert_eq!(black_or_white(Color::BLACK, 4.5), Color::WHITE);
        assert_eq!(black_or_white(Color::BLACK, 7.0), Color::WHITE);
    }

    #[test]
    fn white_background_is_light() {
        assert_eq!(black_or_white(Color::WHITE, 4.5), Color::BLACK);
        assert_eq!(black_or_white(Color::WHITE, 7.0), Color::BLACK);
    }

    #[test]
    fn mid_gray_depends_on_threshold() {
        // Gray 0.5 has ~5.28:1 against black.
        let gray = Color::rgb(0.5, 0.5, 0.5);
        assert_eq!(black_or_white(gray, 4.5), Color::BLACK);
        assert_eq!(black_or_white(gray, 7.0), Color::WHITE);
    }

    #[test]
    fn orange_takes_black_text() {
        // Luminance ~0.3657, ratio against black ~8.31.
        let orange = Color::rgb(1.0, 0.5, 0.0);
        assert!(!is_dark(orange, 4.5));
        assert!(!is_dark(orange, 7.0));
        assert_eq!(black_or_white(orange, 4.5), Color::BLACK);
    }

    // ── Secondary ───────────────────────────────────────────────────

    #[test]
    fn shift_clamps_each_channel() {
        let shifted = shift_channels(Color::rgba(0.9, 0.5, 0.0, 0.4), 0.2);
        assert_eq!(shifted, Color::rgba(1.0, 0.7, 0.2, 0.4));
        let down = shift_channels(Color::rgb(0.1, 0.5, 1.0), -0.2);
        assert_eq!(down, Color::rgb(0.0, 0.3, 0.8));
    }

    #[test]
    fn soften_moves_toward_gray() {
        assert_eq!(soften(Color::WHITE, 0.2), Color::rgb(0.8, 0.8, 0.8));
        assert_eq!(soften(Color::BLACK, 0.2), Color::rgb(0.2, 0.2, 0.2));
    }

    #[test]
    fn default_secondary_is_shifted() {
        assert_eq!(SecondaryPolicy::default(), SecondaryPolicy::Shifted { delta: 0.2 });
    }

    // ── Link ────────────────────────────────────────────────────────

    #[test]
    fn candidate_fails_asymmetric_on_black_and_falls_back() {
        // Blue has ~2.44:1 against black.
        let policy = CandidateWithFallback::default();
        assert_eq!(policy.link_color(Color::BLACK, RatioFormula::Asymmetric), Color::YELLOW);
    }

    #[test]
    fn candidate_on_white_depends_on_formula() {
        let policy = CandidateWithFallback::default();
        assert_eq!(policy.link_color(Color::WHITE, RatioFormula::Asymmetric), Color::YELLOW);
        assert_eq!(policy.link_color(Color::WHITE, RatioFormula::Symmetric), Color::BLUE);
    }

    #[test]
    fn candidate_that_passes_is_kept() {
        let policy = CandidateWithFallback {
            candidate: Color::WHITE,
            fallback: Color::BLACK,
            threshold: 4.5,
        };
        assert_eq!(policy.link_color(Color::BLACK, RatioFormula::Asymmetric), Color::WHITE);
    }

    #[test]
    fn luminance_split_picks_by_background() {
        let policy = LuminanceSplit::default();
        assert_eq!(policy.link_color(Color::WHITE, RatioFormula::Asymmetric), Color::BLUE);
        assert_eq!(policy.link_color(Color::BLACK, RatioFormula::Asymmetric), Color::YELLOW);
        // Pure green has luminance 0.7152.
        let green = Color::rgb(0.0, 1.0, 0.0);
        assert_eq!(policy.link_color(green, RatioFormula::Asymmetric), Color::BLUE);
    }

    #[test]
    fn closures_are_link_policies() {
        let always_red = |_: Color, _: RatioFormula| Color::rgb(1.0, 0.0, 0.0);
        let policy: &dyn LinkPolicy = &always_red;
        assert_eq!(
            policy.link_color(Color::WHITE, RatioFormula::Symmetric),
            Color::rgb(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn selection_dispatches_and_reports_threshold() {
        let split = LinkSelection::LuminanceSplit(LuminanceSplit::default());
        assert_eq!(split.link_color(Color::WHITE, RatioFormula::Asymmetric), Color::BLUE);
        assert_eq!(split.threshold(), None);
        assert_eq!(LinkSelection::default().threshold(), Some(4.5));
    }

    // ── Neon link ───────────────────────────────────────────────────

    #[test]
    fn neon_boost_keeps_hue_and_alpha() {
        let teal = Color::rgba(0.0, 0.4, 0.4, 0.5);
        let neon = neon_boost(teal, 0.7);
        let (h, s, b, a) = neon.to_hsba();
        assert!((h - 0.5).abs() < 1e-9, "Hue: {h}");
        assert!((s - 1.0).abs() < 1e-9, "Saturation: {s}");
        assert!((b - 1.0).abs() < 1e-9, "Brightness: {b}");
        assert!((a - 0.5).abs() < 1e-12);
        assert_eq!(neon, Color::rgba(0.0, 1.0, 1.0, 0.5));
    }

    #[test]
    fn neon_boost_of_black_is_muted_red() {
        assert_eq!(neon_boost(Color::BLACK, 0.7), Color::rgb(0.7, 0.21, 0.21));
    }

    proptest! {
        #[test]
        fn neon_boost_never_exceeds_unit_range(
            r in 0.0f64..=1.0,
            g in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
            boost in 0.0f64..=2.0,
        ) {
            let (_, s, v, _) = neon_boost(Color::rgb(r, g, b), boost).to_hsba();
            prop_assert!(s <= 1.0, "saturation {}", s);
            prop_assert!(v <= 1.0, "brightness {}", v);
        }

        #[test]
        fn soften_stays_in_unit_range(
            r in 0.0f64..=1.0,
            g in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
            delta in 0.0f64..=1.0,
        ) {
            let c = soften(Color::rgb(r, g, b), delta);
            for channel in [c.r, c.g, c.b] {
                prop_assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
