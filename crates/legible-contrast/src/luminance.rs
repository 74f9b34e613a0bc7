//! Relative luminance and contrast ratio.
//!
//! Luminance follows the WCAG 2.0 definition, including its original
//! 0.03928 linearization cutoff (later revisions use 0.04045; the two only
//! disagree for channel values between them, by less than 1e-5).

use legible_color::Color;
use serde::{Deserialize, Serialize};

/// Channel value at or below which sRGB is linear.
pub const LINEAR_CUTOFF: f64 = 0.039_28;

/// Luminance offset that models ambient flare in the ratio formula.
pub const FLARE: f64 = 0.05;

/// Convert a single sRGB component to linear light.
#[inline]
#[must_use]
pub fn linearize(c: f64) -> f64 {
    if c <= LINEAR_CUTOFF {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Alpha is ignored. Returns 0.0 for black and 1.0 for white; channels
/// outside 0.0–1.0 produce luminance outside that range.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let r_lin = linearize(color.r);
    let g_lin = linearize(color.g);
    let b_lin = linearize(color.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Contrast ratio of `fg` measured against `bg`.
///
///   (`L_fg` + 0.05) / (`L_bg` + 0.05)
///
/// The two luminances are not ordered first: a foreground darker than its
/// background yields a value below 1.0, and `contrast_ratio(a, b)` is the
/// reciprocal of `contrast_ratio(b, a)`. See [`symmetric_contrast_ratio`]
/// for the order-independent form.
#[must_use]
pub fn contrast_ratio(fg: Color, bg: Color) -> f64 {
    (relative_luminance(fg) + FLARE) / (relative_luminance(bg) + FLARE)
}

/// The WCAG 2.x contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0] regardless of argument order.
#[must_use]
pub fn symmetric_contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + FLARE) / (darker + FLARE)
}

/// Whether `fg` reaches `threshold` against `bg` under [`contrast_ratio`].
#[must_use]
pub fn has_good_contrast(fg: Color, bg: Color, threshold: f64) -> bool {
    contrast_ratio(fg, bg) >= threshold
}

/// Which ratio the engine uses when it tests a candidate against a
/// background (link candidates, strict re-validation).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatioFormula {
    /// [`contrast_ratio`]: foreground over background, unordered.
    #[default]
    Asymmetric,
    /// [`symmetric_contrast_ratio`]: lighter over darker.
    Symmetric,
}

impl RatioFormula {
    #[must_use]
    pub fn ratio(self, fg: Color, bg: Color) -> f64 {
        match self {
            Self::Asymmetric => contrast_ratio(fg, bg),
            Self::Symmetric => symmetric_contrast_ratio(fg, bg),
        }
    }

    /// Whether `fg` reaches `threshold` against `bg` under this formula.
    #[must_use]
    pub fn passes(self, fg: Color, bg: Color, threshold: f64) -> bool {
        self.ratio(fg, bg) >= threshold
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
