//! Engine configuration.
//!
//! [`ContrastOptions`] is a plain value: build it in code, or load it from a
//! TOML document where every key is optional:
//!
//! ```toml
//! primary_threshold = 7.0
//! strict = true
//! formula = "symmetric"
//!
//! [secondary]
//! policy = "shifted"
//! delta = 0.25
//!
//! [link]
//! policy = "luminance-split"
//! pivot = 0.4
//! ```

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::luminance::RatioFormula;
use crate::policy::{LinkSelection, SecondaryPolicy};
use crate::role::ContrastRole;

/// WCAG AA floor for normal-size text.
pub const AA_NORMAL: f64 = 4.5;

/// WCAG AAA floor for normal-size text.
pub const AAA_NORMAL: f64 = 7.0;

/// Default saturation/brightness boost for the neon link role.
pub const NEON_BOOST: f64 = 0.7;

/// Thresholds and policies for every role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContrastOptions {
    /// Floor for the primary black/white decision.
    pub primary_threshold: f64,
    /// Floor for the binary secondary policy and for strict re-validation
    /// of the shifted one.
    pub secondary_threshold: f64,
    /// Floor a neon link must reach in strict mode.
    pub neon_threshold: f64,
    /// Added to saturation and brightness for the neon link.
    pub neon_boost: f64,
    /// Re-test secondary and neon link results and fall back to the
    /// primary color when they miss their floor.
    pub strict: bool,
    /// Ratio used by link candidate tests and strict re-validation.
    pub formula: RatioFormula,
    pub secondary: SecondaryPolicy,
    pub link: LinkSelection,
}

impl Default for ContrastOptions {
    fn default() -> Self {
        Self {
            primary_threshold: AA_NORMAL,
            secondary_threshold: AA_NORMAL,
            neon_threshold: AA_NORMAL,
            neon_boost: NEON_BOOST,
            strict: false,
            formula: RatioFormula::Asymmetric,
            secondary: SecondaryPolicy::default(),
            link: LinkSelection::default(),
        }
    }
}

impl ContrastOptions {
    /// Defaults with the primary floor raised to AAA (7:1).
    #[must_use]
    pub fn aaa() -> Self {
        Self {
            primary_threshold: AAA_NORMAL,
            ..Self::default()
        }
    }

    /// Parse and validate options from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Toml`] for malformed documents or unknown
    /// keys, and the validation errors of [`validate`](Self::validate).
    pub fn from_toml_str(s: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every threshold and amount is usable.
    ///
    /// # Errors
    ///
    /// [`OptionsError::InvalidThreshold`] for a non-finite threshold or one
    /// below 1.0, [`OptionsError::InvalidAmount`] for a non-finite or
    /// negative delta, boost or pivot.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let mut thresholds = vec![
            ("primary_threshold", self.primary_threshold),
            ("secondary_threshold", self.secondary_threshold),
            ("neon_threshold", self.neon_threshold),
        ];
        if let Some(t) = self.link.threshold() {
            thresholds.push(("link.threshold", t));
        }
        for (name, value) in thresholds {
            if !value.is_finite() || value < 1.0 {
                return Err(OptionsError::InvalidThreshold { name, value });
            }
        }

        let mut amounts = vec![("neon_boost", self.neon_boost)];
        if let SecondaryPolicy::Shifted { delta } = self.secondary {
            amounts.push(("secondary.delta", delta));
        }
        if let LinkSelection::LuminanceSplit(split) = self.link {
            amounts.push(("link.pivot", split.pivot));
        }
        for (name, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(OptionsError::InvalidAmount { name, value });
            }
        }

        Ok(())
    }

    /// The contrast floor used for `role`, if the role's current policy
    /// has one.
    #[must_use]
    pub const fn threshold(&self, role: ContrastRole) -> Option<f64> {
        match role {
            ContrastRole::Primary => Some(self.primary_threshold),
            ContrastRole::Secondary => Some(self.secondary_threshold),
            ContrastRole::Link => self.link.threshold(),
            ContrastRole::NeonLink => Some(self.neon_threshold),
        }
    }

    /// Override the contrast floor for one role.
    ///
    /// For the link role this only applies to the candidate-with-fallback
    /// policy; a luminance split has no floor and is left unchanged.
    #[must_use]
    pub fn with_threshold(mut self, role: ContrastRole, threshold: f64) -> Self {
        match role {
            ContrastRole::Primary => self.primary_threshold = threshold,
            ContrastRole::Secondary => self.secondary_threshold = threshold,
            ContrastRole::Link => {
                if let LinkSelection::CandidateWithFallback(p) = &mut self.link {
                    p.threshold = threshold;
                }
            }
            ContrastRole::NeonLink => self.neon_threshold = threshold,
        }
        self
    }

    /// Set the ratio formula used for the engine's contrast tests.
    #[must_use]
    pub const fn with_formula(mut self, formula: RatioFormula) -> Self {
        self.formula = formula;
        self
    }

    /// Turn strict re-validation on or off.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
