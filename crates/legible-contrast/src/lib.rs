//! # legible-contrast — foreground colors that stay readable
//!
//! Given a background color, pick the foreground for each text role so it
//! clears a contrast-ratio floor. Everything here is a pure function of the
//! background, the role, and a [`ContrastOptions`] value. No state survives
//! a call.
//!
//! # Architecture
//!
//! ```text
//! background: Color
//!     │
//!     ▼
//! luminance.rs: relative luminance, contrast ratio (asymmetric / symmetric)
//!     │
//!     ▼
//! policy.rs:    black-or-white, shifted secondary, link policies, neon boost
//!     │
//!     ▼
//! engine.rs:    role dispatch + strict re-validation
//!     │
//!     ▼
//! foreground: Color (per ContrastRole)
//! ```
//!
//! # Contrast ratio
//!
//! [`contrast_ratio`] divides the foreground term by the background term
//! without ordering them first, so a dark foreground on a light background
//! scores below 1.0. The role policies and their default thresholds are
//! defined against that form. [`symmetric_contrast_ratio`] is the textbook
//! `(lighter + 0.05) / (darker + 0.05)`; select it for internal tests with
//! [`RatioFormula::Symmetric`].
//!
//! # Example
//!
//! ```
//! use legible_color::Color;
//! use legible_contrast::{ContrastOptions, ContrastRole, contrasting_color};
//!
//! let options = ContrastOptions::default();
//! let fg = contrasting_color(Color::BLACK, ContrastRole::Primary, &options);
//! assert_eq!(fg, Color::WHITE);
//! ```

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]

pub mod engine;
pub mod error;
pub mod luminance;
pub mod options;
pub mod policy;
pub mod role;

pub use engine::{Foregrounds, contrasting_color, contrasting_color_with, foregrounds};
pub use error::OptionsError;
pub use luminance::{
    RatioFormula, contrast_ratio, has_good_contrast, relative_luminance, symmetric_contrast_ratio,
};
pub use options::ContrastOptions;
pub use policy::{CandidateWithFallback, LinkPolicy, LinkSelection, LuminanceSplit, SecondaryPolicy};
pub use role::ContrastRole;
