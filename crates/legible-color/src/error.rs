// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised at the color construction boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not one of `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A component was NaN or infinite.
    #[error("color component `{component}` is not finite")]
    NonFinite { component: &'static str },
}
