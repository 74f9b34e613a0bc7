// SPDX-License-Identifier: MIT
//
// The Color value type.
//
// Storage is RGBA because every consumer downstream (luminance, ratio,
// hex output) reads RGB channels. HSBA is derived on each call; the only
// caller that needs it is the neon boost, which converts once, adjusts
// two components and converts back.
//
// Single-character names (r, g, b, h, s, v, a) are the usual color-science
// convention and are kept as-is.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::hsb::{hsb_to_rgb, normalize_hue, rgb_to_hsb};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with alpha, all components normalized to 0.0–1.0.
///
/// `Color` is a small `Copy` value. Nothing mutates it in place: every
/// adjustment returns a new color.
///
/// # Examples
///
/// ```
/// use legible_color::Color;
///
/// let orange = Color::rgb(1.0, 0.5, 0.0);
/// let (h, s, b, a) = orange.to_hsba();
/// let back = Color::hsba(h, s, b, a);
/// assert_eq!(orange, back);
///
/// let teal = Color::hex("#008080").unwrap();
/// assert_eq!(teal.to_hex(), "#008080");
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Red channel, 0.0 to 1.0.
    pub r: f64,
    /// Green channel, 0.0 to 1.0.
    pub g: f64,
    /// Blue channel, 0.0 to 1.0.
    pub b: f64,
    /// Alpha (opacity): 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from RGBA components.
    ///
    /// Components are stored as given. Values outside 0.0–1.0 are accepted;
    /// use [`clamped`](Self::clamped) when strict validity matters, or
    /// [`try_rgba`](Self::try_rgba) to reject NaN and infinities.
    #[inline]
    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a color from RGBA components, rejecting non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::NonFinite`] naming the first NaN or infinite
    /// component.
    pub fn try_rgba(r: f64, g: f64, b: f64, alpha: f64) -> Result<Self, ColorError> {
        for (component, value) in [("red", r), ("green", g), ("blue", b), ("alpha", alpha)] {
            if !value.is_finite() {
                return Err(ColorError::NonFinite { component });
            }
        }
        Ok(Self::rgba(r, g, b, alpha))
    }

    /// Create a color from hue, saturation, brightness and alpha.
    ///
    /// Hue is in turns (0.0–1.0) and wraps; `1.25` is the same hue as `0.25`.
    #[must_use]
    pub fn hsba(h: f64, s: f64, b: f64, alpha: f64) -> Self {
        let (r, g, bl) = hsb_to_rgb(h, s, b);
        Self::rgba(r, g, bl, alpha)
    }

    /// Create an opaque color from hue, saturation and brightness.
    #[must_use]
    pub fn hsb(h: f64, s: f64, b: f64) -> Self {
        Self::hsba(h, s, b, 1.0)
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit sRGB values with alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the string is not a valid hex color.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_owned()))
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Pure blue, the stock link color.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Pure yellow, the stock link color on dark backgrounds.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    // ─── Accessors ───────────────────────────────────────────────────────

    /// The four RGBA components.
    #[inline]
    #[must_use]
    pub const fn to_rgba(self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.alpha)
    }

    /// The four HSBA components, hue in turns (0.0–1.0).
    ///
    /// Black and grays report hue 0 and saturation 0.
    #[must_use]
    pub fn to_hsba(self) -> (f64, f64, f64, f64) {
        let (h, s, v) = rgb_to_hsb(self.r, self.g, self.b);
        (h, s, v, self.alpha)
    }

    /// Hue in degrees (0.0–360.0), for display.
    #[must_use]
    pub fn hue_degrees(self) -> f64 {
        let (h, _, _) = rgb_to_hsb(self.r, self.g, self.b);
        normalize_hue(h) * 360.0
    }

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Return a copy with every component clamped to 0.0–1.0.
    #[inline]
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            alpha: self.alpha.clamp(0.0, 1.0),
        }
    }

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Convert to 8-bit sRGB, clamping out-of-range channels.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Convert to hex string (`#RRGGBB` or `#RRGGBBAA` if alpha < 1.0).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.alpha);
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::rgb({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::rgba({:.4}, {:.4}, {:.4}, {:.2})",
                self.r, self.g, self.b, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point
        const EPS: f64 = 1e-6;
        (self.r - other.r).abs() < EPS
            && (self.g - other.g).abs() < EPS
            && (self.b - other.b).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s.trim())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color string into a Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB and #RGBA
        3 | 4 => {
            let mut channels = [255u8; 4];
            for (slot, &digit) in channels.iter_mut().zip(bytes) {
                let d = parse_hex_digit(digit)?;
                *slot = d << 4 | d;
            }
            let [r, g, b, a] = channels;
            Some(Color::rgba8(r, g, b, a))
        }
        // #RRGGBB and #RRGGBBAA
        6 | 8 => {
            let mut channels = [255u8; 4];
            for (slot, pair) in channels.iter_mut().zip(bytes.chunks_exact(2)) {
                *slot = parse_hex_byte(pair)?;
            }
            let [r, g, b, a] = channels;
            Some(Color::rgba8(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp keeps the value within 0.0..=255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
