// SPDX-License-Identifier: MIT
//
// legible-color — the color model underneath the contrast engine.
//
// A color is a plain value: four normalized f64 components stored as RGBA,
// with HSBA (hue/saturation/brightness/alpha) computed on demand. There is
// no color-space management here, no gamut mapping, no profiles. The engine
// only needs two views of the same sRGB triple and a conversion between
// them that survives a round trip within floating-point rounding.

pub mod color;
pub mod error;
pub mod hsb;

pub use color::Color;
pub use error::ColorError;
