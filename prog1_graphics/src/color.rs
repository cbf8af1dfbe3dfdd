// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color construction helpers.
//!
//! Colors are plain [`peniko::Color`] values (sRGB with alpha). Use the
//! constants in [`css`] when the name is known at compile time, and
//! [`color`] when it comes from a string at runtime.

use peniko::Color;
use peniko::color::{Srgb, parse_color};

use crate::GraphicsError;

pub use peniko::color::palette::css;

/// Parse a CSS color name or color string (`"red"`, `"lightgray"`, `"#ff8800"`,
/// `"rgb(10, 20, 30)"`, `"transparent"`).
pub fn color(name: &str) -> Result<Color, GraphicsError> {
    parse_color(name)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| GraphicsError::UnknownColor(name.into()))
}

/// Parse a color name and replace its alpha with `opacity` (0.0 to 1.0).
pub fn color_with_opacity(name: &str, opacity: f64) -> Result<Color, GraphicsError> {
    Ok(color(name)?.with_alpha(unit(opacity)))
}

/// An opaque color from 0–255 channels.
pub fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Color::from_rgba8(red, green, blue, 255)
}

/// A color from 0–255 channels including alpha.
pub fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
    Color::from_rgba8(red, green, blue, alpha)
}

/// An opaque color from 0.0–1.0 channels. Out-of-range values are clamped.
pub fn rgb_f(red: f64, green: f64, blue: f64) -> Color {
    rgba_f(red, green, blue, 1.0)
}

/// A color from 0.0–1.0 channels including alpha. Out-of-range values are clamped.
pub fn rgba_f(red: f64, green: f64, blue: f64, alpha: f64) -> Color {
    Color::new([unit(red), unit(green), unit(blue), unit(alpha)])
}

/// Format a color as `0xRRGGBBAA`.
pub fn hex(color: Color) -> String {
    let c = color.to_rgba8();
    format!("0x{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "channel values are clamped to [0, 1] first"
)]
fn unit(v: f64) -> f32 {
    crate::geometry::clamp(v, 0.0, 1.0) as f32
}
