// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A spinning no-entry sign.

use prog1_app::{AppConfig, Application};
use prog1_graphics::{
    Image, Interactions, circle, css, ellipse, overlay, overlay_offset, pen, rectangle, rotate,
};

/// Rotation speed in degrees per second.
const SPEED: f64 = 100.0;

/// A round sign with a bar across it that turns clockwise over time,
/// under a translucent highlight.
#[derive(Clone, Debug, Default)]
pub struct StreetSign {
    time: f64,
}

impl StreetSign {
    /// The sign at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// The window this demo wants.
    pub fn config() -> AppConfig {
        AppConfig::new("Sign", 110.0, 80.0)
    }

    /// Current rotation in degrees, counterclockwise.
    pub fn angle(&self) -> f64 {
        -45.0 - self.time * SPEED
    }

    /// The sign at the current time.
    pub fn to_image(&self) -> Image {
        let disc = circle(30.0, (css::NAVY, pen(css::RED).with_width(9.0)));
        let sign = overlay(&[rectangle(60.0, 9.0, css::RED), disc]);
        let sign = rotate(self.angle(), &sign);
        let highlight = ellipse(100.0, 30.0, css::WHITE.with_alpha(0.5));
        overlay_offset(5.0, 25.0, &[highlight, sign])
    }
}

impl Application for StreetSign {
    type Target = ();

    fn draw(&mut self, _: &mut Interactions<()>) -> Image {
        self.to_image()
    }

    fn tick(&mut self, seconds: f64) {
        self.time = seconds;
    }

    fn wants_ticks(&self) -> bool {
        true
    }
}
