// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pieces shared by the data structure pictures.

use kurbo::Point;
use prog1_graphics::{Image, css, overlay, pen, polygon_points, rectangle, rotate, text};

/// A downward arrow, 12 wide and 20 tall.
const ARROW: [Point; 7] = [
    Point::new(-2.0, 0.0),
    Point::new(-2.0, 10.0),
    Point::new(-6.0, 10.0),
    Point::new(0.0, 20.0),
    Point::new(6.0, 10.0),
    Point::new(2.0, 10.0),
    Point::new(2.0, 0.0),
];

/// The arrow outline turned by `angle` degrees.
pub(crate) fn arrow(angle: f64) -> Image {
    rotate(angle, &polygon_points(ARROW, pen(css::BLUE)))
}

/// A 40 × 20 box with `label` centered in it.
pub(crate) fn cell(label: &str) -> Image {
    overlay(&[
        text(label, 12.0, css::BLACK),
        rectangle(40.0, 20.0, pen(css::BLACK)),
    ])
}
