// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A distance field around clicked points.

use kurbo::Point;
use prog1_app::{AppConfig, Application};
use prog1_graphics::{
    HAlign, Image, Interactions, MouseEvent, MouseEventKind, VAlign, circle, css, grid, rgb_f,
    square, underlay_aligned_offset,
};
use tracing::debug;

const EXTENT: f64 = 800.0;
const SIDE: f64 = 30.0;
/// Cells per row and column; the last ones reach past the extent.
const CELLS: u32 = 27;
const DOT_RADIUS: f64 = 6.0;

/// Square cells shaded by their distance to the nearest clicked point.
///
/// Cells at a point are black and fade to white five cells away. Every
/// press adds a point.
#[derive(Clone, Debug, Default)]
pub struct Voronoi {
    points: Vec<Point>,
}

impl Voronoi {
    /// No points yet; every cell is white.
    pub fn new() -> Self {
        Self::default()
    }

    /// The window this demo wants.
    pub fn config() -> AppConfig {
        AppConfig::new("Voronoi", EXTENT, EXTENT)
    }

    /// The clicked points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Add a point.
    pub fn add(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Distance from `p` to the nearest point, or infinity with no points.
    fn distance_closest(&self, p: Point) -> f64 {
        self.points
            .iter()
            .map(|q| q.distance(p))
            .fold(f64::INFINITY, f64::min)
    }

    /// The shaded cells with a red dot on every point.
    pub fn to_image(&self) -> Image {
        let rows: Vec<Vec<Image>> = (0..CELLS)
            .map(|row| {
                (0..CELLS)
                    .map(|col| {
                        let corner = Point::new(f64::from(col) * SIDE, f64::from(row) * SIDE);
                        let d = (self.distance_closest(corner) / (5.0 * SIDE)).min(1.0);
                        square(SIDE, rgb_f(d, d, d))
                    })
                    .collect()
            })
            .collect();
        let dot = circle(DOT_RADIUS, css::RED);
        self.points.iter().fold(grid(&rows), |img, p| {
            underlay_aligned_offset(
                Some(HAlign::Left),
                Some(VAlign::Top),
                p.x - DOT_RADIUS,
                p.y - DOT_RADIUS,
                &[img, dot.clone()],
            )
        })
    }
}

impl Application for Voronoi {
    type Target = ();

    fn draw(&mut self, _: &mut Interactions<()>) -> Image {
        self.to_image()
    }

    fn mouse(&mut self, kind: MouseEventKind, event: &MouseEvent, _: Option<&()>) {
        if kind == MouseEventKind::Pressed {
            debug!(x = event.x(), y = event.y(), "point added");
            self.add(event.position);
        }
    }
}
