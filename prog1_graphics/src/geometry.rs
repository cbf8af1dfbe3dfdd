// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affine transform helpers and bounding-box computation.
//!
//! Every positioned element uses the same transform shape: translate, then
//! rotate, then scale, applied child-to-parent. Angles are in degrees and
//! counterclockwise on a y-down canvas, so the rotation actually applied is
//! `-angle`.
//!
//! Bounding boxes are plain [`Rect`] values. No epsilon is applied while
//! computing them; [`approx_eq`] and friends are for comparisons only.

use kurbo::{Affine, Point, Rect, Size};

/// Tolerance used by value comparisons (pens, rectangles, sizes).
pub const EPSILON: f64 = 1e-8;

/// Build the child-to-parent transform `translate(x, y) · rotate(-angle) · scale(sx, sy)`.
pub fn child_transform(x: f64, y: f64, angle: f64, x_scale: f64, y_scale: f64) -> Affine {
    Affine::translate((x, y))
        * Affine::rotate((-angle).to_radians())
        * Affine::scale_non_uniform(x_scale, y_scale)
}

/// A zero-area rectangle at the image of the origin under `t`.
///
/// This is the bounding box of anything that has no geometry.
pub fn degenerate(t: Affine) -> Rect {
    let origin = t * Point::ORIGIN;
    Rect::from_origin_size(origin, Size::ZERO)
}

/// Bounding box of `points` under the transform `t`.
///
/// An empty slice yields [`degenerate`].
pub fn bounding_box_points(t: Affine, points: &[Point]) -> Rect {
    let mut it = points.iter().map(|p| t * *p);
    let Some(first) = it.next() else {
        return degenerate(t);
    };
    it.fold(Rect::from_points(first, first), |acc, p| acc.union_pt(p))
}

/// Bounding box of alternating `x, y` coordinates under the transform `t`.
///
/// A trailing unpaired coordinate is ignored.
pub fn bounding_box_xy(t: Affine, coords: &[f64]) -> Rect {
    let points: Vec<Point> = coords
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect();
    bounding_box_points(t, &points)
}

/// Bounding box of the rectangle `(0, 0) .. (size.width, size.height)` under `t`.
pub fn bounding_box_size(t: Affine, size: Size) -> Rect {
    let w = size.width;
    let h = size.height;
    bounding_box_points(
        t,
        &[
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
        ],
    )
}

/// Union of a sequence of rectangles, or `None` if the sequence is empty.
pub fn union_all(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    let mut it = rects.into_iter();
    let first = it.next()?;
    Some(it.fold(first, |acc, r| acc.union(r)))
}

/// Greatest common divisor.
///
/// `gcd(n, 0) == n`; `gcd(0, 0) == 0`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let rest = a % b;
        a = b;
        b = rest;
    }
    a
}

/// Clamp `x` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics; if `min > max`, `min` wins.
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// `true` if `a` and `b` differ by less than [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Component-wise [`approx_eq`] on the origin and size of two rectangles.
pub fn rect_approx_eq(a: Rect, b: Rect) -> bool {
    approx_eq(a.x0, b.x0)
        && approx_eq(a.y0, b.y0)
        && approx_eq(a.width(), b.width())
        && approx_eq(a.height(), b.height())
}

/// Component-wise [`approx_eq`] on two sizes.
pub fn size_approx_eq(a: Size, b: Size) -> bool {
    approx_eq(a.width, b.width) && approx_eq(a.height, b.height)
}
