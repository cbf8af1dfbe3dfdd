// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape factories.
//!
//! These are the everyday entry points: each builds a [`Shape`] and wraps it
//! in an [`Image`]. The `style` argument accepts anything that converts into
//! a [`Style`]: a fill [`Color`](peniko::Color), a [`Pen`], or a
//! `(Color, Pen)` pair.
//!
//! ```
//! use prog1_graphics::{beside, circle, css, pen, rectangle};
//!
//! let row = beside(&[
//!     circle(25.0, css::RED),
//!     rectangle(40.0, 20.0, (css::YELLOW, pen(css::BLACK))),
//! ]);
//! assert_eq!(row.width(), 90.0);
//! assert_eq!(row.height(), 50.0);
//! ```

use kurbo::Point;

use crate::GraphicsError;
use crate::color::css;
use crate::image::Image;
use crate::pen::Pen;
use crate::shape::{Shape, Style};
use crate::text::{ApproximateMetrics, Font, TextMetrics};

/// Circle of radius `radius`.
pub fn circle(radius: f64, style: impl Into<Style>) -> Image {
    Shape::circle(radius, style.into()).into()
}

/// Rectangle of `width × height`.
pub fn rectangle(width: f64, height: f64, style: impl Into<Style>) -> Image {
    Shape::rectangle(width, height, style.into()).into()
}

/// Square with side `side`.
pub fn square(side: f64, style: impl Into<Style>) -> Image {
    rectangle(side, side, style)
}

/// Transparent square of side `side`, for padding layouts.
pub fn space(side: f64) -> Image {
    space_rect(side, side)
}

/// Transparent rectangle of `width × height`, for padding layouts.
pub fn space_rect(width: f64, height: f64) -> Image {
    rectangle(width, height, css::TRANSPARENT)
}

/// Ellipse inscribed in `width × height`.
pub fn ellipse(width: f64, height: f64, style: impl Into<Style>) -> Image {
    Shape::ellipse(width, height, style.into()).into()
}

/// Pie slice of a circle; angles in degrees, counterclockwise from 3 o'clock.
pub fn arc(radius: f64, start: f64, extent: f64, style: impl Into<Style>) -> Image {
    Shape::arc(radius, start, extent, style.into()).into()
}

/// Equilateral triangle with side `length`, apex up.
pub fn triangle(length: f64, style: impl Into<Style>) -> Image {
    Shape::triangle(length, style.into()).into()
}

/// Right triangle with the right angle in the bottom-left corner.
pub fn right_triangle(width: f64, height: f64, style: impl Into<Style>) -> Image {
    Shape::right_triangle(width, height, style.into()).into()
}

/// Isosceles triangle with legs `length` and apex angle `alpha` degrees.
pub fn isosceles_triangle(length: f64, alpha: f64, style: impl Into<Style>) -> Image {
    Shape::isosceles_triangle(length, alpha, style.into()).into()
}

/// Closed polygon through `x, y` coordinate pairs.
///
/// The polygon is moved so its bounding box starts at the origin.
pub fn polygon(coords: &[f64], style: impl Into<Style>) -> Result<Image, GraphicsError> {
    Ok(Shape::polygon(coords, style.into())?.into())
}

/// Closed polygon through `points`, moved so its box starts at the origin.
pub fn polygon_points(points: impl IntoIterator<Item = Point>, style: impl Into<Style>) -> Image {
    Shape::polygon_points(points, style.into()).into()
}

/// Open polyline through `x, y` coordinate pairs.
pub fn polyline(coords: &[f64], style: impl Into<Style>) -> Result<Image, GraphicsError> {
    Ok(Shape::polyline(coords, style.into())?.into())
}

/// Star polygon `{sides/steps}` on a circle of radius `radius`.
pub fn star_polygon(
    radius: f64,
    sides: u32,
    steps: u32,
    style: impl Into<Style>,
) -> Result<Image, GraphicsError> {
    Ok(Shape::star_polygon(radius, sides, steps, style.into())?.into())
}

/// Star with `spikes` spikes between `inner` and `outer` radius.
pub fn star(spikes: u32, inner: f64, outer: f64, style: impl Into<Style>) -> Image {
    Shape::star(spikes, inner, outer, style.into()).into()
}

/// Segment from the origin to `(dx, dy)`.
pub fn line(dx: f64, dy: f64, pen: Pen) -> Image {
    Shape::line(dx, dy, pen).into()
}

/// Text in the default family, measured with [`ApproximateMetrics`].
pub fn text(text: impl Into<String>, size: f64, style: impl Into<Style>) -> Image {
    text_with_font(text, Font::sized(size), style)
}

/// Text in `font`, measured with [`ApproximateMetrics`].
pub fn text_with_font(text: impl Into<String>, font: Font, style: impl Into<Style>) -> Image {
    text_measured(text, font, style, &ApproximateMetrics::default())
}

/// Text in `font`, measured with `metrics`.
pub fn text_measured(
    text: impl Into<String>,
    font: Font,
    style: impl Into<Style>,
    metrics: &dyn TextMetrics,
) -> Image {
    Shape::text(text, font, style.into(), metrics).into()
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;
    use crate::pen::pen;

    struct Fixed;

    impl TextMetrics for Fixed {
        fn measure(&self, _: &str, _: &Font) -> Size {
            Size::new(42.0, 7.0)
        }
    }

    #[test]
    fn factories_forward_sizes() {
        assert_eq!(circle(25.0, css::RED).size(), Size::new(50.0, 50.0));
        assert_eq!(square(10.0, pen(css::BLACK)).size(), Size::new(10.0, 10.0));
        assert_eq!(space(8.0).size(), Size::new(8.0, 8.0));
        assert_eq!(space_rect(8.0, 2.0).size(), Size::new(8.0, 2.0));
        assert_eq!(ellipse(30.0, 10.0, css::BLUE).size(), Size::new(30.0, 10.0));
        assert_eq!(line(-3.0, 4.0, pen(css::BLACK)).size(), Size::new(3.0, 4.0));
    }

    #[test]
    fn space_is_transparent() {
        let s = space(5.0);
        let style = s.as_shape().unwrap().style();
        assert_eq!(style.fill.map(|c| c.to_rgba8().a), Some(0));
        assert!(style.pen.is_none());
    }

    #[test]
    fn custom_metrics() {
        let t = text_measured("anything", Font::sized(99.0), css::BLACK, &Fixed);
        assert_eq!(t.size(), Size::new(42.0, 7.0));
    }

    #[test]
    fn fallible_factories() {
        assert!(polygon(&[0.0, 0.0, 10.0], css::RED).is_err());
        assert!(star_polygon(10.0, 8, 2, css::RED).is_err());
        assert!(star_polygon(10.0, 8, 3, css::RED).is_ok());
    }

    #[test]
    fn polygon_from_points_matches_coordinates() {
        let coords = [-2.0, 0.0, 0.0, 20.0, 6.0, 10.0];
        let points = coords.chunks_exact(2).map(|c| Point::new(c[0], c[1]));
        let a = polygon(&coords, css::RED).unwrap();
        let b = polygon_points(points, css::RED);
        assert_eq!(a.size(), Size::new(8.0, 20.0));
        assert_eq!(a.size(), b.size());
        assert_eq!(
            a.as_shape().unwrap().vertices(),
            b.as_shape().unwrap().vertices()
        );
    }
}
