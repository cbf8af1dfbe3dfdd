// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf drawing primitives.
//!
//! A [`Shape`] pairs a [`ShapeKind`] with a [`Style`] and an intrinsic size
//! that is fixed at construction. Every shape lives in a local coordinate
//! system whose origin is the top-left corner of its bounding box: point-list
//! shapes are stored already translated so that their smallest `x` and `y`
//! are zero.
//!
//! Bounding boxes cover geometry only; the stroke is not included.

use core::f64::consts::PI;

use kurbo::{Affine, Arc, BezPath, Ellipse, Point, Rect, Shape as _, Size, Vec2};
use peniko::Color;

use crate::GraphicsError;
use crate::geometry::{bounding_box_points, bounding_box_size, gcd};
use crate::pen::Pen;
use crate::text::{Font, TextMetrics, TextRun};

/// Tolerance used when flattening curves into paths.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// Fill and stroke of a shape.
///
/// Either part may be absent. A shape with neither is invisible but still
/// occupies space (see [`space`](crate::space)).
#[derive(Copy, Clone, Debug, Default)]
pub struct Style {
    /// Interior color.
    pub fill: Option<Color>,
    /// Outline pen.
    pub pen: Option<Pen>,
}

impl Style {
    /// Neither fill nor stroke.
    pub const NONE: Self = Self {
        fill: None,
        pen: None,
    };

    /// Fill only.
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            pen: None,
        }
    }

    /// Stroke only.
    pub fn stroke(pen: Pen) -> Self {
        Self {
            fill: None,
            pen: Some(pen),
        }
    }

    /// Fill and stroke.
    pub fn fill_and_stroke(color: Color, pen: Pen) -> Self {
        Self {
            fill: Some(color),
            pen: Some(pen),
        }
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Self::fill(color)
    }
}

impl From<Pen> for Style {
    fn from(pen: Pen) -> Self {
        Self::stroke(pen)
    }
}

impl From<(Color, Pen)> for Style {
    fn from((color, pen): (Color, Pen)) -> Self {
        Self::fill_and_stroke(color, pen)
    }
}

impl From<Option<Color>> for Style {
    fn from(fill: Option<Color>) -> Self {
        Self { fill, pen: None }
    }
}

/// The geometry of a [`Shape`].
///
/// Variants without fields take all their geometry from the shape's size.
#[derive(Clone, Debug)]
pub enum ShapeKind {
    /// A circle inscribed in the shape's square.
    Circle,
    /// An axis-aligned rectangle.
    Rectangle,
    /// An ellipse inscribed in the shape's box.
    Ellipse,
    /// A pie slice of the circle inscribed in the shape's square.
    Arc {
        /// Start angle in degrees, counterclockwise from the positive x axis.
        start: f64,
        /// Angular extent in degrees, counterclockwise.
        extent: f64,
    },
    /// Equilateral triangle, apex up.
    Triangle,
    /// Right triangle with the right angle in the bottom-left corner.
    RightTriangle,
    /// Isosceles triangle, apex up.
    IsoscelesTriangle,
    /// Closed polygon through normalized points.
    Polygon {
        /// Vertices in local coordinates.
        points: Vec<Point>,
    },
    /// Closed star polygon `{sides/steps}`.
    StarPolygon {
        /// Vertices in drawing order, local coordinates.
        points: Vec<Point>,
    },
    /// Star with alternating inner and outer vertices.
    StarRadial {
        /// Vertices in drawing order, local coordinates.
        points: Vec<Point>,
    },
    /// Open polyline through normalized points.
    Polyline {
        /// Vertices in local coordinates.
        points: Vec<Point>,
    },
    /// A single segment between two corners of the shape's box.
    Line {
        /// First endpoint.
        from: Point,
        /// Second endpoint.
        to: Point,
    },
    /// A text run, top-left aligned.
    Text(TextRun),
}

impl ShapeKind {
    /// Element name used by the tree dump.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Rectangle => "Rectangle",
            Self::Ellipse => "Ellipse",
            Self::Arc { .. } => "Arc",
            Self::Triangle => "Triangle",
            Self::RightTriangle => "RightTriangle",
            Self::IsoscelesTriangle => "IsoscelesTriangle",
            Self::Polygon { .. } => "Polygon",
            Self::StarPolygon { .. } => "StarPolygon",
            Self::StarRadial { .. } => "StarRadial",
            Self::Polyline { .. } => "Polyline",
            Self::Line { .. } => "Line",
            Self::Text(_) => "Text",
        }
    }
}

/// A leaf primitive with intrinsic size and style.
#[derive(Clone, Debug)]
pub struct Shape {
    kind: ShapeKind,
    style: Style,
    size: Size,
}

impl Shape {
    fn sized(kind: ShapeKind, size: Size, style: Style) -> Self {
        Self { kind, style, size }
    }

    /// Circle of the given radius; `2r × 2r`.
    pub fn circle(radius: f64, style: Style) -> Self {
        Self::sized(
            ShapeKind::Circle,
            Size::new(2.0 * radius, 2.0 * radius),
            style,
        )
    }

    /// Axis-aligned rectangle.
    pub fn rectangle(width: f64, height: f64, style: Style) -> Self {
        Self::sized(ShapeKind::Rectangle, Size::new(width, height), style)
    }

    /// Ellipse inscribed in `width × height`.
    pub fn ellipse(width: f64, height: f64, style: Style) -> Self {
        Self::sized(ShapeKind::Ellipse, Size::new(width, height), style)
    }

    /// Pie slice of a circle of the given radius; `2r × 2r`.
    ///
    /// Angles are in degrees and run counterclockwise.
    pub fn arc(radius: f64, start: f64, extent: f64, style: Style) -> Self {
        Self::sized(
            ShapeKind::Arc { start, extent },
            Size::new(2.0 * radius, 2.0 * radius),
            style,
        )
    }

    /// Equilateral triangle with the given side length, apex up.
    pub fn triangle(length: f64, style: Style) -> Self {
        Self::sized(
            ShapeKind::Triangle,
            Size::new(length, length * 0.75_f64.sqrt()),
            style,
        )
    }

    /// Right triangle with legs `width` and `height`.
    pub fn right_triangle(width: f64, height: f64, style: Style) -> Self {
        Self::sized(ShapeKind::RightTriangle, Size::new(width, height), style)
    }

    /// Isosceles triangle with legs of `length` and apex angle `alpha` degrees.
    pub fn isosceles_triangle(length: f64, alpha: f64, style: Style) -> Self {
        let a = (90.0 - alpha / 2.0).to_radians();
        Self::sized(
            ShapeKind::IsoscelesTriangle,
            Size::new(2.0 * length * a.cos(), length * a.sin()),
            style,
        )
    }

    /// Closed polygon through `x, y` coordinate pairs.
    pub fn polygon(coords: &[f64], style: Style) -> Result<Self, GraphicsError> {
        let (points, size) = normalize(pairs(coords)?);
        Ok(Self::sized(ShapeKind::Polygon { points }, size, style))
    }

    /// Closed polygon through `points`.
    pub fn polygon_points(points: impl IntoIterator<Item = Point>, style: Style) -> Self {
        let (points, size) = normalize(points.into_iter().collect());
        Self::sized(ShapeKind::Polygon { points }, size, style)
    }

    /// Open polyline through `x, y` coordinate pairs.
    pub fn polyline(coords: &[f64], style: Style) -> Result<Self, GraphicsError> {
        let (points, size) = normalize(pairs(coords)?);
        Ok(Self::sized(ShapeKind::Polyline { points }, size, style))
    }

    /// Star polygon `{sides/steps}` whose vertices lie on a circle of radius
    /// `length`, first vertex at the top.
    ///
    /// Every `steps`-th vertex is connected. `sides` and `steps` must be
    /// coprime (a pentagram is `5, 2`; a pentagon is `5, 1`).
    pub fn star_polygon(
        length: f64,
        sides: u32,
        steps: u32,
        style: Style,
    ) -> Result<Self, GraphicsError> {
        if sides == 0 || gcd(sides, steps) != 1 {
            return Err(GraphicsError::StarNotCoprime { sides, steps });
        }
        let n = sides as usize;
        let step = steps as usize % n;
        let alpha_step = 2.0 * PI / f64::from(sides);
        let mut points = vec![Point::ZERO; n];
        let mut alpha = -PI / 2.0;
        let mut i = 0;
        loop {
            points[i] = Point::new(length * alpha.cos(), length * alpha.sin());
            alpha += alpha_step;
            i = (i + step) % n;
            if i == 0 {
                break;
            }
        }
        let (points, size) = normalize(points);
        Ok(Self::sized(ShapeKind::StarPolygon { points }, size, style))
    }

    /// Star with `spikes` points alternating between `inner` and `outer` radius.
    pub fn star(spikes: u32, inner: f64, outer: f64, style: Style) -> Self {
        let alpha_step = PI / f64::from(spikes.max(1));
        let mut alpha = -PI / 2.0;
        let mut points = Vec::with_capacity(2 * spikes as usize);
        for _ in 0..spikes {
            points.push(Point::new(inner * alpha.cos(), inner * alpha.sin()));
            alpha += alpha_step;
            points.push(Point::new(outer * alpha.cos(), outer * alpha.sin()));
            alpha += alpha_step;
        }
        let (points, size) = normalize(points);
        Self::sized(ShapeKind::StarRadial { points }, size, style)
    }

    /// Segment from the origin to `(dx, dy)`, drawn with `pen` only.
    ///
    /// The segment is moved so its box starts at the origin; the size is
    /// `|dx| × |dy|`.
    pub fn line(dx: f64, dy: f64, pen: Pen) -> Self {
        let (from, to) = match (dx >= 0.0, dy >= 0.0) {
            (true, true) => (Point::ZERO, Point::new(dx, dy)),
            (true, false) => (Point::new(0.0, -dy), Point::new(dx, 0.0)),
            (false, true) => (Point::new(-dx, 0.0), Point::new(0.0, dy)),
            (false, false) => (Point::new(-dx, -dy), Point::ZERO),
        };
        Self::sized(
            ShapeKind::Line { from, to },
            Size::new(dx.abs(), dy.abs()),
            Style::stroke(pen),
        )
    }

    /// Text measured with `metrics`.
    pub fn text(
        text: impl Into<String>,
        font: Font,
        style: Style,
        metrics: &dyn TextMetrics,
    ) -> Self {
        let text = text.into();
        let size = metrics.measure(&text, &font);
        Self::sized(ShapeKind::Text(TextRun { text, font }), size, style)
    }

    /// The geometry kind.
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Fill and stroke.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Intrinsic size.
    pub fn size(&self) -> Size {
        self.size
    }

    fn local_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size)
    }

    /// Vertices of polygonal kinds in drawing order, `None` for curved kinds.
    pub fn vertices(&self) -> Option<Vec<Point>> {
        let w = self.size.width;
        let h = self.size.height;
        match &self.kind {
            ShapeKind::Rectangle | ShapeKind::Text(_) => Some(vec![
                Point::new(0.0, 0.0),
                Point::new(w, 0.0),
                Point::new(w, h),
                Point::new(0.0, h),
            ]),
            ShapeKind::Triangle | ShapeKind::IsoscelesTriangle => Some(vec![
                Point::new(0.0, h),
                Point::new(w, h),
                Point::new(w / 2.0, 0.0),
            ]),
            ShapeKind::RightTriangle => Some(vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, h),
                Point::new(w, h),
            ]),
            ShapeKind::Polygon { points }
            | ShapeKind::StarPolygon { points }
            | ShapeKind::StarRadial { points }
            | ShapeKind::Polyline { points } => Some(points.clone()),
            ShapeKind::Line { from, to } => Some(vec![*from, *to]),
            ShapeKind::Circle | ShapeKind::Ellipse | ShapeKind::Arc { .. } => None,
        }
    }

    /// `true` for kinds whose outline is not closed.
    pub fn is_open(&self) -> bool {
        matches!(
            self.kind,
            ShapeKind::Polyline { .. } | ShapeKind::Line { .. }
        )
    }

    /// The outline in local coordinates.
    ///
    /// Text yields its box.
    pub fn outline(&self) -> BezPath {
        match &self.kind {
            ShapeKind::Circle | ShapeKind::Ellipse => {
                Ellipse::from_rect(self.local_rect()).to_path(PATH_TOLERANCE)
            }
            ShapeKind::Arc { start, extent } => self.pie(*start, *extent),
            _ => {
                let points = self.vertices().unwrap_or_default();
                let mut path = BezPath::new();
                let mut it = points.iter();
                if let Some(first) = it.next() {
                    path.move_to(*first);
                    for p in it {
                        path.line_to(*p);
                    }
                    if !self.is_open() {
                        path.close_path();
                    }
                }
                path
            }
        }
    }

    fn pie(&self, start: f64, extent: f64) -> BezPath {
        let radius = self.size.width / 2.0;
        let center = Point::new(radius, radius);
        // Counterclockwise on screen is a negative sweep in y-down space.
        let start = -start.to_radians();
        let sweep = -extent.to_radians();
        let arc = Arc::new(center, Vec2::new(radius, radius), start, sweep, 0.0);
        let mut path = BezPath::new();
        path.move_to(center);
        path.line_to(center + Vec2::from_angle(start) * radius);
        path.extend(arc.append_iter(PATH_TOLERANCE));
        path.close_path();
        path
    }

    /// Axis-aligned bounding box of the geometry under `t`.
    ///
    /// Circles, ellipses and arcs use the exact box of the transformed
    /// ellipse; everything else uses its transformed vertices.
    pub fn bounding_box(&self, t: Affine) -> Rect {
        match &self.kind {
            ShapeKind::Circle | ShapeKind::Ellipse | ShapeKind::Arc { .. } => {
                (t * Ellipse::from_rect(self.local_rect())).bounding_box()
            }
            ShapeKind::Rectangle | ShapeKind::Text(_) => bounding_box_size(t, self.size),
            _ => bounding_box_points(t, &self.vertices().unwrap_or_default()),
        }
    }
}

fn pairs(coords: &[f64]) -> Result<Vec<Point>, GraphicsError> {
    if coords.len() % 2 != 0 {
        return Err(GraphicsError::OddCoordinateCount(coords.len()));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect())
}

/// Shift `points` so their bounding box starts at the origin.
fn normalize(mut points: Vec<Point>) -> (Vec<Point>, Size) {
    let bb = bounding_box_points(Affine::IDENTITY, &points);
    let offset = bb.origin().to_vec2();
    for p in &mut points {
        *p -= offset;
    }
    (points, bb.size())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::css;
    use crate::geometry::{child_transform, rect_approx_eq, size_approx_eq};
    use crate::pen::pen;
    use crate::text::ApproximateMetrics;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn intrinsic_sizes() {
        let s = Style::from(css::RED);
        assert_eq!(Shape::circle(25.0, s).size(), Size::new(50.0, 50.0));
        assert_eq!(Shape::rectangle(40.0, 20.0, s).size(), Size::new(40.0, 20.0));
        assert_eq!(Shape::arc(10.0, 0.0, 90.0, s).size(), Size::new(20.0, 20.0));
        let t = Shape::triangle(100.0, s).size();
        assert!(close(t.height, 100.0 * 0.75_f64.sqrt()));
        // A 60 degree isosceles triangle is equilateral.
        let iso = Shape::isosceles_triangle(100.0, 60.0, s).size();
        assert!(size_approx_eq(iso, t));
    }

    #[test]
    fn polygon_is_normalized() {
        let p = Shape::polygon(&[10.0, 20.0, 30.0, 20.0, 20.0, 5.0], css::BLUE.into()).unwrap();
        assert_eq!(p.size(), Size::new(20.0, 15.0));
        let vs = p.vertices().unwrap();
        assert_eq!(vs[0], Point::new(0.0, 15.0));
        assert_eq!(vs[2], Point::new(10.0, 0.0));
    }

    #[test]
    fn odd_coordinates_fail() {
        let err = Shape::polygon(&[1.0, 2.0, 3.0], Style::NONE).unwrap_err();
        assert_eq!(err, GraphicsError::OddCoordinateCount(3));
        assert!(Shape::polyline(&[1.0], Style::NONE).is_err());
    }

    #[test]
    fn empty_polygon_is_zero_sized() {
        let p = Shape::polygon(&[], Style::NONE).unwrap();
        assert_eq!(p.size(), Size::ZERO);
        assert_eq!(p.outline().elements().len(), 0);
    }

    #[test]
    fn star_polygon_requires_coprime() {
        assert!(Shape::star_polygon(50.0, 5, 2, Style::NONE).is_ok());
        assert_eq!(
            Shape::star_polygon(50.0, 6, 2, Style::NONE).unwrap_err(),
            GraphicsError::StarNotCoprime { sides: 6, steps: 2 }
        );
        assert!(Shape::star_polygon(50.0, 0, 1, Style::NONE).is_err());
    }

    #[test]
    fn pentagram_visits_every_vertex_once() {
        let star = Shape::star_polygon(50.0, 5, 2, Style::NONE).unwrap();
        let vs = star.vertices().unwrap();
        assert_eq!(vs.len(), 5);
        // The top vertex comes first and sits on the top edge.
        assert!(close(vs[0].y, 0.0));
        assert!(close(vs[0].x, star.size().width / 2.0));
        // Pentagon and pentagram share their extent.
        let pentagon = Shape::star_polygon(50.0, 5, 1, Style::NONE).unwrap();
        assert!(size_approx_eq(star.size(), pentagon.size()));
    }

    #[test]
    fn radial_star_extent() {
        let s = Shape::star(4, 10.0, 40.0, Style::NONE);
        assert_eq!(s.vertices().unwrap().len(), 8);
        // Inner vertices start at the top, so the four spikes are diagonal.
        let extent = 80.0 * (PI / 4.0).cos();
        assert!(close(s.size().width, extent));
        assert!(close(s.size().height, extent));
    }

    #[test]
    fn line_endpoints_by_sign() {
        let p = pen(css::BLACK);
        let down = Shape::line(30.0, 40.0, p);
        let up = Shape::line(30.0, -40.0, p);
        let back = Shape::line(-30.0, -40.0, p);
        assert_eq!(down.size(), Size::new(30.0, 40.0));
        assert_eq!(up.size(), Size::new(30.0, 40.0));
        match (up.kind(), back.kind()) {
            (ShapeKind::Line { from, to }, ShapeKind::Line { from: b0, to: b1 }) => {
                assert_eq!((*from, *to), (Point::new(0.0, 40.0), Point::new(30.0, 0.0)));
                assert_eq!((*b0, *b1), (Point::new(30.0, 40.0), Point::ZERO));
            }
            _ => panic!("expected lines"),
        }
        assert!(down.style().fill.is_none());
        assert!(down.style().pen.is_some());
    }

    #[test]
    fn identity_box_matches_size() {
        let s = Style::from(css::GREEN);
        let shapes = [
            Shape::circle(12.5, s),
            Shape::ellipse(30.0, 10.0, s),
            Shape::arc(10.0, 45.0, 90.0, s),
            Shape::triangle(20.0, s),
            Shape::right_triangle(20.0, 10.0, s),
            Shape::star(5, 10.0, 25.0, s),
            Shape::text("hi", Font::sized(10.0), s, &ApproximateMetrics::default()),
        ];
        for shape in &shapes {
            let bb = shape.bounding_box(Affine::IDENTITY);
            let expected = Rect::from_origin_size(Point::ZERO, shape.size());
            assert!(
                rect_approx_eq(bb, expected),
                "{}: {bb:?}",
                shape.kind().name()
            );
        }
    }

    #[test]
    fn rotated_circle_box_is_unchanged() {
        let c = Shape::circle(10.0, Style::NONE);
        let t = Affine::translate((10.0, 10.0))
            * child_transform(0.0, 0.0, 37.0, 1.0, 1.0)
            * Affine::translate((-10.0, -10.0));
        let bb = c.bounding_box(t);
        assert!(rect_approx_eq(bb, Rect::new(0.0, 0.0, 20.0, 20.0)), "{bb:?}");
    }

    #[test]
    fn pie_outline_stays_inside_box() {
        let a = Shape::arc(10.0, 0.0, 90.0, Style::NONE);
        let bb = a.outline().bounding_box();
        // Quarter pie in the top-right quadrant.
        assert!(close(bb.x0, 10.0), "{bb:?}");
        assert!(close(bb.y1, 10.0), "{bb:?}");
        assert!((bb.x1 - 20.0).abs() < 0.2);
        assert!(bb.y0.abs() < 0.2);
    }
}
