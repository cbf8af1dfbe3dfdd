// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained render tree and hit testing.
//!
//! [`Image::render`] lowers an image into a tree of [`RenderNode`]s: Kurbo
//! paths, text runs and bitmap references, each with the affine transform
//! that places it in its parent. This is what a host toolkit draws, and what
//! input events are hit-tested against.
//!
//! Hit testing walks the tree front to back: later siblings are tested
//! first. A clipped group only accepts points inside the silhouette of its
//! first child. Filled shapes are hit inside their outline; stroked shapes
//! are also hit within half the pen width of it.

use std::path::PathBuf;

use hashbrown::HashSet;
use kurbo::{Affine, BezPath, ParamCurveNearest, Point, Rect, Shape as _, Size};
use peniko::Color;
use smallvec::SmallVec;

use crate::group::Group;
use crate::image::{Image, ImageId, ImageKind};
use crate::pen::{Pen, StrokePlacement};
use crate::shape::ShapeKind;
use crate::text::TextRun;

/// Ids from the root of a render tree down to the hit image.
pub type HitPath = SmallVec<[ImageId; 8]>;

/// Accuracy passed to nearest-point queries.
const NEAREST_ACCURACY: f64 = 1e-3;

/// What a render node draws.
#[derive(Clone, Debug)]
pub enum RenderContent {
    /// A vector outline.
    Path {
        /// Outline in local coordinates.
        path: BezPath,
        /// `false` for polylines and lines.
        closed: bool,
        /// Interior color.
        fill: Option<Color>,
        /// Outline pen.
        pen: Option<Pen>,
    },
    /// A text run with its top-left corner at the local origin.
    Text {
        /// The string and font.
        run: TextRun,
        /// Measured extent.
        size: Size,
        /// Glyph fill.
        fill: Option<Color>,
        /// Glyph outline.
        pen: Option<Pen>,
    },
    /// A raster image with its top-left corner at the local origin.
    Bitmap {
        /// Where the pixels come from.
        source: PathBuf,
        /// Extent in local units.
        size: Size,
    },
    /// Children, bottom first.
    Group {
        /// Child nodes.
        children: Vec<RenderNode>,
        /// When set, the first child is a mask for all children.
        clip: bool,
    },
}

/// One node of the render tree.
#[derive(Clone, Debug)]
pub struct RenderNode {
    /// The image this node was produced from.
    pub id: ImageId,
    /// Node-to-parent transform; identity at the root.
    pub transform: Affine,
    /// What to draw.
    pub content: RenderContent,
}

impl Image {
    /// Lower this image into a render tree rooted at the identity transform.
    pub fn render(&self) -> RenderNode {
        render_at(self, Affine::IDENTITY)
    }
}

fn render_at(image: &Image, transform: Affine) -> RenderNode {
    let content = match image.kind() {
        ImageKind::Shape(shape) => {
            let style = shape.style();
            match shape.kind() {
                ShapeKind::Text(run) => RenderContent::Text {
                    run: run.clone(),
                    size: shape.size(),
                    fill: style.fill,
                    pen: style.pen,
                },
                _ => RenderContent::Path {
                    path: shape.outline(),
                    closed: !shape.is_open(),
                    fill: style.fill,
                    pen: style.pen,
                },
            }
        }
        ImageKind::Bitmap(b) => RenderContent::Bitmap {
            source: b.source().to_path_buf(),
            size: b.size(),
        },
        ImageKind::Group(g) => RenderContent::Group {
            children: render_children(g),
            clip: false,
        },
        ImageKind::ClippedGroup(g) => RenderContent::Group {
            children: render_children(g),
            clip: true,
        },
    };
    RenderNode {
        id: image.id(),
        transform,
        content,
    }
}

fn render_children(g: &Group) -> Vec<RenderNode> {
    g.children()
        .iter()
        .map(|c| render_at(c.image(), c.transform()))
        .collect()
}

impl RenderNode {
    /// Ids from the root to the front-most image under `point`.
    ///
    /// `point` is in the coordinate system of this node's parent (the scene,
    /// for a root node).
    pub fn hit_path(&self, point: Point) -> Option<HitPath> {
        let mut path = HitPath::new();
        if self.hit(point, &mut path) {
            path.reverse();
            Some(path)
        } else {
            None
        }
    }

    /// Collects ids target-first.
    fn hit(&self, point: Point, out: &mut HitPath) -> bool {
        let Some(local) = to_local(self.transform, point) else {
            return false;
        };
        let hit = match &self.content {
            RenderContent::Group { children, clip } => {
                if *clip && !children.first().is_some_and(|mask| mask.covers(local)) {
                    return false;
                }
                children.iter().rev().any(|c| c.hit(local, out))
            }
            _ => self.leaf_contains(local, false),
        };
        if hit {
            out.push(self.id);
        }
        hit
    }

    /// `true` if `point` (parent coordinates) is inside the silhouette of
    /// this subtree, regardless of fill.
    fn covers(&self, point: Point) -> bool {
        let Some(local) = to_local(self.transform, point) else {
            return false;
        };
        match &self.content {
            RenderContent::Group { children, .. } => children.iter().any(|c| c.covers(local)),
            _ => self.leaf_contains(local, true),
        }
    }

    fn leaf_contains(&self, p: Point, silhouette: bool) -> bool {
        match &self.content {
            RenderContent::Path {
                path,
                closed,
                fill,
                pen,
            } => {
                if fill.is_some() || (silhouette && *closed) {
                    let inside = if *closed {
                        path.contains(p)
                    } else {
                        let mut shut = path.clone();
                        shut.close_path();
                        shut.contains(p)
                    };
                    if inside {
                        return true;
                    }
                }
                pen.is_some_and(|pen| near_outline(path, p, &pen))
            }
            RenderContent::Text { size, .. } | RenderContent::Bitmap { size, .. } => {
                Rect::from_origin_size(Point::ZERO, *size).contains(p)
            }
            RenderContent::Group { .. } => false,
        }
    }

    /// Call `f` with every leaf and its node-to-root transform, bottom first.
    pub fn for_each_leaf(&self, mut f: impl FnMut(&Self, Affine)) {
        self.visit_leaves(Affine::IDENTITY, &mut f);
    }

    fn visit_leaves(&self, parent: Affine, f: &mut impl FnMut(&Self, Affine)) {
        let world = parent * self.transform;
        match &self.content {
            RenderContent::Group { children, .. } => {
                for c in children {
                    c.visit_leaves(world, f);
                }
            }
            _ => f(self, world),
        }
    }

    /// Every image id that occurs in this tree.
    pub fn image_ids(&self) -> HashSet<ImageId> {
        let mut ids = HashSet::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, ids: &mut HashSet<ImageId>) {
        ids.insert(self.id);
        if let RenderContent::Group { children, .. } = &self.content {
            for c in children {
                c.collect_ids(ids);
            }
        }
    }
}

fn to_local(transform: Affine, point: Point) -> Option<Point> {
    if transform.determinant() == 0.0 {
        return None;
    }
    Some(transform.inverse() * point)
}

fn near_outline(path: &BezPath, p: Point, pen: &Pen) -> bool {
    let reach = match pen.placement {
        StrokePlacement::Centered => pen.width / 2.0,
        StrokePlacement::Inside | StrokePlacement::Outside => pen.width,
    };
    path.segments()
        .any(|seg| seg.nearest(p, NEAREST_ACCURACY).distance_sq.sqrt() <= reach)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::css;
    use crate::factory::{circle, line, rectangle, text};
    use crate::layout::{beside, clip, overlay, rotate, scale};
    use crate::pen::pen;

    #[test]
    fn front_most_sibling_wins() {
        let back = rectangle(100.0, 100.0, css::BLUE);
        let front = circle(10.0, css::RED);
        let img = overlay(&[front.clone(), back.clone()]);
        let tree = img.render();

        let hit = tree.hit_path(Point::new(50.0, 50.0)).unwrap();
        assert_eq!(hit.as_slice(), &[img.id(), front.id()]);

        let hit = tree.hit_path(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(hit.as_slice(), &[img.id(), back.id()]);

        assert!(tree.hit_path(Point::new(150.0, 5.0)).is_none());
    }

    #[test]
    fn hit_through_rotation_and_scale() {
        let bar = rectangle(40.0, 10.0, css::GREEN);
        let img = rotate(90.0, &bar);
        let tree = img.render();
        // Upright after the quarter turn: 10 wide, 40 tall.
        assert!(tree.hit_path(Point::new(5.0, 35.0)).is_some());
        assert!(tree.hit_path(Point::new(35.0, 5.0)).is_none());

        let big = scale(2.0, &bar).render();
        assert!(big.hit_path(Point::new(70.0, 15.0)).is_some());
    }

    #[test]
    fn zero_scale_is_never_hit() {
        let tree = scale(0.0, &rectangle(10.0, 10.0, css::GREEN)).render();
        assert!(tree.hit_path(Point::ZERO).is_none());
    }

    #[test]
    fn stroke_only_uses_outline_distance() {
        let ring = circle(20.0, pen(css::BLACK).with_width(4.0));
        let tree = ring.render();
        assert!(tree.hit_path(Point::new(20.0, 20.0)).is_none());
        assert!(tree.hit_path(Point::new(1.0, 20.0)).is_some());
        assert!(tree.hit_path(Point::new(20.0, 41.5)).is_some());

        let stick = line(10.0, 0.0, pen(css::BLACK)).render();
        assert!(stick.hit_path(Point::new(5.0, 0.4)).is_some());
        assert!(stick.hit_path(Point::new(5.0, 2.0)).is_none());
    }

    #[test]
    fn clip_limits_hits() {
        let mask = circle(10.0, css::WHITE);
        let content = rectangle(40.0, 40.0, css::RED);
        let img = clip(&mask, &content);
        let tree = img.render();
        let hit = tree.hit_path(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(hit.last(), Some(&content.id()));
        // Inside the rectangle but outside the mask circle.
        assert!(tree.hit_path(Point::new(30.0, 30.0)).is_none());
        assert!(tree.hit_path(Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn clipping_follows_the_variant() {
        let mut g = Group::new();
        g.add(rectangle(10.0, 10.0, css::WHITE), 0.0, 0.0);
        g.add(rectangle(100.0, 100.0, css::RED), 0.0, 0.0);
        let clipped = Image::new(ImageKind::ClippedGroup(g.clone())).render();
        assert!(matches!(clipped.content, RenderContent::Group { clip: true, .. }));
        assert!(clipped.hit_path(Point::new(50.0, 50.0)).is_none());
        let plain = Image::new(ImageKind::Group(g)).render();
        assert!(matches!(plain.content, RenderContent::Group { clip: false, .. }));
        assert!(plain.hit_path(Point::new(50.0, 50.0)).is_some());
    }

    #[test]
    fn text_hits_its_box() {
        let label = text("OK", 10.0, css::BLACK);
        let tree = label.render();
        assert!(matches!(tree.content, RenderContent::Text { .. }));
        assert!(tree.hit_path(Point::new(1.0, 1.0)).is_some());
        assert!(tree.hit_path(Point::new(13.0, 1.0)).is_none());
    }

    #[test]
    fn leaves_carry_world_transforms() {
        let img = beside(&[rectangle(10.0, 10.0, css::RED), rectangle(10.0, 30.0, css::RED)]);
        let mut origins = Vec::new();
        img.render()
            .for_each_leaf(|_, t| origins.push(t * Point::ZERO));
        assert_eq!(origins, vec![Point::new(0.0, 10.0), Point::new(10.0, 0.0)]);
    }

    #[test]
    fn ids_of_shared_images_appear_once() {
        let dot = circle(5.0, css::RED);
        let img = beside(&[dot.clone(), dot.clone(), dot.clone()]);
        let ids = img.render().image_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&dot.id()));
        assert!(ids.contains(&img.id()));
    }
}
