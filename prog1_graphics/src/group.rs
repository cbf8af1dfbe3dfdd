// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned children and composite images.
//!
//! A [`Group`] is the only mutable structure in the crate: it is built by
//! adding children and then frozen into an [`Image`] with
//! [`Group::into_image`] or [`Group::into_clipped_image`]. Its width and
//! height are re-derived after every structural change.
//!
//! Whether a group clips is decided by the image variant it is frozen into,
//! not by the group itself.

use kurbo::{Affine, Point, Rect, Size};

use crate::geometry::{child_transform, degenerate, union_all};
use crate::image::{Image, ImageKind};

/// An image placed inside a parent group.
///
/// The child-to-parent transform is `translate(x, y) · rotate(-angle) ·
/// scale(x_scale, y_scale)`. `width` and `height` cache the extent of the
/// transformed image.
#[derive(Clone, Debug)]
pub struct Child {
    image: Image,
    x: f64,
    y: f64,
    angle: f64,
    x_scale: f64,
    y_scale: f64,
    width: f64,
    height: f64,
}

impl Child {
    /// Place `image` untransformed at `(x, y)`.
    pub fn new(image: Image, x: f64, y: f64) -> Self {
        let size = image.size();
        Self {
            image,
            x,
            y,
            angle: 0.0,
            x_scale: 1.0,
            y_scale: 1.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Set the rotation to `angle` degrees counterclockwise and move the
    /// child so its transformed box starts at the parent origin.
    pub fn rotate(&mut self, angle: f64) {
        self.angle = angle;
        self.refit();
    }

    /// Set the scale factors and move the child so its transformed box starts
    /// at the parent origin.
    pub fn scale(&mut self, x_scale: f64, y_scale: f64) {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self.refit();
    }

    fn refit(&mut self) {
        let bb = self.image.bounding_box(self.transform());
        self.x = -bb.x0;
        self.y = -bb.y0;
        self.width = bb.width();
        self.height = bb.height();
    }

    /// The child-to-parent transform.
    pub fn transform(&self) -> Affine {
        child_transform(self.x, self.y, self.angle, self.x_scale, self.y_scale)
    }

    /// Center of the cached extent, in parent coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the child without touching its cached extent.
    pub(crate) fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// The wrapped image.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Horizontal offset in the parent.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical offset in the parent.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Rotation in degrees, counterclockwise.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Horizontal scale factor.
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    /// Vertical scale factor.
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    /// Cached width of the transformed image.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Cached height of the transformed image.
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// An ordered list of children; the first child is drawn at the bottom.
///
/// The group's own extent is the union of its children. Frozen with
/// [`Group::into_clipped_image`], child 0 becomes a mask: the image takes its
/// extent from [`Group::mask_bounding_box`] and clips the others to it.
#[derive(Clone, Debug, Default)]
pub struct Group {
    children: Vec<Child>,
    size: Size,
}

impl Group {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// A group holding `image` rotated by `angle` degrees counterclockwise.
    pub fn rotation(image: Image, angle: f64) -> Self {
        let mut c = Child::new(image, 0.0, 0.0);
        c.rotate(angle);
        Self::single(c)
    }

    /// A group holding `image` scaled by the given factors.
    pub fn scaling(image: Image, x_factor: f64, y_factor: f64) -> Self {
        let mut c = Child::new(image, 0.0, 0.0);
        c.scale(x_factor, y_factor);
        Self::single(c)
    }

    fn single(child: Child) -> Self {
        Self {
            size: Size::new(child.width, child.height),
            children: vec![child],
        }
    }

    /// Append `image` at `(x, y)` and recompute the extent.
    pub fn add(&mut self, image: Image, x: f64, y: f64) {
        self.children.push(Child::new(image, x, y));
        self.refresh_size();
    }

    pub(crate) fn refresh_size(&mut self) {
        self.size = self.bounding_box(Affine::IDENTITY).size();
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Child] {
        &mut self.children
    }

    /// The child at `index`.
    pub fn get(&self, index: usize) -> Option<&Child> {
        self.children.get(index)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All children, bottom first.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Union extent of the children at the identity transform.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Width at the identity transform.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Height at the identity transform.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Bounding box of the children under `t`.
    ///
    /// An empty group yields a zero-area box at `t · (0, 0)`.
    pub fn bounding_box(&self, t: Affine) -> Rect {
        union_all(
            self.children
                .iter()
                .map(|c| c.image.bounding_box(t * c.transform())),
        )
        .unwrap_or_else(|| degenerate(t))
    }

    /// Bounding box of child 0 alone under `t`; the extent of a clipped group.
    ///
    /// An empty group yields a zero-area box at `t · (0, 0)`.
    pub fn mask_bounding_box(&self, t: Affine) -> Rect {
        self.children.first().map_or_else(
            || degenerate(t),
            |c| c.image.bounding_box(t * c.transform()),
        )
    }

    /// Center of a nested child, in this group's coordinates.
    ///
    /// `indices` is a path of child indices into nested groups. The empty
    /// path addresses the group itself. Only translations are accumulated
    /// along the path; the path stops early at the first child that is not a
    /// group. Returns `None` if an index is out of range.
    pub fn child_center(&self, indices: &[usize]) -> Option<Point> {
        let Some((&first, rest)) = indices.split_first() else {
            return Some(Point::new(self.width() / 2.0, self.height() / 2.0));
        };
        let mut child = self.get(first)?;
        let mut x = 0.0;
        let mut y = 0.0;
        for &index in rest {
            x += child.x;
            y += child.y;
            let Some(group) = child.image.as_group() else {
                return Some(Point::new(x + child.width / 2.0, y + child.height / 2.0));
            };
            child = group.get(index)?;
        }
        let c = child.center();
        Some(Point::new(x + c.x, y + c.y))
    }

    /// Freeze into an image whose extent is the union of the children.
    pub fn into_image(self) -> Image {
        Image::new(ImageKind::Group(self))
    }

    /// Freeze into an image that clips every child to child 0.
    pub fn into_clipped_image(self) -> Image {
        Image::new(ImageKind::ClippedGroup(self))
    }
}
