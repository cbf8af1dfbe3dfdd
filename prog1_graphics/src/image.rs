// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared image handle.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use kurbo::{Affine, Rect, Size};

use crate::bitmap::Bitmap;
use crate::geometry::bounding_box_size;
use crate::group::Group;
use crate::shape::Shape;

/// Identity of an image value.
///
/// Every constructed image gets a fresh id. Clones of an [`Image`] share the
/// id, so an image that appears in several places of a tree has the same id
/// everywhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of image variants.
#[derive(Clone, Debug)]
pub enum ImageKind {
    /// A drawing primitive.
    Shape(Shape),
    /// A raster image referenced by source.
    Bitmap(Bitmap),
    /// Children whose extents are unioned.
    Group(Group),
    /// Children clipped to child 0, which alone defines the extent.
    ClippedGroup(Group),
}

#[derive(Debug)]
struct ImageNode {
    id: ImageId,
    kind: ImageKind,
}

/// An immutable picture with a fixed size.
///
/// `Image` is a cheap handle: cloning it shares the underlying node, so
/// groups reference their children instead of copying them.
#[derive(Clone, Debug)]
pub struct Image(Arc<ImageNode>);

impl Image {
    /// Wrap a finished variant in a new image with a fresh id.
    pub fn new(kind: ImageKind) -> Self {
        Self(Arc::new(ImageNode {
            id: ImageId::next(),
            kind,
        }))
    }

    /// This image's identity.
    pub fn id(&self) -> ImageId {
        self.0.id
    }

    /// The variant.
    pub fn kind(&self) -> &ImageKind {
        &self.0.kind
    }

    /// The group behind a `Group` or `ClippedGroup` image.
    pub fn as_group(&self) -> Option<&Group> {
        match self.kind() {
            ImageKind::Group(g) | ImageKind::ClippedGroup(g) => Some(g),
            _ => None,
        }
    }

    /// The shape behind a `Shape` image.
    pub fn as_shape(&self) -> Option<&Shape> {
        match self.kind() {
            ImageKind::Shape(s) => Some(s),
            _ => None,
        }
    }

    /// Width and height at the identity transform.
    pub fn size(&self) -> Size {
        match self.kind() {
            ImageKind::Shape(s) => s.size(),
            ImageKind::Bitmap(b) => b.size(),
            ImageKind::Group(g) => g.size(),
            ImageKind::ClippedGroup(g) => g.mask_bounding_box(Affine::IDENTITY).size(),
        }
    }

    /// Width at the identity transform.
    pub fn width(&self) -> f64 {
        self.size().width
    }

    /// Height at the identity transform.
    pub fn height(&self) -> f64 {
        self.size().height
    }

    /// Axis-aligned bounding box of the content under `t`.
    pub fn bounding_box(&self, t: Affine) -> Rect {
        match self.kind() {
            ImageKind::Shape(s) => s.bounding_box(t),
            ImageKind::Bitmap(b) => bounding_box_size(t, b.size()),
            ImageKind::Group(g) => g.bounding_box(t),
            ImageKind::ClippedGroup(g) => g.mask_bounding_box(t),
        }
    }

    /// `true` if both handles refer to the same image value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// A handle that does not keep the image alive.
    pub fn downgrade(&self) -> WeakImage {
        WeakImage(Arc::downgrade(&self.0))
    }
}

/// A non-owning reference to an [`Image`].
///
/// The image stays alive as long as some [`Image`] handle, or a group
/// holding one, exists.
#[derive(Clone, Debug)]
pub struct WeakImage(Weak<ImageNode>);

impl WeakImage {
    /// The image, if it still exists.
    pub fn upgrade(&self) -> Option<Image> {
        self.0.upgrade().map(Image)
    }

    /// `true` while the image exists.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl From<Shape> for Image {
    fn from(shape: Shape) -> Self {
        Self::new(ImageKind::Shape(shape))
    }
}

impl From<Bitmap> for Image {
    fn from(bitmap: Bitmap) -> Self {
        Self::new(ImageKind::Bitmap(bitmap))
    }
}

impl From<Group> for Image {
    fn from(group: Group) -> Self {
        group.into_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::css;
    use crate::shape::Style;

    #[test]
    fn ids_are_unique_and_shared_by_clones() {
        let a: Image = Shape::circle(5.0, Style::from(css::RED)).into();
        let b: Image = Shape::circle(5.0, Style::from(css::RED)).into();
        assert_ne!(a.id(), b.id());
        let c = a.clone();
        assert_eq!(a.id(), c.id());
        assert!(a.ptr_eq(&c));
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn weak_handles_follow_the_last_owner() {
        let a: Image = Shape::circle(5.0, Style::NONE).into();
        let mut g = Group::new();
        g.add(a.clone(), 0.0, 0.0);
        let group = g.into_image();
        let weak = a.downgrade();
        drop(a);
        // Still held by the group.
        assert!(weak.is_alive());
        assert!(weak.upgrade().is_some());
        drop(group);
        assert!(!weak.is_alive());
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn size_follows_variant() {
        let r: Image = Shape::rectangle(30.0, 20.0, Style::NONE).into();
        assert_eq!(r.width(), 30.0);
        assert_eq!(r.height(), 20.0);
        assert!(r.as_shape().is_some());
        assert!(r.as_group().is_none());
    }

    #[test]
    fn shifted_box() {
        let r: Image = Shape::rectangle(30.0, 20.0, Style::NONE).into();
        let bb = r.bounding_box(Affine::translate((5.0, -5.0)));
        assert_eq!(bb, Rect::new(5.0, -5.0, 35.0, 15.0));
    }
}
