// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=prog1_graphics --heading-base-level=0

//! Prog1 Graphics: declarative pictures built from shapes and layout combinators.
//!
//! Prog1 Graphics is a small image algebra for teaching. Programs build a picture out of
//! shapes and combine them with functions like [`beside`], [`above`] and [`overlay`] instead
//! of positioning widgets by hand.
//!
//! - Every [`Image`] has a fixed width and height that equal the tight bounding box of its
//!   content.
//! - Groups re-derive their extent whenever a child is added, rotated or scaled.
//! - Bounding boxes are computed under arbitrary affine transforms, so rotated and scaled
//!   content lays out exactly.
//!
//! ## Example
//!
//! ```
//! use prog1_graphics::{VAlign, beside, beside_aligned, circle, css, rotate, square};
//!
//! let row = beside(&[circle(25.0, css::RED), circle(12.5, css::BLUE)]);
//! assert_eq!((row.width(), row.height()), (75.0, 50.0));
//!
//! // The smaller circle is vertically centered.
//! let second = row.as_group().and_then(|g| g.get(1)).unwrap();
//! assert_eq!(second.y(), 12.5);
//!
//! // Rotating a square by 45° widens it to its diagonal.
//! let diamond = rotate(45.0, &square(10.0, css::GREEN));
//! assert!((diamond.width() - 200.0_f64.sqrt()).abs() < 1e-9);
//!
//! let top = beside_aligned(Some(VAlign::Top), &[row, diamond]);
//! assert_eq!(top.height(), 50.0);
//! ```
//!
//! ## API overview
//!
//! - Shapes: [`circle`], [`rectangle`], [`square`], [`space`], [`ellipse`], [`arc`],
//!   [`triangle`], [`right_triangle`], [`isosceles_triangle`], [`polygon`], [`polygon_points`],
//!   [`polyline`], [`star_polygon`], [`star`], [`line`], [`text`], [`bitmap`].
//! - Styles: a fill [`Color`](peniko::Color), a [`Pen`], or both, via [`Style`].
//! - Layout: [`beside`], [`above`], [`overlay`], [`underlay`] and their `_aligned` and
//!   `_offset` variants, [`rotate`], [`scale`], [`scale_xy`], [`grid`], [`clip`],
//!   [`line_over`], [`line_under`], [`polygon_over`].
//! - Structure: [`Group`] and [`Child`] for building composites by hand.
//! - Output: `Display` for [`Image`] prints the tree; [`Image::render`] produces a
//!   [`RenderNode`] tree for a host to draw and hit-test.
//! - Input: [`Interactions`] maps image ids and [`MouseEventKind`]s to application targets.
//!
//! ## Coordinates
//!
//! The canvas is y-down. Every image's local origin is the top-left corner of its
//! bounding box. Angles are in degrees and positive angles turn counterclockwise
//! on screen.
//!
//! ## Errors
//!
//! Invalid parameters (an unknown color name, an odd number of polygon coordinates, a star
//! whose sides and steps are not coprime) are reported as [`GraphicsError`]. A bitmap that
//! cannot be read logs a warning through `tracing` and has zero size.

mod bitmap;
mod color;
mod dump;
mod error;
mod factory;
mod geometry;
mod group;
mod image;
mod interaction;
mod layout;
mod pen;
mod render;
mod shape;
mod text;

pub use bitmap::{Bitmap, bitmap, bitmap_with_size};
pub use color::{color, color_with_opacity, css, hex, rgb, rgb_f, rgba, rgba_f};
pub use error::GraphicsError;
pub use factory::{
    arc, circle, ellipse, isosceles_triangle, line, polygon, polygon_points, polyline, rectangle,
    right_triangle, space, space_rect, square, star, star_polygon, text, text_measured,
    text_with_font, triangle,
};
pub use geometry::{
    EPSILON, approx_eq, bounding_box_points, bounding_box_size, bounding_box_xy, child_transform,
    clamp, degenerate, gcd, rect_approx_eq, size_approx_eq, union_all,
};
pub use group::{Child, Group};
pub use image::{Image, ImageId, ImageKind, WeakImage};
pub use interaction::{Interactions, Modifiers, MouseButtons, MouseEvent, MouseEventKind};
pub use layout::{
    HAlign, VAlign, above, above_aligned, beside, beside_aligned, clip, grid, line_over,
    line_under, overlay, overlay_aligned, overlay_aligned_offset, overlay_offset, polygon_over,
    rotate, scale, scale_xy, underlay, underlay_aligned, underlay_aligned_offset, underlay_offset,
};
pub use pen::{Pen, StrokePlacement, pen};
pub use render::{HitPath, RenderContent, RenderNode};
pub use shape::{Shape, ShapeKind, Style};
pub use text::{ApproximateMetrics, Font, TextMetrics, TextRun};

pub use kurbo;
pub use peniko;
