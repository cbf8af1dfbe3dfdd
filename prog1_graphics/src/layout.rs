// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout combinators.
//!
//! Every combinator builds a fresh [`Group`] from a slice of images and
//! returns it frozen as an [`Image`]. Inputs are shared, never copied.
//!
//! - [`beside`] and [`above`] line images up left to right or top to bottom
//!   and align them across the other axis.
//! - [`overlay`] stacks images so the *first* argument is in front;
//!   [`underlay`] stacks them so the first argument is at the back.
//! - The `_offset` variants step each successive image by `(dx, dy)` and
//!   then shift the group back to the origin.
//! - [`rotate`], [`scale`] and [`scale_xy`] wrap a single image.
//! - [`grid`] places rows of images in uniform cells.

use core::str::FromStr;

use kurbo::Size;

use crate::GraphicsError;
use crate::geometry::bounding_box_xy;
use crate::group::Group;
use crate::image::Image;
use crate::pen::Pen;
use crate::shape::{Shape, Style};

/// Horizontal alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HAlign {
    /// Left edges line up.
    Left,
    /// Centers line up.
    Center,
    /// Right edges line up.
    Right,
}

/// Vertical alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VAlign {
    /// Top edges line up.
    Top,
    /// Centers line up.
    Center,
    /// Bottom edges line up.
    Bottom,
}

impl FromStr for HAlign {
    type Err = GraphicsError;

    /// Parses `left`, `center` (or `middle`) and `right`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "middle" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(GraphicsError::UnknownAlignment(s.into())),
        }
    }
}

impl FromStr for VAlign {
    type Err = GraphicsError;

    /// Parses `top`, `center` (or `middle`) and `bottom`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "center" | "middle" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => Err(GraphicsError::UnknownAlignment(s.into())),
        }
    }
}

/// Images side by side, vertically centered.
pub fn beside(images: &[Image]) -> Image {
    beside_aligned(Some(VAlign::Center), images)
}

/// Images side by side with the given vertical alignment.
///
/// `None` and [`VAlign::Top`] both leave every image at the top edge.
pub fn beside_aligned(align: Option<VAlign>, images: &[Image]) -> Image {
    let mut g = Group::new();
    for image in images {
        let x = g.width();
        g.add(image.clone(), x, 0.0);
    }
    if let Some(align) = align {
        align_y(&mut g, align);
    }
    g.into_image()
}

/// Images stacked top to bottom, horizontally centered.
pub fn above(images: &[Image]) -> Image {
    above_aligned(Some(HAlign::Center), images)
}

/// Images stacked top to bottom with the given horizontal alignment.
///
/// `None` and [`HAlign::Left`] both leave every image at the left edge.
pub fn above_aligned(align: Option<HAlign>, images: &[Image]) -> Image {
    let mut g = Group::new();
    for image in images {
        let y = g.height();
        g.add(image.clone(), 0.0, y);
    }
    if let Some(align) = align {
        align_x(&mut g, align);
    }
    g.into_image()
}

/// Images on top of each other, centered; the first image is in front.
pub fn overlay(images: &[Image]) -> Image {
    overlay_aligned(Some(HAlign::Center), Some(VAlign::Center), images)
}

/// Images on top of each other with the given alignment; the first image is
/// in front.
pub fn overlay_aligned(x_align: Option<HAlign>, y_align: Option<VAlign>, images: &[Image]) -> Image {
    layered(images.iter().rev(), x_align, y_align)
}

/// Images on top of each other, centered; the first image is at the back.
pub fn underlay(images: &[Image]) -> Image {
    underlay_aligned(Some(HAlign::Center), Some(VAlign::Center), images)
}

/// Images on top of each other with the given alignment; the first image is
/// at the back.
pub fn underlay_aligned(
    x_align: Option<HAlign>,
    y_align: Option<VAlign>,
    images: &[Image],
) -> Image {
    layered(images.iter(), x_align, y_align)
}

fn layered<'a>(
    images: impl Iterator<Item = &'a Image>,
    x_align: Option<HAlign>,
    y_align: Option<VAlign>,
) -> Image {
    let mut g = Group::new();
    for image in images {
        g.add(image.clone(), 0.0, 0.0);
    }
    if let Some(align) = x_align {
        align_x(&mut g, align);
    }
    if let Some(align) = y_align {
        align_y(&mut g, align);
    }
    g.into_image()
}

fn align_x(g: &mut Group, align: HAlign) {
    let w = g.width();
    for c in g.children_mut() {
        let x = match align {
            HAlign::Left => continue,
            HAlign::Center => (w - c.width()) / 2.0,
            HAlign::Right => w - c.width(),
        };
        c.set_position(x, c.y());
    }
}

fn align_y(g: &mut Group, align: VAlign) {
    let h = g.height();
    for c in g.children_mut() {
        let y = match align {
            VAlign::Top => continue,
            VAlign::Center => (h - c.height()) / 2.0,
            VAlign::Bottom => h - c.height(),
        };
        c.set_position(c.x(), y);
    }
}

/// Centered overlay where each successive image moves by `(-dx, -dy)`.
pub fn overlay_offset(dx: f64, dy: f64, images: &[Image]) -> Image {
    overlay_aligned_offset(Some(HAlign::Center), Some(VAlign::Center), dx, dy, images)
}

/// Aligned overlay where each successive image moves by `(-dx, -dy)`.
///
/// The first image is in front. The alignment picks which point of each
/// image sits at the running position: its left/top edge, its center, or its
/// right/bottom edge. The result is shifted so its box starts at the origin.
pub fn overlay_aligned_offset(
    x_align: Option<HAlign>,
    y_align: Option<VAlign>,
    dx: f64,
    dy: f64,
    images: &[Image],
) -> Image {
    stepped(images.iter().rev(), x_align, y_align, -dx, -dy)
}

/// Centered underlay where each successive image moves by `(dx, dy)`.
pub fn underlay_offset(dx: f64, dy: f64, images: &[Image]) -> Image {
    underlay_aligned_offset(Some(HAlign::Center), Some(VAlign::Center), dx, dy, images)
}

/// Aligned underlay where each successive image moves by `(dx, dy)`.
///
/// The first image is at the back; see [`overlay_aligned_offset`] for the
/// placement rule.
pub fn underlay_aligned_offset(
    x_align: Option<HAlign>,
    y_align: Option<VAlign>,
    dx: f64,
    dy: f64,
    images: &[Image],
) -> Image {
    stepped(images.iter(), x_align, y_align, dx, dy)
}

fn stepped<'a>(
    images: impl Iterator<Item = &'a Image>,
    x_align: Option<HAlign>,
    y_align: Option<VAlign>,
    dx: f64,
    dy: f64,
) -> Image {
    let mut g = Group::new();
    for image in images {
        g.add(image.clone(), 0.0, 0.0);
    }
    if let Some(align) = x_align {
        let mut x = 0.0;
        for c in g.children_mut() {
            let left = match align {
                HAlign::Left => x,
                HAlign::Center => x - c.width() / 2.0,
                HAlign::Right => x - c.width(),
            };
            c.set_position(left, c.y());
            x += dx;
        }
    }
    if let Some(align) = y_align {
        let mut y = 0.0;
        for c in g.children_mut() {
            let top = match align {
                VAlign::Top => y,
                VAlign::Center => y - c.height() / 2.0,
                VAlign::Bottom => y - c.height(),
            };
            c.set_position(c.x(), top);
            y += dy;
        }
    }
    renormalize(&mut g);
    g.into_image()
}

/// Shift all children so the union of their cached extents starts at the
/// origin, and take that union's size.
fn renormalize(g: &mut Group) {
    let mut extent: Option<(f64, f64, f64, f64)> = None;
    for c in g.children() {
        let (x0, y0) = (c.x(), c.y());
        let (x1, y1) = (x0 + c.width(), y0 + c.height());
        extent = Some(match extent {
            None => (x0, y0, x1, y1),
            Some((ex0, ey0, ex1, ey1)) => (ex0.min(x0), ey0.min(y0), ex1.max(x1), ey1.max(y1)),
        });
    }
    let Some((x0, y0, x1, y1)) = extent else {
        return;
    };
    for c in g.children_mut() {
        c.set_position(c.x() - x0, c.y() - y0);
    }
    g.set_size(Size::new(x1 - x0, y1 - y0));
}

/// `image` rotated by `angle` degrees counterclockwise.
pub fn rotate(angle: f64, image: &Image) -> Image {
    Group::rotation(image.clone(), angle).into_image()
}

/// `image` scaled uniformly by `factor`.
pub fn scale(factor: f64, image: &Image) -> Image {
    scale_xy(factor, factor, image)
}

/// `image` scaled by `x_factor` horizontally and `y_factor` vertically.
pub fn scale_xy(x_factor: f64, y_factor: f64, image: &Image) -> Image {
    Group::scaling(image.clone(), x_factor, y_factor).into_image()
}

/// Rows of images in uniform cells.
///
/// Every cell is as wide as the widest image and as tall as the tallest.
/// The image at `rows[r][c]` sits at `(c · cell width, r · cell height)`.
/// Rows may differ in length.
pub fn grid<R: AsRef<[Image]>>(rows: &[R]) -> Image {
    let mut cell = Size::ZERO;
    for image in rows.iter().flat_map(|r| r.as_ref()) {
        cell.width = cell.width.max(image.width());
        cell.height = cell.height.max(image.height());
    }
    let mut g = Group::new();
    for (row, images) in rows.iter().enumerate() {
        for (col, image) in images.as_ref().iter().enumerate() {
            g.add(
                image.clone(),
                col as f64 * cell.width,
                row as f64 * cell.height,
            );
        }
    }
    g.into_image()
}

/// `image` clipped to the silhouette of `mask`; the result has `mask`'s extent.
pub fn clip(mask: &Image, image: &Image) -> Image {
    let mut g = Group::new();
    g.add(mask.clone(), 0.0, 0.0);
    g.add(image.clone(), 0.0, 0.0);
    g.into_clipped_image()
}

/// `image` with a segment from `(x1, y1)` to `(x2, y2)` drawn in front.
///
/// Coordinates are relative to `image`; the result grows to fit the segment.
pub fn line_over(image: &Image, x1: f64, y1: f64, x2: f64, y2: f64, pen: Pen) -> Image {
    line_with(image, x1, y1, x2, y2, pen, true)
}

/// `image` with a segment from `(x1, y1)` to `(x2, y2)` drawn behind it.
pub fn line_under(image: &Image, x1: f64, y1: f64, x2: f64, y2: f64, pen: Pen) -> Image {
    line_with(image, x1, y1, x2, y2, pen, false)
}

fn line_with(image: &Image, x1: f64, y1: f64, x2: f64, y2: f64, pen: Pen, over: bool) -> Image {
    let min_x = x1.min(x2).min(0.0);
    let min_y = y1.min(y2).min(0.0);
    let line: Image = Shape::line(x2 - x1, y2 - y1, pen).into();
    let line_at = (x1.min(x2) - min_x, y1.min(y2) - min_y);
    let mut g = Group::new();
    if over {
        g.add(image.clone(), -min_x, -min_y);
        g.add(line, line_at.0, line_at.1);
    } else {
        g.add(line, line_at.0, line_at.1);
        g.add(image.clone(), -min_x, -min_y);
    }
    g.into_image()
}

/// `image` with a polygon through `coords` drawn in front.
///
/// Coordinates are relative to `image`; the result grows to fit the polygon.
pub fn polygon_over(
    image: &Image,
    coords: &[f64],
    style: impl Into<Style>,
) -> Result<Image, GraphicsError> {
    let polygon: Image = Shape::polygon(coords, style.into())?.into();
    let bb = bounding_box_xy(kurbo::Affine::IDENTITY, coords);
    let min_x = bb.x0.min(0.0);
    let min_y = bb.y0.min(0.0);
    let mut g = Group::new();
    g.add(image.clone(), -min_x, -min_y);
    g.add(polygon, bb.x0 - min_x, bb.y0 - min_y);
    Ok(g.into_image())
}
