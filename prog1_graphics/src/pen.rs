// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke styling.

use core::fmt;

use kurbo::{Cap, Join, Stroke};
use peniko::Color;

use crate::color::hex;
use crate::geometry::approx_eq;

/// Where the stroke sits relative to the outline of a shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrokePlacement {
    /// Half the stroke inside, half outside.
    #[default]
    Centered,
    /// Entirely inside the outline.
    Inside,
    /// Entirely outside the outline.
    Outside,
}

/// Stroke style: color, width, placement, cap and join.
///
/// `Pen` is an immutable value. Two pens are equal when their colors match
/// exactly and their widths differ by less than [`EPSILON`](crate::geometry::EPSILON).
#[derive(Copy, Clone, Debug)]
pub struct Pen {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in local units.
    pub width: f64,
    /// Placement of the stroke relative to the outline.
    pub placement: StrokePlacement,
    /// Cap at open ends.
    pub cap: Cap,
    /// Join between segments.
    pub join: Join,
}

impl Pen {
    /// A 1-unit centered pen with square caps and miter joins.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            width: 1.0,
            placement: StrokePlacement::Centered,
            cap: Cap::Square,
            join: Join::Miter,
        }
    }

    /// Replace the width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Replace the placement.
    #[must_use]
    pub fn with_placement(mut self, placement: StrokePlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Replace the cap.
    #[must_use]
    pub fn with_cap(mut self, cap: Cap) -> Self {
        self.cap = cap;
        self
    }

    /// Replace the join.
    #[must_use]
    pub fn with_join(mut self, join: Join) -> Self {
        self.join = join;
        self
    }

    /// The equivalent Kurbo stroke (width, caps and join).
    pub fn to_stroke(&self) -> Stroke {
        let mut stroke = Stroke::new(self.width);
        stroke.join = self.join;
        stroke.start_cap = self.cap;
        stroke.end_cap = self.cap;
        stroke
    }
}

/// Shorthand for [`Pen::new`].
pub fn pen(color: Color) -> Pen {
    Pen::new(color)
}

impl PartialEq for Pen {
    fn eq(&self, other: &Self) -> bool {
        self.color.to_rgba8() == other.color.to_rgba8()
            && approx_eq(self.width, other.width)
            && self.placement == other.placement
            && self.cap == other.cap
            && self.join == other.join
    }
}

impl fmt::Display for Pen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let placement = match self.placement {
            StrokePlacement::Centered => "CENTERED",
            StrokePlacement::Inside => "INSIDE",
            StrokePlacement::Outside => "OUTSIDE",
        };
        let cap = match self.cap {
            Cap::Butt => "BUTT",
            Cap::Square => "SQUARE",
            Cap::Round => "ROUND",
        };
        let join = match self.join {
            Join::Bevel => "BEVEL",
            Join::Miter => "MITER",
            Join::Round => "ROUND",
        };
        write!(
            f,
            "Pen({}, {:?}, {placement}, {cap}, {join})",
            hex(self.color),
            self.width
        )
    }
}
