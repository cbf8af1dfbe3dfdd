// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text runs and the text measurement seam.
//!
//! Real font metrics belong to the host toolkit. Text images only need a
//! width and height at construction time, so measurement goes through the
//! [`TextMetrics`] trait. [`ApproximateMetrics`] is the built-in default.

use kurbo::Size;
use unicode_segmentation::UnicodeSegmentation;

/// A font request: optional family name plus size in points.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name, or `None` for the host's default family.
    pub family: Option<String>,
    /// Font size.
    pub size: f64,
}

impl Font {
    /// The default family at the given size.
    pub fn sized(size: f64) -> Self {
        Self { family: None, size }
    }

    /// A named family at the given size.
    pub fn named(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: Some(family.into()),
            size,
        }
    }
}

/// Measures the extent of a text run whose origin is its top-left corner.
pub trait TextMetrics {
    /// Width and height of `text` set in `font`.
    fn measure(&self, text: &str, font: &Font) -> Size;
}

/// Font-independent estimate of text extents.
///
/// Every grapheme cluster advances `advance` em, every line is `line_height`
/// em tall. Width is the widest line. The empty string still occupies one
/// (zero-width) line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ApproximateMetrics {
    /// Horizontal advance per grapheme, in em.
    pub advance: f64,
    /// Line height, in em.
    pub line_height: f64,
}

impl Default for ApproximateMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMetrics for ApproximateMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let mut lines = 0_usize;
        let mut widest = 0_usize;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(line.graphemes(true).count());
        }
        Size::new(
            widest as f64 * self.advance * font.size,
            lines as f64 * self.line_height * font.size,
        )
    }
}

/// A measured run of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// The string.
    pub text: String,
    /// The font it is set in.
    pub font: Font,
}
