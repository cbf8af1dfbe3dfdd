// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster images referenced by path.
//!
//! Only the dimensions are read here. Decoding pixels is the host's job.

use std::path::{Path, PathBuf};

use kurbo::Size;

use crate::image::Image;

/// A raster image source with known dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    source: PathBuf,
    size: Size,
}

impl Bitmap {
    /// A bitmap whose dimensions are already known.
    pub fn with_size(source: impl Into<PathBuf>, width: f64, height: f64) -> Self {
        Self {
            source: source.into(),
            size: Size::new(width, height),
        }
    }

    /// Read the dimensions of the image file at `path`.
    ///
    /// A file that cannot be read or decoded yields a zero-size bitmap and a
    /// warning.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let size = match ::image::image_dimensions(path) {
            Ok((w, h)) => Size::new(f64::from(w), f64::from(h)),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read bitmap dimensions");
                Size::ZERO
            }
        };
        Self {
            source: path.to_path_buf(),
            size,
        }
    }

    /// Where the pixels come from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Width and height in pixels.
    pub fn size(&self) -> Size {
        self.size
    }
}

/// Bitmap image of the file at `path`; zero size if it cannot be read.
pub fn bitmap(path: impl AsRef<Path>) -> Image {
    Bitmap::load(path).into()
}

/// Bitmap image with known dimensions.
pub fn bitmap_with_size(source: impl Into<PathBuf>, width: f64, height: f64) -> Image {
    Bitmap::with_size(source, width, height).into()
}
