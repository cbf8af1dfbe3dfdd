// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Words in a row of equally sized cells.

use prog1_app::{AppConfig, Application};
use prog1_graphics::{Image, Interactions, beside, css, overlay, pen, rectangle, space, text};

/// The words shown by [`Row::default`].
pub const LANGUAGES: [&str; 5] = ["HELLO", "World", "Java", "C", "Python"];

/// A row of labels, each centered in a gray cell as wide as the widest label.
#[derive(Clone, Debug)]
pub struct Row {
    labels: Vec<String>,
}

impl Default for Row {
    fn default() -> Self {
        Self::new(LANGUAGES)
    }
}

impl Row {
    /// A row of `labels`.
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// The squares `0, 1, 4, ..., 100`.
    pub fn squares() -> Self {
        Self::new((0..=10).map(|i: i32| (i * i).to_string()))
    }

    /// The window this demo wants.
    pub fn config() -> AppConfig {
        AppConfig::new("Row", 600.0, 100.0)
    }

    /// The labels, in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Every label over a shared cell, side by side.
    pub fn to_image(&self) -> Image {
        let texts: Vec<Image> = self
            .labels
            .iter()
            .map(|s| text(s.as_str(), 18.0, css::GREEN))
            .collect();
        let Some(first) = texts.first() else {
            return space(0.0);
        };
        let widest = texts.iter().map(Image::width).fold(0.0, f64::max);
        let cell = rectangle(widest + 10.0, first.height() + 8.0, pen(css::GRAY));
        let cells: Vec<Image> = texts
            .iter()
            .map(|t| overlay(&[t.clone(), cell.clone()]))
            .collect();
        beside(&cells)
    }
}

impl Application for Row {
    type Target = ();

    fn draw(&mut self, _: &mut Interactions<()>) -> Image {
        self.to_image()
    }
}
