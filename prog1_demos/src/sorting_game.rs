// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animal icons that can be dragged around a board.

use kurbo::{Point, Vec2};
use prog1_app::{AppConfig, Application};
use prog1_graphics::{
    Font, HAlign, Image, Interactions, MouseEvent, MouseEventKind, VAlign, css, overlay, pen,
    rectangle, square, text_with_font, underlay_aligned_offset,
};

const BOARD: f64 = 600.0;
const ICON_SIZE: f64 = 100.0;

/// Donkey, dog, cat and rooster.
const ANIMALS: [char; 4] = ['\u{1F40E}', '\u{1F415}', '\u{1F408}', '\u{1F413}'];

/// A board of draggable icons.
#[derive(Debug)]
pub struct SortingGame {
    icons: Vec<Image>,
    positions: Vec<Point>,
    /// Offset from the pointer to the top-left corner of the picked icon.
    pick: Vec2,
}

impl Default for SortingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SortingGame {
    /// The four animals on a diagonal.
    pub fn new() -> Self {
        let positions = (0..ANIMALS.len())
            .map(|i| {
                let offset = 25.0 + 150.0 * i as f64;
                Point::new(offset, offset)
            })
            .collect();
        Self::with_positions(positions)
    }

    /// The four animals at `positions`; missing positions default to the
    /// top-left corner.
    pub fn with_positions(mut positions: Vec<Point>) -> Self {
        positions.resize(ANIMALS.len(), Point::ZERO);
        Self {
            icons: ANIMALS.iter().map(|&c| icon(c)).collect(),
            positions,
            pick: Vec2::ZERO,
        }
    }

    /// The window this demo wants.
    pub fn config() -> AppConfig {
        AppConfig::new("Sorting Game", BOARD, BOARD)
    }

    /// Top-left corners of the icons.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// The icon images, in drawing order.
    pub fn icons(&self) -> &[Image] {
        &self.icons
    }
}

fn icon(animal: char) -> Image {
    let font = Font::named("OpenSansEmoji", ICON_SIZE - 15.0);
    overlay(&[
        text_with_font(animal.to_string(), font, css::BLACK),
        square(ICON_SIZE, (css::FLORAL_WHITE, pen(css::GRAY).with_width(2.0))),
    ])
}

impl Application for SortingGame {
    type Target = usize;

    fn draw(&mut self, interactions: &mut Interactions<usize>) -> Image {
        let mut board = rectangle(BOARD, BOARD, pen(css::BLACK));
        for (i, (icon, p)) in self.icons.iter().zip(&self.positions).enumerate() {
            interactions.on_mouse_pressed(icon, i);
            interactions.on_mouse_dragged(icon, i);
            board = underlay_aligned_offset(
                Some(HAlign::Left),
                Some(VAlign::Top),
                p.x,
                p.y,
                &[board, icon.clone()],
            );
        }
        board
    }

    fn mouse(&mut self, kind: MouseEventKind, event: &MouseEvent, target: Option<&usize>) {
        let Some(&i) = target else {
            return;
        };
        match kind {
            MouseEventKind::Pressed => self.pick = self.positions[i] - event.position,
            MouseEventKind::Dragged => self.positions[i] = event.position + self.pick,
            MouseEventKind::Released | MouseEventKind::Moved => {}
        }
    }
}
