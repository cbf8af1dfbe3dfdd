// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A button that counts its clicks.

use prog1_app::{AppConfig, Application};
use prog1_graphics::{
    Image, Interactions, MouseEvent, MouseEventKind, above, css, overlay, pen, rectangle, text,
};

/// A labelled button above a status line.
#[derive(Debug)]
pub struct ButtonApp {
    button: Image,
    status: String,
    count: u32,
}

impl Default for ButtonApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonApp {
    /// The button, not clicked yet.
    pub fn new() -> Self {
        let button = overlay(&[
            text("Click me", 24.0, css::BLACK),
            rectangle(140.0, 40.0, (css::LIGHT_GRAY, pen(css::DARK_GRAY))),
        ]);
        Self {
            button,
            status: "You clicked my button 0 times.".into(),
            count: 0,
        }
    }

    /// The window this demo wants.
    pub fn config() -> AppConfig {
        AppConfig::new("Button", 500.0, 100.0)
    }

    /// The button image.
    pub fn button(&self) -> &Image {
        &self.button
    }

    /// The status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Number of clicks so far.
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Application for ButtonApp {
    type Target = &'static str;

    fn draw(&mut self, interactions: &mut Interactions<&'static str>) -> Image {
        interactions.on_mouse_pressed(&self.button, "my button.");
        above(&[self.button.clone(), text(self.status.as_str(), 24.0, css::BLACK)])
    }

    fn mouse(&mut self, kind: MouseEventKind, _: &MouseEvent, target: Option<&&'static str>) {
        if let (MouseEventKind::Pressed, Some(name)) = (kind, target) {
            self.count += 1;
            self.status = format!("You clicked {name} {} times.", self.count);
        }
    }
}
