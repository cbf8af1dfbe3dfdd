// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shows the last input event and the running time.

use prog1_app::{AppConfig, Application};
use prog1_graphics::{Font, Image, Interactions, MouseEvent, MouseEventKind, css, text_with_font};
use tracing::info;

/// Every kind of mouse event the label listens for.
const KINDS: [MouseEventKind; 4] = [
    MouseEventKind::Pressed,
    MouseEventKind::Released,
    MouseEventKind::Moved,
    MouseEventKind::Dragged,
];

/// A text label that reports the last event it or the window received.
///
/// Events on the label are prefixed with `text:`; events anywhere else in
/// the window are not.
#[derive(Debug, Default)]
pub struct EventsApp {
    status: String,
    time: f64,
}

impl EventsApp {
    /// No event yet, at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The window this demo wants.
    pub fn config() -> AppConfig {
        AppConfig::new("Events", 800.0, 600.0)
    }

    /// Description of the last event.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Seconds since the first frame.
    pub fn time(&self) -> f64 {
        self.time
    }
}

fn verb(kind: MouseEventKind) -> &'static str {
    match kind {
        MouseEventKind::Pressed => "press",
        MouseEventKind::Released => "release",
        MouseEventKind::Moved => "move",
        MouseEventKind::Dragged => "drag",
    }
}

impl Application for EventsApp {
    /// The label has a single target; only its presence matters.
    type Target = ();

    fn draw(&mut self, interactions: &mut Interactions<()>) -> Image {
        let label = text_with_font(
            format!("last event = {}\ntime = {:.2}", self.status, self.time),
            Font::named("Consolas", 24.0),
            css::BLACK,
        );
        for kind in KINDS {
            interactions.set(kind, &label, ());
        }
        label
    }

    fn mouse(&mut self, kind: MouseEventKind, event: &MouseEvent, target: Option<&()>) {
        let place = if target.is_some() { "text: " } else { "" };
        self.status = format!(
            "{place}mouse {} ({:3.0}, {:3.0})",
            verb(kind),
            event.x(),
            event.y()
        );
        if matches!(kind, MouseEventKind::Pressed | MouseEventKind::Released) {
            info!(status = %self.status, "mouse");
        }
    }

    fn key_pressed(&mut self, key: &str) {
        self.status = format!("key {key} pressed");
        info!(status = %self.status, "key");
    }

    fn key_released(&mut self, key: &str) {
        self.status = format!("key {key} released");
        info!(status = %self.status, "key");
    }

    fn tick(&mut self, seconds: f64) {
        self.time = seconds;
    }

    fn wants_ticks(&self) -> bool {
        true
    }
}
