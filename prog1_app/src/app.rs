// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The application trait.

use prog1_graphics::{Image, Interactions, MouseEvent, MouseEventKind};

/// A program driven by an [`AppContext`](crate::AppContext).
///
/// The context calls [`draw`](Self::draw) to get the picture to show and
/// the event methods when input arrives. State lives in the implementing
/// type; `draw` is expected to rebuild the picture from it.
///
/// Only `draw` is required. The event methods default to doing nothing.
pub trait Application {
    /// What the application registers on images to tell them apart when
    /// they are clicked, e.g. an index or an enum of buttons.
    type Target;

    /// Build the picture for the current state.
    ///
    /// Targets for mouse events are registered in `interactions`.
    /// Registrations last as long as their image exists, whether or not it
    /// is part of the picture, so images that are kept in the application
    /// state only need to be registered once.
    fn draw(&mut self, interactions: &mut Interactions<Self::Target>) -> Image;

    /// A mouse event.
    ///
    /// `target` is the target registered for `kind` on the front-most image
    /// under the pointer (or on its nearest ancestor that has one), and
    /// `None` for events that reached the scene itself.
    fn mouse(&mut self, kind: MouseEventKind, event: &MouseEvent, target: Option<&Self::Target>) {
        let _ = (kind, event, target);
    }

    /// A key went down. `key` is the typed text, or the key name for keys
    /// that produce no text.
    fn key_pressed(&mut self, key: &str) {
        let _ = key;
    }

    /// A key went up. `key` follows the same rule as in
    /// [`key_pressed`](Self::key_pressed).
    fn key_released(&mut self, key: &str) {
        let _ = key;
    }

    /// Animation step; `seconds` have passed since the first frame.
    ///
    /// Only called when [`wants_ticks`](Self::wants_ticks) is `true`.
    fn tick(&mut self, seconds: f64) {
        let _ = seconds;
    }

    /// Whether this application animates.
    ///
    /// Animated applications are redrawn once per frame, so scene-level
    /// input and key events do not trigger an extra redraw.
    fn wants_ticks(&self) -> bool {
        false
    }
}
