// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse events and the per-image interaction table.
//!
//! Images are immutable and shared, so they carry no callbacks. Instead an
//! application registers an opaque *target* for an image id and an event
//! kind in an [`Interactions`] table while it builds its picture. When an
//! event hits that image, the host hands the target back to the application.
//!
//! A registration belongs to the image value, not to a particular picture:
//! it holds a [`WeakImage`] and lasts until the image itself is dropped,
//! even while the image is not shown.
//!
//! ```
//! use prog1_graphics::{Interactions, MouseEventKind, circle, css};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Target { Button }
//!
//! let mut interactions = Interactions::new();
//! let button = circle(20.0, css::GREEN);
//! interactions.on_mouse_pressed(&button, Target::Button);
//! assert_eq!(
//!     interactions.target(MouseEventKind::Pressed, button.id()),
//!     Some(&Target::Button)
//! );
//! ```

use core::fmt;

use hashbrown::{HashMap, HashSet};
use kurbo::Point;

use crate::image::{Image, ImageId, WeakImage};

bitflags::bitflags! {
    /// Mouse buttons held down while an event happened.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        /// Usually the left button.
        const PRIMARY   = 0b0000_0001;
        /// Usually the right button.
        const SECONDARY = 0b0000_0010;
        /// The middle button or wheel.
        const MIDDLE    = 0b0000_0100;
    }
}

bitflags::bitflags! {
    /// Modifier keys held down while an event happened.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT   = 0b0000_0001;
        /// Control.
        const CONTROL = 0b0000_0010;
        /// Alt / Option.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Super.
        const META    = 0b0000_1000;
    }
}

/// A mouse event in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseEvent {
    /// Pointer position in the scene.
    pub position: Point,
    /// Buttons held down.
    pub buttons: MouseButtons,
    /// Modifier keys held down.
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// An event at `(x, y)` with no buttons or modifiers.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            ..Self::default()
        }
    }

    /// Replace the buttons.
    #[must_use]
    pub fn with_buttons(mut self, buttons: MouseButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Replace the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Horizontal scene position.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Vertical scene position.
    pub fn y(&self) -> f64 {
        self.position.y
    }
}

impl fmt::Display for MouseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MouseEvent(x = {}, y = {}, buttons = {:?}, modifiers = {:?})",
            self.position.x, self.position.y, self.buttons, self.modifiers
        )
    }
}

/// The kinds of mouse event an image can react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// A button went down.
    Pressed,
    /// A button went up.
    Released,
    /// The pointer moved with no button down.
    Moved,
    /// The pointer moved with a button down.
    Dragged,
}

/// Registered targets per image and event kind.
#[derive(Clone, Debug)]
pub struct Interactions<T> {
    targets: HashMap<(ImageId, MouseEventKind), T>,
    /// One handle per image with at least one target.
    images: HashMap<ImageId, WeakImage>,
}

impl<T> Default for Interactions<T> {
    fn default() -> Self {
        Self {
            targets: HashMap::new(),
            images: HashMap::new(),
        }
    }
}

impl<T> Interactions<T> {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `target` for events of `kind` on `image`, replacing any
    /// previous target.
    ///
    /// Clones of `image` share its id, so the registration applies wherever
    /// the image appears.
    pub fn set(&mut self, kind: MouseEventKind, image: &Image, target: T) {
        self.images
            .entry(image.id())
            .or_insert_with(|| image.downgrade());
        self.targets.insert((image.id(), kind), target);
    }

    /// Shorthand for `set(MouseEventKind::Pressed, ..)`.
    pub fn on_mouse_pressed(&mut self, image: &Image, target: T) {
        self.set(MouseEventKind::Pressed, image, target);
    }

    /// Shorthand for `set(MouseEventKind::Released, ..)`.
    pub fn on_mouse_released(&mut self, image: &Image, target: T) {
        self.set(MouseEventKind::Released, image, target);
    }

    /// Shorthand for `set(MouseEventKind::Moved, ..)`.
    pub fn on_mouse_moved(&mut self, image: &Image, target: T) {
        self.set(MouseEventKind::Moved, image, target);
    }

    /// Shorthand for `set(MouseEventKind::Dragged, ..)`.
    pub fn on_mouse_dragged(&mut self, image: &Image, target: T) {
        self.set(MouseEventKind::Dragged, image, target);
    }

    /// The target registered for `kind` on the image `id`.
    pub fn target(&self, kind: MouseEventKind, id: ImageId) -> Option<&T> {
        self.targets.get(&(id, kind))
    }

    /// Drop every registration for `image`.
    pub fn remove(&mut self, image: &Image) {
        let id = image.id();
        self.targets.retain(|(i, _), _| *i != id);
        self.images.remove(&id);
    }

    /// Keep only registrations for images in `ids`.
    pub fn retain_ids(&mut self, ids: &HashSet<ImageId>) {
        self.images.retain(|id, _| ids.contains(id));
        self.targets.retain(|(i, _), _| ids.contains(i));
    }

    /// Drop the registrations of images that no longer exist.
    ///
    /// Images that are still held somewhere, shown or not, keep theirs.
    pub fn retain_live(&mut self) {
        self.images.retain(|_, image| image.is_alive());
        let images = &self.images;
        self.targets.retain(|(i, _), _| images.contains_key(i));
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.targets.clear();
        self.images.clear();
    }

    /// Number of `(image, kind)` registrations.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
