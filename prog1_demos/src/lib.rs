// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prog1 Demos: data structures that draw themselves, and small applications.
//!
//! Each data structure has a `to_image` method that renders its current state with
//! [`prog1_graphics`] combinators:
//!
//! - [`Stack`]: a column of cells resting on the bottom of a frame.
//! - [`Queue`]: a ring of pie segments, one per slot.
//! - [`List`]: a row of cells joined by arrows.
//! - [`Vector`]: a row of cells including unused capacity.
//! - [`RbTree`]: nodes in circles above their subtrees.
//!
//! The applications implement [`prog1_app::Application`]:
//!
//! - [`ButtonApp`] counts clicks on a button.
//! - [`SortingGame`] lets icons be dragged around a board.
//! - [`EventsApp`] reports the last mouse or key event and the running time.
//! - [`Row`] lines words up in equal cells.
//! - [`StreetSign`] spins a sign on every frame.
//! - [`Voronoi`] shades a grid by the distance to clicked points.
//!
//! ```
//! use prog1_demos::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(10);
//! stack.push(20);
//! assert_eq!(stack.pop(), Some(20));
//!
//! let picture = stack.to_image();
//! assert_eq!((picture.width(), picture.height()), (50.0, 260.0));
//! ```

mod button;
mod cells;
mod events;
mod list;
mod queue;
mod rb_tree;
mod row;
mod sorting_game;
mod stack;
mod street_sign;
mod vector;
mod voronoi;

pub use button::ButtonApp;
pub use events::EventsApp;
pub use list::List;
pub use queue::{Queue, QueueError};
pub use rb_tree::RbTree;
pub use row::{LANGUAGES, Row};
pub use sorting_game::SortingGame;
pub use stack::Stack;
pub use street_sign::StreetSign;
pub use vector::Vector;
pub use voronoi::Voronoi;
