// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=prog1_app --heading-base-level=0

//! Prog1 App: the event loop around a Prog1 Graphics picture.
//!
//! An [`Application`] owns its state and turns it into an [`Image`](prog1_graphics::Image)
//! in [`Application::draw`]. An [`AppContext`] keeps the current picture and its render
//! tree, routes mouse events to the images under the pointer, and redraws after input
//! and on animation frames.
//!
//! The window itself belongs to a host toolkit. The host opens it with the size from
//! [`AppConfig`], forwards input and frames to the context, and paints
//! [`AppContext::render_tree`].
//!
//! ## Example
//!
//! ```
//! use prog1_app::{AppConfig, AppContext, Application};
//! use prog1_graphics::{Image, Interactions, MouseEvent, MouseEventKind, circle, css};
//!
//! struct Clicker {
//!     clicks: u32,
//! }
//!
//! impl Application for Clicker {
//!     type Target = ();
//!
//!     fn draw(&mut self, interactions: &mut Interactions<()>) -> Image {
//!         let dot = circle(10.0 + f64::from(self.clicks), css::RED);
//!         interactions.on_mouse_pressed(&dot, ());
//!         dot
//!     }
//!
//!     fn mouse(&mut self, _: MouseEventKind, _: &MouseEvent, target: Option<&()>) {
//!         if target.is_some() {
//!             self.clicks += 1;
//!         }
//!     }
//! }
//!
//! let mut cx = AppContext::start(AppConfig::default(), Clicker { clicks: 0 });
//! cx.mouse(MouseEventKind::Pressed, MouseEvent::at(10.0, 10.0));
//! assert_eq!(cx.image().width(), 22.0);
//! assert_eq!(cx.finish().clicks, 1);
//! ```

mod app;
mod config;
mod context;

pub use app::Application;
pub use config::{AppConfig, ConfigError};
pub use context::{AppContext, Delivery};
