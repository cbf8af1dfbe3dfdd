// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The application context: picture, render tree, event routing and ticks.
//!
//! A host toolkit owns the window and forwards its events here:
//!
//! 1) [`AppContext::start`] when the window opens.
//! 2) [`AppContext::mouse`], [`AppContext::key_pressed`] and
//!    [`AppContext::key_released`] as input arrives.
//! 3) [`AppContext::frame`] once per display frame.
//! 4) Whenever [`AppContext::redraws`] changes, draw [`AppContext::render_tree`].
//!
//! ## Mouse routing
//!
//! A mouse event is hit-tested against the current render tree. The hit path
//! is walked from the front-most image back to the root and the event is
//! delivered with the first target registered for its kind. If no image on
//! the path has one, the application gets the event with no target.
//!
//! Pressing a button grabs the pointer: drags and the final release go to the
//! path that was hit by the press, wherever the pointer moves.

use core::fmt;

use kurbo::Point;
use prog1_graphics::{
    HitPath, Image, ImageId, Interactions, MouseEvent, MouseEventKind, RenderNode,
};
use tracing::{debug, trace};

use crate::app::Application;
use crate::config::AppConfig;

/// Where a mouse event ended up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// An image on the hit path had a target for the event's kind.
    Image(ImageId),
    /// The event went to the application with no target.
    Scene,
}

/// Drives an [`Application`].
pub struct AppContext<A: Application> {
    config: AppConfig,
    app: A,
    interactions: Interactions<A::Target>,
    image: Image,
    tree: RenderNode,
    /// Hit path of the press that started the current grab.
    grab: Option<HitPath>,
    /// Timestamp of the first frame, in nanoseconds.
    first_frame: Option<u64>,
    redraws: u64,
}

impl<A: Application> fmt::Debug for AppContext<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("image", &self.image.id())
            .field("registrations", &self.interactions.len())
            .field("grab", &self.grab)
            .field("first_frame", &self.first_frame)
            .field("redraws", &self.redraws)
            .finish_non_exhaustive()
    }
}

impl<A: Application> AppContext<A> {
    /// Open the application and draw the first picture.
    pub fn start(config: AppConfig, mut app: A) -> Self {
        debug!(
            title = %config.title,
            width = config.width,
            height = config.height,
            "starting application"
        );
        let mut interactions = Interactions::new();
        let image = app.draw(&mut interactions);
        let tree = image.render();
        interactions.retain_live();
        Self {
            config,
            app,
            interactions,
            image,
            tree,
            grab: None,
            first_frame: None,
            redraws: 1,
        }
    }

    /// Rebuild the picture from the application state.
    ///
    /// Registrations for images that no longer exist are dropped. Images the
    /// application still holds keep theirs, even if this picture leaves them
    /// out.
    pub fn redraw(&mut self) {
        self.image = self.app.draw(&mut self.interactions);
        self.tree = self.image.render();
        self.interactions.retain_live();
        self.redraws += 1;
        debug!(
            redraws = self.redraws,
            width = self.image.width(),
            height = self.image.height(),
            registrations = self.interactions.len(),
            "redraw"
        );
    }

    /// Route a mouse event.
    ///
    /// Deliveries to an image always redraw. Deliveries to the scene redraw
    /// unless the application ticks, in which case the next frame does.
    pub fn mouse(&mut self, kind: MouseEventKind, event: MouseEvent) -> Delivery {
        let path = match kind {
            MouseEventKind::Pressed => {
                let path = self.hit(event.position);
                self.grab = Some(path.clone());
                path
            }
            MouseEventKind::Dragged => match &self.grab {
                Some(path) => path.clone(),
                None => self.hit(event.position),
            },
            MouseEventKind::Released => match self.grab.take() {
                Some(path) => path,
                None => self.hit(event.position),
            },
            MouseEventKind::Moved => self.hit(event.position),
        };

        let receiver = path
            .iter()
            .rev()
            .copied()
            .find(|id| self.interactions.target(kind, *id).is_some());
        match receiver {
            Some(id) => {
                trace!(?kind, x = event.x(), y = event.y(), image = %id, "mouse event to image");
                let target = self.interactions.target(kind, id);
                self.app.mouse(kind, &event, target);
                self.redraw();
                Delivery::Image(id)
            }
            None => {
                trace!(?kind, x = event.x(), y = event.y(), "mouse event to scene");
                self.app.mouse(kind, &event, None);
                if !self.app.wants_ticks() {
                    self.redraw();
                }
                Delivery::Scene
            }
        }
    }

    /// A key went down.
    ///
    /// `text` is what the key typed; when it is empty `code` (the key name,
    /// e.g. `"LEFT"`) is passed on instead.
    pub fn key_pressed(&mut self, text: &str, code: &str) {
        let key = if text.is_empty() { code } else { text };
        trace!(key, "key pressed");
        self.app.key_pressed(key);
        if !self.app.wants_ticks() {
            self.redraw();
        }
    }

    /// A key went up; see [`key_pressed`](Self::key_pressed).
    pub fn key_released(&mut self, text: &str, code: &str) {
        let key = if text.is_empty() { code } else { text };
        trace!(key, "key released");
        self.app.key_released(key);
        if !self.app.wants_ticks() {
            self.redraw();
        }
    }

    /// A display frame at `now_nanos`, a monotonic timestamp.
    ///
    /// Ticking applications get the seconds elapsed since their first frame
    /// and are redrawn. Returns `false`, and does nothing, for applications
    /// that do not tick.
    pub fn frame(&mut self, now_nanos: u64) -> bool {
        if !self.app.wants_ticks() {
            return false;
        }
        let first = *self.first_frame.get_or_insert(now_nanos);
        let seconds = now_nanos.saturating_sub(first) as f64 * 1.0e-9;
        trace!(seconds, "tick");
        self.app.tick(seconds);
        self.redraw();
        true
    }

    /// Close the application and hand it back.
    pub fn finish(self) -> A {
        debug!(redraws = self.redraws, "finishing application");
        self.app
    }

    /// The window configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The current picture.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// The render tree of the current picture.
    pub fn render_tree(&self) -> &RenderNode {
        &self.tree
    }

    /// The application.
    pub fn app(&self) -> &A {
        &self.app
    }

    /// The application, mutably. Call [`redraw`](Self::redraw) afterwards to
    /// show the change.
    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    /// The current registrations.
    pub fn interactions(&self) -> &Interactions<A::Target> {
        &self.interactions
    }

    /// Number of pictures drawn so far, including the first.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    /// `true` between a press and its release.
    pub fn is_grabbed(&self) -> bool {
        self.grab.is_some()
    }

    fn hit(&self, position: Point) -> HitPath {
        self.tree.hit_path(position).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prog1_graphics::{beside, circle, css, rectangle};

    /// Two buttons side by side; records what it receives.
    #[derive(Default)]
    struct Probe {
        left: Option<Image>,
        right: Option<Image>,
        log: Vec<(MouseEventKind, Option<&'static str>)>,
        keys: Vec<String>,
        ticks: Vec<f64>,
        animate: bool,
    }

    impl Application for Probe {
        type Target = &'static str;

        fn draw(&mut self, interactions: &mut Interactions<&'static str>) -> Image {
            let left = self
                .left
                .get_or_insert_with(|| rectangle(40.0, 40.0, css::RED))
                .clone();
            let right = self
                .right
                .get_or_insert_with(|| circle(20.0, css::BLUE))
                .clone();
            interactions.on_mouse_pressed(&left, "left");
            interactions.on_mouse_dragged(&left, "left");
            interactions.on_mouse_released(&right, "right");
            beside(&[left, right])
        }

        fn mouse(&mut self, kind: MouseEventKind, _: &MouseEvent, target: Option<&&'static str>) {
            self.log.push((kind, target.copied()));
        }

        fn key_pressed(&mut self, key: &str) {
            self.keys.push(key.to_owned());
        }

        fn tick(&mut self, seconds: f64) {
            self.ticks.push(seconds);
        }

        fn wants_ticks(&self) -> bool {
            self.animate
        }
    }

    #[test]
    fn start_draws_once() {
        let cx = AppContext::start(AppConfig::default(), Probe::default());
        assert_eq!(cx.redraws(), 1);
        assert_eq!(cx.image().width(), 80.0);
        assert_eq!(cx.interactions().len(), 3);
    }

    #[test]
    fn press_goes_to_the_registered_image() {
        let mut cx = AppContext::start(AppConfig::default(), Probe::default());
        let left = cx.app().left.clone().unwrap();
        let d = cx.mouse(MouseEventKind::Pressed, MouseEvent::at(10.0, 10.0));
        assert_eq!(d, Delivery::Image(left.id()));
        assert_eq!(cx.redraws(), 2);
        assert!(cx.is_grabbed());
        let probe = cx.finish();
        assert_eq!(probe.log, vec![(MouseEventKind::Pressed, Some("left"))]);
    }

    #[test]
    fn unregistered_kind_falls_through_to_the_scene() {
        let mut cx = AppContext::start(AppConfig::default(), Probe::default());
        // The circle only listens for releases.
        let d = cx.mouse(MouseEventKind::Moved, MouseEvent::at(60.0, 20.0));
        assert_eq!(d, Delivery::Scene);
        // Empty space.
        let d = cx.mouse(MouseEventKind::Pressed, MouseEvent::at(200.0, 200.0));
        assert_eq!(d, Delivery::Scene);
        assert_eq!(cx.redraws(), 3);
        let probe = cx.finish();
        assert_eq!(
            probe.log,
            vec![(MouseEventKind::Moved, None), (MouseEventKind::Pressed, None)]
        );
    }

    #[test]
    fn drag_and_release_follow_the_grab() {
        let mut cx = AppContext::start(AppConfig::default(), Probe::default());
        cx.mouse(MouseEventKind::Pressed, MouseEvent::at(10.0, 10.0));
        // Far away from the rectangle, but it still gets the drag.
        let d = cx.mouse(MouseEventKind::Dragged, MouseEvent::at(300.0, 300.0));
        assert!(matches!(d, Delivery::Image(_)));
        // Released over the circle: the release belongs to the press.
        let d = cx.mouse(MouseEventKind::Released, MouseEvent::at(60.0, 20.0));
        assert_eq!(d, Delivery::Scene);
        assert!(!cx.is_grabbed());
        // Without a grab the circle gets its release.
        let d = cx.mouse(MouseEventKind::Released, MouseEvent::at(60.0, 20.0));
        assert!(matches!(d, Delivery::Image(_)));
        let probe = cx.finish();
        assert_eq!(
            probe.log,
            vec![
                (MouseEventKind::Pressed, Some("left")),
                (MouseEventKind::Dragged, Some("left")),
                (MouseEventKind::Released, None),
                (MouseEventKind::Released, Some("right")),
            ]
        );
    }

    #[test]
    fn ticking_apps_redraw_on_frames_only() {
        let probe = Probe {
            animate: true,
            ..Probe::default()
        };
        let mut cx = AppContext::start(AppConfig::default(), probe);
        cx.mouse(MouseEventKind::Moved, MouseEvent::at(200.0, 200.0));
        cx.key_pressed("a", "A");
        assert_eq!(cx.redraws(), 1);
        // Image-level deliveries still redraw.
        cx.mouse(MouseEventKind::Pressed, MouseEvent::at(10.0, 10.0));
        assert_eq!(cx.redraws(), 2);

        assert!(cx.frame(5_000_000_000));
        assert!(cx.frame(5_500_000_000));
        assert_eq!(cx.redraws(), 4);
        let probe = cx.finish();
        assert_eq!(probe.ticks.len(), 2);
        assert_eq!(probe.ticks[0], 0.0);
        assert!((probe.ticks[1] - 0.5).abs() < 1e-12);
    }

    /// A button registered on the first draw only; any key toggles it.
    struct Toggle {
        button: Image,
        shown: bool,
        registered: bool,
    }

    impl Application for Toggle {
        type Target = &'static str;

        fn draw(&mut self, interactions: &mut Interactions<&'static str>) -> Image {
            if !self.registered {
                interactions.on_mouse_pressed(&self.button, "button");
                self.registered = true;
            }
            if self.shown {
                beside(&[self.button.clone()])
            } else {
                rectangle(40.0, 40.0, css::WHITE)
            }
        }

        fn key_pressed(&mut self, _: &str) {
            self.shown = !self.shown;
        }
    }

    #[test]
    fn hidden_images_keep_their_registrations() {
        let button = rectangle(40.0, 40.0, css::RED);
        let toggle = Toggle {
            button: button.clone(),
            shown: true,
            registered: false,
        };
        let mut cx = AppContext::start(AppConfig::default(), toggle);
        cx.key_pressed(" ", "SPACE");
        assert_eq!(
            cx.mouse(MouseEventKind::Pressed, MouseEvent::at(10.0, 10.0)),
            Delivery::Scene
        );
        cx.key_pressed(" ", "SPACE");
        assert_eq!(cx.interactions().len(), 1);
        assert_eq!(
            cx.mouse(MouseEventKind::Pressed, MouseEvent::at(10.0, 10.0)),
            Delivery::Image(button.id())
        );
    }

    #[test]
    fn dropped_images_lose_their_registrations() {
        // Probe registers fresh targets on each draw; replacing its images
        // leaves the old ones with no owner.
        let mut cx = AppContext::start(AppConfig::default(), Probe::default());
        assert_eq!(cx.interactions().len(), 3);
        let old = cx.app().left.as_ref().map(Image::id).unwrap();
        cx.app_mut().left = None;
        cx.redraw();
        assert_eq!(cx.interactions().len(), 3);
        assert!(cx
            .interactions()
            .target(MouseEventKind::Pressed, old)
            .is_none());
    }

    #[test]
    fn frames_are_ignored_without_ticks() {
        let mut cx = AppContext::start(AppConfig::default(), Probe::default());
        assert!(!cx.frame(1_000));
        assert_eq!(cx.redraws(), 1);
    }

    #[test]
    fn keys_fall_back_to_the_code() {
        let mut cx = AppContext::start(AppConfig::default(), Probe::default());
        cx.key_pressed("x", "X");
        cx.key_pressed("", "LEFT");
        assert_eq!(cx.redraws(), 3);
        assert_eq!(cx.finish().keys, vec!["x", "LEFT"]);
    }
}
