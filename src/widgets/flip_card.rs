//! A two-sided card that flips between its faces with a 3D rotation.
//!
//! The card is driven by its host: call [`FlipCard::advance`] once per frame
//! with the frame timestamp, forward pointer input to [`FlipCard::event`],
//! and paint the layers returned by [`FlipCard::render`] in order.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use flippable::prelude::*;
//!
//! let controller = FlipController::new();
//! let mut card = flip_card(|| "question", || "answer", controller.clone());
//!
//! let start = Instant::now();
//! card.advance(start);
//! controller.flip_to_back();
//! card.advance(start);
//! card.advance(start + Duration::from_millis(400));
//!
//! assert_eq!(card.side(), FlipSide::Back);
//! let layers = card.render();
//! assert_eq!(layers[1].content, "answer");
//! ```

use std::time::{Duration, Instant};

use crate::animation::{FlipCurves, FlipValues};
use crate::config::{FlipConfig, Stacking};
use crate::controller::FlipController;
use crate::error::Result;
use crate::machine::{FlipMachine, FlipRequest, Transition};
use crate::reactive::{ChangeFlags, Scope, TaskId};
use crate::side::FlipSide;
use crate::transform::Transform;

use super::widget::{Event, EventResponse, MouseButton, Rect};

type Content<R> = Box<dyn FnMut() -> R>;
type FlippedListener = Box<dyn FnMut(FlipSide)>;

/// Work a card schedules against its own lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    /// Flip back to the front after resting on the back
    AutoFlipBack,
}

/// One face of the card, ready to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceLayer<R> {
    pub side: FlipSide,
    /// Signed rotation in degrees before the orientation lookup
    pub rotation: f32,
    /// Rotation about the horizontal axis, in degrees
    pub rotation_x: f32,
    /// Rotation about the vertical axis, in degrees
    pub rotation_y: f32,
    pub opacity: f32,
    /// Distance from the viewer, `1 - opacity`; the painted-last face has the smallest depth
    pub depth: f32,
    pub camera_distance: f32,
    pub content: R,
}

impl<R> FaceLayer<R> {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Matrix placing this face inside `bounds`, rotated about the centre of
    /// the bounds and projected with the layer's camera distance.
    pub fn transform(&self, bounds: Rect) -> Transform {
        let (center_x, center_y) = bounds.center();
        Transform::face(
            center_x,
            center_y,
            self.rotation_x,
            self.rotation_y,
            self.camera_distance,
        )
    }
}

/// A card with a front and a back face.
///
/// Face content is produced by two closures the card calls on every render
/// without looking at what they return.
pub struct FlipCard<R> {
    front: Content<R>,
    back: Content<R>,
    controller: FlipController,
    config: FlipConfig,
    curves: FlipCurves,
    pending_curves: Option<FlipCurves>,
    machine: FlipMachine,
    scope: Scope<Deferred>,
    auto_flip_task: Option<TaskId>,
    on_flipped: Option<FlippedListener>,
    values: FlipValues,
    bounds: Option<Rect>,
    pressed: bool,
}

/// Create a card with the default configuration.
pub fn flip_card<R>(
    front: impl FnMut() -> R + 'static,
    back: impl FnMut() -> R + 'static,
    controller: FlipController,
) -> FlipCard<R> {
    FlipCard::build(front, back, controller, FlipConfig::default())
}

impl<R> FlipCard<R> {
    /// Create a card, rejecting configurations it cannot animate with.
    pub fn new(
        front: impl FnMut() -> R + 'static,
        back: impl FnMut() -> R + 'static,
        controller: FlipController,
        config: FlipConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(front, back, controller, config))
    }

    /// Construct from a configuration known to be valid.
    pub(crate) fn build(
        front: impl FnMut() -> R + 'static,
        back: impl FnMut() -> R + 'static,
        controller: FlipController,
        config: FlipConfig,
    ) -> Self {
        controller.set_config(config.flip_enabled);
        Self {
            front: Box::new(front),
            back: Box::new(back),
            controller,
            curves: FlipCurves::new(config.flip_duration_ms),
            config,
            pending_curves: None,
            machine: FlipMachine::new(),
            scope: Scope::new(),
            auto_flip_task: None,
            on_flipped: None,
            values: FlipValues::resting(FlipSide::Uninitialized),
            bounds: None,
            pressed: false,
        }
    }

    /// Set the listener called with the settled side each time a flip completes.
    pub fn on_flipped(mut self, listener: impl FnMut(FlipSide) + 'static) -> Self {
        self.on_flipped = Some(Box::new(listener));
        self
    }

    /// Replace the configuration.
    ///
    /// A new duration applies from the next flip; a flip in progress keeps the
    /// duration it started with.
    pub fn set_config(&mut self, config: FlipConfig) -> Result<()> {
        config.validate()?;

        if config.flip_duration_ms != self.config.flip_duration_ms {
            let curves = FlipCurves::new(config.flip_duration_ms);
            if self.machine.is_running() {
                self.pending_curves = Some(curves);
            } else {
                self.curves = curves;
            }
        }
        if !config.auto_flip {
            self.cancel_auto_flip();
        }
        if !config.flip_on_touch {
            self.pressed = false;
        }

        self.controller.set_config(config.flip_enabled);
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &FlipConfig {
        &self.config
    }

    pub fn controller(&self) -> &FlipController {
        &self.controller
    }

    /// The side the card rests on or is flipping to.
    pub fn side(&self) -> FlipSide {
        self.machine.target()
    }

    pub fn is_flipping(&self) -> bool {
        self.machine.is_running()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.machine.transition()
    }

    /// Animated values as of the last frame.
    pub fn values(&self) -> FlipValues {
        self.values
    }

    /// Area that accepts taps. Without bounds every pointer event the host
    /// delivers counts as inside the card.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Whether the host must keep producing frames: a flip is animating or a
    /// request is waiting to be picked up.
    pub fn needs_frame(&self) -> bool {
        !self.scope.is_disposed()
            && (self.machine.is_running() || self.controller.has_pending_request())
    }

    /// Earliest instant at which the card has timed work: the end of the
    /// running flip or a pending auto-flip.
    pub fn next_deadline(&self) -> Option<Instant> {
        let settle = self.machine.transition().map(Transition::end);
        match (settle, self.scope.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Advance the card to the frame at `now`.
    pub fn advance(&mut self, now: Instant) -> ChangeFlags {
        if self.scope.is_disposed() {
            return ChangeFlags::empty();
        }

        let mut flags = ChangeFlags::empty();
        let previous = self.values;

        if self.machine.bootstrap() {
            log::trace!("Flip card initialized on {:?}", self.machine.target());
            flags |= ChangeFlags::NEEDS_PAINT;
        }

        if let Some(settled) = self.machine.settle(now) {
            flags |= ChangeFlags::FLIP_SETTLED;
            if let Some(curves) = self.pending_curves.take() {
                self.curves = curves;
            }
            self.settled(settled);
        }

        for action in self.scope.take_due(now) {
            match action {
                Deferred::AutoFlipBack => {
                    self.auto_flip_task = None;
                    log::debug!("Auto-flip timer fired");
                    self.flip_call();
                }
            }
        }

        if let Some(side) = self.controller.take_request() {
            flags |= self.start_flip(side, now);
        }

        self.values = self.machine.values(now, &self.curves);
        if self.values != previous {
            flags |= ChangeFlags::NEEDS_PAINT;
        }
        flags
    }

    /// Flip to the other side if no flip is running and flipping is enabled.
    /// This is the path taps and the auto-flip take. Returns whether a request
    /// was sent.
    pub fn flip_call(&mut self) -> bool {
        if self.scope.is_disposed() {
            return false;
        }
        if self.machine.is_running() {
            log::debug!("Flip in progress, ignoring flip call");
            return false;
        }
        if !self.config.flip_enabled {
            log::debug!("Flipping is disabled, ignoring flip call");
            return false;
        }
        self.controller.flip_to(self.machine.target().opposite());
        true
    }

    /// Handle pointer input. A press and release inside the bounds is a tap.
    pub fn event(&mut self, event: &Event) -> EventResponse {
        if self.scope.is_disposed() || !self.config.flip_on_touch {
            return EventResponse::Ignored;
        }

        let inside = event.coords().map_or(false, |(x, y)| self.hit(x, y));
        match *event {
            Event::MouseDown {
                button: MouseButton::Left,
                ..
            } if inside => {
                self.pressed = true;
                EventResponse::Handled
            }
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } if self.pressed => {
                self.pressed = false;
                if inside {
                    self.flip_call();
                    EventResponse::Handled
                } else {
                    EventResponse::Ignored
                }
            }
            Event::MouseLeave => {
                self.pressed = false;
                EventResponse::Ignored
            }
            _ => EventResponse::Ignored,
        }
    }

    /// Produce both faces in paint order, furthest first.
    pub fn render(&mut self) -> [FaceLayer<R>; 2] {
        let back_content = (self.back)();
        let back = self.layer(FlipSide::Back, back_content);
        let front_content = (self.front)();
        let front = self.layer(FlipSide::Front, front_content);

        match self.config.stacking {
            Stacking::DeclarationOrder => [back, front],
            Stacking::ByOpacity if front.depth > back.depth => [front, back],
            Stacking::ByOpacity => [back, front],
        }
    }

    /// Register teardown logic to run when the card is disposed.
    pub fn on_cleanup(&mut self, f: impl FnOnce() + 'static) {
        self.scope.on_cleanup(f);
    }

    /// Tear the card down: pending timers never fire and later frames and
    /// input are ignored. Dropping the card does the same.
    pub fn dispose(&mut self) {
        if self.scope.is_disposed() {
            return;
        }
        log::debug!("Disposing flip card");
        self.auto_flip_task = None;
        self.pressed = false;
        self.scope.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.scope.is_disposed()
    }

    fn start_flip(&mut self, side: FlipSide, now: Instant) -> ChangeFlags {
        let duration = Duration::from_millis(u64::from(self.config.flip_duration_ms));
        match self.machine.request(side, now, duration) {
            FlipRequest::Started => {
                log::debug!("Flipping to {:?} over {:?}", side, duration);
                self.cancel_auto_flip();
                ChangeFlags::FLIP_STARTED
            }
            FlipRequest::Busy => {
                log::debug!("Flip in progress, dropping request for {:?}", side);
                self.controller.sync_side(self.machine.target());
                ChangeFlags::empty()
            }
            FlipRequest::Unchanged => {
                log::trace!("Already on {:?}", side);
                ChangeFlags::empty()
            }
            FlipRequest::Invalid => ChangeFlags::empty(),
        }
    }

    fn settled(&mut self, transition: Transition) {
        let side = transition.to();
        log::debug!("Flip settled on {:?}", side);

        if let Some(listener) = self.on_flipped.as_mut() {
            listener(side);
        }

        if self.config.auto_flip && side == FlipSide::Back {
            let delay = Duration::from_millis(u64::from(self.config.auto_flip_delay_ms));
            self.cancel_auto_flip();
            self.auto_flip_task = self
                .scope
                .schedule(transition.end() + delay, Deferred::AutoFlipBack);
            log::debug!("Auto-flip back armed {:?} after settle", delay);
        }
    }

    fn cancel_auto_flip(&mut self) {
        if let Some(id) = self.auto_flip_task.take() {
            if self.scope.cancel(id) {
                log::debug!("Pending auto-flip cancelled");
            }
        }
    }

    fn hit(&self, x: f32, y: f32) -> bool {
        self.bounds.map_or(true, |bounds| bounds.contains(x, y))
    }

    fn layer(&self, side: FlipSide, content: R) -> FaceLayer<R> {
        let (rotation, opacity) = match side {
            FlipSide::Back => (self.values.back_rotation, self.values.back_opacity),
            _ => (self.values.front_rotation, self.values.front_opacity),
        };
        let (rotation_x, rotation_y) = self.config.animation_type.axis_rotation(rotation);
        FaceLayer {
            side,
            rotation,
            rotation_x,
            rotation_y,
            opacity,
            depth: 1.0 - opacity,
            camera_distance: self.config.camera_distance,
            content,
        }
    }
}

impl<R> std::fmt::Debug for FlipCard<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlipCard")
            .field("side", &self.machine.target())
            .field("transition", &self.machine.transition())
            .field("values", &self.values)
            .field("config", &self.config)
            .field("disposed", &self.scope.is_disposed())
            .finish()
    }
}
