//! The flip state machine.
//!
//! States are the [`FlipSide`] values. `Uninitialized → Front` happens once,
//! silently, on the first frame. `Front → Back` and `Back → Front` are the
//! only animated transitions, each lasting exactly the configured duration.
//! The target side changes the instant a flip is accepted; the transition
//! stays running until a frame at or past its end settles it, and no other
//! flip is accepted in between.

use std::time::{Duration, Instant};

use crate::animation::{FlipCurves, FlipDirection, FlipValues};
use crate::side::FlipSide;

/// A flip in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub direction: FlipDirection,
    pub started: Instant,
    pub duration: Duration,
}

impl Transition {
    pub fn from(&self) -> FlipSide {
        self.direction.origin()
    }

    pub fn to(&self) -> FlipSide {
        self.direction.target()
    }

    /// Milliseconds since the flip started, zero if `now` is earlier.
    pub fn elapsed_ms(&self, now: Instant) -> f32 {
        (now.saturating_duration_since(self.started).as_secs_f64() * 1000.0) as f32
    }

    /// Fraction of the duration elapsed, clamped to `[0, 1]`.
    pub fn fraction(&self, now: Instant) -> f32 {
        let duration_ms = (self.duration.as_secs_f64() * 1000.0) as f32;
        (self.elapsed_ms(now) / duration_ms).clamp(0.0, 1.0)
    }

    /// The instant the flip settles.
    pub fn end(&self) -> Instant {
        self.started + self.duration
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.end()
    }
}

/// Outcome of asking the machine to flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipRequest {
    /// A transition started
    Started,
    /// The card already shows the requested side
    Unchanged,
    /// Another transition is still running; the request was dropped
    Busy,
    /// The uninitialized side cannot be requested
    Invalid,
}

#[derive(Debug)]
pub struct FlipMachine {
    target: FlipSide,
    transition: Option<Transition>,
}

impl FlipMachine {
    pub fn new() -> Self {
        Self {
            target: FlipSide::Uninitialized,
            transition: None,
        }
    }

    /// The side the card is at or heading to.
    pub fn target(&self) -> FlipSide {
        self.target
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.transition.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.target != FlipSide::Uninitialized
    }

    /// Resolve the bootstrap state to `Front`. Returns true the one time it
    /// does anything.
    pub fn bootstrap(&mut self) -> bool {
        if self.is_initialized() {
            return false;
        }
        self.target = FlipSide::Front;
        true
    }

    /// Try to start a flip to `side` at `now`.
    pub fn request(&mut self, side: FlipSide, now: Instant, duration: Duration) -> FlipRequest {
        if side == FlipSide::Uninitialized {
            return FlipRequest::Invalid;
        }
        if self.is_running() {
            return FlipRequest::Busy;
        }
        let Some(direction) = FlipDirection::between(self.target, side) else {
            return FlipRequest::Unchanged;
        };

        self.target = side;
        self.transition = Some(Transition {
            direction,
            started: now,
            duration,
        });
        FlipRequest::Started
    }

    /// Settle the running transition if it has finished by `now`.
    /// Returns the settled transition.
    pub fn settle(&mut self, now: Instant) -> Option<Transition> {
        let finished = self
            .transition
            .filter(|transition| transition.is_finished(now))?;
        self.transition = None;
        Some(finished)
    }

    /// The four animated scalars at `now`.
    pub fn values(&self, now: Instant, curves: &FlipCurves) -> FlipValues {
        match &self.transition {
            Some(transition) => curves.sample(transition.direction, transition.elapsed_ms(now)),
            None => FlipValues::resting(self.target),
        }
    }
}

impl Default for FlipMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn ready() -> FlipMachine {
        let mut machine = FlipMachine::new();
        machine.bootstrap();
        machine
    }

    #[test]
    fn test_bootstrap_once() {
        let mut machine = FlipMachine::new();
        assert_eq!(machine.target(), FlipSide::Uninitialized);
        assert!(machine.bootstrap());
        assert_eq!(machine.target(), FlipSide::Front);
        assert!(!machine.is_running());
        assert!(!machine.bootstrap());
    }

    #[test]
    fn test_request_starts_transition() {
        let start = Instant::now();
        let mut machine = ready();
        assert_eq!(machine.request(FlipSide::Back, start, ms(400)), FlipRequest::Started);
        assert_eq!(machine.target(), FlipSide::Back);
        assert!(machine.is_running());

        let transition = machine.transition().unwrap();
        assert_eq!(transition.from(), FlipSide::Front);
        assert_eq!(transition.to(), FlipSide::Back);
        assert_eq!(transition.end(), start + ms(400));
    }

    #[test]
    fn test_request_same_side_is_unchanged() {
        let mut machine = ready();
        assert_eq!(
            machine.request(FlipSide::Front, Instant::now(), ms(400)),
            FlipRequest::Unchanged
        );
        assert!(!machine.is_running());
    }

    #[test]
    fn test_request_while_running_is_busy() {
        let start = Instant::now();
        let mut machine = ready();
        machine.request(FlipSide::Back, start, ms(400));
        assert_eq!(
            machine.request(FlipSide::Front, start + ms(100), ms(400)),
            FlipRequest::Busy
        );
        assert_eq!(machine.target(), FlipSide::Back);
    }

    #[test]
    fn test_request_uninitialized_is_invalid() {
        let mut machine = ready();
        assert_eq!(
            machine.request(FlipSide::Uninitialized, Instant::now(), ms(400)),
            FlipRequest::Invalid
        );
    }

    #[test]
    fn test_settle_only_after_duration() {
        let start = Instant::now();
        let mut machine = ready();
        machine.request(FlipSide::Back, start, ms(400));

        assert!(machine.settle(start + ms(399)).is_none());
        assert!(machine.is_running());

        let settled = machine.settle(start + ms(400)).unwrap();
        assert_eq!(settled.to(), FlipSide::Back);
        assert!(!machine.is_running());
        assert!(machine.settle(start + ms(500)).is_none());
    }

    #[test]
    fn test_values_follow_transition() {
        let start = Instant::now();
        let curves = FlipCurves::new(400);
        let mut machine = ready();
        assert_eq!(machine.values(start, &curves), FlipValues::resting(FlipSide::Front));

        machine.request(FlipSide::Back, start, ms(400));
        let mid = machine.values(start + ms(200), &curves);
        assert_eq!(mid.front_opacity, 0.0);
        assert_eq!(mid.back_opacity, 1.0);

        machine.settle(start + ms(400));
        assert_eq!(
            machine.values(start + ms(400), &curves),
            FlipValues::resting(FlipSide::Back)
        );
    }

    #[test]
    fn test_transition_fraction() {
        let start = Instant::now();
        let transition = Transition {
            direction: FlipDirection::FrontToBack,
            started: start,
            duration: ms(400),
        };
        assert_eq!(transition.fraction(start), 0.0);
        assert_eq!(transition.fraction(start + ms(100)), 0.25);
        assert_eq!(transition.fraction(start + ms(800)), 1.0);
    }
}
