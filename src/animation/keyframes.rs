//! Keyframe-based animation tracks.
//!
//! A [`Keyframes`] track lists values at fixed millisecond offsets inside a
//! fixed duration. Between two adjacent keyframes the value is linearly
//! interpolated; two keyframes with the same value hold that value, and two
//! keyframes one millisecond apart produce a near-instant step.
//!
//! ## Example
//!
//! ```
//! use flippable::animation::Keyframes;
//!
//! // Hold 1.0 until just before the midpoint, then drop to 0.0.
//! let fade = Keyframes::new(400, 1.0f32)
//!     .at(199, 1.0)
//!     .at(200, 0.0)
//!     .at(400, 0.0);
//!
//! assert_eq!(fade.value_at(100.0), 1.0);
//! assert_eq!(fade.value_at(300.0), 0.0);
//! ```

use super::Animatable;

#[derive(Clone, Debug, PartialEq)]
struct Keyframe<T> {
    at_ms: u32,
    value: T,
}

/// A piecewise-linear animation track over `duration_ms` milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes<T: Animatable> {
    duration_ms: u32,
    frames: Vec<Keyframe<T>>,
}

impl<T: Animatable> Keyframes<T> {
    /// Create a track lasting `duration_ms` that starts at `initial`.
    pub fn new(duration_ms: u32, initial: T) -> Self {
        Self {
            duration_ms,
            frames: vec![Keyframe {
                at_ms: 0,
                value: initial,
            }],
        }
    }

    /// Add a keyframe. Offsets past the duration are clamped to it.
    ///
    /// Keyframes stay sorted by offset; a keyframe added at an offset that
    /// already exists goes after the existing one.
    pub fn at(mut self, at_ms: u32, value: T) -> Self {
        let at_ms = at_ms.min(self.duration_ms);
        let index = self.frames.partition_point(|frame| frame.at_ms <= at_ms);
        self.frames.insert(index, Keyframe { at_ms, value });
        self
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Evaluate the track `elapsed_ms` after it started.
    ///
    /// Elapsed time is clamped to `[0, duration]`.
    pub fn value_at(&self, elapsed_ms: f32) -> T {
        let t = elapsed_ms.clamp(0.0, self.duration_ms as f32);

        let mut prev = &self.frames[0];
        for frame in &self.frames[1..] {
            let frame_at = frame.at_ms as f32;
            if t < frame_at {
                let prev_at = prev.at_ms as f32;
                let fraction = (t - prev_at) / (frame_at - prev_at);
                return T::lerp(&prev.value, &frame.value, fraction);
            }
            prev = frame;
        }
        prev.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyframe_holds() {
        let track = Keyframes::new(400, 3.0f32);
        assert_eq!(track.value_at(0.0), 3.0);
        assert_eq!(track.value_at(250.0), 3.0);
        assert_eq!(track.value_at(400.0), 3.0);
    }

    #[test]
    fn test_linear_segment() {
        let track = Keyframes::new(400, 0.0f32).at(200, 90.0).at(400, 90.0);
        assert_eq!(track.value_at(0.0), 0.0);
        assert_eq!(track.value_at(100.0), 45.0);
        assert_eq!(track.value_at(200.0), 90.0);
        assert_eq!(track.value_at(300.0), 90.0);
        assert_eq!(track.value_at(400.0), 90.0);
    }

    #[test]
    fn test_step_one_millisecond_before_midpoint() {
        let track = Keyframes::new(400, 1.0f32).at(199, 1.0).at(200, 0.0).at(400, 0.0);
        assert_eq!(track.value_at(198.0), 1.0);
        assert_eq!(track.value_at(199.0), 1.0);
        assert_eq!(track.value_at(199.5), 0.5);
        assert_eq!(track.value_at(200.0), 0.0);
        assert_eq!(track.value_at(399.0), 0.0);
    }

    #[test]
    fn test_elapsed_is_clamped() {
        let track = Keyframes::new(100, 0.0f32).at(100, 1.0);
        assert_eq!(track.value_at(-50.0), 0.0);
        assert_eq!(track.value_at(500.0), 1.0);
    }

    #[test]
    fn test_out_of_order_keyframes_are_sorted() {
        let track = Keyframes::new(100, 0.0f32).at(100, 10.0).at(50, 20.0);
        assert_eq!(track.value_at(50.0), 20.0);
        assert_eq!(track.value_at(75.0), 15.0);
    }

    #[test]
    fn test_offsets_past_duration_are_clamped() {
        let track = Keyframes::new(100, 0.0f32).at(250, 10.0);
        assert_eq!(track.value_at(100.0), 10.0);
        assert_eq!(track.value_at(50.0), 5.0);
    }

    #[test]
    fn test_duplicate_offsets_step_immediately() {
        // A zero-length segment must not divide by zero.
        let track = Keyframes::new(2, 1.0f32).at(0, 1.0).at(1, 0.0).at(2, 0.0);
        assert_eq!(track.value_at(0.0), 1.0);
        assert_eq!(track.value_at(0.5), 0.5);
        assert_eq!(track.value_at(1.0), 0.0);
    }
}
