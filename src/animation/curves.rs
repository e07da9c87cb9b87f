use crate::side::FlipSide;

use super::Keyframes;

/// The four scalars a flip card renders from each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipValues {
    /// Rotation of the front face in degrees, before orientation is applied
    pub front_rotation: f32,
    /// Rotation of the back face in degrees, before orientation is applied
    pub back_rotation: f32,
    pub front_opacity: f32,
    pub back_opacity: f32,
}

impl FlipValues {
    /// Values of a card resting on `side`.
    pub fn resting(side: FlipSide) -> Self {
        Self {
            front_rotation: side.front_rotation(),
            back_rotation: side.back_rotation(),
            front_opacity: side.front_opacity(),
            back_opacity: side.back_opacity(),
        }
    }
}

/// Direction of travel of an animated flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipDirection {
    FrontToBack,
    BackToFront,
}

impl FlipDirection {
    /// Direction of a flip from `from` to `to`, or `None` when both resolve
    /// to the same face.
    pub fn between(from: FlipSide, to: FlipSide) -> Option<Self> {
        match (from.resolved(), to.resolved()) {
            (FlipSide::Front, FlipSide::Back) => Some(FlipDirection::FrontToBack),
            (FlipSide::Back, FlipSide::Front) => Some(FlipDirection::BackToFront),
            _ => None,
        }
    }

    pub fn origin(self) -> FlipSide {
        match self {
            FlipDirection::FrontToBack => FlipSide::Front,
            FlipDirection::BackToFront => FlipSide::Back,
        }
    }

    pub fn target(self) -> FlipSide {
        self.origin().opposite()
    }
}

/// Keyframe tables for one direction of travel.
#[derive(Clone, Debug, PartialEq)]
struct DirectionCurves {
    front_rotation: Keyframes<f32>,
    back_rotation: Keyframes<f32>,
    front_opacity: Keyframes<f32>,
    back_opacity: Keyframes<f32>,
}

impl DirectionCurves {
    fn sample(&self, elapsed_ms: f32) -> FlipValues {
        FlipValues {
            front_rotation: self.front_rotation.value_at(elapsed_ms),
            back_rotation: self.back_rotation.value_at(elapsed_ms),
            front_opacity: self.front_opacity.value_at(elapsed_ms),
            back_opacity: self.back_opacity.value_at(elapsed_ms),
        }
    }
}

/// All keyframe tables for a flip of `duration_ms`.
///
/// Rotations sweep the departing face edge-on during the first half and
/// bring the arriving face in during the second half. Opacities swap in a
/// one-millisecond step right before the midpoint, so at the midpoint the
/// departing face is fully transparent and the arriving face fully opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipCurves {
    duration_ms: u32,
    front_to_back: DirectionCurves,
    back_to_front: DirectionCurves,
}

impl FlipCurves {
    pub fn new(duration_ms: u32) -> Self {
        let half = duration_ms / 2;
        let lead = half.saturating_sub(1);

        let fade_out = Keyframes::new(duration_ms, 1.0)
            .at(lead, 1.0)
            .at(half, 0.0)
            .at(duration_ms, 0.0);
        let fade_in = Keyframes::new(duration_ms, 0.0)
            .at(lead, 0.0)
            .at(half, 1.0)
            .at(duration_ms, 1.0);

        let front_to_back = DirectionCurves {
            front_rotation: Keyframes::new(duration_ms, 0.0)
                .at(half, 90.0)
                .at(duration_ms, 90.0),
            back_rotation: Keyframes::new(duration_ms, -90.0)
                .at(half, -90.0)
                .at(duration_ms, 0.0),
            front_opacity: fade_out.clone(),
            back_opacity: fade_in.clone(),
        };

        let back_to_front = DirectionCurves {
            front_rotation: Keyframes::new(duration_ms, 90.0)
                .at(half, 90.0)
                .at(duration_ms, 0.0),
            back_rotation: Keyframes::new(duration_ms, 0.0)
                .at(half, -90.0)
                .at(duration_ms, -90.0),
            front_opacity: fade_in,
            back_opacity: fade_out,
        };

        Self {
            duration_ms,
            front_to_back,
            back_to_front,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Sample the four scalars `elapsed_ms` into a flip in `direction`.
    ///
    /// At or before the start the values are the origin's resting values; at
    /// or after the end they are the target's resting values.
    pub fn sample(&self, direction: FlipDirection, elapsed_ms: f32) -> FlipValues {
        if elapsed_ms <= 0.0 {
            return FlipValues::resting(direction.origin());
        }
        if elapsed_ms >= self.duration_ms as f32 {
            return FlipValues::resting(direction.target());
        }
        match direction {
            FlipDirection::FrontToBack => self.front_to_back.sample(elapsed_ms),
            FlipDirection::BackToFront => self.back_to_front.sample(elapsed_ms),
        }
    }

    /// Sample at a fraction `t` of the duration.
    pub fn sample_fraction(&self, direction: FlipDirection, t: f32) -> FlipValues {
        self.sample(direction, t * self.duration_ms as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between() {
        assert_eq!(
            FlipDirection::between(FlipSide::Front, FlipSide::Back),
            Some(FlipDirection::FrontToBack)
        );
        assert_eq!(
            FlipDirection::between(FlipSide::Uninitialized, FlipSide::Back),
            Some(FlipDirection::FrontToBack)
        );
        assert_eq!(
            FlipDirection::between(FlipSide::Back, FlipSide::Front),
            Some(FlipDirection::BackToFront)
        );
        assert_eq!(FlipDirection::between(FlipSide::Front, FlipSide::Front), None);
        assert_eq!(
            FlipDirection::between(FlipSide::Uninitialized, FlipSide::Front),
            None
        );
    }

    #[test]
    fn test_endpoints_match_resting_values() {
        let curves = FlipCurves::new(400);
        for direction in [FlipDirection::FrontToBack, FlipDirection::BackToFront] {
            assert_eq!(
                curves.sample_fraction(direction, 0.0),
                FlipValues::resting(direction.origin())
            );
            assert_eq!(
                curves.sample_fraction(direction, 1.0),
                FlipValues::resting(direction.target())
            );
        }
    }

    #[test]
    fn test_front_to_back_first_half() {
        let curves = FlipCurves::new(400);
        let values = curves.sample(FlipDirection::FrontToBack, 100.0);
        assert_eq!(values.front_rotation, 45.0);
        assert_eq!(values.back_rotation, -90.0);
        assert_eq!(values.front_opacity, 1.0);
        assert_eq!(values.back_opacity, 0.0);
    }

    #[test]
    fn test_front_to_back_midpoint_opacities_cross() {
        let curves = FlipCurves::new(400);
        let values = curves.sample_fraction(FlipDirection::FrontToBack, 0.5);
        assert_eq!(values.front_rotation, 90.0);
        assert_eq!(values.back_rotation, -90.0);
        assert_eq!(values.front_opacity, 0.0);
        assert_eq!(values.back_opacity, 1.0);
    }

    #[test]
    fn test_front_to_back_second_half() {
        let curves = FlipCurves::new(400);
        let values = curves.sample(FlipDirection::FrontToBack, 300.0);
        assert_eq!(values.front_rotation, 90.0);
        assert_eq!(values.back_rotation, -45.0);
        assert_eq!(values.front_opacity, 0.0);
        assert_eq!(values.back_opacity, 1.0);
    }

    #[test]
    fn test_back_to_front_mirrors_roles() {
        let curves = FlipCurves::new(400);

        let early = curves.sample(FlipDirection::BackToFront, 100.0);
        assert_eq!(early.front_rotation, 90.0);
        assert_eq!(early.back_rotation, -45.0);
        assert_eq!(early.front_opacity, 0.0);
        assert_eq!(early.back_opacity, 1.0);

        let mid = curves.sample_fraction(FlipDirection::BackToFront, 0.5);
        assert_eq!(mid.front_opacity, 1.0);
        assert_eq!(mid.back_opacity, 0.0);

        let late = curves.sample(FlipDirection::BackToFront, 300.0);
        assert_eq!(late.front_rotation, 45.0);
        assert_eq!(late.back_rotation, -90.0);
    }

    #[test]
    fn test_opacities_are_complementary() {
        let curves = FlipCurves::new(400);
        for direction in [FlipDirection::FrontToBack, FlipDirection::BackToFront] {
            for ms in (0..=400).step_by(7) {
                let values = curves.sample(direction, ms as f32);
                assert_eq!(values.front_opacity + values.back_opacity, 1.0);
            }
        }
    }

    #[test]
    fn test_shortest_duration() {
        let curves = FlipCurves::new(2);
        let values = curves.sample(FlipDirection::FrontToBack, 1.0);
        assert_eq!(values.front_opacity, 0.0);
        assert_eq!(values.back_opacity, 1.0);
    }
}
