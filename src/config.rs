use crate::error::{ConfigError, Result};
use crate::transform::FlipAnimationType;

/// Shortest accepted flip duration. The opacity swap needs a keyframe one
/// millisecond before the midpoint, and the midpoint must not be zero.
pub const MIN_FLIP_DURATION_MS: u32 = 2;

/// How the two faces are ordered when painting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stacking {
    /// The more opaque face is painted on top; depth is `1 - opacity`
    #[default]
    ByOpacity,
    /// The back face is always painted first and the front face over it
    DeclarationOrder,
}

/// Configuration of a flip card.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipConfig {
    /// Duration of one flip in milliseconds
    pub flip_duration_ms: u32,
    /// Whether tapping the card flips it
    pub flip_on_touch: bool,
    /// Whether the card may flip at all
    pub flip_enabled: bool,
    /// Whether the card flips back to the front on its own after showing the back
    pub auto_flip: bool,
    /// Delay before the automatic flip back, in milliseconds
    pub auto_flip_delay_ms: u32,
    /// Distance of the camera from the card, in units of 72 layout pixels
    pub camera_distance: f32,
    pub animation_type: FlipAnimationType,
    pub stacking: Stacking,
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            flip_duration_ms: 400,
            flip_on_touch: true,
            flip_enabled: true,
            auto_flip: false,
            auto_flip_delay_ms: 1000,
            camera_distance: 30.0,
            animation_type: FlipAnimationType::HorizontalClockwise,
            stacking: Stacking::ByOpacity,
        }
    }
}

impl FlipConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults of the older `FlipView` variant: a slower flip, the default
    /// graphics-layer camera distance, and faces painted in declaration order.
    pub fn legacy() -> Self {
        Self {
            flip_duration_ms: 1000,
            camera_distance: 8.0,
            stacking: Stacking::DeclarationOrder,
            ..Self::default()
        }
    }

    pub fn flip_duration_ms(mut self, duration_ms: u32) -> Self {
        self.flip_duration_ms = duration_ms;
        self
    }

    pub fn flip_on_touch(mut self, enabled: bool) -> Self {
        self.flip_on_touch = enabled;
        self
    }

    pub fn flip_enabled(mut self, enabled: bool) -> Self {
        self.flip_enabled = enabled;
        self
    }

    pub fn auto_flip(mut self, enabled: bool) -> Self {
        self.auto_flip = enabled;
        self
    }

    pub fn auto_flip_delay_ms(mut self, delay_ms: u32) -> Self {
        self.auto_flip_delay_ms = delay_ms;
        self
    }

    pub fn camera_distance(mut self, distance: f32) -> Self {
        self.camera_distance = distance;
        self
    }

    pub fn animation_type(mut self, animation_type: FlipAnimationType) -> Self {
        self.animation_type = animation_type;
        self
    }

    pub fn stacking(mut self, stacking: Stacking) -> Self {
        self.stacking = stacking;
        self
    }

    /// Check the values a card cannot animate with.
    pub fn validate(&self) -> Result<()> {
        if self.flip_duration_ms < MIN_FLIP_DURATION_MS {
            return Err(ConfigError::FlipDurationTooShort(self.flip_duration_ms));
        }
        if !self.camera_distance.is_finite() || self.camera_distance <= 0.0 {
            return Err(ConfigError::InvalidCameraDistance(self.camera_distance));
        }
        Ok(())
    }
}
