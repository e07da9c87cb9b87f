use thiserror::Error;

use crate::config::MIN_FLIP_DURATION_MS;

/// Rejected flip card configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("flip duration must be at least {min} ms, got {0} ms", min = MIN_FLIP_DURATION_MS)]
    FlipDurationTooShort(u32),
    #[error("camera distance must be a positive finite number, got {0}")]
    InvalidCameraDistance(f32),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
