//! Keyframed animation values for the flip transition.

mod animatable;
mod curves;
mod keyframes;

pub use animatable::Animatable;
pub use curves::{FlipCurves, FlipDirection, FlipValues};
pub use keyframes::Keyframes;
