//! The older flip widget.
//!
//! `FlipView` predates [`FlipCard`] and behaves the same way with different
//! defaults: a one second flip, the default graphics-layer camera distance,
//! and faces always painted back first with the front over it.

use crate::config::FlipConfig;
use crate::controller::FlipViewController;

use super::flip_card::FlipCard;

pub type FlipView<R> = FlipCard<R>;

/// Create a card with the older `FlipView` defaults.
pub fn flip_view<R>(
    front: impl FnMut() -> R + 'static,
    back: impl FnMut() -> R + 'static,
    controller: FlipViewController,
) -> FlipView<R> {
    FlipCard::build(front, back, controller, FlipConfig::legacy())
}
