//! A two-sided flip card widget.
//!
//! [`FlipCard`](widgets::FlipCard) renders a front and a back face and flips
//! between them with a keyframed 3D rotation and an opacity swap at the
//! midpoint. A [`FlipController`] lets code outside the widget request flips.
//! The card is host-driven: the host feeds it frame timestamps and pointer
//! input and paints the two [`FaceLayer`](widgets::FaceLayer)s it returns.

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod machine;
pub mod reactive;
pub mod side;
pub mod transform;
pub mod widgets;

pub use config::{FlipConfig, Stacking};
pub use controller::{FlipController, FlipViewController};
pub use error::{ConfigError, Result};
pub use side::FlipSide;
pub use transform::FlipAnimationType;

pub mod prelude {
    pub use crate::animation::FlipValues;
    pub use crate::config::{FlipConfig, Stacking};
    pub use crate::controller::{FlipController, FlipViewController};
    pub use crate::error::ConfigError;
    pub use crate::reactive::ChangeFlags;
    pub use crate::side::FlipSide;
    pub use crate::transform::{FlipAnimationType, Transform};
    pub use crate::widgets::{
        flip_card, flip_view, Event, EventResponse, FaceLayer, FlipCard, FlipView, MouseButton,
        Rect,
    };
}
