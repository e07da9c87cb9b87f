pub mod flip_card;
pub mod flip_view;
pub mod widget;

pub use flip_card::{flip_card, FaceLayer, FlipCard};
pub use flip_view::{flip_view, FlipView};
pub use widget::{Event, EventResponse, MouseButton, Rect};
