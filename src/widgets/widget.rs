#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer input delivered to a card by its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Mouse button or touch pressed
    MouseDown { x: f32, y: f32, button: MouseButton },
    /// Mouse button or touch released
    MouseUp { x: f32, y: f32, button: MouseButton },
    /// Pointer left the surface
    MouseLeave,
}

impl Event {
    /// Get the coordinates from this event, if any
    pub fn coords(&self) -> Option<(f32, f32)> {
        match self {
            Event::MouseDown { x, y, .. } | Event::MouseUp { x, y, .. } => Some((*x, *y)),
            Event::MouseLeave => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}
