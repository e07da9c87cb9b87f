//! The two faces of a card and the values each face rests at.

/// Which face of the card is the logical target.
///
/// `Uninitialized` only exists before the first frame; the card resolves it
/// to `Front` immediately and never returns to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlipSide {
    #[default]
    Uninitialized,
    Front,
    Back,
}

const ROTATION_MAX: f32 = 180.0;
const OPACITY_MAX: f32 = 1.0;

impl FlipSide {
    /// The face on the other side of the card. `Uninitialized` counts as `Front`.
    pub fn opposite(self) -> FlipSide {
        match self {
            FlipSide::Uninitialized | FlipSide::Front => FlipSide::Back,
            FlipSide::Back => FlipSide::Front,
        }
    }

    /// Resolve the bootstrap value to the face it renders as.
    pub fn resolved(self) -> FlipSide {
        match self {
            FlipSide::Uninitialized => FlipSide::Front,
            side => side,
        }
    }

    pub fn is_front(self) -> bool {
        self.resolved() == FlipSide::Front
    }

    pub fn front_rotation(self) -> f32 {
        self.pick(0.0, ROTATION_MAX)
    }

    pub fn back_rotation(self) -> f32 {
        self.pick(ROTATION_MAX, 0.0)
    }

    pub fn front_opacity(self) -> f32 {
        self.pick(OPACITY_MAX, 0.0)
    }

    pub fn back_opacity(self) -> f32 {
        self.pick(0.0, OPACITY_MAX)
    }

    fn pick(self, front_value: f32, back_value: f32) -> f32 {
        match self {
            FlipSide::Uninitialized | FlipSide::Front => front_value,
            FlipSide::Back => back_value,
        }
    }

    /// Compact encoding used by the lock-free request slot. Zero is reserved
    /// for "empty".
    pub(crate) fn to_raw(self) -> u8 {
        match self {
            FlipSide::Uninitialized => 1,
            FlipSide::Front => 2,
            FlipSide::Back => 3,
        }
    }

    pub(crate) fn from_raw(raw: u8) -> Option<FlipSide> {
        match raw {
            1 => Some(FlipSide::Uninitialized),
            2 => Some(FlipSide::Front),
            3 => Some(FlipSide::Back),
            _ => None,
        }
    }
}
