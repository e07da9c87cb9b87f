use bitflags::bitflags;

bitflags! {
    /// Flags describing what changed during one frame of a flip card
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// The animated values changed and the card needs repainting
        const NEEDS_PAINT   = 0b001;
        /// A flip transition started this frame
        const FLIP_STARTED  = 0b010;
        /// A flip transition settled this frame
        const FLIP_SETTLED  = 0b100;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_combine() {
        let mut flags = ChangeFlags::empty();
        flags |= ChangeFlags::FLIP_SETTLED;
        flags |= ChangeFlags::NEEDS_PAINT;
        assert!(flags.contains(ChangeFlags::NEEDS_PAINT | ChangeFlags::FLIP_SETTLED));
        assert!(!flags.contains(ChangeFlags::FLIP_STARTED));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(ChangeFlags::default().is_empty());
    }
}
