//! Single-slot, latest-wins request mailbox.
//!
//! The controller posts flip requests from whatever thread calls it; the
//! card takes them on its frame. Only the newest unconsumed request matters,
//! so posting over a pending request replaces it instead of queueing.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::side::FlipSide;

const EMPTY: u8 = 0;

#[derive(Debug, Default)]
pub struct Mailbox {
    slot: AtomicU8,
}

impl Mailbox {
    pub fn new() -> Self {
        Self {
            slot: AtomicU8::new(EMPTY),
        }
    }

    /// Post a request, replacing any pending one.
    /// Returns the request that was overwritten, if there was one.
    pub fn post(&self, side: FlipSide) -> Option<FlipSide> {
        let previous = self.slot.swap(side.to_raw(), Ordering::AcqRel);
        FlipSide::from_raw(previous)
    }

    /// Take the pending request, leaving the mailbox empty.
    pub fn take(&self) -> Option<FlipSide> {
        FlipSide::from_raw(self.slot.swap(EMPTY, Ordering::AcqRel))
    }

    pub fn peek(&self) -> Option<FlipSide> {
        FlipSide::from_raw(self.slot.load(Ordering::Acquire))
    }

    pub fn is_empty(&self) -> bool {
        self.peek().is_none()
    }
}
