//! Programmatic control of a flip card.
//!
//! A [`FlipController`] is a cheap, cloneable handle. Give one clone to the
//! card and keep another wherever the flip should be triggered from, such as a
//! button elsewhere in the UI or a background thread. Requests go through a
//! single-slot mailbox that the card drains on its next frame.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

use crate::reactive::Mailbox;
use crate::side::FlipSide;

type Wakeup = Box<dyn Fn() + Send + Sync>;

struct ControllerInner {
    current_side: AtomicU8,
    flip_enabled: AtomicBool,
    requests: Mailbox,
    wakeup: OnceLock<Wakeup>,
}

/// Handle for flipping a card from outside its widget tree.
#[derive(Clone)]
pub struct FlipController {
    inner: Arc<ControllerInner>,
}

/// The older `FlipView` pairs with the same controller.
pub type FlipViewController = FlipController;

impl FlipController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                current_side: AtomicU8::new(FlipSide::Front.to_raw()),
                flip_enabled: AtomicBool::new(true),
                requests: Mailbox::new(),
                wakeup: OnceLock::new(),
            }),
        }
    }

    /// Flips the card to the front side
    pub fn flip_to_front(&self) {
        self.flip_to(FlipSide::Front);
    }

    /// Flips the card to the back side
    pub fn flip_to_back(&self) {
        self.flip_to(FlipSide::Back);
    }

    /// Flips the card to the other side of the last requested one.
    pub fn flip(&self) {
        if self.current_side() == FlipSide::Front {
            self.flip_to_back();
        } else {
            self.flip_to_front();
        }
    }

    /// Flips the card to `side`.
    ///
    /// Silently ignored while flipping is disabled. A request that has not been
    /// picked up by the card yet is replaced by this one. The card drops a
    /// request that reaches it while a flip is still in flight and resets
    /// [`current_side`](Self::current_side) to the side it is flipping to.
    pub fn flip_to(&self, side: FlipSide) {
        if side == FlipSide::Uninitialized {
            log::debug!("Ignoring flip request to the uninitialized side");
            return;
        }
        if !self.is_flip_enabled() {
            log::debug!("Flipping is disabled, dropping request for {:?}", side);
            return;
        }

        self.inner
            .current_side
            .store(side.to_raw(), Ordering::Release);
        if let Some(replaced) = self.inner.requests.post(side) {
            log::trace!("Flip request {:?} replaced pending {:?}", side, replaced);
        }
        if let Some(wakeup) = self.inner.wakeup.get() {
            wakeup();
        }
    }

    /// The side most recently requested.
    pub fn current_side(&self) -> FlipSide {
        FlipSide::from_raw(self.inner.current_side.load(Ordering::Acquire))
            .unwrap_or(FlipSide::Front)
    }

    pub fn is_flip_enabled(&self) -> bool {
        self.inner.flip_enabled.load(Ordering::Acquire)
    }

    /// Whether a request is waiting for the card to pick it up.
    pub fn has_pending_request(&self) -> bool {
        !self.inner.requests.is_empty()
    }

    /// Install a callback run after every accepted request, so the host can
    /// schedule a frame. Only the first hook is kept; returns whether this
    /// one was installed.
    pub fn set_wakeup(&self, wakeup: impl Fn() + Send + Sync + 'static) -> bool {
        self.inner.wakeup.set(Box::new(wakeup)).is_ok()
    }

    pub(crate) fn set_config(&self, flip_enabled: bool) {
        self.inner
            .flip_enabled
            .store(flip_enabled, Ordering::Release);
    }

    /// Re-align the last requested side with what the card is showing after
    /// the card dropped a request.
    pub(crate) fn sync_side(&self, side: FlipSide) {
        self.inner
            .current_side
            .store(side.resolved().to_raw(), Ordering::Release);
    }

    pub(crate) fn take_request(&self) -> Option<FlipSide> {
        self.inner.requests.take()
    }
}

impl Default for FlipController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlipController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlipController")
            .field("current_side", &self.current_side())
            .field("flip_enabled", &self.is_flip_enabled())
            .field("pending", &self.inner.requests.peek())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_starts_on_front() {
        let controller = FlipController::new();
        assert_eq!(controller.current_side(), FlipSide::Front);
        assert!(controller.is_flip_enabled());
        assert!(!controller.has_pending_request());
    }

    #[test]
    fn test_flip_to_back_publishes() {
        let controller = FlipController::new();
        controller.flip_to_back();
        assert_eq!(controller.current_side(), FlipSide::Back);
        assert_eq!(controller.take_request(), Some(FlipSide::Back));
        assert_eq!(controller.take_request(), None);
    }

    #[test]
    fn test_flip_toggles_relative_to_current_side() {
        let controller = FlipController::new();
        controller.flip();
        assert_eq!(controller.current_side(), FlipSide::Back);
        controller.flip();
        assert_eq!(controller.current_side(), FlipSide::Front);
        // Latest wins: only the last toggle is pending
        assert_eq!(controller.take_request(), Some(FlipSide::Front));
        assert_eq!(controller.take_request(), None);
    }

    #[test]
    fn test_disabled_controller_ignores_requests() {
        let controller = FlipController::new();
        controller.set_config(false);
        for _ in 0..5 {
            controller.flip();
        }
        controller.flip_to_back();
        assert_eq!(controller.current_side(), FlipSide::Front);
        assert!(!controller.has_pending_request());
    }

    #[test]
    fn test_publishes_regardless_of_card_state() {
        let controller = FlipController::new();
        controller.flip_to_back();
        controller.take_request();

        // Whether the card can act on it is decided when it drains the mailbox
        controller.flip();
        assert_eq!(controller.current_side(), FlipSide::Front);
        assert_eq!(controller.take_request(), Some(FlipSide::Front));

        controller.sync_side(FlipSide::Back);
        controller.flip();
        assert_eq!(controller.take_request(), Some(FlipSide::Front));
    }

    #[test]
    fn test_uninitialized_request_is_ignored() {
        let controller = FlipController::new();
        controller.flip_to(FlipSide::Uninitialized);
        assert_eq!(controller.current_side(), FlipSide::Front);
        assert!(!controller.has_pending_request());
    }

    #[test]
    fn test_clones_share_state() {
        let controller = FlipController::new();
        let button = controller.clone();
        button.flip_to_back();
        assert_eq!(controller.current_side(), FlipSide::Back);
        assert_eq!(controller.take_request(), Some(FlipSide::Back));
    }

    #[test]
    fn test_wakeup_runs_on_accepted_requests() {
        let wakeups = Arc::new(AtomicUsize::new(0));
        let controller = FlipController::new();
        let counter = wakeups.clone();
        assert!(controller.set_wakeup(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        }));
        assert!(!controller.set_wakeup(|| {}));

        controller.flip();
        controller.set_config(false);
        controller.flip();
        assert_eq!(wakeups.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_flip_from_background_thread() {
        let controller = FlipController::new();
        let remote = controller.clone();
        std::thread::spawn(move || remote.flip_to_back())
            .join()
            .unwrap();
        assert_eq!(controller.take_request(), Some(FlipSide::Back));
    }

    #[test]
    fn test_sync_side() {
        let controller = FlipController::new();
        controller.flip_to_back();
        controller.sync_side(FlipSide::Front);
        assert_eq!(controller.current_side(), FlipSide::Front);
        controller.sync_side(FlipSide::Uninitialized);
        assert_eq!(controller.current_side(), FlipSide::Front);
    }
}
