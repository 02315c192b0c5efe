//! One-shot reveal latch for scroll-triggered entrance animations.
//!
//! A [`RevealController`] owns at most one viewport subscription. The first
//! qualifying intersection flips the latch and cancels the subscription;
//! detaching cancels it whether or not the latch ever fired.

/// Handle returned when registering for viewport notifications.
pub trait Cancel {
    /// Stop delivering notifications. Must be safe to call more than once.
    fn cancel(&mut self);
}

/// What a revealed block should look like right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Waiting for the block to scroll into view.
    Hidden,
    /// The block has been seen; play the entrance transition.
    Shown,
    /// No observation mechanism. Render the content as-is, unanimated.
    Static,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Observing,
    Revealed,
    Unsupported,
    Detached,
}

pub struct RevealController<C: Cancel> {
    threshold: f64,
    revealed: bool,
    phase: Phase,
    subscription: Option<C>,
}

impl<C: Cancel> RevealController<C> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: false,
            phase: Phase::Idle,
            subscription: None,
        }
    }

    /// Latch value. Never goes back to `false` once set.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_observing(&self) -> bool {
        self.phase == Phase::Observing
    }

    pub fn reveal(&self) -> Reveal {
        match self.phase {
            Phase::Unsupported => Reveal::Static,
            _ if self.revealed => Reveal::Shown,
            _ => Reveal::Hidden,
        }
    }

    /// Start observing through `subscription`.
    ///
    /// Ignored once the controller has revealed, detached or given up, so a
    /// latch is never re-armed.
    pub fn attach(&mut self, mut subscription: C) {
        match self.phase {
            Phase::Idle => {
                self.subscription = Some(subscription);
                self.phase = Phase::Observing;
            }
            Phase::Observing => {
                if let Some(mut previous) = self.subscription.replace(subscription) {
                    previous.cancel();
                }
            }
            Phase::Revealed | Phase::Unsupported | Phase::Detached => subscription.cancel(),
        }
    }

    /// The platform cannot observe intersections. The latch stays `false`.
    pub fn mark_unsupported(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Unsupported;
        }
    }

    /// Feed one intersection notification. Returns `true` only on the call
    /// that flips the latch.
    pub fn on_intersection(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.phase != Phase::Observing || !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        self.phase = Phase::Revealed;
        // The subscription stays owned until detach; only its delivery stops here.
        if let Some(subscription) = self.subscription.as_mut() {
            subscription.cancel();
        }
        true
    }

    /// Tear down. Mandatory on unmount.
    pub fn detach(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            if self.phase == Phase::Observing {
                subscription.cancel();
            }
        }
        if self.phase != Phase::Unsupported {
            self.phase = Phase::Detached;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeSubscription {
        cancels: Rc<Cell<u32>>,
    }

    impl Cancel for FakeSubscription {
        fn cancel(&mut self) {
            self.cancels.set(self.cancels.get() + 1);
        }
    }

    fn attached(threshold: f64) -> (RevealController<FakeSubscription>, Rc<Cell<u32>>) {
        let subscription = FakeSubscription::default();
        let cancels = subscription.cancels.clone();
        let mut controller = RevealController::new(threshold);
        controller.attach(subscription);
        (controller, cancels)
    }

    #[test]
    fn starts_hidden_and_unrevealed() {
        let (controller, cancels) = attached(0.1);
        assert!(!controller.is_revealed());
        assert!(controller.is_observing());
        assert_eq!(controller.reveal(), Reveal::Hidden);
        assert_eq!(cancels.get(), 0);
    }

    #[test]
    fn reveals_on_first_qualifying_intersection_and_cancels() {
        let (mut controller, cancels) = attached(0.1);
        assert!(controller.on_intersection(true, 0.5));
        assert!(controller.is_revealed());
        assert_eq!(controller.reveal(), Reveal::Shown);
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn ignores_intersections_below_threshold() {
        let (mut controller, _) = attached(0.25);
        assert!(!controller.on_intersection(true, 0.1));
        assert!(!controller.on_intersection(false, 0.9));
        assert!(!controller.is_revealed());
        assert!(controller.on_intersection(true, 0.25));
    }

    #[test]
    fn already_visible_element_behaves_like_later_crossing() {
        let (mut controller, _) = attached(0.1);
        // First callback right after attach reports full visibility.
        assert!(controller.on_intersection(true, 1.0));
        assert!(controller.is_revealed());
    }

    #[test]
    fn leaving_and_reentering_does_not_rearm() {
        let (mut controller, cancels) = attached(0.1);
        controller.on_intersection(true, 0.4);
        assert!(!controller.on_intersection(false, 0.0));
        assert!(!controller.on_intersection(true, 0.4));
        assert!(controller.is_revealed());
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn detach_before_intersection_cancels_and_ignores_later_callbacks() {
        let (mut controller, cancels) = attached(0.1);
        controller.detach();
        assert_eq!(cancels.get(), 1);
        assert!(!controller.on_intersection(true, 1.0));
        assert!(!controller.is_revealed());
    }

    #[test]
    fn detach_after_reveal_does_not_cancel_twice() {
        let (mut controller, cancels) = attached(0.1);
        controller.on_intersection(true, 1.0);
        controller.detach();
        assert_eq!(cancels.get(), 1);
        assert!(controller.is_revealed());
    }

    #[test]
    fn attach_after_detach_is_refused() {
        let (mut controller, _) = attached(0.1);
        controller.detach();
        let late = FakeSubscription::default();
        let late_cancels = late.cancels.clone();
        controller.attach(late);
        assert_eq!(late_cancels.get(), 1);
        assert!(!controller.is_observing());
    }

    #[test]
    fn missing_element_leaves_controller_idle() {
        let mut controller: RevealController<FakeSubscription> = RevealController::new(0.1);
        assert!(!controller.on_intersection(true, 1.0));
        controller.detach();
        assert!(!controller.is_revealed());
    }

    #[test]
    fn unsupported_platform_degrades_to_static() {
        let mut controller: RevealController<FakeSubscription> = RevealController::new(0.1);
        controller.mark_unsupported();
        assert_eq!(controller.reveal(), Reveal::Static);
        assert!(!controller.is_revealed());
        controller.detach();
        assert_eq!(controller.reveal(), Reveal::Static);
    }

    proptest! {
        /// Property: the latch flips at most once and never resets
        #[test]
        fn latch_is_monotonic(
            threshold in 0.0f64..=1.0,
            events in prop::collection::vec((any::<bool>(), 0.0f64..=1.0), 0..40),
        ) {
            let (mut controller, cancels) = attached(threshold);
            let mut flips = 0;
            let mut seen = false;
            for (intersecting, ratio) in events {
                if controller.on_intersection(intersecting, ratio) {
                    flips += 1;
                }
                prop_assert!(!seen || controller.is_revealed());
                seen = controller.is_revealed();
            }
            prop_assert!(flips <= 1);
            prop_assert!(cancels.get() <= 1);
        }
    }
}
