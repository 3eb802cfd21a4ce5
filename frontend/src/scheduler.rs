use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use log::debug;

use crate::state::ui::Highlight;

/// What happens to a pending highlight revert when the same highlight is
/// triggered again before it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevertPolicy {
    /// Every trigger keeps its own timer; whichever fires first clears the flag.
    Independent,
    /// A new trigger cancels the pending timer; only the newest one counts.
    CancelAndReschedule,
}

impl RevertPolicy {
    /// Whether a revert carrying `fired` may clear a flag last set by `latest`.
    pub fn accepts(self, latest: u64, fired: u64) -> bool {
        match self {
            RevertPolicy::Independent => true,
            RevertPolicy::CancelAndReschedule => fired == latest,
        }
    }
}

/// A pending delayed callback that can be called off or left to fire.
pub trait PendingTask {
    fn cancel(self);
    fn detach(self);
}

/// A callback that runs once after a delay unless cancelled first.
/// Dropping an armed task cancels it.
pub struct DelayedTask {
    timeout: Option<Timeout>,
}

impl DelayedTask {
    pub fn schedule<F>(delay_ms: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            timeout: Some(Timeout::new(delay_ms, callback)),
        }
    }
}

impl PendingTask for DelayedTask {
    fn cancel(mut self) {
        if let Some(timeout) = self.timeout.take() {
            timeout.cancel();
        }
    }

    /// Lets the timer fire on its own, with no way to cancel it afterwards.
    fn detach(mut self) {
        if let Some(timeout) = self.timeout.take() {
            timeout.forget();
        }
    }
}

/// Owns the revert timers for the page's highlights.
pub struct HighlightTimers<T = DelayedTask> {
    policy: RevertPolicy,
    pending: HashMap<Highlight, T>,
}

impl<T: PendingTask> HighlightTimers<T> {
    pub fn new(policy: RevertPolicy) -> Self {
        Self {
            policy,
            pending: HashMap::new(),
        }
    }

    /// Applies the policy to a freshly scheduled task for `highlight`.
    pub fn track(&mut self, highlight: Highlight, task: T) {
        match self.policy {
            RevertPolicy::Independent => task.detach(),
            RevertPolicy::CancelAndReschedule => {
                if let Some(previous) = self.pending.insert(highlight, task) {
                    debug!("Cancelling pending {:?} revert", highlight);
                    previous.cancel();
                }
            }
        }
    }

    pub fn is_pending(&self, highlight: Highlight) -> bool {
        self.pending.contains_key(&highlight)
    }
}

impl HighlightTimers<DelayedTask> {
    pub fn arm<F>(&mut self, highlight: Highlight, delay_ms: u32, on_expire: F)
    where
        F: FnOnce() + 'static,
    {
        self.track(highlight, DelayedTask::schedule(delay_ms, on_expire));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Log = Rc<RefCell<Vec<(u32, &'static str)>>>;

    struct Recorded {
        id: u32,
        log: Log,
    }

    impl PendingTask for Recorded {
        fn cancel(self) {
            self.log.borrow_mut().push((self.id, "cancel"));
        }

        fn detach(self) {
            self.log.borrow_mut().push((self.id, "detach"));
        }
    }

    fn task(id: u32, log: &Log) -> Recorded {
        Recorded { id, log: log.clone() }
    }

    #[test]
    fn reschedule_cancels_the_previous_timer_for_the_same_highlight() {
        let log = Log::default();
        let mut timers = HighlightTimers::new(RevertPolicy::CancelAndReschedule);

        timers.track(Highlight::Contact, task(1, &log));
        assert!(log.borrow().is_empty());
        timers.track(Highlight::Contact, task(2, &log));
        assert_eq!(*log.borrow(), vec![(1, "cancel")]);
        assert!(timers.is_pending(Highlight::Contact));
    }

    #[test]
    fn reschedule_keeps_other_highlights_running() {
        let log = Log::default();
        let mut timers = HighlightTimers::new(RevertPolicy::CancelAndReschedule);

        timers.track(Highlight::Contact, task(1, &log));
        timers.track(Highlight::About, task(2, &log));
        assert!(log.borrow().is_empty());
        assert!(timers.is_pending(Highlight::Contact));
        assert!(timers.is_pending(Highlight::About));
    }

    #[test]
    fn independent_policy_detaches_every_timer() {
        let log = Log::default();
        let mut timers = HighlightTimers::new(RevertPolicy::Independent);

        timers.track(Highlight::Contact, task(1, &log));
        timers.track(Highlight::Contact, task(2, &log));
        assert_eq!(*log.borrow(), vec![(1, "detach"), (2, "detach")]);
        assert!(!timers.is_pending(Highlight::Contact));
    }

    #[test]
    fn independent_policy_accepts_any_ticket() {
        assert!(RevertPolicy::Independent.accepts(5, 1));
        assert!(RevertPolicy::Independent.accepts(5, 5));
    }

    #[test]
    fn reschedule_policy_accepts_only_latest() {
        assert!(!RevertPolicy::CancelAndReschedule.accepts(5, 4));
        assert!(RevertPolicy::CancelAndReschedule.accepts(5, 5));
    }
}
