//! Trailing-edge debouncer driven by host timers.
//!
//! Zellij plugins arm timers with `set_timeout` and get an `Event::Timer` back
//! when one elapses; armed timers cannot be cancelled. The [`Debouncer`]
//! therefore cancels by bookkeeping: every [`trigger`](Debouncer::trigger)
//! arms a new timer and supersedes the pending call, and
//! [`on_timer`](Debouncer::on_timer) only releases the call when the timer that
//! elapsed is the one armed by the latest trigger.
//!
//! All timers share the same delay, so they elapse in the order they were
//! armed and a FIFO of generations is enough to tell them apart.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use repopin::app::Debouncer;
//!
//! let mut debouncer = Debouncer::new(Duration::from_millis(500));
//! debouncer.trigger("r");
//! debouncer.trigger("re");
//!
//! assert_eq!(debouncer.on_timer(), None);       // timer armed for "r"
//! assert_eq!(debouncer.on_timer(), Some("re")); // last call wins
//! ```

use std::collections::VecDeque;
use std::time::Duration;

/// Collapses bursts of triggers into a single trailing call.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    generation: u64,
    armed: VecDeque<u64>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            generation: 0,
            armed: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Records `args` as the pending call and returns the delay the caller
    /// must arm a host timer with.
    pub fn trigger(&mut self, args: T) -> Duration {
        self.generation += 1;
        self.pending = Some(args);
        self.armed.push_back(self.generation);

        tracing::trace!(
            generation = self.generation,
            armed = self.armed.len(),
            "debounce triggered"
        );

        self.delay
    }

    /// Accounts for one elapsed host timer.
    ///
    /// Returns the pending args when this timer belongs to the latest trigger,
    /// `None` when it was superseded or nothing is pending.
    pub fn on_timer(&mut self) -> Option<T> {
        let fired = self.armed.pop_front()?;
        if fired != self.generation {
            tracing::trace!(fired, latest = self.generation, "superseded timer ignored");
            return None;
        }
        self.pending.take()
    }

    /// Whether a call is waiting for its timer.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debouncer() -> Debouncer<String> {
        Debouncer::new(Duration::from_millis(500))
    }

    #[test]
    fn single_trigger_fires_once() {
        let mut d = debouncer();
        assert_eq!(d.trigger("a".into()), Duration::from_millis(500));
        assert!(d.is_pending());

        assert_eq!(d.on_timer(), Some("a".to_string()));
        assert!(!d.is_pending());
        assert_eq!(d.on_timer(), None);
    }

    #[test]
    fn burst_collapses_to_last_call() {
        let mut d = debouncer();
        for q in ["r", "re", "rea", "reac", "react"] {
            d.trigger(q.to_string());
        }

        let fired: Vec<String> = (0..5).filter_map(|_| d.on_timer()).collect();
        assert_eq!(fired, vec!["react".to_string()]);
    }

    #[test]
    fn trigger_after_settle_fires_again() {
        let mut d = debouncer();
        d.trigger("one".into());
        assert_eq!(d.on_timer(), Some("one".to_string()));

        d.trigger("two".into());
        assert_eq!(d.on_timer(), Some("two".to_string()));
    }

    #[test]
    fn trigger_between_timers_extends_quiet_period() {
        let mut d = debouncer();
        d.trigger("a".into());
        d.trigger("ab".into());
        // first timer elapses while the second is still armed
        assert_eq!(d.on_timer(), None);
        d.trigger("abc".into());
        assert_eq!(d.on_timer(), None);
        assert_eq!(d.on_timer(), Some("abc".to_string()));
    }

    #[test]
    fn stray_timer_is_ignored() {
        let mut d = debouncer();
        assert_eq!(d.on_timer(), None);
    }
}
