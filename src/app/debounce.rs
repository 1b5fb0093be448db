//! Time-deferred value settling (debounce).
//!
//! [`Debounced`] sits between raw keystrokes and the filter: it exposes the
//! last value that stayed unchanged for a full quiet period. The primitive is
//! clock-agnostic. Callers pass `now` explicitly, and either poll at the
//! reported deadline or hand each returned [`SettleTicket`] to a host timer and
//! call [`Debounced::fire`] when it elapses.
//!
//! Every update bumps a generation counter. A ticket from an older generation,
//! or any ticket after [`Debounced::teardown`], is a no-op when fired, so a
//! timer that was already in flight can never apply a superseded value.

use std::time::{Duration, Instant};

/// Handle for one scheduled settle.
///
/// Valid only while it belongs to the latest update and the debouncer is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    generation: u64,
    deadline: Instant,
}

impl SettleTicket {
    /// When the host timer should fire.
    #[must_use]
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
    generation: u64,
}

/// A value that follows its input only after the input goes quiet.
///
/// # Example
///
/// ```rust
/// use phrasekeeper::app::Debounced;
/// use std::time::{Duration, Instant};
///
/// let t0 = Instant::now();
/// let delay = Duration::from_millis(300);
/// let mut term = Debounced::new(String::new(), delay);
///
/// term.update("he".to_string(), t0);
/// term.update("hello".to_string(), t0 + Duration::from_millis(100));
/// assert!(!term.poll(t0 + Duration::from_millis(399)));
/// assert_eq!(term.value(), "");
///
/// assert!(term.poll(t0 + Duration::from_millis(400)));
/// assert_eq!(term.value(), "hello");
/// ```
#[derive(Debug)]
pub struct Debounced<T> {
    settled: T,
    pending: Option<Pending<T>>,
    delay: Duration,
    generation: u64,
    torn_down: bool,
}

impl<T: PartialEq> Debounced<T> {
    /// Creates a debouncer whose settled value is `initial` right away.
    #[must_use]
    pub const fn new(initial: T, delay: Duration) -> Self {
        Self {
            settled: initial,
            pending: None,
            delay,
            generation: 0,
            torn_down: false,
        }
    }

    /// Records a new input value observed at `now` and restarts the window.
    ///
    /// Any pending value from an earlier update is cancelled. Returns the
    /// ticket for the newly scheduled settle, or `None` after teardown.
    pub fn update(&mut self, value: T, now: Instant) -> Option<SettleTicket> {
        if self.torn_down {
            tracing::trace!("update after teardown ignored");
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        let deadline = now + self.delay;
        if self.pending.is_some() {
            tracing::trace!(generation = self.generation, "restarting debounce window");
        }
        self.pending = Some(Pending {
            value,
            deadline,
            generation: self.generation,
        });

        Some(SettleTicket {
            generation: self.generation,
            deadline,
        })
    }

    /// Settles the pending value if its deadline has passed.
    ///
    /// Returns `true` only when the exposed value actually changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if self.torn_down || !due {
            return false;
        }
        self.settle()
    }

    /// Settles in response to a host timer created for `ticket`.
    ///
    /// Stale tickets and tickets fired after teardown do nothing. Returns
    /// `true` only when the exposed value actually changed.
    pub fn fire(&mut self, ticket: SettleTicket) -> bool {
        if self.torn_down {
            tracing::trace!("timer fired after teardown, ignoring");
            return false;
        }
        let current = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.generation == ticket.generation);
        if !current {
            tracing::trace!(ticket_generation = ticket.generation, "stale debounce timer ignored");
            return false;
        }
        self.settle()
    }

    /// Cancels any pending value and stops accepting updates.
    ///
    /// After this call no poll, timer or update can change the exposed value.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// The settled value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.settled
    }

    /// Deadline of the pending settle, if one is scheduled.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Returns `true` if a newer input is waiting to settle.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` once [`teardown`](Self::teardown) has run.
    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Configured quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    fn settle(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if pending.value == self.settled {
            return false;
        }
        self.settled = pending.value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn initial_value_is_settled_immediately() {
        let term = Debounced::new("initial", DELAY);
        assert_eq!(*term.value(), "initial");
        assert!(!term.is_pending());
    }

    #[test]
    fn does_not_settle_before_delay() {
        let t0 = Instant::now();
        let mut term = Debounced::new("initial", DELAY);
        term.update("updated", t0);

        assert!(!term.poll(t0 + ms(299)));
        assert_eq!(*term.value(), "initial");

        assert!(term.poll(t0 + ms(300)));
        assert_eq!(*term.value(), "updated");
    }

    #[test]
    fn burst_settles_once_to_last_value() {
        let t0 = Instant::now();
        let mut term = Debounced::new("", DELAY);
        term.update("a", t0);
        term.update("ab", t0 + ms(100));
        term.update("abc", t0 + ms(200));

        let mut settles = 0;
        for step in 0..=10 {
            if term.poll(t0 + ms(step * 100)) {
                settles += 1;
            }
        }

        assert_eq!(settles, 1);
        assert_eq!(*term.value(), "abc");
        assert_eq!(term.deadline(), None);
    }

    #[test]
    fn window_is_measured_from_last_update() {
        let t0 = Instant::now();
        let mut term = Debounced::new(0, DELAY);
        term.update(1, t0);
        term.update(2, t0 + ms(250));

        assert!(!term.poll(t0 + ms(300)));
        assert_eq!(term.deadline(), Some(t0 + ms(550)));
        assert!(term.poll(t0 + ms(550)));
        assert_eq!(*term.value(), 2);
    }

    #[test]
    fn stale_ticket_is_a_no_op() {
        let t0 = Instant::now();
        let mut term = Debounced::new("", DELAY);
        let first = term.update("first", t0).unwrap();
        let second = term.update("second", t0 + ms(10)).unwrap();

        assert!(!term.fire(first));
        assert_eq!(*term.value(), "");

        assert!(term.fire(second));
        assert_eq!(*term.value(), "second");
        assert!(!term.fire(second));
    }

    #[test]
    fn teardown_cancels_pending_and_in_flight_timers() {
        let t0 = Instant::now();
        let mut term = Debounced::new("kept", DELAY);
        let ticket = term.update("lost", t0).unwrap();

        term.teardown();
        assert!(term.is_torn_down());
        assert!(!term.poll(t0 + ms(10_000)));
        assert!(!term.fire(ticket));
        assert!(term.update("later", t0 + ms(20)).is_none());
        assert_eq!(*term.value(), "kept");
    }

    #[test]
    fn settling_to_the_same_value_reports_no_change() {
        let t0 = Instant::now();
        let mut term = Debounced::new("same", DELAY);
        term.update("other", t0);
        term.update("same", t0 + ms(10));

        assert!(!term.poll(t0 + ms(400)));
        assert!(!term.is_pending());
        assert_eq!(*term.value(), "same");
    }

    #[test]
    fn zero_delay_settles_on_next_poll() {
        let t0 = Instant::now();
        let mut term = Debounced::new(1, Duration::ZERO);
        term.update(2, t0);
        assert!(term.poll(t0));
        assert_eq!(*term.value(), 2);
    }
}
