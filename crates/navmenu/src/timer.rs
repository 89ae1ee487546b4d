//! Timers
//!
//! Fire-once deferred actions against an injectable clock. Timers cannot be
//! cancelled once scheduled.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock advanced by hand. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug)]
struct Timer<A> {
    seq: u64,
    due: Duration,
    action: A,
}

/// Pending fire-once timers
#[derive(Debug)]
pub struct TimerQueue<A> {
    timers: Vec<Timer<A>>,
    next_seq: u64,
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self { timers: Vec::new(), next_seq: 0 }
    }

    /// Schedule `action` to fire `delay` after `now`
    pub fn schedule(&mut self, now: Duration, delay: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer { seq, due: now + delay, action });
    }

    /// Remove and return every action due at `now`, ordered by due time and
    /// then by scheduling order
    pub fn take_due(&mut self, now: Duration) -> Vec<A> {
        let (mut ready, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|t| t.due <= now);
        self.timers = pending;
        ready.sort_by_key(|t| (t.due, t.seq));
        ready.into_iter().map(|t| t.action).collect()
    }

    /// Check if there are pending timers
    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Due time of the earliest pending timer
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.due).min()
    }
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_manual_clock_is_shared() {
        let clock = ManualClock::new();
        let view = clock.clone();
        clock.advance_ms(250);
        assert_eq!(view.now(), MS(250));
    }

    #[test]
    fn test_take_due_only_returns_expired() {
        let mut queue = TimerQueue::new();
        queue.schedule(MS(0), MS(100), "a");
        queue.schedule(MS(0), MS(200), "b");

        assert!(queue.take_due(MS(99)).is_empty());
        assert_eq!(queue.take_due(MS(100)), vec!["a"]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_due(), Some(MS(200)));
        assert_eq!(queue.take_due(MS(1000)), vec!["b"]);
        assert!(!queue.has_pending());
    }

    #[test]
    fn test_same_due_time_fires_in_scheduling_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(MS(10), MS(50), 1);
        queue.schedule(MS(0), MS(60), 2);
        queue.schedule(MS(0), MS(60), 3);
        queue.schedule(MS(0), MS(20), 0);

        assert_eq!(queue.take_due(MS(60)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_delay_is_due_immediately() {
        let mut queue = TimerQueue::new();
        queue.schedule(MS(5), Duration::ZERO, ());
        assert_eq!(queue.take_due(MS(5)).len(), 1);
    }
}
