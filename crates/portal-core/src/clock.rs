//! Timer queue and time source shared by every animated component.
//!
//! Components never sleep. They push deadlines into their own
//! [`TimerQueue`] and the host calls [`Timed::advance`] once a deadline has
//! passed. Dropping a component drops its queue, which is the only
//! cancellation the portal needs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Milliseconds since the host's clock origin.
pub type Millis = u64;

/// Handle for a scheduled timer, unique within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A pending timer
#[derive(Debug)]
struct ScheduledTimer<E> {
    due: Millis,
    id: TimerId,
    event: E,
}

impl<E> PartialEq for ScheduledTimer<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for ScheduledTimer<E> {}

impl<E> PartialOrd for ScheduledTimer<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for ScheduledTimer<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Min-heap of one-shot timers carrying an event payload.
///
/// Timers pop in due-time order; timers due at the same instant pop in the
/// order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<E> {
    timers: BinaryHeap<ScheduledTimer<E>>,
    next_id: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            timers: BinaryHeap::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to fire at the absolute time `due`.
    pub fn schedule(&mut self, due: Millis, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(ScheduledTimer { due, id, event });
        id
    }

    /// Schedule `event` to fire `delay` milliseconds after `now`.
    pub fn schedule_after(&mut self, now: Millis, delay: Millis, event: E) -> TimerId {
        self.schedule(now.saturating_add(delay), event)
    }

    /// Cancel a pending timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Cancel every pending timer whose event matches `predicate`.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&E) -> bool) -> usize {
        let before = self.timers.len();
        self.timers.retain(|t| !predicate(&t.event));
        before - self.timers.len()
    }

    /// Earliest pending due time.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.peek().map(|t| t.due)
    }

    /// Pop the earliest timer if it is due at `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, E)> {
        if self.timers.peek()?.due <= now {
            self.timers.pop().map(|t| (t.due, t.event))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

/// A component driven by explicit time.
///
/// Hosts poll [`Timed::next_deadline`] and call [`Timed::advance`] with the
/// current time once it has passed. `advance` must process every timer due
/// at or before `now`, including timers scheduled while processing.
pub trait Timed {
    /// What the host needs to react to (re-render, navigate, ...)
    type Event;

    /// Earliest time at which `advance` has work to do.
    fn next_deadline(&self) -> Option<Millis>;

    /// Fire every timer due at or before `now`.
    fn advance(&mut self, now: Millis) -> Vec<Self::Event>;

    /// Whether `advance(now)` would fire anything.
    fn is_due(&self, now: Millis) -> bool {
        self.next_deadline().is_some_and(|due| due <= now)
    }
}

/// Wall-clock time source for the UI host.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since this clock was created.
    pub fn now(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_due_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(300, "c");
        queue.schedule(100, "a");
        queue.schedule(200, "b");

        assert_eq!(queue.next_deadline(), Some(100));
        assert_eq!(queue.pop_due(1_000), Some((100, "a")));
        assert_eq!(queue.pop_due(1_000), Some((200, "b")));
        assert_eq!(queue.pop_due(1_000), Some((300, "c")));
        assert!(queue.pop_due(1_000).is_none());
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        for label in ["first", "second", "third"] {
            queue.schedule(50, label);
        }

        let fired: Vec<_> = std::iter::from_fn(|| queue.pop_due(50)).map(|(_, e)| e).collect();
        assert_eq!(fired, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_not_due_before_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(1_000, 500, ());

        assert!(queue.pop_due(1_499).is_none());
        assert_eq!(queue.pop_due(1_500), Some((1_500, ())));
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(10, 1);
        let drop = queue.schedule(5, 2);

        assert!(queue.cancel(drop));
        assert!(!queue.cancel(drop));
        assert_eq!(queue.next_deadline(), Some(10));
        assert_eq!(queue.len(), 1);
        assert!(queue.cancel(keep));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel_where() {
        let mut queue = TimerQueue::new();
        queue.schedule(1, 1);
        queue.schedule(2, 2);
        queue.schedule(3, 3);

        assert_eq!(queue.cancel_where(|n| n % 2 == 1), 2);
        assert_eq!(queue.pop_due(10), Some((2, 2)));
    }

    #[test]
    fn test_schedule_after_saturates() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(Millis::MAX - 1, 10, ());
        assert_eq!(queue.next_deadline(), Some(Millis::MAX));
    }
}
