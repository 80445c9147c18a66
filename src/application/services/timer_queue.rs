//! Deadline-ordered queue of cancellable scheduled tasks.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Opaque handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Tasks of type `T` ordered by deadline, each cancellable through its handle.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: BTreeMap<(Instant, TimerHandle), T>,
    deadlines: HashMap<TimerHandle, Instant>,
    next_handle: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_handle: 0,
        }
    }

    /// Schedules `payload` to fire at `at`.
    pub fn schedule(&mut self, at: Instant, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.insert((at, handle), payload);
        self.deadlines.insert(handle, at);
        handle
    }

    /// Cancels a task. Fired or unknown handles yield `None`.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        let at = self.deadlines.remove(&handle)?;
        self.entries.remove(&(at, handle))
    }

    /// Cancels every task whose payload matches `pred`, returning the count.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let doomed: Vec<(Instant, TimerHandle)> = self
            .entries
            .iter()
            .filter(|(_, payload)| pred(payload))
            .map(|(key, _)| *key)
            .collect();

        for key in &doomed {
            self.entries.remove(key);
            self.deadlines.remove(&key.1);
        }
        doomed.len()
    }

    /// Removes and returns every task due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<(TimerHandle, T)> {
        let mut due = Vec::new();
        while let Some(entry) = self.entries.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let ((_, handle), payload) = entry.remove_entry();
            self.deadlines.remove(&handle);
            due.push((handle, payload));
        }
        due
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.keys().next().map(|(at, _)| *at)
    }

    /// Returns true while `handle` has neither fired nor been cancelled.
    #[must_use]
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pop_due_in_deadline_order() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start + Duration::from_millis(30), "late");
        queue.schedule(start + Duration::from_millis(10), "early");
        queue.schedule(start + Duration::from_millis(50), "pending");

        let fired: Vec<_> = queue
            .pop_due(start + Duration::from_millis(30))
            .into_iter()
            .map(|(_, p)| p)
            .collect();

        assert_eq!(fired, vec!["early", "late"]);
        assert_eq!(queue.len(), 1);
        assert_eq!(
            queue.next_deadline(),
            Some(start + Duration::from_millis(50))
        );
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let at = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(at, 1);
        queue.schedule(at, 2);

        let fired: Vec<_> = queue.pop_due(at).into_iter().map(|(_, p)| p).collect();
        assert_eq!(fired, vec![1, 2]);
    }

    #[test]
    fn test_cancel() {
        let at = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(at, "task");

        assert!(queue.is_scheduled(handle));
        assert_eq!(queue.cancel(handle), Some("task"));
        assert!(!queue.is_scheduled(handle));
        assert_eq!(queue.cancel(handle), None);
        assert!(queue.pop_due(at).is_empty());
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let at = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(at, ());
        assert_eq!(queue.pop_due(at).len(), 1);
        assert_eq!(queue.cancel(handle), None);
    }

    #[test]
    fn test_cancel_where() {
        let at = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(at, 1);
        queue.schedule(at, 2);
        queue.schedule(at, 1);

        assert_eq!(queue.cancel_where(|p| *p == 1), 2);
        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());
    }
}
