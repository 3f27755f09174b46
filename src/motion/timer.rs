//! One-shot timer queue
//!
//! A deadline-ordered stand-in for `setTimeout`/`clearTimeout`. Components own
//! their queue and pump it from the frame loop, so every callback runs on the
//! same thread in deadline order and nothing fires after the owner cancels.

use serde::{Deserialize, Serialize};

/// Handle returned by [`TimerQueue::schedule_once`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<E> {
    id: TimerId,
    deadline: f64,
    event: E,
}

/// Pending one-shot timers carrying an event payload
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
    /// Current queue time (ms)
    now: f64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<E> TimerQueue<E> {
    /// Create an empty queue whose clock starts at `now` (ms)
    pub fn new(now: f64) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            now,
        }
    }

    /// Current queue time (ms)
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Schedule `event` to fire `delay` ms from the current queue time
    pub fn schedule_once(&mut self, delay: f64, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline: self.now + delay.max(0.0),
            event,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every pending timer
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Pop the earliest timer due at or before `now`.
    ///
    /// The queue clock moves to the fired timer's deadline, so a timer scheduled
    /// from inside the callback is measured from when its predecessor was due.
    pub fn pop_due(&mut self, now: f64) -> Option<(TimerId, E)> {
        let due = self.earliest().filter(|&i| self.entries[i].deadline <= now);
        let Some(index) = due else {
            self.now = self.now.max(now);
            return None;
        };
        let entry = self.entries.swap_remove(index);
        self.now = self.now.max(entry.deadline);
        Some((entry.id, entry.event))
    }

    /// Move the clock to `now` and push every pending deadline back by the
    /// same amount, so the time left on each timer is kept across a stall.
    pub fn resume_at(&mut self, now: f64) {
        let gap = now - self.now;
        if gap <= 0.0 {
            return;
        }
        for entry in &mut self.entries {
            entry.deadline += gap;
        }
        self.now = now;
    }

    fn earliest(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.deadline
                    .total_cmp(&b.deadline)
                    .then_with(|| a.id.cmp(&b.id))
            })
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<E>(q: &mut TimerQueue<E>, now: f64) -> Vec<E> {
        let mut fired = Vec::new();
        while let Some((_, event)) = q.pop_due(now) {
            fired.push(event);
        }
        fired
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut q = TimerQueue::new(0.0);
        q.schedule_once(300.0, "late");
        q.schedule_once(100.0, "early");
        q.schedule_once(200.0, "middle");

        assert_eq!(drain(&mut q, 1000.0), vec!["early", "middle", "late"]);
        assert_eq!(q.pending(), 0);
        assert_eq!(q.now(), 1000.0);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut q = TimerQueue::new(0.0);
        q.schedule_once(50.0, 1);
        q.schedule_once(50.0, 2);
        assert_eq!(drain(&mut q, 50.0), vec![1, 2]);
    }

    #[test]
    fn test_not_due_stays_pending() {
        let mut q = TimerQueue::new(0.0);
        q.schedule_once(500.0, ());
        assert!(drain(&mut q, 499.0).is_empty());
        assert_eq!(q.pending(), 1);
        assert_eq!(q.now(), 499.0);
        assert_eq!(drain(&mut q, 500.0).len(), 1);
    }

    #[test]
    fn test_cancel() {
        let mut q = TimerQueue::new(0.0);
        let a = q.schedule_once(10.0, 'a');
        q.schedule_once(20.0, 'b');
        assert!(q.cancel(a));
        assert!(!q.cancel(a));
        assert_eq!(drain(&mut q, 100.0), vec!['b']);
    }

    #[test]
    fn test_reschedule_from_fired_deadline() {
        let mut q = TimerQueue::new(0.0);
        q.schedule_once(500.0, ());
        let mut count = 0;
        while q.pop_due(1600.0).is_some() {
            count += 1;
            q.schedule_once(500.0, ());
        }
        // Fired at 500, 1000, 1500; next one due at 2000
        assert_eq!(count, 3);
        assert!(drain(&mut q, 1999.0).is_empty());
        assert_eq!(drain(&mut q, 2000.0).len(), 1);
    }

    #[test]
    fn test_resume_keeps_remaining_time() {
        let mut q = TimerQueue::new(0.0);
        q.schedule_once(500.0, "blink");
        assert!(drain(&mut q, 400.0).is_empty());

        // Ten minutes pass without a pump
        q.resume_at(600_400.0);
        assert_eq!(q.now(), 600_400.0);
        assert!(drain(&mut q, 600_499.0).is_empty());
        assert_eq!(drain(&mut q, 600_500.0), vec!["blink"]);
    }

    #[test]
    fn test_resume_never_moves_backwards() {
        let mut q = TimerQueue::new(1000.0);
        q.schedule_once(10.0, ());
        q.resume_at(500.0);
        assert_eq!(q.now(), 1000.0);
        assert_eq!(drain(&mut q, 1010.0).len(), 1);
    }
}
