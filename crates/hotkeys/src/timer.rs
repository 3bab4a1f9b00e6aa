//! Chord expiry timers
//!
//! A [`ChordTimer`] schedules a one-shot callback and hands back a
//! [`TimerId`]. When the timer fires the host calls
//! [`Dispatcher::expire`](crate::Dispatcher::expire) with that id; the
//! dispatcher ignores ids it no longer holds, so a cancelled or superseded
//! timer can never clear a newer chord. A host that could not deliver a
//! firing (the dispatcher was busy) queues the id and hands it back from
//! [`ChordTimer::take_missed`] before the next key event is handled.

use std::time::Duration;

/// Handle for an armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// One-shot timer scheduling provided by the host
pub trait ChordTimer {
    /// Schedule expiry after `delay`. `None` if the host could not schedule it.
    fn arm(&mut self, delay: Duration) -> Option<TimerId>;

    /// Cancel a previously armed timer. Unknown ids are ignored.
    fn cancel(&mut self, id: TimerId);

    /// Timers that fired but could not be delivered to the dispatcher
    fn take_missed(&mut self) -> Vec<TimerId> {
        Vec::new()
    }
}

/// Timer driven by a virtual clock
///
/// Nothing fires on its own; call [`ManualTimer::advance`] to move time
/// forward and collect the timers that came due.
#[derive(Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    next_id: u64,
    armed: Vec<(TimerId, Duration)>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still waiting to fire
    pub fn pending(&self) -> usize {
        self.armed.len()
    }

    /// Move the clock forward and return due timers in deadline order
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(TimerId, Duration)> = Vec::new();
        self.armed.retain(|&(id, deadline)| {
            if deadline <= now {
                due.push((id, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(id, deadline)| (deadline, id.0));
        due.into_iter().map(|(id, _)| id).collect()
    }
}

impl ChordTimer for ManualTimer {
    fn arm(&mut self, delay: Duration) -> Option<TimerId> {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.armed.push((id, self.now + delay));
        Some(id)
    }

    fn cancel(&mut self, id: TimerId) {
        self.armed.retain(|&(armed, _)| armed != id);
    }
}
