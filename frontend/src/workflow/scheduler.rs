use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Delivers `message` once after `delay_ms`, unless cancelled first.
pub trait Scheduler<M> {
    fn schedule(&mut self, delay_ms: u32, message: M) -> TimerId;
    /// Cancelling a timer that already fired only releases it.
    fn cancel(&mut self, id: TimerId);
}

/// `setTimeout`-backed scheduler that posts messages into a component.
///
/// Dropping it drops every pending [`Timeout`], which clears them, so a
/// destroyed component never receives a late message.
pub struct BrowserScheduler<M> {
    sink: Callback<M>,
    next_id: u64,
    pending: HashMap<TimerId, Timeout>,
}

impl<M: 'static> BrowserScheduler<M> {
    pub fn new(sink: Callback<M>) -> Self {
        Self {
            sink,
            next_id: 0,
            pending: HashMap::new(),
        }
    }
}

impl<M: 'static> Scheduler<M> for BrowserScheduler<M> {
    fn schedule(&mut self, delay_ms: u32, message: M) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let sink = self.sink.clone();
        let timeout = Timeout::new(delay_ms, move || sink.emit(message));
        self.pending.insert(id, timeout);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(timeout) = self.pending.remove(&id) {
            timeout.cancel();
        }
    }
}

/// Manually advanced clock for driving workflows in tests.
#[cfg(test)]
pub struct VirtualClock<M> {
    now_ms: u64,
    next_id: u64,
    pending: Vec<(u64, TimerId, M)>,
}

#[cfg(test)]
impl<M> VirtualClock<M> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Removes the earliest message due at or before `deadline_ms` and moves
    /// the clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<M> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= deadline_ms)
            .min_by_key(|(_, (due, id, _))| (*due, *id))
            .map(|(i, _)| i)?;
        let (due, _, message) = self.pending.remove(index);
        self.now_ms = due;
        Some(message)
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

#[cfg(test)]
impl<M> Scheduler<M> for VirtualClock<M> {
    fn schedule(&mut self, delay_ms: u32, message: M) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push((self.now_ms + u64::from(delay_ms), id, message));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(_, pending, _)| *pending != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut clock = VirtualClock::new();
        clock.schedule(300, "late");
        clock.schedule(100, "early");
        clock.schedule(100, "early-second");

        assert_eq!(clock.pop_due(1000), Some("early"));
        assert_eq!(clock.pop_due(1000), Some("early-second"));
        assert_eq!(clock.now_ms(), 100);
        assert_eq!(clock.pop_due(1000), Some("late"));
        assert_eq!(clock.pop_due(1000), None);
    }

    #[test]
    fn respects_deadline() {
        let mut clock = VirtualClock::new();
        clock.schedule(500, ());
        assert_eq!(clock.pop_due(499), None);
        assert_eq!(clock.pending_count(), 1);
        assert_eq!(clock.pop_due(500), Some(()));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut clock = VirtualClock::new();
        let id = clock.schedule(100, "cancelled");
        clock.schedule(200, "kept");
        clock.cancel(id);
        assert_eq!(clock.pop_due(1000), Some("kept"));
        assert_eq!(clock.pop_due(1000), None);
    }
}
