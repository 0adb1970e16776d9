//! Timer scheduling: the one periodic resource in the system.
//!
//! RULE: a timer lives exactly as long as its `TimerHandle`.
//! Dropping the handle cancels the timer, so every exit path
//! (pause, reset, teardown, unwinding) releases it.

use crate::{
    error::{StreamError, StreamResult},
    types::TimerId,
};
use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
    time::Duration,
};

/// Installs repeating timers. Each firing is delivered back to the owner
/// as the timer's `TimerId`, never as a callback into engine state.
pub trait Scheduler {
    fn schedule_every(&mut self, period: Duration) -> StreamResult<TimerHandle>;
}

/// Owns one repeating timer. Cancels on drop.
pub struct TimerHandle {
    id:     TimerId,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(id: TimerId, cancel: impl FnOnce() + 'static) -> Self {
        Self { id, cancel: Some(Box::new(cancel)) }
    }

    pub fn id(&self) -> TimerId { self.id }

    /// Explicit form of dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            log::debug!("timer {} cancelled", self.id);
            cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle").field("id", &self.id).finish()
    }
}

#[derive(Debug)]
struct ManualTimer {
    id:       TimerId,
    period:   Duration,
    next_due: Duration,
}

#[derive(Debug, Default)]
struct ClockState {
    now:     Duration,
    next_id: TimerId,
    timers:  Vec<ManualTimer>,
}

/// Deterministic scheduler driven by explicit `advance()` calls.
/// Used by headless runs and tests. Clones share the same timeline.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn new() -> Self { Self::default() }

    /// Time elapsed on this clock since creation.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of timers not yet cancelled.
    pub fn active_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Move time forward, returning every firing in order.
    /// Simultaneous firings are ordered by timer id.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let mut state = self.inner.borrow_mut();
        let target = state.now + by;
        let mut fired = Vec::new();

        loop {
            let due = state
                .timers
                .iter()
                .filter(|t| t.next_due <= target)
                .min_by_key(|t| (t.next_due, t.id))
                .map(|t| (t.id, t.next_due));
            let Some((id, at)) = due else { break };

            state.now = at;
            if let Some(timer) = state.timers.iter_mut().find(|t| t.id == id) {
                timer.next_due += timer.period;
            }
            fired.push(id);
        }

        state.now = target;
        fired
    }
}

impl Scheduler for ManualClock {
    fn schedule_every(&mut self, period: Duration) -> StreamResult<TimerHandle> {
        if period.is_zero() {
            return Err(StreamError::Other(anyhow::anyhow!("timer period must be non-zero")));
        }

        let id = {
            let mut state = self.inner.borrow_mut();
            state.next_id += 1;
            let id = state.next_id;
            let next_due = state.now + period;
            state.timers.push(ManualTimer { id, period, next_due });
            id
        };

        let weak: Weak<RefCell<ClockState>> = Rc::downgrade(&self.inner);
        Ok(TimerHandle::new(id, move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().timers.retain(|t| t.id != id);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_firing_is_one_period_after_install() {
        let mut clock = ManualClock::new();
        let handle = clock.schedule_every(Duration::from_secs(1)).unwrap();

        assert!(clock.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(clock.advance(Duration::from_millis(1)), vec![handle.id()]);
        assert_eq!(clock.advance(Duration::from_secs(3)).len(), 3);
    }

    #[test]
    fn dropping_handle_cancels_timer() {
        let mut clock = ManualClock::new();
        let handle = clock.schedule_every(Duration::from_secs(1)).unwrap();
        assert_eq!(clock.active_timers(), 1);

        drop(handle);
        assert_eq!(clock.active_timers(), 0);
        assert!(clock.advance(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn handle_outliving_clock_is_harmless() {
        let mut clock = ManualClock::new();
        let handle = clock.schedule_every(Duration::from_secs(1)).unwrap();
        drop(clock);
        handle.cancel();
    }

    #[test]
    fn zero_period_is_rejected() {
        let mut clock = ManualClock::new();
        assert!(clock.schedule_every(Duration::ZERO).is_err());
    }
}
