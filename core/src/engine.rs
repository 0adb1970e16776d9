//! The accrual engine: annual figure in, once-per-second accumulation out.
//!
//! STATE MACHINE:
//!   Idle    --start-->  Running   (requires amount > 0)
//!   Running --pause-->  Paused    (earnings kept)
//!   Paused  --start-->  Running   (earnings restart from zero)
//!   any     --reset-->  Idle      (earnings cleared)
//!
//! RULES:
//!   - Earnings change only on a tick, only while Running, and only by
//!     `amount / SECONDS_PER_YEAR`.
//!   - At most one timer is live. Start releases the previous one before
//!     installing the next.
//!   - Ticks from a released timer are ignored, even if already queued.
//!   - The engine never formats numbers; see `format`.

use crate::{
    clock::{Scheduler, TimerHandle},
    error::StreamResult,
    event::StreamEvent,
    normalizer::NormalizedInput,
    rates::DerivedRates,
    types::{Amount, TickCount, TimerId, SECONDS_PER_YEAR, TICK_PERIOD},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    Idle,
    Running,
    Paused,
}

pub struct AccrualEngine<S: Scheduler> {
    scheduler:   S,
    input:       NormalizedInput,
    state:       EngineState,
    earnings:    f64,
    per_second:  f64,
    ticks:       TickCount,
    has_started: bool,
    started_at:  Option<DateTime<Utc>>,
    /// Dropping this cancels the timer; teardown needs no extra code.
    timer:       Option<TimerHandle>,
}

impl<S: Scheduler> AccrualEngine<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            input:       NormalizedInput::default(),
            state:       EngineState::Idle,
            earnings:    0.0,
            per_second:  0.0,
            ticks:       0,
            has_started: false,
            started_at:  None,
            timer:       None,
        }
    }

    pub fn state(&self) -> EngineState { self.state }
    pub fn is_running(&self) -> bool { self.state == EngineState::Running }
    pub fn earnings(&self) -> f64 { self.earnings }
    pub fn per_second(&self) -> f64 { self.per_second }
    pub fn ticks(&self) -> TickCount { self.ticks }
    pub fn has_started(&self) -> bool { self.has_started }
    pub fn started_at(&self) -> Option<DateTime<Utc>> { self.started_at }
    pub fn input(&self) -> &NormalizedInput { &self.input }
    pub fn amount(&self) -> Option<Amount> { self.input.amount() }

    /// Id of the live timer, if any.
    pub fn timer_id(&self) -> Option<TimerId> {
        self.timer.as_ref().map(TimerHandle::id)
    }

    pub fn can_start(&self) -> bool {
        self.amount().is_some_and(|a| a > 0)
    }

    /// Input is locked while running.
    pub fn input_enabled(&self) -> bool { !self.is_running() }

    /// Daily/hourly/minute shares of the current amount, when positive.
    pub fn rates(&self) -> Option<DerivedRates> {
        self.amount().filter(|a| *a > 0).map(DerivedRates::from_annual)
    }

    pub fn set_input(&mut self, input: NormalizedInput) -> StreamEvent {
        if self.is_running() {
            log::warn!("input ignored while running");
            return StreamEvent::InputIgnored;
        }
        let event = StreamEvent::InputChanged {
            digits:  input.digits.clone(),
            display: input.display.clone(),
        };
        self.input = input;
        event
    }

    pub fn start(&mut self) -> StreamResult<StreamEvent> {
        let Some(amount) = self.amount().filter(|a| *a > 0) else {
            log::debug!("start rejected: no positive amount");
            return Ok(StreamEvent::StartRejected);
        };

        // Release the old timer first so two tick streams never overlap.
        self.release_timer();
        if self.is_running() {
            self.state = EngineState::Paused;
        }

        let handle = self.scheduler.schedule_every(TICK_PERIOD)?;
        let timer_id = handle.id();

        self.timer       = Some(handle);
        self.earnings    = 0.0;
        self.ticks       = 0;
        self.per_second  = amount as f64 / SECONDS_PER_YEAR;
        self.has_started = true;
        self.started_at  = Some(Utc::now());
        self.state       = EngineState::Running;

        log::debug!(
            "started: amount={amount} per_second={:.6} timer={timer_id}",
            self.per_second
        );
        Ok(StreamEvent::Started { amount, per_second: self.per_second, timer_id })
    }

    /// Stop ticking and keep earnings. `None` if nothing was running.
    pub fn pause(&mut self) -> Option<StreamEvent> {
        self.release_timer();
        if !self.is_running() {
            return None;
        }
        self.state = EngineState::Paused;
        log::debug!("paused: earnings={:.4} ticks={}", self.earnings, self.ticks);
        Some(StreamEvent::Paused { earnings: self.earnings, ticks: self.ticks })
    }

    /// Stop, clear earnings, and return to `Idle`. Idempotent.
    pub fn reset(&mut self) -> StreamEvent {
        self.pause();
        self.earnings    = 0.0;
        self.ticks       = 0;
        self.has_started = false;
        self.started_at  = None;
        self.state       = EngineState::Idle;
        log::debug!("reset");
        StreamEvent::Reset
    }

    /// Apply one firing of `timer_id`. Stale or unexpected ticks return `None`.
    pub fn on_tick(&mut self, timer_id: TimerId) -> Option<StreamEvent> {
        if !self.is_running() || self.timer_id() != Some(timer_id) {
            log::warn!("stale tick from timer {timer_id} ignored");
            return None;
        }
        self.earnings += self.per_second;
        self.ticks += 1;
        log::trace!("tick={} earnings={:.6}", self.ticks, self.earnings);
        Some(StreamEvent::Ticked { tick: self.ticks, earnings: self.earnings })
    }

    /// Release the timer ahead of drop. Earnings are left as they are.
    pub fn shutdown(&mut self) {
        self.pause();
    }

    fn release_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.cancel();
        }
    }
}
