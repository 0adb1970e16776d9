//! Wall-clock timers on the tokio runtime.
//!
//! Each timer is its own task sending its id down a channel once per
//! period. The main loop turns those ids into `Message::Tick`.
//! Dropping the `TimerHandle` aborts the task.

use revenue_core::{
    clock::{Scheduler, TimerHandle},
    error::{StreamError, StreamResult},
    types::TimerId,
};
use std::time::Duration;
use tokio::{
    sync::mpsc::UnboundedSender,
    time::{interval_at, Instant, MissedTickBehavior},
};

pub struct TokioScheduler {
    tx:      UnboundedSender<TimerId>,
    next_id: TimerId,
}

impl TokioScheduler {
    pub fn new(tx: UnboundedSender<TimerId>) -> Self {
        Self { tx, next_id: 0 }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_every(&mut self, period: Duration) -> StreamResult<TimerHandle> {
        if self.tx.is_closed() {
            return Err(StreamError::SchedulerClosed);
        }
        if period.is_zero() {
            return Err(StreamError::Other(anyhow::anyhow!("timer period must be non-zero")));
        }

        self.next_id += 1;
        let id = self.next_id;
        let tx = self.tx.clone();

        let task = tokio::spawn(async move {
            // First firing one full period after install, like setInterval.
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(id).is_err() {
                    break;
                }
            }
        });

        log::debug!("timer {id} installed ({period:?})");
        Ok(TimerHandle::new(id, move || task.abort()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revenue_core::{
        command::{Command, Message},
        format::IndianLocale,
        session::Session,
        theme::Theme,
    };
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn fires_every_period_until_dropped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let handle = scheduler.schedule_every(Duration::from_secs(1)).unwrap();
        let id = handle.id();

        let start = Instant::now();
        assert_eq!(rx.recv().await, Some(id));
        assert!(start.elapsed() >= Duration::from_secs(1));
        assert_eq!(rx.recv().await, Some(id));

        drop(handle);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn closed_channel_refuses_new_timers() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut scheduler = TokioScheduler::new(tx);
        let err = scheduler.schedule_every(Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, StreamError::SchedulerClosed));
    }

    #[tokio::test(start_paused = true)]
    async fn session_accrues_on_real_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = Session::new(TokioScheduler::new(tx), IndianLocale, Theme::Light);
        session.dispatch(Command::Input { text: "3155760000".into() }).unwrap();
        session.dispatch(Command::Start).unwrap();

        for _ in 0..3 {
            let id = rx.recv().await.unwrap();
            session.dispatch(Message::Tick(id)).unwrap();
        }
        assert_eq!(session.engine().ticks(), 3);
        assert!((session.engine().earnings() - 300.0).abs() < 1e-6);
    }
}
