use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use bon::Builder;
use evsim::{
    core::engine::{Completion, Engine, Generation, Observer, Status},
    prelude::*,
    quantity::proportions::Percent,
};
use tokio::{
    task::yield_now,
    time::{Interval, MissedTickBehavior, interval},
};

/// Paces the engine ticks in wall-clock time.
#[derive(Builder)]
pub struct Driver {
    /// Wall-clock time per tick, zero means no pacing at all.
    #[builder(into)]
    pace: Duration,

    should_terminate: Arc<AtomicBool>,
}

impl Driver {
    /// Tick the run of the given generation until it is over.
    #[instrument(skip_all, fields(pace = ?self.pace))]
    pub async fn drive<O: Observer>(
        &self,
        engine: &mut Engine<O>,
        generation: Generation,
    ) -> Completion {
        let mut interval = self.interval();
        loop {
            match &mut interval {
                Some(interval) => {
                    interval.tick().await;
                }
                None => yield_now().await,
            }
            if self.should_terminate.load(Ordering::Relaxed) {
                warn!("terminating…");
                engine.stop();
                return Completion::Stopped;
            }
            if engine.tick(generation) == Status::Idle {
                break;
            }
        }
        if engine.progress().percent == Percent::HUNDRED {
            Completion::Completed
        } else {
            Completion::Stopped
        }
    }

    fn interval(&self) -> Option<Interval> {
        if self.pace.is_zero() {
            return None;
        }
        let mut interval = interval(self.pace);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Some(interval)
    }
}
