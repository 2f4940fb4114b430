use evsim::{
    core::engine::{Completion, Observer, Progress},
    prelude::*,
    quantity::proportions::Percent,
};

/// Logs the run progress every [`Reporter::STEP`].
pub struct Reporter {
    next_milestone: Percent,
}

impl Default for Reporter {
    fn default() -> Self {
        Self { next_milestone: Self::STEP }
    }
}

impl Reporter {
    const STEP: Percent = Percent(10.0);
}

impl Observer for Reporter {
    fn on_progress(&mut self, progress: Progress) {
        if progress.percent < self.next_milestone {
            return;
        }
        while self.next_milestone <= progress.percent {
            self.next_milestone += Self::STEP;
        }
        info!(
            progress = %format!("{:.0}", progress.percent),
            time = %format!("{:.1}", progress.time),
            "running…"
        );
    }

    fn on_finished(&mut self, completion: Completion) {
        match completion {
            Completion::Completed => info!("the run has completed"),
            Completion::Stopped => warn!("the run has been interrupted"),
        }
    }
}
