use serde::Serialize;

use crate::{
    core::{
        cycle::DrivingCycle,
        sample::Sample,
        state::SimulationState,
        summary::RunSummary,
        vehicle::VehicleParameters,
    },
    prelude::*,
    quantity::{proportions::Percent, time::Seconds},
};

/// Receives everything the engine publishes.
///
/// All methods do nothing by default.
pub trait Observer {
    fn on_sample(&mut self, _sample: &Sample) {}

    fn on_summary(&mut self, _summary: &RunSummary) {}

    fn on_progress(&mut self, _progress: Progress) {}

    /// Called once per run, after the final progress when the run completes on its own.
    fn on_finished(&mut self, _completion: Completion) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_sample(&mut self, sample: &Sample) {
        (**self).on_sample(sample);
    }

    fn on_summary(&mut self, summary: &RunSummary) {
        (**self).on_summary(summary);
    }

    fn on_progress(&mut self, progress: Progress) {
        (**self).on_progress(progress);
    }

    fn on_finished(&mut self, completion: Completion) {
        (**self).on_finished(completion);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Running,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    /// Reached the end of the driving cycle.
    Completed,

    /// Interrupted by [`Engine::stop`] or [`Engine::reset`].
    Stopped,
}

/// Identifies a single run.
///
/// A tick carrying a generation other than the current one belongs to a finished run and is ignored.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Generation(u64);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub percent: Percent,

    /// Simulated time of the latest tick.
    pub time: Seconds,
}

impl Progress {
    pub const ZERO: Self = Self { percent: Percent::ZERO, time: Seconds::ZERO };
}

/// What the next run is going to simulate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub parameters: VehicleParameters,
    pub cycle: DrivingCycle,
}

/// In-flight or last run.
#[derive(Clone, Debug)]
struct Run {
    /// Snapshot taken at start, so that reconfiguring does not affect the run.
    configuration: Configuration,

    state: SimulationState,
}

/// Drives the step function and owns everything a run produces.
///
/// The engine does not keep time by itself: somebody has to call [`Engine::tick`].
pub struct Engine<O = ()> {
    observer: O,
    configuration: Configuration,
    status: Status,
    generation: Generation,
    run: Option<Run>,
    samples: Vec<Sample>,
    summary: Option<RunSummary>,
    progress: Progress,
}

impl<O: Observer + Default> Default for Engine<O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<O: Observer> Engine<O> {
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            configuration: Configuration::default(),
            status: Status::Idle,
            generation: Generation::default(),
            run: None,
            samples: Vec::new(),
            summary: None,
            progress: Progress::ZERO,
        }
    }

    /// Start a fresh run.
    ///
    /// Returns `None` and changes nothing if a run is already in progress.
    pub fn start(
        &mut self,
        parameters: VehicleParameters,
        cycle: DrivingCycle,
    ) -> Option<Generation> {
        if self.status == Status::Running {
            debug!(generation = self.generation.0, "already running, ignoring the start");
            return None;
        }
        self.configure(Configuration { parameters, cycle });
        self.generation = Generation(self.generation.0 + 1);
        self.run = Some(Run {
            configuration: self.configuration.clone(),
            state: SimulationState::default(),
        });
        self.samples.clear();
        self.summary = Some(RunSummary::initial());
        self.progress = Progress::ZERO;
        self.status = Status::Running;
        info!(
            generation = self.generation.0,
            cycle = %self.configuration.cycle.name,
            duration = %self.configuration.cycle.duration(),
            "started"
        );
        Some(self.generation)
    }

    /// Replace the configuration for the next run, the current run keeps its own copy.
    pub fn configure(&mut self, configuration: Configuration) {
        self.configuration = configuration;
    }

    /// Advance the run of the given generation by one tick.
    ///
    /// Returns [`Status::Idle`] once the generation is over: the run has completed, was stopped,
    /// or has been superseded by another run.
    pub fn tick(&mut self, generation: Generation) -> Status {
        if self.status != Status::Running || generation != self.generation {
            debug!(
                generation = generation.0,
                current = self.generation.0,
                "ignoring the stale tick"
            );
            return Status::Idle;
        }
        let Some(run) = self.run.as_mut() else {
            self.status = Status::Idle;
            return Status::Idle;
        };

        let duration = run.configuration.cycle.duration();
        let time = run.state.time();
        if time >= duration {
            self.progress = Progress { percent: Percent::HUNDRED, time: duration };
            self.observer.on_progress(self.progress);
            self.status = Status::Idle;
            info!(
                generation = generation.0,
                n_samples = self.samples.len(),
                distance = %run.state.distance,
                final_soc = %run.state.state_of_charge,
                "completed"
            );
            self.observer.on_finished(Completion::Completed);
            return Status::Idle;
        }

        let step = run.state.step(&run.configuration.parameters, &run.configuration.cycle);
        run.state = step.state;
        trace!(
            time = %time,
            speed = %step.sample.speed,
            power = %step.sample.power,
            mode = ?step.mode,
            soc = %step.sample.soc,
            "ticked"
        );

        self.samples.push(step.sample);
        self.observer.on_sample(&step.sample);
        self.summary = Some(step.summary);
        self.observer.on_summary(&step.summary);
        self.progress = Progress { percent: Percent::from_proportion(time / duration), time };
        self.observer.on_progress(self.progress);
        Status::Running
    }

    /// Interrupt the current run, keeping whatever it has produced so far.
    pub fn stop(&mut self) {
        if self.status == Status::Running {
            self.status = Status::Idle;
            info!(generation = self.generation.0, n_samples = self.samples.len(), "stopped");
            self.observer.on_finished(Completion::Stopped);
        } else {
            debug!("not running, nothing to stop");
        }
    }

    /// Stop and forget everything, including the configuration.
    pub fn reset(&mut self) {
        self.stop();
        self.configuration = Configuration::default();
        self.run = None;
        self.samples.clear();
        self.summary = None;
        self.progress = Progress::ZERO;
        debug!("reset");
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub const fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    pub const fn progress(&self) -> Progress {
        self.progress
    }

    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Simulation state of the current or last run.
    pub fn state(&self) -> Option<&SimulationState> {
        self.run.as_ref().map(|run| &run.state)
    }

    pub const fn observer(&self) -> &O {
        &self.observer
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{cycle::Breakpoint, state::TIME_STEP},
        quantity::{energy::KilowattHours, mass::Kilograms},
    };

    #[derive(Debug, PartialEq)]
    enum Event {
        Sample,
        Summary,
        Progress(Progress),
        Finished(Completion),
    }

    #[derive(Default)]
    struct Recorder(Vec<Event>);

    impl Observer for Recorder {
        fn on_sample(&mut self, _sample: &Sample) {
            self.0.push(Event::Sample);
        }

        fn on_summary(&mut self, _summary: &RunSummary) {
            self.0.push(Event::Summary);
        }

        fn on_progress(&mut self, progress: Progress) {
            self.0.push(Event::Progress(progress));
        }

        fn on_finished(&mut self, completion: Completion) {
            self.0.push(Event::Finished(completion));
        }
    }

    fn start<O: Observer>(engine: &mut Engine<O>, cycle: DrivingCycle) -> Generation {
        engine.start(VehicleParameters::default(), cycle).unwrap()
    }

    fn run_to_end<O: Observer>(engine: &mut Engine<O>, generation: Generation) -> usize {
        let mut n_ticks = 0;
        while engine.tick(generation) == Status::Running {
            n_ticks += 1;
        }
        n_ticks
    }

    #[test]
    fn test_start() {
        let mut engine = Engine::<()>::default();
        assert_eq!(engine.status(), Status::Idle);
        assert!(engine.summary().is_none());
        assert!(engine.start(VehicleParameters::default(), DrivingCycle::highway()).is_some());
        assert_eq!(engine.status(), Status::Running);
        assert_eq!(engine.summary(), Some(&RunSummary::initial()));
        assert_eq!(engine.progress(), Progress::ZERO);
        assert_eq!(engine.configuration().cycle, DrivingCycle::highway());
        assert!(engine.samples().is_empty());
    }

    /// Verify that starting a running engine is a no-op.
    #[test]
    fn test_start_while_running() {
        let mut engine = Engine::<()>::default();
        let generation = start(&mut engine, DrivingCycle::urban());
        engine.tick(generation);
        assert!(engine.start(VehicleParameters::default(), DrivingCycle::highway()).is_none());
        assert_eq!(engine.configuration().cycle, DrivingCycle::urban());
        assert_eq!(engine.samples().len(), 1);
        assert_eq!(engine.tick(generation), Status::Running);
    }

    /// Verify the complete run over the urban cycle.
    #[test]
    fn test_natural_completion() {
        let mut engine = Engine::new(Recorder::default());
        let generation = start(&mut engine, DrivingCycle::urban());
        assert_eq!(run_to_end(&mut engine, generation), 2400);
        assert_eq!(engine.status(), Status::Idle);
        assert_eq!(engine.samples().len(), 2400);
        assert_eq!(engine.progress(), Progress { percent: Percent::HUNDRED, time: Seconds(240.0) });

        let events = &engine.observer().0;
        assert_eq!(events.len(), 3 * 2400 + 2);
        assert_eq!(
            events[events.len() - 2],
            Event::Progress(Progress { percent: Percent::HUNDRED, time: Seconds(240.0) }),
        );
        assert_eq!(events[events.len() - 1], Event::Finished(Completion::Completed));

        let summary = engine.summary().unwrap();
        assert!(summary.total_distance.0 > 0.0);
        assert!(summary.final_soc <= Percent::HUNDRED);
        assert!(summary.avg_efficiency.0 >= 0.0);
        assert_eq!(summary, &engine.state().unwrap().summary());
    }

    /// Verify that no more samples are produced after completion.
    #[test]
    fn test_tick_after_completion() {
        let mut engine = Engine::new(Recorder::default());
        let generation = start(&mut engine, DrivingCycle::highway());
        run_to_end(&mut engine, generation);
        let n_events = engine.observer().0.len();
        assert_eq!(engine.tick(generation), Status::Idle);
        assert_eq!(engine.samples().len(), 2400);
        assert_eq!(engine.observer().0.len(), n_events);
    }

    /// Verify that time advances by exactly one step and progress never goes back.
    #[test]
    fn test_progress_is_monotonic() {
        let mut engine = Engine::new(Recorder::default());
        let generation = start(&mut engine, DrivingCycle::highway());
        run_to_end(&mut engine, generation);
        let progress: Vec<Progress> = engine
            .observer()
            .0
            .iter()
            .filter_map(|event| match event {
                Event::Progress(progress) => Some(*progress),
                _ => None,
            })
            .collect();
        assert_eq!(progress.len(), 2401);
        for (previous, next) in progress.iter().zip(&progress[1..]) {
            assert!(next.percent >= previous.percent);
            assert!(next.time > previous.time);
        }
        for (sample, next) in engine.samples().iter().zip(&engine.samples()[1..]) {
            assert_abs_diff_eq!((next.time - sample.time).0 * 60.0, TIME_STEP.0, epsilon = 1e-9);
        }
    }

    /// Verify that stopping is idempotent and keeps the partial results.
    #[test]
    fn test_stop() {
        let mut engine = Engine::new(Recorder::default());
        let generation = start(&mut engine, DrivingCycle::urban());
        for _ in 0..100 {
            engine.tick(generation);
        }
        engine.stop();
        engine.stop();
        assert_eq!(engine.status(), Status::Idle);
        assert_eq!(engine.samples().len(), 100);
        assert!(engine.summary().is_some());
        assert_eq!(engine.tick(generation), Status::Idle);
        assert_eq!(engine.samples().len(), 100);

        let finished: Vec<_> =
            engine.observer().0.iter().filter(|event| matches!(event, Event::Finished(_))).collect();
        assert_eq!(finished, [&Event::Finished(Completion::Stopped)]);
    }

    #[test]
    fn test_stop_while_idle() {
        let mut engine = Engine::new(Recorder::default());
        engine.stop();
        assert!(engine.observer().0.is_empty());
    }

    /// Verify that a restart begins from scratch and that ticks of the previous run are ignored.
    #[test]
    fn test_stale_generation() {
        let mut engine = Engine::<()>::default();
        let first = start(&mut engine, DrivingCycle::urban());
        for _ in 0..50 {
            engine.tick(first);
        }
        engine.stop();
        let second = start(&mut engine, DrivingCycle::urban());
        assert_ne!(first, second);
        assert!(engine.samples().is_empty());
        assert_eq!(engine.state().unwrap().n_ticks, 0);

        assert_eq!(engine.tick(first), Status::Idle);
        assert!(engine.samples().is_empty());
        assert_eq!(engine.tick(second), Status::Running);
        assert_eq!(engine.samples().len(), 1);
        assert_eq!(engine.samples()[0].time.0, 0.0);
    }

    /// Verify that resetting a running engine stops it and clears everything.
    #[test]
    fn test_reset_while_running() {
        let mut engine = Engine::new(Recorder::default());
        let parameters =
            VehicleParameters { vehicle_weight: Kilograms(2500.0), ..Default::default() };
        let generation = engine.start(parameters, DrivingCycle::highway()).unwrap();
        for _ in 0..10 {
            engine.tick(generation);
        }
        engine.reset();

        assert_eq!(engine.status(), Status::Idle);
        assert!(engine.samples().is_empty());
        assert!(engine.summary().is_none());
        assert!(engine.state().is_none());
        assert_eq!(engine.progress(), Progress::ZERO);
        assert_eq!(engine.configuration(), &Configuration::default());
        assert_eq!(engine.configuration().cycle, DrivingCycle::catalog()[0]);
        assert_eq!(engine.observer().0.last(), Some(&Event::Finished(Completion::Stopped)));

        let n_events = engine.observer().0.len();
        assert_eq!(engine.tick(generation), Status::Idle);
        assert!(engine.samples().is_empty());
        assert_eq!(engine.observer().0.len(), n_events);
    }

    /// Verify that reconfiguring mid-run does not affect the run.
    #[test]
    fn test_configuration_snapshot() {
        let mut reference = Engine::<()>::default();
        let generation = start(&mut reference, DrivingCycle::urban());
        run_to_end(&mut reference, generation);

        let mut engine = Engine::<()>::default();
        let generation = start(&mut engine, DrivingCycle::urban());
        engine.tick(generation);
        engine.configure(Configuration {
            parameters: VehicleParameters {
                battery_capacity: KilowattHours(10.0),
                ..Default::default()
            },
            cycle: DrivingCycle::highway(),
        });
        run_to_end(&mut engine, generation);
        assert_eq!(engine.samples(), reference.samples());
        assert_eq!(engine.configuration().cycle, DrivingCycle::highway());
    }

    /// Verify that the same configuration gives bit-identical samples.
    #[test]
    fn test_deterministic() {
        let mut engine = Engine::<()>::default();
        let generation = start(&mut engine, DrivingCycle::urban());
        run_to_end(&mut engine, generation);
        let first = engine.samples().to_vec();

        let generation = start(&mut engine, DrivingCycle::urban());
        run_to_end(&mut engine, generation);
        let second = engine.samples();

        assert_eq!(first.len(), second.len());
        for (first, second) in first.iter().zip(second) {
            assert_eq!(first.time.0.to_bits(), second.time.0.to_bits());
            assert_eq!(first.speed.0.to_bits(), second.speed.0.to_bits());
            assert_eq!(first.soc.0.to_bits(), second.soc.0.to_bits());
            assert_eq!(first.power.0.to_bits(), second.power.0.to_bits());
        }
    }

    /// A cycle without duration completes on the very first tick.
    #[test]
    fn test_instant_cycle() {
        let mut engine = Engine::new(Recorder::default());
        let cycle = DrivingCycle {
            name: "Instant".to_string(),
            breakpoints: vec![Breakpoint::new(0.0, 0.0)],
        };
        let generation = engine.start(VehicleParameters::default(), cycle).unwrap();
        assert_eq!(engine.tick(generation), Status::Idle);
        assert!(engine.samples().is_empty());
        assert_eq!(engine.progress().percent, Percent::HUNDRED);
        assert_eq!(engine.observer().0.last(), Some(&Event::Finished(Completion::Completed)));
    }

    /// Verify that an observer can be lent to the engine.
    #[test]
    fn test_borrowed_observer() {
        let mut recorder = Recorder::default();
        {
            let mut engine = Engine::new(&mut recorder);
            let generation = start(&mut engine, DrivingCycle::urban());
            engine.tick(generation);
        }
        assert_eq!(recorder.0.len(), 3);
    }
}
