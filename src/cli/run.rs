use std::sync::{Arc, atomic::AtomicBool};

use clap::Parser;
use evsim::{
    core::{
        cycle::DrivingCycle,
        engine::{Completion, Engine, Progress},
        sample::Sample,
        summary::RunSummary,
        vehicle::VehicleParameters,
    },
    prelude::*,
};
use serde::Serialize;

use crate::{
    cli::{cycle::CycleArgs, vehicle::VehicleArgs},
    driver::Driver,
    reporter::Reporter,
    tables::{build_samples_table, build_summary_table},
};

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Format {
    /// Human-readable tables.
    Table,

    /// Single JSON document with every sample.
    Json,
}

#[derive(Parser)]
pub struct RunArgs {
    #[clap(flatten)]
    vehicle: VehicleArgs,

    #[clap(flatten)]
    cycle: CycleArgs,

    /// Wall-clock time per tick: `0s` runs as fast as possible, `100ms` runs in real time.
    #[clap(long, default_value = "0s", env = "PACE")]
    pace: humantime::Duration,

    /// Simulated time between the printed samples.
    #[clap(long, default_value = "10s", env = "SAMPLE_EVERY")]
    every: humantime::Duration,

    #[clap(long, default_value = "table", env = "OUTPUT_FORMAT")]
    format: Format,
}

/// Machine-readable outcome of a run.
#[derive(Serialize)]
struct Report<'a> {
    cycle: &'a DrivingCycle,
    parameters: &'a VehicleParameters,
    completion: Completion,
    progress: Progress,
    summary: Option<&'a RunSummary>,
    samples: &'a [Sample],
}

impl RunArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let parameters = VehicleParameters::from(&self.vehicle);
        parameters.validate().context("invalid vehicle parameters")?;
        for atypical in parameters.atypical() {
            warn!("{atypical}");
        }
        let cycle = self.cycle.load()?;
        let duration = cycle.duration();

        let should_terminate = Arc::new(AtomicBool::new(false));
        for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&should_terminate))
                .context("failed to register the signal handler")?;
        }

        let mut engine = Engine::new(Reporter::default());
        let Some(generation) = engine.start(parameters, cycle) else {
            bail!("the engine is already running");
        };
        let completion = Driver::builder()
            .pace(self.pace)
            .should_terminate(should_terminate)
            .build()
            .drive(&mut engine, generation)
            .await;

        let configuration = engine.configuration();
        match self.format {
            Format::Table => {
                println!("{}", build_samples_table(engine.samples(), self.every.into()));
                if let Some(summary) = engine.summary() {
                    println!("{}", build_summary_table(summary));
                }
                println!("{:.1} / {:.0}", engine.progress().time, duration);
            }
            Format::Json => {
                let report = Report {
                    cycle: &configuration.cycle,
                    parameters: &configuration.parameters,
                    completion,
                    progress: engine.progress(),
                    summary: engine.summary(),
                    samples: engine.samples(),
                };
                let json = serde_json::to_string_pretty(&report)
                    .context("failed to serialize the report")?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
