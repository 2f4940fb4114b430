use std::path::PathBuf;

use clap::Parser;
use evsim::{core::cycle::DrivingCycle, prelude::*};

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum CycleName {
    /// Stop-and-go city driving.
    Urban,

    /// Sustained high speed.
    Highway,
}

impl From<CycleName> for DrivingCycle {
    fn from(name: CycleName) -> Self {
        match name {
            CycleName::Urban => Self::urban(),
            CycleName::Highway => Self::highway(),
        }
    }
}

#[must_use]
#[derive(Parser)]
pub struct CycleArgs {
    /// Bundled driving cycle.
    #[clap(long = "cycle", default_value = "urban", env = "DRIVING_CYCLE")]
    pub name: CycleName,

    /// Custom driving cycle: a TOML file with `name` and `[[breakpoints]]` of `time` and `speed`.
    #[clap(long = "cycle-file", env = "DRIVING_CYCLE_FILE", conflicts_with = "name")]
    pub path: Option<PathBuf>,
}

impl CycleArgs {
    pub fn load(&self) -> Result<DrivingCycle> {
        match &self.path {
            Some(path) => DrivingCycle::read_toml(path),
            None => Ok(self.name.into()),
        }
    }
}
