mod catalog;
mod cursor;

use std::{fs, path::Path};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use self::cursor::Cursor;
use crate::{
    prelude::*,
    quantity::{speed::KilometresPerHour, time::Seconds},
};

/// Speed anchor of a piecewise-linear driving profile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub time: Seconds,
    pub speed: KilometresPerHour,
}

impl Breakpoint {
    pub const fn new(time: f64, speed: f64) -> Self {
        Self { time: Seconds(time), speed: KilometresPerHour(speed) }
    }
}

/// Speed-over-time profile the vehicle follows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivingCycle {
    pub name: String,
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for DrivingCycle {
    fn default() -> Self {
        Self::urban()
    }
}

impl DrivingCycle {
    /// Time of the last breakpoint.
    pub fn duration(&self) -> Seconds {
        self.breakpoints.last().map_or(Seconds::ZERO, |breakpoint| breakpoint.time)
    }

    /// Interpolated speed at the specified time.
    ///
    /// Scans from the first breakpoint, see [`Cursor`] for repeated lookups with growing time.
    pub fn speed_at(&self, time: Seconds) -> KilometresPerHour {
        let next_index = self.breakpoints.iter().position(|breakpoint| breakpoint.time >= time);
        self.interpolate(next_index, time)
    }

    /// Interpolate between the breakpoint at `next_index` and the one before it.
    ///
    /// `None` means that the time is past the last breakpoint, in which case its speed holds.
    fn interpolate(&self, next_index: Option<usize>, time: Seconds) -> KilometresPerHour {
        let Some(last) = self.breakpoints.last() else {
            return KilometresPerHour::ZERO;
        };
        let (previous, next) = next_index.map_or((last, last), |index| {
            (&self.breakpoints[index.saturating_sub(1)], &self.breakpoints[index])
        });
        if next.time == previous.time || time >= next.time {
            next.speed
        } else {
            let fraction = (time - previous.time) / (next.time - previous.time);
            previous.speed + (next.speed - previous.speed) * fraction
        }
    }

    pub fn peak_speed(&self) -> KilometresPerHour {
        self.breakpoints
            .iter()
            .map(|breakpoint| breakpoint.speed)
            .max()
            .unwrap_or(KilometresPerHour::ZERO)
    }

    /// Average speed over the whole cycle, integrated over the linear segments.
    pub fn mean_speed(&self) -> KilometresPerHour {
        let duration = self.duration();
        if duration <= Seconds::ZERO {
            return KilometresPerHour::ZERO;
        }
        let integral: f64 = self
            .breakpoints
            .iter()
            .tuple_windows()
            .map(|(previous, next)| {
                (next.time - previous.time).0 * (previous.speed + next.speed).0 * 0.5
            })
            .sum();
        KilometresPerHour(integral / duration.0)
    }

    /// Check the profile shape: starts at zero time, never goes back in time, and sane speeds.
    pub fn validate(&self) -> Result {
        let Some(first) = self.breakpoints.first() else {
            bail!("driving cycle `{}` has no breakpoints", self.name);
        };
        ensure!(
            first.time == Seconds::ZERO,
            "driving cycle `{}` must start at 0 s, but starts at {}",
            self.name,
            first.time,
        );
        for (index, breakpoint) in self.breakpoints.iter().enumerate() {
            ensure!(
                breakpoint.time.0.is_finite() && breakpoint.speed.0.is_finite(),
                "breakpoint #{index} of `{}` is not finite",
                self.name,
            );
            ensure!(
                breakpoint.speed >= KilometresPerHour::ZERO,
                "breakpoint #{index} of `{}` has negative speed {}",
                self.name,
                breakpoint.speed,
            );
        }
        for (index, (previous, next)) in self.breakpoints.iter().tuple_windows().enumerate() {
            ensure!(
                next.time >= previous.time,
                "breakpoint #{} of `{}` goes back in time: {} after {}",
                index + 1,
                self.name,
                next.time,
                previous.time,
            );
        }
        Ok(())
    }

    /// Load and validate a custom cycle.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_toml(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let cycle: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        cycle.validate()?;
        info!(name = %cycle.name, n_breakpoints = cycle.breakpoints.len(), "loaded driving cycle");
        Ok(cycle)
    }
}
