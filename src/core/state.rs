use crate::{
    core::{
        cycle::{Cursor, DrivingCycle},
        physics::{BatteryPower, Mode, RoadLoad},
        sample::Sample,
        summary::RunSummary,
        vehicle::VehicleParameters,
    },
    quantity::{
        consumption::KilowattHoursPer100Kilometres,
        distance::Kilometres,
        energy::KilowattHours,
        proportions::Percent,
        speed::{KilometresPerHour, MetresPerSecond},
        time::{Minutes, Seconds},
    },
};

/// Simulated time advanced by one tick.
pub const TIME_STEP: Seconds = Seconds(0.1);

const TICKS_PER_SECOND: f64 = 10.0;

/// Everything a run accumulates between ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    /// Number of ticks performed so far.
    pub n_ticks: u32,

    /// Target speed of the previous tick, for the finite-difference acceleration.
    pub last_target_speed: KilometresPerHour,

    pub state_of_charge: Percent,
    pub distance: Kilometres,
    pub energy_consumed: KilowattHours,
    pub energy_regenerated: KilowattHours,

    cursor: Cursor,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            n_ticks: 0,
            last_target_speed: KilometresPerHour::ZERO,
            state_of_charge: Percent::HUNDRED,
            distance: Kilometres::ZERO,
            energy_consumed: KilowattHours::ZERO,
            energy_regenerated: KilowattHours::ZERO,
            cursor: Cursor::default(),
        }
    }
}

/// Outcome of a single tick.
#[derive(Copy, Clone, Debug)]
pub struct Step {
    /// State to continue with.
    pub state: SimulationState,

    pub sample: Sample,
    pub summary: RunSummary,
    pub mode: Mode,
}

impl SimulationState {
    /// Simulated time of the next tick.
    ///
    /// Derived from the tick count rather than accumulated, so that it carries no rounding drift.
    pub fn time(&self) -> Seconds {
        Seconds(f64::from(self.n_ticks) / TICKS_PER_SECOND)
    }

    /// Advance the simulation by [`TIME_STEP`].
    ///
    /// It is the caller's job to stop once the time reaches the cycle duration.
    #[must_use]
    pub fn step(mut self, parameters: &VehicleParameters, cycle: &DrivingCycle) -> Step {
        let time = self.time();
        let target_speed = self.cursor.speed_at(cycle, time);

        let speed = MetresPerSecond::from(target_speed);
        let last_speed = MetresPerSecond::from(self.last_target_speed);
        let acceleration = (speed - last_speed) / TIME_STEP;
        let wheel_power = RoadLoad::new(parameters, speed, acceleration).total() * speed;
        let battery_power = BatteryPower::from_wheel_power(parameters, wheel_power);

        let energy = battery_power.power * TIME_STEP;
        if energy > KilowattHours::ZERO {
            self.energy_consumed += energy;
        } else {
            self.energy_regenerated -= energy;
        }
        let discharge = energy.percent_of(parameters.battery_capacity);
        self.state_of_charge = (self.state_of_charge - discharge).max(Percent::ZERO);
        self.distance += speed * TIME_STEP;

        let sample = Sample {
            time: Minutes::from(time),
            speed: target_speed,
            soc: self.state_of_charge.round_to_hundredths(),
            power: battery_power.power.round_to_hundredths(),
        };
        let summary = self.summary();

        self.last_target_speed = target_speed;
        self.n_ticks += 1;

        Step { state: self, sample, summary, mode: battery_power.mode }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            total_distance: self.distance,
            energy_consumed: self.energy_consumed,
            energy_regenerated: self.energy_regenerated,
            avg_efficiency: if self.distance > Kilometres::ZERO {
                self.energy_consumed / self.distance
            } else {
                KilowattHoursPer100Kilometres::ZERO
            },
            final_soc: self.state_of_charge,
        }
    }
}
