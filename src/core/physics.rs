use serde::Serialize;

use crate::{
    core::{constants::PhysicalConstants, vehicle::VehicleParameters},
    quantity::{
        force::Newtons,
        power::{Kilowatts, Watts},
        speed::{MetresPerSecond, MetresPerSecondSquared},
    },
};

/// Forces the powertrain has to overcome at the given speed and acceleration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoadLoad {
    pub drag: Newtons,
    pub rolling: Newtons,

    /// Negative when decelerating.
    pub inertia: Newtons,
}

impl RoadLoad {
    pub fn new(
        parameters: &VehicleParameters,
        speed: MetresPerSecond,
        acceleration: MetresPerSecondSquared,
    ) -> Self {
        let constants = PhysicalConstants::EARTH;
        let drag = 0.5
            * constants.air_density
            * parameters.frontal_area.0
            * constants.drag_coefficient
            * speed.0
            * speed.0;
        let rolling = constants.rolling_resistance_coefficient
            * parameters.vehicle_weight.0
            * constants.gravity.0;
        Self {
            drag: Newtons(drag),
            rolling: Newtons(rolling),
            inertia: parameters.vehicle_weight * acceleration,
        }
    }

    pub fn total(&self) -> Newtons {
        self.drag + self.rolling + self.inertia
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The battery feeds the motor.
    Drive,

    /// The motor recharges the battery, or nothing happens at all.
    Regen,
}

/// Power flowing out of the battery, negative while recharging.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BatteryPower {
    pub mode: Mode,
    pub power: Kilowatts,
}

impl BatteryPower {
    /// Apply the powertrain efficiency and the motor rating to the power at the wheels.
    ///
    /// The motor rating caps the draw only, regeneration stays unbounded.
    pub fn from_wheel_power(parameters: &VehicleParameters, wheel_power: Watts) -> Self {
        let (mode, battery_power) = if wheel_power > Watts::ZERO {
            (Mode::Drive, wheel_power / parameters.motor_efficiency.to_proportion())
        } else {
            (Mode::Regen, wheel_power * parameters.regen_efficiency.to_proportion())
        };
        Self { mode, power: Kilowatts::from(battery_power).min(parameters.motor_power) }
    }
}
