use std::{
    fmt::{Display, Formatter},
    ops::RangeInclusive,
};

use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{
        area::SquareMetres,
        energy::KilowattHours,
        mass::Kilograms,
        power::Kilowatts,
        proportions::Percent,
    },
};

/// Vehicle configuration of a single run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleParameters {
    pub battery_capacity: KilowattHours,

    /// Motor rating, caps the battery draw.
    pub motor_power: Kilowatts,

    pub vehicle_weight: Kilograms,
    pub frontal_area: SquareMetres,

    /// Divides the wheel power while driving.
    pub motor_efficiency: Percent,

    /// Multiplies the wheel power while braking.
    pub regen_efficiency: Percent,
}

impl Default for VehicleParameters {
    fn default() -> Self {
        Self {
            battery_capacity: KilowattHours(75.0),
            motor_power: Kilowatts(250.0),
            vehicle_weight: Kilograms(1800.0),
            frontal_area: SquareMetres(2.2),
            motor_efficiency: Percent(90.0),
            regen_efficiency: Percent(60.0),
        }
    }
}

impl VehicleParameters {
    /// Reject values the model is not defined for.
    ///
    /// The engine itself never calls this: it is up to the host to keep invalid values out.
    pub fn validate(&self) -> Result {
        ensure_positive("battery capacity", self.battery_capacity.0)?;
        ensure_positive("motor power", self.motor_power.0)?;
        ensure_positive("vehicle weight", self.vehicle_weight.0)?;
        ensure_positive("frontal area", self.frontal_area.0)?;
        ensure!(
            self.motor_efficiency.0 > 0.0 && self.motor_efficiency <= Percent::HUNDRED,
            "motor efficiency must be within (0, 100] %, got {}",
            self.motor_efficiency,
        );
        ensure!(
            self.regen_efficiency.0 >= 0.0 && self.regen_efficiency <= Percent::HUNDRED,
            "regenerative braking efficiency must be within [0, 100] %, got {}",
            self.regen_efficiency,
        );
        Ok(())
    }

    /// Parameters that are valid but fall outside the ranges the model was tuned for.
    pub fn atypical(&self) -> Vec<Atypical> {
        [
            ("battery capacity", self.battery_capacity.0, 10.0..=120.0),
            ("motor power", self.motor_power.0, 20.0..=500.0),
            ("vehicle weight", self.vehicle_weight.0, 200.0..=3000.0),
            ("frontal area", self.frontal_area.0, 0.5..=3.5),
            ("motor efficiency", self.motor_efficiency.0, 80.0..=98.0),
            ("regenerative braking efficiency", self.regen_efficiency.0, 0.0..=90.0),
        ]
        .into_iter()
        .filter(|(_, value, range)| !range.contains(value))
        .map(|(name, value, typical)| Atypical { name, value, typical })
        .collect()
    }
}

fn ensure_positive(name: &str, value: f64) -> Result {
    ensure!(value.is_finite() && value > 0.0, "{name} must be positive, got {value}");
    Ok(())
}

#[derive(Debug, PartialEq)]
pub struct Atypical {
    pub name: &'static str,
    pub value: f64,
    pub typical: RangeInclusive<f64>,
}

impl Display for Atypical {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} is outside the typical range {}–{}",
            self.name,
            self.value,
            self.typical.start(),
            self.typical.end(),
        )
    }
}
