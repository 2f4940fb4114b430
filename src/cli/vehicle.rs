//! Vehicle-related CLI arguments.

use clap::Parser;
use evsim::{
    core::vehicle::VehicleParameters,
    quantity::{
        area::SquareMetres,
        energy::KilowattHours,
        mass::Kilograms,
        power::Kilowatts,
        proportions::Percent,
    },
};

#[must_use]
#[derive(Parser)]
pub struct VehicleArgs {
    /// Usable battery capacity in kilowatt-hours.
    #[clap(long, default_value = "75", env = "BATTERY_CAPACITY_KWH")]
    pub battery_capacity: KilowattHours,

    /// Peak motor power in kilowatts, caps the battery draw.
    #[clap(long, default_value = "250", env = "MOTOR_POWER_KW")]
    pub motor_power: Kilowatts,

    /// Vehicle weight in kilograms.
    #[clap(long, default_value = "1800", env = "VEHICLE_WEIGHT_KG")]
    pub vehicle_weight: Kilograms,

    /// Frontal area in square metres.
    #[clap(long, default_value = "2.2", env = "FRONTAL_AREA_M2")]
    pub frontal_area: SquareMetres,

    /// Motor efficiency percentage.
    #[clap(long, default_value = "90", env = "MOTOR_EFFICIENCY_PERCENT")]
    pub motor_efficiency: Percent,

    /// Regenerative braking efficiency percentage.
    #[clap(long, default_value = "60", env = "REGEN_EFFICIENCY_PERCENT")]
    pub regen_efficiency: Percent,
}

impl From<&VehicleArgs> for VehicleParameters {
    fn from(args: &VehicleArgs) -> Self {
        Self {
            battery_capacity: args.battery_capacity,
            motor_power: args.motor_power,
            vehicle_weight: args.vehicle_weight,
            frontal_area: args.frontal_area,
            motor_efficiency: args.motor_efficiency,
            regen_efficiency: args.regen_efficiency,
        }
    }
}
