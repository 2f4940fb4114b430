use serde::Serialize;

use crate::quantity::{
    consumption::KilowattHoursPer100Kilometres,
    distance::Kilometres,
    energy::KilowattHours,
    proportions::Percent,
};

/// Cumulative results of a run so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total_distance: Kilometres,
    pub energy_consumed: KilowattHours,
    pub energy_regenerated: KilowattHours,

    /// Consumed energy per distance, zero until the vehicle has moved.
    pub avg_efficiency: KilowattHoursPer100Kilometres,

    pub final_soc: Percent,
}

impl RunSummary {
    /// Summary of a run that has not ticked yet.
    pub const fn initial() -> Self {
        Self {
            total_distance: Kilometres::ZERO,
            energy_consumed: KilowattHours::ZERO,
            energy_regenerated: KilowattHours::ZERO,
            avg_efficiency: KilowattHoursPer100Kilometres::ZERO,
            final_soc: Percent::HUNDRED,
        }
    }
}
