use std::ops::Div;

use crate::quantity::{
    consumption::KilowattHoursPer100Kilometres,
    distance::Kilometres,
    proportions::Percent,
};

quantity!(KilowattHours, "kWh");

impl KilowattHours {
    /// Express this energy as a share of the given capacity.
    pub fn percent_of(self, capacity: Self) -> Percent {
        Percent::from_proportion(self / capacity)
    }
}

impl Div<Kilometres> for KilowattHours {
    type Output = KilowattHoursPer100Kilometres;

    fn div(self, distance: Kilometres) -> Self::Output {
        KilowattHoursPer100Kilometres(self.0 / distance.0 * 100.0)
    }
}
