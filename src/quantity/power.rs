use std::ops::Mul;

use crate::quantity::{energy::KilowattHours, time::Seconds};

quantity!(Watts, "W");
quantity!(Kilowatts, "kW");

impl From<Watts> for Kilowatts {
    fn from(watts: Watts) -> Self {
        Self(watts.0 / 1000.0)
    }
}

impl Mul<Seconds> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, duration: Seconds) -> Self::Output {
        KilowattHours(self.0 * (duration.0 / 3600.0))
    }
}
