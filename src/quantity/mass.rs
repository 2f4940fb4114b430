use std::ops::Mul;

use crate::quantity::{force::Newtons, speed::MetresPerSecondSquared};

quantity!(Kilograms, "kg");

impl Mul<MetresPerSecondSquared> for Kilograms {
    type Output = Newtons;

    fn mul(self, acceleration: MetresPerSecondSquared) -> Self::Output {
        Newtons(self.0 * acceleration.0)
    }
}
