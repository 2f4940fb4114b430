use std::ops::Mul;

use crate::quantity::{power::Watts, speed::MetresPerSecond};

quantity!(Newtons, "N");

impl Mul<MetresPerSecond> for Newtons {
    type Output = Watts;

    fn mul(self, speed: MetresPerSecond) -> Self::Output {
        Watts(self.0 * speed.0)
    }
}
