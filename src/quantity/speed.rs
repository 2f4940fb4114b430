use std::ops::{Div, Mul};

use crate::quantity::{distance::Kilometres, time::Seconds};

quantity!(KilometresPerHour, "km/h");
quantity!(MetresPerSecond, "m/s");
quantity!(MetresPerSecondSquared, "m/s²");

impl From<KilometresPerHour> for MetresPerSecond {
    fn from(speed: KilometresPerHour) -> Self {
        Self(speed.0 / 3.6)
    }
}

impl From<MetresPerSecond> for KilometresPerHour {
    fn from(speed: MetresPerSecond) -> Self {
        Self(speed.0 * 3.6)
    }
}

impl Mul<Seconds> for MetresPerSecond {
    type Output = Kilometres;

    /// Distance travelled at this speed, in kilometres.
    fn mul(self, duration: Seconds) -> Self::Output {
        Kilometres((self.0 * duration.0) / 1000.0)
    }
}

impl Div<Seconds> for MetresPerSecond {
    type Output = MetresPerSecondSquared;

    fn div(self, duration: Seconds) -> Self::Output {
        MetresPerSecondSquared(self.0 / duration.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_conversion() {
        assert_eq!(MetresPerSecond::from(KilometresPerHour(36.0)), MetresPerSecond(10.0));
        assert_abs_diff_eq!(KilometresPerHour::from(MetresPerSecond(25.0)).0, 90.0);
    }

    #[test]
    fn test_distance() {
        assert_abs_diff_eq!((MetresPerSecond(10.0) * Seconds(0.1)).0, 0.001);
    }

    #[test]
    fn test_acceleration() {
        assert_abs_diff_eq!((MetresPerSecond(1.0) / Seconds(0.1)).0, 10.0);
    }
}
