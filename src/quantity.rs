#[macro_use]
mod macros;

pub mod area;
pub mod consumption;
pub mod distance;
pub mod energy;
pub mod force;
pub mod mass;
pub mod power;
pub mod proportions;
pub mod speed;
pub mod time;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{
        energy::KilowattHours, power::Kilowatts, proportions::Percent, speed::KilometresPerHour,
    };

    #[test]
    fn test_ordering() {
        assert!(Kilowatts(1.0) < Kilowatts(2.0));
        assert_eq!(Kilowatts(3.0).min(Kilowatts(2.0)), Kilowatts(2.0));
        assert_eq!(Kilowatts(-1.0).max(Kilowatts::ZERO), Kilowatts::ZERO);
    }

    #[test]
    fn test_display_honours_precision() {
        assert_eq!(format!("{:.1}", KilometresPerHour(17.26)), "17.3 km/h");
        assert_eq!(format!("{:.2}", KilowattHours(0.126)), "0.13 kWh");
        assert_eq!(format!("{:?}", Kilowatts(1.5)), "1.5kW");
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_abs_diff_eq!(Kilowatts(12.3456).round_to_hundredths().0, 12.35);
        assert_abs_diff_eq!(Kilowatts(-0.004).round_to_hundredths().0, 0.0);
        assert_abs_diff_eq!(Kilowatts(-7.891).round_to_hundredths().0, -7.89);
    }

    /// Rounding works on the scaled binary value, not on the exact decimal expansion.
    #[test]
    fn test_round_to_hundredths_near_ties() {
        // `0.015 × 100` is exactly `1.5`, although `0.015` itself is slightly below the tie.
        assert_eq!(Percent(0.015).round_to_hundredths(), Percent(0.02));
        // `1.005 × 100` falls just below `100.5`.
        assert_eq!(Percent(1.005).round_to_hundredths(), Percent(1.0));
        assert_eq!(Percent(0.125).round_to_hundredths(), Percent(0.13));
        assert_eq!(Percent(-0.125).round_to_hundredths(), Percent(-0.13));
    }

    #[test]
    fn test_parse() {
        assert_eq!("75".parse::<KilowattHours>().unwrap(), KilowattHours(75.0));
        assert!("seventy".parse::<KilowattHours>().is_err());
    }

    #[test]
    fn test_sum() {
        let total: KilowattHours = [KilowattHours(1.0), KilowattHours(0.5)].into_iter().sum();
        assert_eq!(total, KilowattHours(1.5));
    }
}
