use crate::{
    core::cycle::DrivingCycle,
    quantity::{speed::KilometresPerHour, time::Seconds},
};

/// Forward-only position in a driving cycle.
///
/// Gives the same answers as [`DrivingCycle::speed_at`] as long as the query time never decreases,
/// without rescanning the breakpoints from the start on every lookup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the first breakpoint not earlier than the last query time.
    next_index: usize,
}

impl Cursor {
    pub fn speed_at(&mut self, cycle: &DrivingCycle, time: Seconds) -> KilometresPerHour {
        let breakpoints = &cycle.breakpoints;
        while self.next_index < breakpoints.len() && breakpoints[self.next_index].time < time {
            self.next_index += 1;
        }
        let next_index = (self.next_index < breakpoints.len()).then_some(self.next_index);
        cycle.interpolate(next_index, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cycle::Breakpoint;

    /// Verify that the cursor agrees with the linear scan bit for bit.
    #[test]
    fn test_matches_linear_scan() {
        let mut cycles = DrivingCycle::catalog().to_vec();
        cycles.push(DrivingCycle {
            name: "Steps".to_string(),
            breakpoints: vec![
                Breakpoint::new(0.0, 0.0),
                Breakpoint::new(0.0, 5.0),
                Breakpoint::new(0.25, 10.0),
                Breakpoint::new(0.25, 30.0),
                Breakpoint::new(0.3, 30.0),
                Breakpoint::new(1.0, 0.0),
            ],
        });
        for cycle in &cycles {
            let mut cursor = Cursor::default();
            for n in 0..=25_000_u32 {
                let time = Seconds(0.01) * f64::from(n);
                let expected = cycle.speed_at(time);
                let actual = cursor.speed_at(cycle, time);
                assert_eq!(actual.0.to_bits(), expected.0.to_bits(), "{} at {time}", cycle.name);
            }
        }
    }

    /// Repeated queries at the same time must not move the cursor past a zero-width segment.
    #[test]
    fn test_repeated_time() {
        let cycle = DrivingCycle {
            name: "Step".to_string(),
            breakpoints: vec![
                Breakpoint::new(0.0, 0.0),
                Breakpoint::new(5.0, 10.0),
                Breakpoint::new(5.0, 50.0),
            ],
        };
        let mut cursor = Cursor::default();
        assert_eq!(cursor.speed_at(&cycle, Seconds(5.0)), KilometresPerHour(10.0));
        assert_eq!(cursor.speed_at(&cycle, Seconds(5.0)), KilometresPerHour(10.0));
        assert_eq!(cursor.speed_at(&cycle, Seconds(6.0)), KilometresPerHour(50.0));
    }

    #[test]
    fn test_empty_cycle() {
        let cycle = DrivingCycle { name: "Empty".to_string(), breakpoints: Vec::new() };
        assert_eq!(Cursor::default().speed_at(&cycle, Seconds(1.0)), KilometresPerHour::ZERO);
    }
}
