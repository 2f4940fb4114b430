use crate::core::cycle::{Breakpoint, DrivingCycle};

const URBAN: [Breakpoint; 29] = [
    Breakpoint::new(0.0, 0.0),
    Breakpoint::new(5.0, 15.0),
    Breakpoint::new(10.0, 25.0),
    Breakpoint::new(17.0, 41.0),
    Breakpoint::new(26.0, 40.0),
    Breakpoint::new(34.0, 20.0),
    Breakpoint::new(38.0, 0.0),
    Breakpoint::new(51.0, 0.0),
    Breakpoint::new(55.0, 20.0),
    Breakpoint::new(60.0, 32.0),
    Breakpoint::new(65.0, 40.0),
    Breakpoint::new(85.0, 45.0),
    Breakpoint::new(91.0, 24.0),
    Breakpoint::new(96.0, 0.0),
    Breakpoint::new(108.0, 0.0),
    Breakpoint::new(112.0, 25.0),
    Breakpoint::new(120.0, 45.0),
    Breakpoint::new(130.0, 50.0),
    Breakpoint::new(140.0, 48.0),
    Breakpoint::new(150.0, 32.0),
    Breakpoint::new(155.0, 0.0),
    Breakpoint::new(165.0, 0.0),
    Breakpoint::new(170.0, 28.0),
    Breakpoint::new(178.0, 42.0),
    Breakpoint::new(195.0, 45.0),
    Breakpoint::new(205.0, 30.0),
    Breakpoint::new(210.0, 10.0),
    Breakpoint::new(215.0, 0.0),
    Breakpoint::new(240.0, 0.0),
];

const HIGHWAY: [Breakpoint; 20] = [
    Breakpoint::new(0.0, 0.0),
    Breakpoint::new(10.0, 40.0),
    Breakpoint::new(16.0, 77.0),
    Breakpoint::new(30.0, 85.0),
    Breakpoint::new(40.0, 90.0),
    Breakpoint::new(50.0, 92.0),
    Breakpoint::new(60.0, 95.0),
    Breakpoint::new(80.0, 98.0),
    Breakpoint::new(100.0, 97.0),
    Breakpoint::new(120.0, 95.0),
    Breakpoint::new(130.0, 80.0),
    Breakpoint::new(140.0, 88.0),
    Breakpoint::new(150.0, 92.0),
    Breakpoint::new(160.0, 96.0),
    Breakpoint::new(180.0, 100.0),
    Breakpoint::new(200.0, 98.0),
    Breakpoint::new(210.0, 85.0),
    Breakpoint::new(220.0, 70.0),
    Breakpoint::new(230.0, 75.0),
    Breakpoint::new(240.0, 60.0),
];

impl DrivingCycle {
    /// Stop-and-go city driving, shaped after the EPA UDDS.
    pub fn urban() -> Self {
        Self { name: "Urban (UDDS)".to_string(), breakpoints: URBAN.to_vec() }
    }

    /// Sustained high speed, shaped after the EPA HWFET.
    pub fn highway() -> Self {
        Self { name: "Highway (HWFET)".to_string(), breakpoints: HIGHWAY.to_vec() }
    }

    /// Bundled cycles, the first one is the default.
    pub fn catalog() -> [Self; 2] {
        [Self::urban(), Self::highway()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let [first, second] = DrivingCycle::catalog();
        assert_eq!(first, DrivingCycle::default());
        assert_eq!(first.breakpoints.len(), 29);
        assert_eq!(second.name, "Highway (HWFET)");
        assert_eq!(second.breakpoints.len(), 20);
    }
}
