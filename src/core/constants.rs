use crate::quantity::speed::MetresPerSecondSquared;

/// Environment every run is simulated in. Not user-tunable.
#[derive(Copy, Clone, Debug)]
pub struct PhysicalConstants {
    pub gravity: MetresPerSecondSquared,

    /// Air density, kg/m³.
    pub air_density: f64,

    pub drag_coefficient: f64,
    pub rolling_resistance_coefficient: f64,
}

impl PhysicalConstants {
    pub const EARTH: Self = Self {
        gravity: MetresPerSecondSquared(9.81),
        air_density: 1.225,
        drag_coefficient: 0.28,
        rolling_resistance_coefficient: 0.012,
    };
}
