quantity!(Percent, "%");

impl Percent {
    pub const HUNDRED: Self = Self(100.0);

    pub const fn to_proportion(self) -> f64 {
        self.0 / 100.0
    }

    pub const fn from_proportion(proportion: f64) -> Self {
        Self(proportion * 100.0)
    }
}
