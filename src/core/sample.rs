use serde::Serialize;

use crate::quantity::{
    power::Kilowatts,
    proportions::Percent,
    speed::KilometresPerHour,
    time::Minutes,
};

/// Snapshot emitted after every tick, never changed afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub time: Minutes,
    pub speed: KilometresPerHour,

    /// State of charge, rounded to hundredths.
    pub soc: Percent,

    /// Battery power rounded to hundredths: positive when drawing, negative when regenerating.
    pub power: Kilowatts,
}
