use std::time::Duration;

quantity!(Seconds, "s");
quantity!(Minutes, "min");

impl From<Seconds> for Minutes {
    fn from(seconds: Seconds) -> Self {
        Self(seconds.0 / 60.0)
    }
}

impl From<Duration> for Seconds {
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs_f64())
    }
}
