use std::{fmt, time::Duration};

const NANOS_PER_TICK: u32 = 100;

/// Wall-clock time a handler spent producing its rows.
///
/// Displays in the general long format `d:hh:mm:ss.fffffff`, with the
/// fraction expressed in 100ns ticks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct ElapsedTime(Duration);

impl ElapsedTime {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn zero() -> Self {
        Self(Duration::ZERO)
    }

    pub fn value(&self) -> Duration {
        self.0
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_seconds = self.0.as_secs();
        let days = total_seconds / 86_400;
        let hours = (total_seconds % 86_400) / 3_600;
        let minutes = (total_seconds % 3_600) / 60;
        let seconds = total_seconds % 60;
        let ticks = self.0.subsec_nanos() / NANOS_PER_TICK;

        write!(f, "{days}:{hours:02}:{minutes:02}:{seconds:02}.{ticks:07}")
    }
}
