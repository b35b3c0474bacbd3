use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::is_sentinel;
use crate::utils::time_utils::to_plot_x;

/// One (timestamp, value) sample ready for plotting.
/// `value` may be the sentinel, in which case the point holds its slot but isn't drawn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TimePoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl TimePoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    pub fn is_renderable(&self) -> bool {
        !is_sentinel(self.value)
    }

    /// `[x, y]` in plot space (x = seconds since epoch).
    pub fn to_plot(&self) -> [f64; 2] {
        [to_plot_x(&self.timestamp), self.value]
    }
}

/// Anything carrying a timestamp, so recency can be decided generically.
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

impl Timestamped for TimePoint {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
