//! Display units for nanosecond values.

use serde::{Deserialize, Serialize};

/// Unit a metric value is displayed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    #[serde(rename = "ns")]
    Nanos,
    #[serde(rename = "μs")]
    Micros,
    #[serde(rename = "ms")]
    Millis,
    #[serde(rename = "s")]
    Seconds,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Nanos,
        TimeUnit::Micros,
        TimeUnit::Millis,
        TimeUnit::Seconds,
    ];

    pub fn index(self) -> i32 {
        match self {
            TimeUnit::Nanos => 0,
            TimeUnit::Micros => 1,
            TimeUnit::Millis => 2,
            TimeUnit::Seconds => 3,
        }
    }

    /// Nanoseconds in one of this unit
    pub fn nanos(self) -> f64 {
        1000f64.powi(self.index())
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Nanos => "ns",
            TimeUnit::Micros => "μs",
            TimeUnit::Millis => "ms",
            TimeUnit::Seconds => "s",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
