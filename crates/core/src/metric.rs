//! Metric classification: nanoseconds to unit, tier, box count and caption

use crate::constants::BOXES_PER_TIER;
use crate::format::format_number;
use latency_numbers_types::{Tier, TimeUnit};
use serde::Serialize;

/// Errors raised while materialising a metric
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    /// Metric values must be finite and strictly positive
    #[error("invalid metric value for {caption:?}: {nanoseconds} ns (must be finite and > 0)")]
    InvalidValue { caption: String, nanoseconds: f64 },
}

/// Signed drawing scale for `nanoseconds`.
///
/// This is `floor(log10(ns) / log10(100))` clamped into the tier range,
/// evaluated against exact powers of 100 so values sitting on a `100^k`
/// boundary always fall into tier `k` (rounding down, never to nearest).
/// `force_down_one` then subtracts one without re-clamping.
pub fn drawing_scale(nanoseconds: f64, force_down_one: bool) -> i32 {
    let scale = Tier::ALL
        .iter()
        .rev()
        .map(|tier| tier.index())
        .find(|&k| nanoseconds >= BOXES_PER_TIER.powi(k))
        .unwrap_or(0);
    if force_down_one {
        scale - 1
    } else {
        scale
    }
}

/// Unit for `floor(log10(ns) / 3)`, clamped into ns..s
pub fn display_unit(nanoseconds: f64) -> TimeUnit {
    TimeUnit::ALL
        .iter()
        .rev()
        .copied()
        .find(|unit| nanoseconds >= unit.nanos())
        .unwrap_or(TimeUnit::Nanos)
}

/// One quantity materialised for a year.
///
/// Derived fields are computed once in [`Metric::new`]; the value is
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Metric {
    nanoseconds: f64,
    caption: String,
    force_down_one: bool,
    scale: i32,
    tier: Tier,
    unit: TimeUnit,
    display_value: f64,
    box_count: f64,
    display_string: String,
}

impl Metric {
    pub fn new(
        nanoseconds: f64,
        caption: impl Into<String>,
        force_down_one: bool,
    ) -> Result<Self, MetricError> {
        let caption = caption.into();
        debug_assert!(
            nanoseconds.is_finite() && nanoseconds > 0.0,
            "metric {caption:?} has invalid value {nanoseconds}"
        );
        if !(nanoseconds.is_finite() && nanoseconds > 0.0) {
            return Err(MetricError::InvalidValue {
                caption,
                nanoseconds,
            });
        }

        let scale = drawing_scale(nanoseconds, force_down_one);
        // Demoted metrics keep a box count sized for their true magnitude,
        // i.e. 100x the boxes their (lower) tier would need.
        let box_count = nanoseconds / BOXES_PER_TIER.powi(scale);

        let unit = display_unit(nanoseconds);
        let display_value = nanoseconds / unit.nanos();
        let mut display_string = format!("{}{} {}", caption, format_number(display_value), unit);
        if unit != TimeUnit::Nanos {
            let exact = display_value.round() * unit.nanos();
            display_string.push_str(&format!(" = {} ns", format_number(exact)));
        }

        Ok(Self {
            nanoseconds,
            caption,
            force_down_one,
            scale,
            tier: Tier::from_scale(scale),
            unit,
            display_value,
            box_count,
            display_string,
        })
    }

    pub fn nanoseconds(&self) -> f64 {
        self.nanoseconds
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn force_down_one(&self) -> bool {
        self.force_down_one
    }

    /// Drawing scale after any demotion; may be -1 for a demoted sub-100 ns value
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Color/size tier used for drawing
    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn display_value(&self) -> f64 {
        self.display_value
    }

    /// Number of unit boxes of this metric's tier; fractional below one
    pub fn box_count(&self) -> f64 {
        self.box_count
    }

    pub fn display_string(&self) -> &str {
        &self.display_string
    }
}
