//! Historically calibrated hardware trends.
//!
//! Every quantity is modelled as `value = a * b^(year - 1982)` where `b` is
//! the per-year growth factor (`ratio^(1 / period_years)`) and `a` is solved
//! from one documented anchor point. Several quantities switch to a different
//! regime after a threshold year; each threshold coincides with the curve's
//! anchor (or its crossing with the flat value), so no regime boundary
//! introduces a jump.
//!
//! Unless noted, calibration points are Norvig's 2002 figures.
//!
//! All functions are pure and total over any real `year`. Nanosecond results
//! are clamped into the positive finite range, so far-off years saturate
//! instead of reaching zero or infinity.

use crate::constants::{BASE_YEAR, NANOS_PER_SECOND};

/// Exponential curve `a * b^(year - BASE_YEAR)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialTrend {
    a: f64,
    b: f64,
}

impl ExponentialTrend {
    /// Curve passing through `(anchor_year, anchor_value)` that multiplies by
    /// `ratio` every `period_years`.
    pub fn calibrated(anchor_year: f64, anchor_value: f64, ratio: f64, period_years: f64) -> Self {
        let b = ratio.powf(1.0 / period_years);
        let a = anchor_value / b.powf(anchor_year - BASE_YEAR);
        Self { a, b }
    }

    pub fn doubling(anchor_year: f64, anchor_value: f64, period_years: f64) -> Self {
        Self::calibrated(anchor_year, anchor_value, 2.0, period_years)
    }

    pub fn halving(anchor_year: f64, anchor_value: f64, period_years: f64) -> Self {
        Self::calibrated(anchor_year, anchor_value, 0.5, period_years)
    }

    /// Per-year growth factor
    pub fn rate(&self) -> f64 {
        self.b
    }

    pub fn at(&self, year: f64) -> f64 {
        self.a * self.b.powf(year - BASE_YEAR)
    }
}

/// Clock speed stopped at ~3 GHz around 2005
pub const CLOCK_WALL_YEAR: f64 = 2005.0;
pub const CLOCK_WALL_HZ: f64 = 3.0e9;

/// Main memory latency stopped improving around 2000
pub const MEMORY_WALL_YEAR: f64 = 2000.0;
pub const MEMORY_LATENCY_NS: f64 = 100.0;

/// SSD random reads flat-line within one capacity doubling cycle
pub const SSD_LATENCY_FLOOR_NS: f64 = 16_000.0;

/// Disk bandwidth growth slowed from 2x/2y to 2x/5y here
pub const DISK_SLOWDOWN_YEAR: f64 = 2002.0;

pub const DATACENTER_ROUND_TRIP_NS: f64 = 500_000.0;
pub const WAN_ROUND_TRIP_NS: f64 = 150_000_000.0;

/// Clock frequency in Hz: doubling every 2 years until the clock wall
pub fn clock_trend() -> ExponentialTrend {
    // Patterson, SIGMOD '98 keynote
    ExponentialTrend::doubling(CLOCK_WALL_YEAR, CLOCK_WALL_HZ, 2.0)
}

/// DRAM latency improving 7% per year until the memory wall
pub fn memory_latency_trend() -> ExponentialTrend {
    ExponentialTrend::calibrated(MEMORY_WALL_YEAR, MEMORY_LATENCY_NS, 0.93, 1.0)
}

/// NIC bandwidth in bytes/s: 1 Gb/s (125 MB/s) in 2003, doubling every 2 years
pub fn network_bandwidth_trend() -> ExponentialTrend {
    ExponentialTrend::doubling(2003.0, 125.0e6, 2.0)
}

/// DRAM bandwidth in bytes/s: 4 GB/s in 2001, doubling every 3 years
pub fn bus_bandwidth_trend() -> ExponentialTrend {
    ExponentialTrend::doubling(2001.0, 4.0e9, 3.0)
}

/// SSD random read latency: 20 μs in 2012, 20x decrease per 4.5 years
pub fn ssd_latency_trend() -> ExponentialTrend {
    // Grupp et al., "The Bleak Future of NAND Flash Memory", FAST 2012, fig. 4
    ExponentialTrend::calibrated(2012.0, 20_000.0, 1.0 / 20.0, 4.5)
}

/// SSD bandwidth in bytes/s: 3 GB/s in 2012, doubling every 3 years
pub fn ssd_bandwidth_trend() -> ExponentialTrend {
    ExponentialTrend::doubling(2012.0, 3.0e9, 3.0)
}

/// Seek plus rotational delay: 10 ms in 2000, halving every 10 years
pub fn disk_seek_trend() -> ExponentialTrend {
    ExponentialTrend::halving(2000.0, 10_000_000.0, 10.0)
}

/// Disk bandwidth in bytes/s for `year`: 100 MB/s in 2002, doubling every
/// 2 years before that and every 5 years from then on
pub fn disk_bandwidth_trend(year: f64) -> ExponentialTrend {
    let period = if year < DISK_SLOWDOWN_YEAR { 2.0 } else { 5.0 };
    ExponentialTrend::doubling(DISK_SLOWDOWN_YEAR, 100.0e6, period)
}

fn positive(nanoseconds: f64) -> f64 {
    nanoseconds.clamp(f64::MIN_POSITIVE, f64::MAX)
}

/// Nanoseconds to move `payload_bytes` at `bytes_per_second`
pub fn transmission_delay(payload_bytes: f64, bytes_per_second: f64) -> f64 {
    positive(payload_bytes / (bytes_per_second / NANOS_PER_SECOND))
}

/// CPU cycle time in nanoseconds
pub fn cycle_time(year: f64) -> f64 {
    let hz = if year <= CLOCK_WALL_YEAR {
        clock_trend().at(year)
    } else {
        CLOCK_WALL_HZ
    };
    positive(NANOS_PER_SECOND / hz)
}

/// Main memory reference latency in nanoseconds
pub fn memory_latency(year: f64) -> f64 {
    if year <= MEMORY_WALL_YEAR {
        positive(memory_latency_trend().at(year))
    } else {
        MEMORY_LATENCY_NS
    }
}

/// Time to put `payload_bytes` on a commodity network, in nanoseconds
pub fn network_transmission_delay(year: f64, payload_bytes: f64) -> f64 {
    transmission_delay(payload_bytes, network_bandwidth_trend().at(year))
}

/// Time to read `payload_bytes` sequentially from main memory, in nanoseconds
pub fn bus_transmission_delay(year: f64, payload_bytes: f64) -> f64 {
    transmission_delay(payload_bytes, bus_bandwidth_trend().at(year))
}

/// SSD random read latency in nanoseconds.
///
/// The curve applies until it reaches the 16 μs floor (shortly after 2012),
/// then the latency stays flat. Both regimes meet at the crossing year.
pub fn ssd_latency(year: f64) -> f64 {
    positive(ssd_latency_trend().at(year).max(SSD_LATENCY_FLOOR_NS))
}

/// Time to read `payload_bytes` sequentially from SSD, in nanoseconds
pub fn ssd_transmission_delay(year: f64, payload_bytes: f64) -> f64 {
    transmission_delay(payload_bytes, ssd_bandwidth_trend().at(year))
}

/// Disk seek plus rotational delay in nanoseconds
pub fn disk_seek(year: f64) -> f64 {
    positive(disk_seek_trend().at(year))
}

/// Time to read `payload_bytes` sequentially from disk, in nanoseconds
pub fn disk_transmission_delay(year: f64, payload_bytes: f64) -> f64 {
    transmission_delay(payload_bytes, disk_bandwidth_trend(year).at(year))
}

/// Round trip within one datacenter; assumed constant
pub fn datacenter_round_trip(_year: f64) -> f64 {
    DATACENTER_ROUND_TRIP_NS
}

/// Packet round trip California to Netherlands. Routes improve, light doesn't.
pub fn wan_round_trip(_year: f64) -> f64 {
    WAN_ROUND_TRIP_NS
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Year at which the SSD latency curve reaches the flat floor
    fn ssd_floor_year() -> f64 {
        let trend = ssd_latency_trend();
        let anchor = trend.at(2012.0);
        2012.0 + (SSD_LATENCY_FLOOR_NS / anchor).ln() / trend.rate().ln()
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs() * 1e-9;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_calibrated_curve_passes_through_anchor() {
        let trend = ExponentialTrend::doubling(2001.0, 4.0e9, 3.0);
        assert_close(trend.at(2001.0), 4.0e9);
        assert_close(trend.at(2004.0), 8.0e9);
        assert_close(trend.at(1998.0), 2.0e9);
    }

    #[test]
    fn test_extreme_years_stay_finite() {
        for year in [1900.0, 1982.0, 2100.0, 2500.0] {
            assert!(cycle_time(year).is_finite());
            assert!(disk_seek(year).is_finite());
            assert!(bus_transmission_delay(year, 1e6).is_finite());
        }
    }

    #[test]
    fn test_far_off_years_saturate_positive() {
        let years = [-1.0e9, -5000.0, 4000.0, 5000.0, 1.0e9, f64::from(i32::MIN), f64::from(i32::MAX)];
        for year in years {
            let values = [
                cycle_time(year),
                memory_latency(year),
                network_transmission_delay(year, 2_000.0),
                bus_transmission_delay(year, 1e6),
                ssd_latency(year),
                ssd_transmission_delay(year, 1e6),
                disk_seek(year),
                disk_transmission_delay(year, 1e6),
            ];
            for ns in values {
                assert!(ns.is_finite() && ns > 0.0, "year {year}: {ns}");
            }
        }
        assert_eq!(network_transmission_delay(5000.0, 2_000.0), f64::MIN_POSITIVE);
        assert_eq!(disk_seek(-1.0e9), f64::MAX);
    }

    #[test]
    fn test_cycle_time_continuous_at_clock_wall() {
        assert_close(NANOS_PER_SECOND / clock_trend().at(CLOCK_WALL_YEAR), 1.0 / 3.0);
        assert_close(cycle_time(CLOCK_WALL_YEAR), 1.0 / 3.0);
        assert_close(cycle_time(CLOCK_WALL_YEAR + 1e-9), 1.0 / 3.0);
        assert_close(cycle_time(2030.0), 1.0 / 3.0);
        // 2x faster every 2 years before the wall
        assert_close(cycle_time(2003.0), 2.0 / 3.0);
    }

    #[test]
    fn test_memory_latency_continuous_at_wall() {
        assert_close(memory_latency_trend().at(MEMORY_WALL_YEAR), MEMORY_LATENCY_NS);
        assert_close(memory_latency(MEMORY_WALL_YEAR), MEMORY_LATENCY_NS);
        assert_close(memory_latency(2020.0), MEMORY_LATENCY_NS);
        assert_close(memory_latency(1999.0), 100.0 / 0.93);
    }

    #[test]
    fn test_disk_bandwidth_regimes_meet_at_slowdown() {
        let before = ExponentialTrend::doubling(DISK_SLOWDOWN_YEAR, 100.0e6, 2.0);
        let after = ExponentialTrend::doubling(DISK_SLOWDOWN_YEAR, 100.0e6, 5.0);
        assert_close(before.at(DISK_SLOWDOWN_YEAR), after.at(DISK_SLOWDOWN_YEAR));
        assert_close(disk_transmission_delay(DISK_SLOWDOWN_YEAR, 1e6), 10_000_000.0);
        assert_close(disk_transmission_delay(2000.0, 1e6), 20_000_000.0);
        assert_close(disk_transmission_delay(2012.0, 1e6), 2_500_000.0);
    }

    #[test]
    fn test_ssd_latency_flattens_without_jump() {
        let floor_year = ssd_floor_year();
        assert!(floor_year > 2012.0 && floor_year < 2014.0);
        assert_close(ssd_latency_trend().at(floor_year), SSD_LATENCY_FLOOR_NS);
        assert_close(ssd_latency(floor_year), SSD_LATENCY_FLOOR_NS);
        assert_close(ssd_latency(2012.0), 20_000.0);
        assert_close(ssd_latency(2014.0), SSD_LATENCY_FLOOR_NS);
        assert_close(ssd_latency(2025.0), SSD_LATENCY_FLOOR_NS);
        assert_close(ssd_latency(2007.5), 400_000.0);
    }

    #[test]
    fn test_transmission_anchors() {
        // 2 KB at 125 MB/s
        assert_close(network_transmission_delay(2003.0, 2_000.0), 16_000.0);
        // 1 MB at 4 GB/s
        assert_close(bus_transmission_delay(2001.0, 1e6), 250_000.0);
        // 1 MB at 3 GB/s
        assert_close(ssd_transmission_delay(2012.0, 1e6), 1e6 / 3.0);
        assert_close(ssd_transmission_delay(2015.0, 1e6), 1e6 / 6.0);
    }

    #[test]
    fn test_disk_seek_halves_every_decade() {
        assert_close(disk_seek(2000.0), 10_000_000.0);
        assert_close(disk_seek(2010.0), 5_000_000.0);
        assert_close(disk_seek(1990.0), 20_000_000.0);
    }

    #[test]
    fn test_round_trips_are_constant() {
        for year in [1970.0, 2005.0, 2026.0, 2100.0] {
            assert_eq!(datacenter_round_trip(year), 500_000.0);
            assert_eq!(wan_round_trip(year), 150_000_000.0);
        }
    }

    #[test]
    fn test_latencies_never_increase_over_time() {
        // Regime boundaries may differ from the flat value by rounding only
        let not_above = |later: f64, earlier: f64| later <= earlier * (1.0 + 1e-12);
        let mut year = 1980.0;
        while year < 2040.0 {
            let next = year + 0.5;
            assert!(not_above(cycle_time(next), cycle_time(year)));
            assert!(not_above(memory_latency(next), memory_latency(year)));
            assert!(not_above(ssd_latency(next), ssd_latency(year)));
            assert!(not_above(disk_seek(next), disk_seek(year)));
            assert!(not_above(
                disk_transmission_delay(next, 1e6),
                disk_transmission_delay(year, 1e6)
            ));
            year = next;
        }
    }
}
