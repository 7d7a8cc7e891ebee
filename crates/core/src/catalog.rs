//! The fixed set of latency metrics materialised for one year

use crate::constants::{NETWORK_PAYLOAD_BYTES, PAYLOAD_BYTES};
use crate::format::format_number;
use crate::metric::{Metric, MetricError};
use crate::trend;
use log::{debug, info};
use once_cell::sync::Lazy;
use std::cmp::Ordering;

/// How a catalog entry's value is obtained for a year
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Unlabeled scale marker at a fixed value
    Marker(f64),
    /// A number of CPU cycles
    Cycles(f64),
    MemoryReference,
    NetworkSend,
    SsdRandomRead,
    MemorySequentialRead,
    DatacenterRoundTrip,
    SsdSequentialRead,
    DiskSeek,
    DiskSequentialRead,
    WanRoundTrip,
}

impl Estimate {
    pub fn nanoseconds(self, year: f64) -> f64 {
        match self {
            Estimate::Marker(ns) => ns,
            Estimate::Cycles(cycles) => (cycles * trend::cycle_time(year)).min(f64::MAX),
            Estimate::MemoryReference => trend::memory_latency(year),
            Estimate::NetworkSend => trend::network_transmission_delay(year, NETWORK_PAYLOAD_BYTES),
            Estimate::SsdRandomRead => trend::ssd_latency(year),
            Estimate::MemorySequentialRead => trend::bus_transmission_delay(year, PAYLOAD_BYTES),
            Estimate::DatacenterRoundTrip => trend::datacenter_round_trip(year),
            Estimate::SsdSequentialRead => trend::ssd_transmission_delay(year, PAYLOAD_BYTES),
            Estimate::DiskSeek => trend::disk_seek(year),
            Estimate::DiskSequentialRead => trend::disk_transmission_delay(year, PAYLOAD_BYTES),
            Estimate::WanRoundTrip => trend::wan_round_trip(year),
        }
    }
}

/// Static description of one catalog entry
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub caption: String,
    pub estimate: Estimate,
    pub force_down_one: bool,
}

impl CatalogEntry {
    fn labeled(caption: impl Into<String>, estimate: Estimate) -> Self {
        Self {
            caption: caption.into(),
            estimate,
            force_down_one: false,
        }
    }

    fn marker(nanoseconds: f64, force_down_one: bool) -> Self {
        Self {
            caption: String::new(),
            estimate: Estimate::Marker(nanoseconds),
            force_down_one,
        }
    }
}

/// Scale markers sitting on a tier boundary come in (demoted, plain) pairs:
/// the demoted grid of 100 small boxes morphs into the single large box.
fn boundary_pair(nanoseconds: f64) -> [CatalogEntry; 2] {
    [
        CatalogEntry::marker(nanoseconds, true),
        CatalogEntry::marker(nanoseconds, false),
    ]
}

static ENTRIES: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    let payload = format_number(PAYLOAD_BYTES);
    let network_payload = format_number(NETWORK_PAYLOAD_BYTES);

    let mut entries = vec![
        CatalogEntry::marker(1.0, false),
        // L1/L2 cycle counts: Freescale AN2180
        CatalogEntry::labeled("L1 cache reference: ", Estimate::Cycles(3.0)),
        CatalogEntry::labeled("Branch mispredict: ", Estimate::Cycles(10.0)),
        CatalogEntry::labeled("L2 cache reference: ", Estimate::Cycles(13.0)),
        CatalogEntry::labeled("Mutex lock/unlock: ", Estimate::Cycles(50.0)),
    ];
    entries.extend(boundary_pair(100.0));
    entries.push(CatalogEntry::labeled(
        "Main memory reference: ",
        Estimate::MemoryReference,
    ));
    entries.push(CatalogEntry::marker(1_000.0, false));
    entries.push(CatalogEntry::labeled(
        "Compress 1KB with Snappy: ",
        Estimate::Cycles(6_000.0),
    ));
    entries.extend(boundary_pair(10_000.0));
    entries.push(CatalogEntry::labeled(
        format!("Send {} bytes over commodity network: ", network_payload),
        Estimate::NetworkSend,
    ));
    entries.push(CatalogEntry::labeled(
        "SSD random read: ",
        Estimate::SsdRandomRead,
    ));
    entries.push(CatalogEntry::labeled(
        format!("Read {} bytes sequentially from memory: ", payload),
        Estimate::MemorySequentialRead,
    ));
    entries.push(CatalogEntry::labeled(
        "Round trip in same datacenter: ",
        Estimate::DatacenterRoundTrip,
    ));
    entries.extend(boundary_pair(1_000_000.0));
    entries.push(CatalogEntry::labeled(
        format!("Read {} bytes sequentially from SSD: ", payload),
        Estimate::SsdSequentialRead,
    ));
    entries.push(CatalogEntry::labeled("Disk seek: ", Estimate::DiskSeek));
    entries.push(CatalogEntry::labeled(
        format!("Read {} bytes sequentially from disk: ", payload),
        Estimate::DiskSequentialRead,
    ));
    entries.push(CatalogEntry::labeled(
        "Packet roundtrip CA to Netherlands: ",
        Estimate::WanRoundTrip,
    ));
    entries
});

/// Catalog entries in declaration order
pub fn entries() -> &'static [CatalogEntry] {
    &ENTRIES
}

/// Order in which metrics are revealed: ascending by value, and on equal
/// values the demoted (`force_down_one`) metric first.
pub fn reveal_order(a: &Metric, b: &Metric) -> Ordering {
    a.nanoseconds()
        .total_cmp(&b.nanoseconds())
        .then_with(|| b.force_down_one().cmp(&a.force_down_one()))
}

/// All metrics for one year. Membership is fixed; order is declaration order
/// until [`MetricCatalog::sort_for_reveal`] is called.
#[derive(Debug, Clone)]
pub struct MetricCatalog {
    year: i32,
    metrics: Vec<Metric>,
}

impl MetricCatalog {
    /// Number of metrics in every catalog
    pub const LEN: usize = 22;

    pub fn for_year(year: i32) -> Result<Self, MetricError> {
        let metrics = entries()
            .iter()
            .map(|entry| {
                let ns = entry.estimate.nanoseconds(year as f64);
                debug!("{:?} in {}: {} ns", entry.estimate, year, ns);
                Metric::new(ns, entry.caption.as_str(), entry.force_down_one)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Built catalog of {} metrics for {}", metrics.len(), year);
        Ok(Self { year, metrics })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn get(&self, index: usize) -> Option<&Metric> {
        self.metrics.get(index)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Metric> {
        self.metrics.iter()
    }

    /// Sort into reveal order (see [`reveal_order`])
    pub fn sort_for_reveal(&mut self) {
        self.metrics.sort_by(reveal_order);
    }
}

impl<'a> IntoIterator for &'a MetricCatalog {
    type Item = &'a Metric;
    type IntoIter = std::slice::Iter<'a, Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.metrics.iter()
    }
}
