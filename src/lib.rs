//! latency-numbers: latency numbers every programmer should know, for any year.
//!
//! This library ties the workspace crates together:
//! - Trend estimates, classification and reveal scheduling (`latency-numbers-core`)
//! - Box grids and the animated HTML page (`latency-numbers-render`)
//! - Configuration management
//! - Terminal and JSON displayers and real-time playback

pub mod config;
pub mod core;
pub mod displayers;

// Re-export commonly used types
pub use config::{AppConfig, OutputFormat};
pub use latency_numbers_core::{Metric, MetricCatalog, RenderAdapter, RevealScheduler};
