//! Configuration management

mod settings;

pub use settings::{
    AnimationConfig, AppConfig, GridConfig, OutputConfig, OutputFormat, CONFIG_VERSION,
    MAX_OVERLAP, MAX_STEP_DURATION_MS,
};
