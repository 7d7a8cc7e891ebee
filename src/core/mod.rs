//! Runtime pieces of the application: timer-driven reveal playback

mod playback;

pub use playback::{play, PlaybackSummary};
