//! Demo Experience Player data
//!
//! - `scenarios`: the closed set of demo keys and their selector metadata
//! - `detections`: per-demo mocked detection timelines
//! - `playback`: clip time, progress and speed arithmetic

pub mod detections;
pub mod playback;
pub mod scenarios;

pub use detections::{ConfidenceTier, Detection, DetectionFrame, DetectionStats, Position};
pub use playback::{format_time, PlaybackState, PLAYBACK_RATES};
pub use scenarios::{DemoInfo, DemoLevel, DemoScenario};
