//! Configuration and gameplay constants.
//!
//! This module contains:
//! - `Config` - the TOML-backed configuration (`[gameplay]`, `[display]`, `[session]`)
//! - Default timing, geometry and display constants used when no config is present

mod settings;

pub use settings::*;

/// Timing windows and intervals, in milliseconds.
pub mod timing {
    /// Tolerance around an object's start time within which a press is judged.
    pub const HIT_WINDOW_MS: i64 = 150;

    /// Lead time before an object's start time during which it is visible.
    pub const APPROACH_DURATION_MS: i64 = 1000;

    /// Minimum interval between two slider tracking checks.
    pub const SLIDER_CHECK_INTERVAL_MS: i64 = 100;

    /// Offset added to the clock so input lines up with audible playback.
    pub const AUDIO_OFFSET_MS: i64 = 0;
}

/// Hit-test geometry in chart-space units.
pub mod geometry {
    /// Chart-space width.
    pub const CHART_WIDTH: f64 = 512.0;

    /// Chart-space height.
    pub const CHART_HEIGHT: f64 = 384.0;

    /// Maximum distance from an object's center for a press to count.
    pub const HIT_RADIUS: f64 = 64.0;

    /// Maximum distance between the pointer and the slider ball while holding.
    pub const FOLLOW_TOLERANCE: f64 = 96.0;
}

/// Display and frame pacing defaults.
pub mod display {
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 600;
    pub const FRAME_RATE: u32 = 60;

    /// Highest frame rate that still gives a whole-millisecond tick.
    pub const MAX_FRAME_RATE: u32 = 1000;
}
