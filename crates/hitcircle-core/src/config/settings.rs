use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{display, geometry, timing};
use crate::error::{Error, Result};

/// Judgement tolerances shared by every object in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub hit_window_ms: i64,
    pub approach_duration_ms: i64,
    pub hit_radius: f64,
    pub follow_tolerance: f64,
    pub slider_check_interval_ms: i64,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            hit_window_ms: timing::HIT_WINDOW_MS,
            approach_duration_ms: timing::APPROACH_DURATION_MS,
            hit_radius: geometry::HIT_RADIUS,
            follow_tolerance: geometry::FOLLOW_TOLERANCE,
            slider_check_interval_ms: timing::SLIDER_CHECK_INTERVAL_MS,
        }
    }
}

/// Output resolution handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: display::WIDTH,
            height: display::HEIGHT,
        }
    }
}

/// Frame pacing and clock calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub frame_rate: u32,
    pub audio_offset_ms: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_rate: display::FRAME_RATE,
            audio_offset_ms: timing::AUDIO_OFFSET_MS,
        }
    }
}

impl SessionConfig {
    /// Milliseconds between two ticks at the configured frame rate.
    pub fn frame_interval_ms(&self) -> i64 {
        (1000 / self.frame_rate.max(1)).max(1) as i64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gameplay: GameplayConfig,
    pub display: DisplayConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML content; missing tables and keys take their defaults
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let gameplay = &self.gameplay;
        if gameplay.hit_window_ms < 0 {
            return Err(Error::InvalidConfig(format!(
                "hit_window_ms must not be negative (got {})",
                gameplay.hit_window_ms
            )));
        }
        if gameplay.approach_duration_ms <= 0 {
            return Err(Error::InvalidConfig(format!(
                "approach_duration_ms must be positive (got {})",
                gameplay.approach_duration_ms
            )));
        }
        if gameplay.hit_radius <= 0.0 || gameplay.follow_tolerance <= 0.0 {
            return Err(Error::InvalidConfig(
                "hit_radius and follow_tolerance must be positive".to_string(),
            ));
        }
        if gameplay.slider_check_interval_ms < 0 {
            return Err(Error::InvalidConfig(
                "slider_check_interval_ms must not be negative".to_string(),
            ));
        }
        if self.display.width == 0 || self.display.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "display size must be non-zero (got {}x{})",
                self.display.width, self.display.height
            )));
        }
        if self.session.frame_rate == 0 || self.session.frame_rate > display::MAX_FRAME_RATE {
            return Err(Error::InvalidConfig(format!(
                "frame_rate must be between 1 and {} (got {})",
                display::MAX_FRAME_RATE, self.session.frame_rate
            )));
        }
        Ok(())
    }
}
