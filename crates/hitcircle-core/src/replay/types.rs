use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::object::Point;
use crate::session::InputKey;

/// Input state at one instant of a recorded play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayFrame {
    /// Session time (ms)
    pub time: i64,
    /// Pointer position in chart space
    pub x: f64,
    pub y: f64,
    /// Keys held down at this frame
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<InputKey>,
}

impl ReplayFrame {
    pub fn new(time: i64, position: Point, keys: Vec<InputKey>) -> Self {
        Self {
            time,
            x: position.x,
            y: position.y,
            keys,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn key_mask(&self) -> u8 {
        self.keys.iter().fold(0, |mask, key| mask | key.mask())
    }
}

/// A recorded sequence of input frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub frames: Vec<ReplayFrame>,
}

impl Replay {
    pub fn new(frames: Vec<ReplayFrame>) -> Self {
        Self { frames }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let replay = Self::parse(&content)?;
        info!(
            "Loaded replay {} ({} frames)",
            path.display(),
            replay.frames.len()
        );
        Ok(replay)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let replay: Self = serde_json::from_str(content)?;
        replay.validate()?;
        Ok(replay)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Frames must be in non-decreasing time order with finite positions
    pub fn validate(&self) -> Result<()> {
        for (i, pair) in self.frames.windows(2).enumerate() {
            if pair[1].time < pair[0].time {
                return Err(Error::InvalidReplay(format!(
                    "frame {} at {}ms precedes frame {} at {}ms",
                    i + 1,
                    pair[1].time,
                    i,
                    pair[0].time
                )));
            }
        }
        if let Some(frame) = self
            .frames
            .iter()
            .find(|f| !f.x.is_finite() || !f.y.is_finite())
        {
            return Err(Error::InvalidReplay(format!(
                "frame at {}ms has a non-finite position",
                frame.time
            )));
        }
        Ok(())
    }

    /// Time of the last frame
    pub fn duration_ms(&self) -> i64 {
        self.frames.last().map_or(0, |f| f.time)
    }
}
