use serde::{Deserialize, Serialize};

use crate::config::geometry::{CHART_HEIGHT, CHART_WIDTH};
use crate::config::DisplayConfig;

/// A position in chart space (0..512 x 0..384) unless stated otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation towards `other`; `t` is not clamped.
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Mapping between chart space and display pixels.
///
/// Both axes are scaled independently (`width / 512`, `height / 384`) and the
/// same factors apply to every object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub display_width: f64,
    pub display_height: f64,
}

impl Playfield {
    pub fn new(display_width: u32, display_height: u32) -> Self {
        Self {
            display_width: display_width as f64,
            display_height: display_height as f64,
        }
    }

    pub fn scale_x(&self) -> f64 {
        self.display_width / CHART_WIDTH
    }

    pub fn scale_y(&self) -> f64 {
        self.display_height / CHART_HEIGHT
    }

    pub fn to_display(&self, point: Point) -> Point {
        Point::new(point.x * self.scale_x(), point.y * self.scale_y())
    }

    pub fn to_chart(&self, point: Point) -> Point {
        Point::new(point.x / self.scale_x(), point.y / self.scale_y())
    }
}

impl From<&DisplayConfig> for Playfield {
    fn from(config: &DisplayConfig) -> Self {
        Self::new(config.width, config.height)
    }
}
