use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use tracing::debug;

use super::Point;
use crate::config::GameplayConfig;
use crate::judge::Judgement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, IntoStaticStr)]
pub enum CircleState {
    #[default]
    Pending,
    Hit,
    Miss,
}

/// Whether a press at `input`/`time` lands on an object centred at `center` due at `start_time`.
///
/// Both bounds are inclusive.
pub(crate) fn hit_test(
    center: Point,
    start_time: i64,
    input: Point,
    time: i64,
    config: &GameplayConfig,
) -> bool {
    time.saturating_sub(start_time).saturating_abs() <= config.hit_window_ms
        && center.distance(input) <= config.hit_radius
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    position: Point,
    start_time: i64,
    state: CircleState,
}

impl Circle {
    pub fn new(position: Point, start_time: i64) -> Self {
        Self {
            position,
            start_time,
            state: CircleState::Pending,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    pub fn state(&self) -> CircleState {
        self.state
    }

    pub fn is_resolved(&self) -> bool {
        self.state != CircleState::Pending
    }

    /// Visible from `start - approach` until the hit window closes, while unresolved
    pub fn visible_at(&self, time: i64, config: &GameplayConfig) -> bool {
        !self.is_resolved()
            && time >= self.start_time.saturating_sub(config.approach_duration_ms)
            && time <= self.start_time.saturating_add(config.hit_window_ms)
    }

    /// Judge a press. Returns `None` when nothing changed: already resolved,
    /// outside the hit window, or outside the hit radius.
    pub fn judge(&mut self, input: Point, time: i64, config: &GameplayConfig) -> Option<Judgement> {
        if self.is_resolved() || !hit_test(self.position, self.start_time, input, time, config) {
            return None;
        }
        self.state = CircleState::Hit;
        debug!(
            "Circle at {}ms hit at {}ms ({:+}ms)",
            self.start_time,
            time,
            time.saturating_sub(self.start_time)
        );
        Some(Judgement::Great)
    }

    /// Expire the circle once its hit window has passed unhit.
    pub fn update(&mut self, time: i64, config: &GameplayConfig) -> Option<Judgement> {
        if self.is_resolved() || time <= self.start_time.saturating_add(config.hit_window_ms) {
            return None;
        }
        self.state = CircleState::Miss;
        debug!("Circle at {}ms missed", self.start_time);
        Some(Judgement::Miss)
    }
}
