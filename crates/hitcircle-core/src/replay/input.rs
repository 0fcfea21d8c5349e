use strum::IntoEnumIterator;

use super::Replay;
use crate::object::Point;
use crate::session::{InputEvent, InputFrame, InputKey, InputSource};

/// Plays a recorded replay back as an input source.
///
/// Each newly held key becomes a press at its frame's position and time. The
/// pointer is interpolated between the frames around the polled time.
#[derive(Debug, Clone)]
pub struct ReplayInput {
    replay: Replay,
    next: usize,
    held: u8,
}

impl ReplayInput {
    pub fn new(replay: Replay) -> Self {
        Self {
            replay,
            next: 0,
            held: 0,
        }
    }

    /// All frames have been consumed
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.replay.frames.len()
    }

    fn pointer_at(&self, now_ms: i64) -> Point {
        let frames = &self.replay.frames;
        let Some(prev) = self.next.checked_sub(1).map(|i| &frames[i]) else {
            return frames.first().map(|f| f.position()).unwrap_or_default();
        };
        match frames.get(self.next) {
            Some(next) if next.time > prev.time => {
                let t = (now_ms - prev.time) as f64 / (next.time - prev.time) as f64;
                prev.position().lerp(next.position(), t.clamp(0.0, 1.0))
            }
            _ => prev.position(),
        }
    }
}

impl InputSource for ReplayInput {
    fn poll(&mut self, now_ms: i64) -> InputFrame {
        let mut presses = Vec::new();
        while let Some(frame) = self.replay.frames.get(self.next) {
            if frame.time > now_ms {
                break;
            }
            let mask = frame.key_mask();
            let pressed = mask & !self.held;
            presses.extend(
                InputKey::iter()
                    .filter(|key| pressed & key.mask() != 0)
                    .map(|key| InputEvent {
                        key,
                        position: frame.position(),
                        time: frame.time,
                    }),
            );
            self.held = mask;
            self.next += 1;
        }
        InputFrame {
            presses,
            pointer: self.pointer_at(now_ms),
        }
    }
}
