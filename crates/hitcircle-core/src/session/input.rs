use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoStaticStr};

use crate::object::Point;

/// Input channel. All channels judge the same way.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum InputKey {
    K1 = 1,
    K2 = 2,
    M1 = 4,
    M2 = 8,
}

impl InputKey {
    /// Bit of this key in a replay key mask
    pub fn mask(&self) -> u8 {
        *self as u8
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for InputKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A key-down at a chart-space position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub key: InputKey,
    pub position: Point,
    /// Session time the key went down (ms)
    pub time: i64,
}

/// Everything the input collaborator reports for one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    /// Presses since the previous poll, in arrival order
    pub presses: Vec<InputEvent>,
    /// Current pointer position in chart space
    pub pointer: Point,
}

/// Source of player input, polled once per tick.
pub trait InputSource {
    fn poll(&mut self, now_ms: i64) -> InputFrame;
}

/// Input that never presses and keeps the pointer still.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleInput {
    pub pointer: Point,
}

impl InputSource for IdleInput {
    fn poll(&mut self, _now_ms: i64) -> InputFrame {
        InputFrame {
            presses: Vec::new(),
            pointer: self.pointer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_key_masks_are_distinct() {
        let combined = InputKey::iter().fold(0u8, |acc, key| {
            assert_eq!(acc & key.mask(), 0);
            acc | key.mask()
        });
        assert_eq!(combined, 0b1111);
        assert_eq!(InputKey::from_repr(4), Some(InputKey::M1));
        assert_eq!(InputKey::K2.to_string(), "K2");
    }

    #[test]
    fn test_idle_input() {
        let mut input = IdleInput {
            pointer: Point::new(1.0, 2.0),
        };
        let frame = input.poll(1000);
        assert!(frame.presses.is_empty());
        assert_eq!(frame.pointer, Point::new(1.0, 2.0));
    }
}
