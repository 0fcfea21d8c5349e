//! Judgement values and the judgement engine.
//!
//! This module contains:
//! - `Judgement` - scored outcome values (300, 100, 50, MISS)
//! - `JudgementResult` - a judgement attributed to a timeline object
//! - `JudgementEngine` - applies presses and time to the timeline

mod engine;
mod judgement;

pub use engine::*;
pub use judgement::*;
