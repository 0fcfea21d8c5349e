//! Score accumulation.
//!
//! This module contains:
//! - `ScoreState` - judgement history, total score and accuracy
//! - `JudgementCounts`, `ScoreSummary` - per-play figures
//! - `Grade` - letter grades (D, C, B, A, S, SS)

mod grade;
mod state;

pub use grade::*;
pub use state::*;
