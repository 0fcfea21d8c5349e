//! Recorded input.
//!
//! This module contains:
//! - `Replay`, `ReplayFrame` - recorded input frames (JSON)
//! - `ReplayInput` - plays a replay back as an `InputSource`
//! - `autoplay` - builds a replay that hits every object

mod autoplay;
mod input;
mod types;

pub use autoplay::*;
pub use input::*;
pub use types::*;
