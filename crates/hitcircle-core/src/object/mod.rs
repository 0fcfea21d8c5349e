//! Playable hit objects.
//!
//! This module contains:
//! - `Point`, `Playfield` - chart-space geometry and display conversion
//! - `Circle`, `CircleState` - single-click objects
//! - `Slider`, `SliderPath`, `SliderState` - click-and-follow objects
//! - `HitObject` - the closed set of playable objects
//! - `approach_progress` and related visual helpers

mod approach;
mod circle;
mod geometry;
mod hit_object;
mod slider;

pub use approach::*;
pub use circle::{Circle, CircleState};
pub use geometry::*;
pub use hit_object::*;
pub use slider::*;
