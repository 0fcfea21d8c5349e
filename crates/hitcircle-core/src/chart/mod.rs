//! Chart data and parsing.
//!
//! This module contains:
//! - `Beatmap`, `ChartMetadata` - a parsed chart and its descriptive data
//! - `HitObjectDescriptor`, `HitObjectKind`, `SliderShape` - immutable object descriptions
//! - `TimingPoint` and slider duration arithmetic
//! - `parse`, `parse_file` - the chart text parser

mod parser;
mod timing;
mod types;

pub use parser::*;
pub use timing::*;
pub use types::*;
