//! Chart archives and the local chart library.
//!
//! This module contains:
//! - `extract_archive`, `extract_all` - unpack `.osz` chart sets
//! - `Library`, `ChartSet` - extracted sets found under a folder
//! - `find_chart`, `resolve_chart` - locate a chart file

mod archive;
mod scan;

pub use archive::*;
pub use scan::*;
