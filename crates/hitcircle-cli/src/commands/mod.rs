//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod extract;
pub mod history;
pub mod info;
pub mod library;
pub mod play;
