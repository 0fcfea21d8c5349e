//! CLI argument definitions for hitcircle.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hitcircle_core::library::DEFAULT_EXTRACT_DIR;
use hitcircle_core::record::DEFAULT_RESULT_LOG;

#[derive(Parser)]
#[command(name = "hitcircle")]
#[command(about = "Headless circle-clicking rhythm game", version)]
pub struct Args {
    /// Path to config file (TOML)
    #[arg(short, long, value_name = "FILE", env = "HITCIRCLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play a chart with recorded or automatic input
    Play {
        /// Chart file, or a folder containing one
        chart: PathBuf,
        /// Replay file (JSON) to use as input
        #[arg(long, value_name = "FILE", conflicts_with = "auto")]
        replay: Option<PathBuf>,
        /// Hit every object perfectly
        #[arg(long)]
        auto: bool,
        /// Run against the wall clock instead of as fast as possible
        #[arg(long)]
        realtime: bool,
        /// Append the result to this log file
        #[arg(long, value_name = "FILE")]
        record: Option<PathBuf>,
        /// Write the input replay to this file
        #[arg(long, value_name = "FILE")]
        save_replay: Option<PathBuf>,
        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show chart metadata and object counts
    Info {
        /// Chart file, or a folder containing one
        chart: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract an archive, or every archive in a folder
    Extract {
        /// Archive file or folder of archives
        source: PathBuf,
        /// Destination folder
        #[arg(short, long, default_value = DEFAULT_EXTRACT_DIR)]
        output: PathBuf,
    },
    /// List extracted chart sets
    Library {
        /// Library folder
        #[arg(default_value = DEFAULT_EXTRACT_DIR)]
        dir: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show recorded results
    History {
        /// Result log file
        #[arg(long, value_name = "FILE", default_value = DEFAULT_RESULT_LOG)]
        record: PathBuf,
        /// Show only the most recent N results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
