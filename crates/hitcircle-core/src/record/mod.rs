//! Persisted play results.
//!
//! Each completed play is appended to a JSON-lines file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chart::ChartMetadata;
use crate::error::Result;
use crate::score::ScoreSummary;

/// Default result log file name
pub const DEFAULT_RESULT_LOG: &str = "results.jsonl";

/// One completed play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub played_at: DateTime<Local>,
    pub title: String,
    pub artist: String,
    pub version: String,
    pub summary: ScoreSummary,
}

impl ResultRecord {
    pub fn new(metadata: &ChartMetadata, summary: ScoreSummary) -> Self {
        Self {
            played_at: Local::now(),
            title: metadata.title.clone(),
            artist: metadata.artist.clone(),
            version: metadata.version.clone(),
            summary,
        }
    }
}

pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a JSON line, creating the file if needed
    pub fn append(&self, record: &ResultRecord) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", serde_json::to_string(record)?)?;
        debug!("Appended result to {}", self.path.display());
        Ok(())
    }

    /// Read every record. A missing file is an empty log; corrupt lines are skipped.
    pub fn load(&self) -> Result<Vec<ResultRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let mut records = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    "Skipping corrupt line {} in {}: {}",
                    i + 1,
                    self.path.display(),
                    e
                ),
            }
        }
        Ok(records)
    }
}
