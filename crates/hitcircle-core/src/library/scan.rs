use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Extension of chart files
pub const CHART_EXTENSION: &str = "osu";

pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// Chart files directly inside `folder`, sorted by name
pub fn list_charts(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut charts: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && has_extension(path, CHART_EXTENSION))
        .collect();
    charts.sort();
    Ok(charts)
}

/// First chart in `folder` by file name
pub fn find_chart(folder: &Path) -> Result<PathBuf> {
    list_charts(folder)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::ChartNotFound(folder.to_path_buf()))
}

/// Accept either a chart file or a folder holding one
pub fn resolve_chart(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        find_chart(path)
    } else if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(Error::ChartNotFound(path.to_path_buf()))
    }
}

/// A folder holding one or more charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSet {
    pub name: String,
    pub path: PathBuf,
    pub charts: Vec<PathBuf>,
}

/// Extracted chart sets under a root folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Library {
    pub root: PathBuf,
    pub sets: Vec<ChartSet>,
}

impl Library {
    /// List subfolders of `root` that contain charts, sorted by name.
    ///
    /// A missing root is an empty library.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.exists() {
            debug!("Library root {} does not exist", root.display());
            return Ok(Self {
                root: root.to_path_buf(),
                sets: Vec::new(),
            });
        }

        let mut sets = Vec::new();
        for entry in fs::read_dir(root)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            let charts = list_charts(&path)?;
            if charts.is_empty() {
                debug!("Skipping {} (no charts)", path.display());
                continue;
            }
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            sets.push(ChartSet { name, path, charts });
        }
        sets.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            root: root.to_path_buf(),
            sets,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn chart_count(&self) -> usize {
        self.sets.iter().map(|s| s.charts.len()).sum()
    }
}
