//! Library command: list extracted chart sets.

use std::path::Path;

use anyhow::{Context, Result};
use hitcircle_core::library::Library;

pub fn run(dir: &Path, json: bool) -> Result<()> {
    let library = Library::scan(dir)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&library)?);
        return Ok(());
    }

    if library.is_empty() {
        eprintln!("No chart sets in {}", dir.display());
        return Ok(());
    }
    for set in &library.sets {
        println!("{} ({} charts)", set.name, set.charts.len());
        for chart in &set.charts {
            if let Some(name) = chart.file_name() {
                println!("  {}", name.to_string_lossy());
            }
        }
    }
    eprintln!(
        "{} sets, {} charts",
        library.sets.len(),
        library.chart_count()
    );
    Ok(())
}
