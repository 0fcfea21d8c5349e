//! Extract command: unpack chart archives.

use std::path::Path;

use anyhow::{Context, Result};
use hitcircle_core::library::{extract_all, extract_archive};

pub fn run(source: &Path, output: &Path) -> Result<()> {
    let folders = if source.is_dir() {
        extract_all(source, output)
            .with_context(|| format!("Failed to read {}", source.display()))?
    } else {
        vec![
            extract_archive(source, output)
                .with_context(|| format!("Failed to extract {}", source.display()))?,
        ]
    };

    if folders.is_empty() {
        eprintln!("No archives found in {}", source.display());
    }
    for folder in &folders {
        println!("{}", folder.display());
    }
    Ok(())
}
