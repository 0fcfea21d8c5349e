use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use zip::ZipArchive;

use super::scan::has_extension;
use crate::error::{Error, Result};

/// Extension of packaged chart sets
pub const ARCHIVE_EXTENSION: &str = "osz";

/// Default folder archives are extracted into
pub const DEFAULT_EXTRACT_DIR: &str = "extracted";

/// Extract a packaged chart set into `dest_root/<archive stem>`.
///
/// Entries whose paths would land outside that folder are skipped.
/// Returns the folder the set was extracted into.
pub fn extract_archive(archive: &Path, dest_root: &Path) -> Result<PathBuf> {
    let stem = archive
        .file_stem()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::InvalidArchive(archive.to_path_buf()))?;
    let dest = dest_root.join(stem);

    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(BufReader::new(file))?;
    fs::create_dir_all(&dest)?;

    let mut extracted = 0usize;
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let Some(relative) = entry.enclosed_name() else {
            warn!("Skipping unsafe archive entry {:?}", entry.name());
            continue;
        };
        let out_path = dest.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
        debug!("Extracted {}", out_path.display());
        extracted += 1;
    }

    info!(
        "Extracted {} files from {} to {}",
        extracted,
        archive.display(),
        dest.display()
    );
    Ok(dest)
}

/// Extract every archive directly inside `source_dir`.
///
/// A broken archive is logged and skipped; the rest are still extracted.
pub fn extract_all(source_dir: &Path, dest_root: &Path) -> Result<Vec<PathBuf>> {
    let mut archives: Vec<PathBuf> = fs::read_dir(source_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && has_extension(path, ARCHIVE_EXTENSION))
        .collect();
    archives.sort();

    let mut folders = Vec::with_capacity(archives.len());
    for archive in &archives {
        match extract_archive(archive, dest_root) {
            Ok(folder) => folders.push(folder),
            Err(e) => warn!("Failed to extract {}: {}", archive.display(), e),
        }
    }
    Ok(folders)
}
