//! Candidate file collection.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::{ConvertError, Result};

/// Container formats we pull audio out of.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov"];

pub fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| VIDEO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collect the candidate files under `input`, sorted and deduplicated.
///
/// A directory is scanned at depth 1, or fully when `recursive` is set. A
/// plain file passes through the same extension filter as scanned entries.
/// An empty result is an error naming the scanned path.
pub fn collect_candidates(input: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = if input.is_dir() {
        let walker = if recursive {
            WalkDir::new(input).follow_links(true)
        } else {
            WalkDir::new(input).max_depth(1)
        };

        walker
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .collect()
    } else {
        vec![input.to_path_buf()]
    };

    files.sort();
    files.dedup();
    files.retain(|f| f.is_file() && has_video_extension(f));

    if files.is_empty() {
        return Err(ConvertError::NoCandidates(input.display().to_string()));
    }

    Ok(files)
}
