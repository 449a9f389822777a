//! Sequential conversion loop.

use std::path::PathBuf;
use tracing::info;

use crate::encoder::{convert, destination_for, ConversionRequest};
use crate::errors::Result;
use crate::ffprobe::{has_audio_stream, probe_audio};
use crate::mode::{self, EncodeMode};

/// Immutable snapshot of the resolved CLI flags. Built once at startup,
/// shared read-only by every file in the run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub out_dir: Option<PathBuf>,
    pub mode: EncodeMode,
    pub bitrate: String,
    pub vbr_quality: u8,
    pub overwrite: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.converted + self.skipped
    }
}

/// Convert every candidate in order, one ffmpeg process at a time.
///
/// Skips (existing destination, no audio stream) are logged and counted;
/// a failed conversion aborts the run. Each file resolves its own mode,
/// so a directory can mix already-MP3 and AAC sources under `auto`.
pub fn run_conversion(files: &[PathBuf], config: &RunConfig) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for file in files {
        let dest = destination_for(file, config.out_dir.as_deref());

        if dest.exists() && !config.overwrite {
            info!("⏭️  Skip (exists): {}", dest.display());
            summary.skipped += 1;
            continue;
        }

        let file_mode = if config.mode == EncodeMode::Auto {
            mode::resolve(EncodeMode::Auto, &probe_audio(file))
        } else {
            config.mode
        };

        if !has_audio_stream(file) {
            info!("⏭️  Skip (no audio stream): {}", file.display());
            summary.skipped += 1;
            continue;
        }

        info!(
            "🎵 Converting: {} -> {} [{}]",
            file.display(),
            dest.display(),
            file_mode.as_str().to_uppercase()
        );

        convert(&ConversionRequest {
            input: file.clone(),
            output: dest,
            mode: file_mode,
            bitrate: config.bitrate.clone(),
            vbr_quality: config.vbr_quality,
            overwrite: config.overwrite,
        })?;

        info!("✅ OK");
        summary.converted += 1;
    }

    Ok(summary)
}
