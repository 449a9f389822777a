//! FFmpeg invocation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::errors::{ConvertError, Result};
use crate::mode::EncodeMode;

/// Everything one ffmpeg run needs. `mode` must already be resolved;
/// `Auto` reaching the encoder is a configuration error.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: EncodeMode,
    pub bitrate: String,
    pub vbr_quality: u8,
    pub overwrite: bool,
}

/// Build the ffmpeg argv for one request.
///
/// Video is suppressed, the first audio stream is mapped explicitly and
/// container metadata is carried over. The overwrite policy is passed down
/// as `-y`/`-n` so ffmpeg enforces it even if the destination appeared
/// after our own existence check.
pub fn build_ffmpeg_args(req: &ConversionRequest) -> Result<Vec<OsString>> {
    let mut args: Vec<OsString> = vec![
        "-hide_banner".into(),
        "-nostats".into(),
        "-i".into(),
        req.input.as_os_str().to_owned(),
        "-vn".into(),
        "-map".into(),
        "0:a:0".into(),
        "-map_metadata".into(),
        "0".into(),
    ];

    match req.mode {
        EncodeMode::Copy => {
            args.push("-c:a".into());
            args.push("copy".into());
        }
        EncodeMode::Cbr => {
            args.push("-c:a".into());
            args.push("libmp3lame".into());
            args.push("-b:a".into());
            args.push(req.bitrate.as_str().into());
        }
        EncodeMode::Vbr => {
            args.push("-c:a".into());
            args.push("libmp3lame".into());
            args.push("-q:a".into());
            args.push(req.vbr_quality.to_string().into());
        }
        EncodeMode::Auto => {
            return Err(ConvertError::UnresolvedMode(req.mode.to_string()));
        }
    }

    args.push(if req.overwrite { "-y" } else { "-n" }.into());
    args.push(req.output.as_os_str().to_owned());

    Ok(args)
}

/// Run ffmpeg for one request, creating the destination directory first.
///
/// ffmpeg inherits stderr so its own diagnostics stay visible. A nonzero
/// exit is fatal for the run.
pub fn convert(req: &ConversionRequest) -> Result<()> {
    if let Some(parent) = req.output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let args = build_ffmpeg_args(req)?;
    debug!("ffmpeg {:?}", args);

    let status = Command::new("ffmpeg").args(&args).status()?;
    if !status.success() {
        return Err(ConvertError::ConversionFailed(
            req.input.display().to_string(),
        ));
    }

    Ok(())
}

/// Destination path for `input`: output dir (or the source's own parent)
/// plus the source stem with an `.mp3` extension.
pub fn destination_for(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let target_dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    // Append rather than Path::with_extension, which would eat the last
    // dot-separated segment of stems like "my.holiday".
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_owned();
    name.push(".mp3");
    target_dir.join(name)
}
