//! mp4-to-mp3 - Convert MP4/M4V/MOV audio tracks to MP3 via ffmpeg
//!
//! Sequential, process-per-file CLI tool: collect candidate files, resolve
//! an encoding mode per file (probing the source codec in auto mode), then
//! shell out to ffmpeg. ffmpeg and ffprobe are treated as black boxes
//! driven through argv and observed through exit codes and JSON output.

pub mod collect;
pub mod encoder;
pub mod errors;
pub mod ffprobe;
pub mod logging;
pub mod mode;
pub mod prompt;
pub mod run;

pub use collect::{collect_candidates, has_video_extension, VIDEO_EXTENSIONS};
pub use encoder::{build_ffmpeg_args, convert, destination_for, ConversionRequest};
pub use errors::{ConvertError, Result};
pub use ffprobe::{has_audio_stream, probe_audio, AudioProbe};
pub use mode::{resolve, validate_vbr_quality, EncodeMode, TARGET_AUDIO_CODEC};
pub use prompt::{LinePrompter, Prompter};
pub use run::{run_conversion, RunConfig, RunSummary};

/// Verify the external tools are on PATH before doing any work.
pub fn ensure_tools() -> Result<()> {
    for tool in ["ffmpeg", "ffprobe"] {
        which::which(tool).map_err(|_| ConvertError::ToolNotFound(tool.to_string()))?;
    }
    Ok(())
}
