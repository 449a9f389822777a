use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use mp4_to_mp3::{
    collect_candidates, ensure_tools, logging, run_conversion, validate_vbr_quality, ConvertError,
    EncodeMode, LinePrompter, Prompter, RunConfig,
};

const EXAMPLES: &str = "\
Examples:
  mp4-to-mp3 ~/Downloads/video.mp4
  mp4-to-mp3 ~/Downloads/mp4s --recursive
  mp4-to-mp3 ~/Downloads/mp4s -o ~/Music/mp3 --mode vbr --vbr-q 2
  mp4-to-mp3 ~/Downloads/video.mp4 --mode cbr -b 192k
  mp4-to-mp3 ~/Downloads/video.mp4 --mode auto";

#[derive(Parser)]
#[command(name = "mp4-to-mp3")]
#[command(
    version,
    about = "Convert MP4/M4V/MOV files to MP3 using ffmpeg (interactive prompts + auto-detect)",
    after_help = EXAMPLES
)]
struct Cli {
    /// Input file or directory (MP4/M4V/MOV)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory. Defaults to each source file's own directory
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Encoding mode. 'auto' detects the source codec via ffprobe
    #[arg(long, value_enum, default_value_t = EncodeMode::Auto)]
    mode: EncodeMode,

    /// CBR bitrate (e.g. 128k, 192k, 320k)
    #[arg(short, long, default_value = "192k")]
    bitrate: String,

    /// VBR quality 0..9 (0 best)
    #[arg(long = "vbr-q", value_name = "N", default_value_t = 2)]
    vbr_q: i64,

    /// Scan subfolders recursively (when input is a directory)
    #[arg(long)]
    recursive: bool,

    /// Overwrite existing MP3 files
    #[arg(long)]
    overwrite: bool,

    /// Disable interactive prompts (use defaults/flags only)
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> anyhow::Result<()> {
    let _ = logging::init_logging();

    let cli = Cli::parse();

    ensure_tools()?;

    if !cli.input.exists() {
        return Err(ConvertError::PathNotFound(cli.input.display().to_string()).into());
    }

    let vbr_quality = validate_vbr_quality(cli.vbr_q)?;

    let mut prompter = LinePrompter::stdin();

    // Directory scans ask about recursion unless the flag settled it.
    let recursive = if cli.input.is_dir() && !cli.recursive && !cli.no_prompt {
        prompter.ask_yes_no("Scan subfolders recursively?", true)
    } else {
        cli.recursive
    };

    // Auto mode offers a one-shot override before the loop; picking 'a'
    // keeps per-file detection.
    let mut mode = cli.mode;
    if mode == EncodeMode::Auto && !cli.no_prompt {
        let choice = prompter.ask_choice(
            "Encoding mode? (auto detects via ffprobe)",
            &[('a', "AUTO"), ('c', "CBR"), ('v', "VBR")],
            'a',
        );
        mode = match choice {
            'c' => EncodeMode::Cbr,
            'v' => EncodeMode::Vbr,
            _ => EncodeMode::Auto,
        };
    }

    let files = collect_candidates(&cli.input, recursive)?;
    info!("📂 Found {} file(s) to process", files.len());

    let config = RunConfig {
        out_dir: cli.out,
        mode,
        bitrate: cli.bitrate,
        vbr_quality,
        overwrite: cli.overwrite,
    };

    let summary = run_conversion(&files, &config)?;

    info!(
        "📊 Done: {} converted, {} skipped ({} total)",
        summary.converted,
        summary.skipped,
        summary.total()
    );

    Ok(())
}
