use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{0} not found. Install via Homebrew: brew install ffmpeg")]
    ToolNotFound(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("No MP4/M4V/MOV files found in: {0}")]
    NoCandidates(String),

    #[error("--vbr-q must be between 0 and 9, got {0}")]
    VbrQualityOutOfRange(i64),

    #[error("Unknown mode reached the encoder: {0}")]
    UnresolvedMode(String),

    #[error("Conversion failed: {0}")]
    ConversionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
