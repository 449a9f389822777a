//! FFprobe wrapper module
//!
//! Advisory probing of the first audio stream. Probing can fail for all
//! kinds of mundane reasons (damaged container, exotic muxer, no audio at
//! all), so every failure collapses into an all-`None` [`AudioProbe`]
//! instead of an error.

use serde::Deserialize;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// First audio stream metadata, as far as ffprobe could tell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioProbe {
    pub codec_name: Option<String>,
    pub bit_rate: Option<u64>,
    pub channels: Option<u32>,
    pub sample_rate: Option<u32>,
}

impl AudioProbe {
    pub fn is_unknown(&self) -> bool {
        self.codec_name.is_none()
    }
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

// ffprobe's JSON writer emits bit_rate and sample_rate as strings.
#[derive(Debug, Deserialize)]
struct ProbeStream {
    codec_name: Option<String>,
    bit_rate: Option<String>,
    channels: Option<u32>,
    sample_rate: Option<String>,
}

/// Probe the first audio stream of `path`.
///
/// Never fails: spawn errors, nonzero exit, malformed JSON and zero audio
/// streams all yield `AudioProbe::default()`.
pub fn probe_audio(path: &Path) -> AudioProbe {
    let output = match Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "a:0",
            "-show_entries",
            "stream=codec_name,bit_rate,channels,sample_rate",
            "-of",
            "json",
            "--",
        ])
        .arg(path)
        .output()
    {
        Ok(out) if out.status.success() => out,
        Ok(out) => {
            debug!(
                "ffprobe exited with {:?} for {}",
                out.status.code(),
                path.display()
            );
            return AudioProbe::default();
        }
        Err(e) => {
            debug!("ffprobe spawn failed for {}: {}", path.display(), e);
            return AudioProbe::default();
        }
    };

    parse_audio_probe(&String::from_utf8_lossy(&output.stdout))
}

/// Parse the JSON body of a `probe_audio` invocation.
pub fn parse_audio_probe(json: &str) -> AudioProbe {
    let parsed: ProbeOutput = match serde_json::from_str(json) {
        Ok(p) => p,
        Err(e) => {
            debug!("ffprobe output did not parse: {}", e);
            return AudioProbe::default();
        }
    };

    let Some(stream) = parsed.streams.into_iter().next() else {
        return AudioProbe::default();
    };

    AudioProbe {
        codec_name: stream.codec_name,
        bit_rate: stream.bit_rate.and_then(|s| s.parse().ok()),
        channels: stream.channels,
        sample_rate: stream.sample_rate.and_then(|s| s.parse().ok()),
    }
}

/// Whether `path` carries at least one audio stream. False on any failure.
pub fn has_audio_stream(path: &Path) -> bool {
    let output = match Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "a",
            "-show_entries",
            "stream=index",
            "-of",
            "json",
            "--",
        ])
        .arg(path)
        .output()
    {
        Ok(out) if out.status.success() => out,
        _ => return false,
    };

    serde_json::from_str::<ProbeOutput>(&String::from_utf8_lossy(&output.stdout))
        .map(|p| !p.streams.is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_stream() {
        let json = r#"{
            "streams": [
                {
                    "codec_name": "aac",
                    "sample_rate": "44100",
                    "channels": 2,
                    "bit_rate": "128013"
                }
            ]
        }"#;

        let probe = parse_audio_probe(json);
        assert_eq!(probe.codec_name.as_deref(), Some("aac"));
        assert_eq!(probe.bit_rate, Some(128013));
        assert_eq!(probe.channels, Some(2));
        assert_eq!(probe.sample_rate, Some(44100));
        assert!(!probe.is_unknown());
    }

    #[test]
    fn test_parse_partial_stream() {
        // Stream-copied tracks often lack bit_rate.
        let json = r#"{"streams": [{"codec_name": "mp3", "channels": 2}]}"#;
        let probe = parse_audio_probe(json);
        assert_eq!(probe.codec_name.as_deref(), Some("mp3"));
        assert_eq!(probe.bit_rate, None);
        assert_eq!(probe.channels, Some(2));
        assert_eq!(probe.sample_rate, None);
    }

    #[test]
    fn test_parse_no_streams() {
        assert_eq!(parse_audio_probe(r#"{"streams": []}"#), AudioProbe::default());
        assert_eq!(parse_audio_probe(r#"{}"#), AudioProbe::default());
    }

    #[test]
    fn test_parse_malformed() {
        let cases = ["", "not json", r#"{"streams": "nope"}"#, "{"];
        for json in cases {
            let probe = parse_audio_probe(json);
            assert!(probe.is_unknown(), "expected unknown probe for {:?}", json);
        }
    }

    #[test]
    fn test_parse_unparsable_numerics() {
        let json = r#"{"streams": [{"codec_name": "aac", "bit_rate": "N/A", "sample_rate": ""}]}"#;
        let probe = parse_audio_probe(json);
        assert_eq!(probe.codec_name.as_deref(), Some("aac"));
        assert_eq!(probe.bit_rate, None);
        assert_eq!(probe.sample_rate, None);
    }

    #[test]
    fn test_probe_missing_file_is_unknown() {
        // ffprobe missing or failing must degrade to "unknown", not error.
        let probe = probe_audio(Path::new("/definitely/not/here.mp4"));
        assert!(probe.is_unknown());
        assert!(!has_audio_stream(Path::new("/definitely/not/here.mp4")));
    }
}
