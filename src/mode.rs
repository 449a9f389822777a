//! Encoding mode selection.

use clap::ValueEnum;

use crate::errors::{ConvertError, Result};
use crate::ffprobe::AudioProbe;

/// Codec name ffprobe reports for tracks that are already our target.
pub const TARGET_AUDIO_CODEC: &str = "mp3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodeMode {
    /// Decide per file from the probed source codec.
    Auto,
    /// Constant bitrate (`-b:a`).
    Cbr,
    /// Variable bitrate quality level (`-q:a`).
    Vbr,
    /// Remux the existing audio bitstream, no re-encode.
    Copy,
}

impl EncodeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodeMode::Auto => "auto",
            EncodeMode::Cbr => "cbr",
            EncodeMode::Vbr => "vbr",
            EncodeMode::Copy => "copy",
        }
    }
}

impl std::fmt::Display for EncodeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate the `--vbr-q` flag. Out-of-range values are fatal before any
/// file is scanned or processed.
pub fn validate_vbr_quality(value: i64) -> Result<u8> {
    if (0..=9).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ConvertError::VbrQualityOutOfRange(value))
    }
}

/// Resolve the concrete per-file mode.
///
/// Explicit modes pass through untouched. `Auto` becomes `Copy` when the
/// source audio is already the target codec (re-encoding lossy audio only
/// loses quality), and `Vbr` otherwise, including when the probe came back
/// empty. `Auto` never resolves to `Cbr`.
pub fn resolve(requested: EncodeMode, probe: &AudioProbe) -> EncodeMode {
    match requested {
        EncodeMode::Auto => match probe.codec_name.as_deref() {
            Some(codec) if codec.eq_ignore_ascii_case(TARGET_AUDIO_CODEC) => EncodeMode::Copy,
            _ => EncodeMode::Vbr,
        },
        explicit => explicit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe_with_codec(codec: &str) -> AudioProbe {
        AudioProbe {
            codec_name: Some(codec.to_string()),
            ..AudioProbe::default()
        }
    }

    #[test]
    fn test_auto_copies_target_codec() {
        for codec in ["mp3", "MP3", "Mp3"] {
            assert_eq!(
                resolve(EncodeMode::Auto, &probe_with_codec(codec)),
                EncodeMode::Copy,
                "codec {:?} should resolve to copy",
                codec
            );
        }
    }

    #[test]
    fn test_auto_reencodes_other_codecs() {
        for codec in ["aac", "ac3", "opus", "pcm_s16le", "mp2"] {
            assert_eq!(
                resolve(EncodeMode::Auto, &probe_with_codec(codec)),
                EncodeMode::Vbr,
                "codec {:?} should resolve to vbr",
                codec
            );
        }
    }

    #[test]
    fn test_auto_falls_back_to_vbr_on_unknown() {
        assert_eq!(
            resolve(EncodeMode::Auto, &AudioProbe::default()),
            EncodeMode::Vbr
        );
    }

    #[test]
    fn test_vbr_quality_range() {
        let cases: &[(i64, Option<u8>)] = &[
            (-1, None),
            (0, Some(0)),
            (2, Some(2)),
            (9, Some(9)),
            (10, None),
            (i64::MIN, None),
            (i64::MAX, None),
        ];

        for (value, expected) in cases {
            let result = validate_vbr_quality(*value);
            match expected {
                Some(q) => assert_eq!(result.unwrap(), *q, "vbr-q {} should be accepted", value),
                None => assert!(
                    matches!(result, Err(ConvertError::VbrQualityOutOfRange(v)) if v == *value),
                    "vbr-q {} should be rejected",
                    value
                ),
            }
        }
    }

    #[test]
    fn test_explicit_modes_pass_through() {
        // An explicit choice wins no matter what probing would say.
        let mp3 = probe_with_codec("mp3");
        let aac = probe_with_codec("aac");
        for probe in [&mp3, &aac, &AudioProbe::default()] {
            assert_eq!(resolve(EncodeMode::Cbr, probe), EncodeMode::Cbr);
            assert_eq!(resolve(EncodeMode::Vbr, probe), EncodeMode::Vbr);
            assert_eq!(resolve(EncodeMode::Copy, probe), EncodeMode::Copy);
        }
    }
}
