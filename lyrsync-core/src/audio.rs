//! Audio probing utilities.
//!
//! The recorder never decodes audio; playback happens in the driving UI.
//! The core only needs a playable duration to show alongside the session,
//! and a probe failure must degrade to "no duration" rather than block
//! timestamping.

use crate::error::Result;
use hound::WavReader;
use std::path::Path;

/// Read the playable duration of a WAV file in seconds.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid WAV file.
pub fn probe_duration(path: impl AsRef<Path>) -> Result<f64> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    Ok(reader.duration() as f64 / spec.sample_rate as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavSpec, WavWriter};
    use std::path::Path;

    fn create_test_wav(path: &Path, sample_rate: u32, samples: usize) -> hound::Result<()> {
        let spec = WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec)?;
        for _ in 0..samples {
            writer.write_sample(0i16)?;
        }
        writer.finalize()?;
        Ok(())
    }

    #[test]
    fn probes_duration() {
        let path = std::env::temp_dir().join("lyrsync_probe.wav");
        create_test_wav(&path, 16000, 8000).unwrap();

        let duration = probe_duration(&path).unwrap();

        assert!((duration - 0.5).abs() < 0.001);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_non_wav_bytes() {
        let path = std::env::temp_dir().join("lyrsync_probe_garbage.wav");
        std::fs::write(&path, b"definitely not a wav file").unwrap();

        let result = probe_duration(&path);

        assert!(result.is_err());
        if let Err(e) = result {
            assert!(matches!(e, crate::error::Error::Audio(_)));
        }

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_an_audio_error() {
        let result = probe_duration("/nonexistent/lyrsync.wav");

        assert!(matches!(result, Err(crate::error::Error::Audio(_))));
    }
}
