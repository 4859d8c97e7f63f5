//! WAV file input/output

use crate::{buffer::AudioBuffer, CoreError, Result};
use std::path::Path;
use tracing::{debug, info};

const I16_SCALE: f32 = 32767.0;

fn map_create_error(err: hound::Error, path: &Path) -> CoreError {
    match err {
        hound::Error::IoError(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            CoreError::PermissionDenied {
                path: path.display().to_string(),
            }
        }
        other => CoreError::Wav(other),
    }
}

/// Write samples to a 16-bit mono WAV file
pub fn write_wav_file(buffer: &AudioBuffer, path: &Path) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).map_err(|e| map_create_error(e, path))?;

    for sample in buffer.data() {
        let amplitude = (sample * I16_SCALE).clamp(-I16_SCALE, I16_SCALE) as i16;
        writer.write_sample(amplitude)?;
    }

    writer.finalize()?;
    info!("Wrote {} samples to {:?}", buffer.len(), path);
    Ok(())
}

/// Read a 16-bit mono WAV file back into a buffer
pub fn read_wav_file(path: &Path) -> Result<AudioBuffer> {
    let mut reader = hound::WavReader::open(path)?;
    let sample_rate = reader.spec().sample_rate;

    let samples = reader
        .samples::<i16>()
        .map(|s| s.map(|v| v as f32 / I16_SCALE))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    debug!("Read {} samples from {:?}", samples.len(), path);
    AudioBuffer::from_data(samples, sample_rate)
}
