//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Audio encoding format.
    pub format: WavFormat,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// File size on disk in bytes.
    pub size_bytes: u64,
}

/// Read WAV metadata without loading sample data.
///
/// Opens the file, reads the header, and returns a [`WavInfo`] with format
/// details, duration, and on-disk size. This is much faster than [`read_wav`]
/// for files where you only need metadata.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let total_samples = reader.len() as u64; // total across all channels
    let num_frames = total_samples / spec.channels as u64;
    let duration_secs = num_frames as f64 / spec.sample_rate as f64;
    let size_bytes = std::fs::metadata(path)?.len();

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        format: spec.format,
        num_frames,
        duration_secs,
        size_bytes,
    })
}

/// WAV file specification.
#[derive(Debug, Clone, Copy)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (16, 24, or 32).
    pub bits_per_sample: u16,
    /// Sample encoding: integer PCM or IEEE float.
    pub format: WavFormat,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
            format: WavFormat::IeeeFloat,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            format: match spec.sample_format {
                SampleFormat::Float => WavFormat::IeeeFloat,
                SampleFormat::Int => WavFormat::Pcm,
            },
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: match spec.format {
                WavFormat::IeeeFloat => SampleFormat::Float,
                WavFormat::Pcm => SampleFormat::Int,
            },
        }
    }
}

/// Full-scale magnitude for signed PCM at the given bit depth.
///
/// The shift runs in i64 so 32-bit PCM does not overflow.
fn pcm_full_scale(bits: u16) -> f32 {
    (1i64 << (bits - 1)) as f32
}

/// Read a WAV file and return samples as mono f32 along with the spec.
///
/// Multi-channel files are mixed down to mono by averaging channels. PCM
/// samples are normalized to the [-1.0, 1.0) range; float samples are passed
/// through unchanged.
///
/// # Example
/// ```ignore
/// let (samples, spec) = read_wav("input.wav")?;
/// println!("Loaded {} samples at {} Hz", samples.len(), spec.sample_rate);
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = spec.channels as usize;

    let samples: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let full_scale = pcm_full_scale(spec.bits_per_sample);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    // Mix down to mono if multi-channel
    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    tracing::info!(
        frames = mono.len(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        "wav loaded"
    );

    Ok((mono, spec))
}

/// Write mono samples to a WAV file.
///
/// The encoding is taken from `spec.format` and `spec.bits_per_sample`:
/// 32-bit IEEE float samples are written as-is, PCM 16/24/32 samples are
/// quantized from the normalized [-1.0, 1.0) range with clamping. The output
/// is always a single channel; `spec.channels` is overridden to 1.
///
/// # Example
/// ```ignore
/// let samples = vec![0.0f32; 48000]; // 1 second of silence
/// let spec = WavSpec { sample_rate: 48000, ..Default::default() };
/// write_wav("output.wav", &samples, spec)?;
/// ```
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], spec: WavSpec) -> Result<()> {
    validate_encoding(spec)?;

    let mut mono_spec = spec;
    mono_spec.channels = 1;
    let mut writer = WavWriter::create(path, hound::WavSpec::from(mono_spec))?;

    match spec.format {
        WavFormat::IeeeFloat => {
            for &sample in samples {
                writer.write_sample(sample)?;
            }
        }
        WavFormat::Pcm => {
            let full_scale = pcm_full_scale(spec.bits_per_sample);
            for &sample in samples {
                let quantized =
                    (sample * full_scale).clamp(-full_scale, full_scale - 1.0) as i32;
                writer.write_sample(quantized)?;
            }
        }
    }

    writer.finalize()?;

    tracing::info!(
        frames = samples.len(),
        bits = spec.bits_per_sample,
        sample_rate = spec.sample_rate,
        "wav written"
    );

    Ok(())
}

/// Reject encodings hound cannot represent before creating the file.
fn validate_encoding(spec: WavSpec) -> Result<()> {
    match (spec.format, spec.bits_per_sample) {
        (WavFormat::IeeeFloat, 32) | (WavFormat::Pcm, 16 | 24 | 32) => Ok(()),
        (WavFormat::IeeeFloat, bits) => Err(Error::UnsupportedFormat(format!(
            "{bits}-bit float (only 32-bit float output is supported)"
        ))),
        (WavFormat::Pcm, bits) => Err(Error::UnsupportedFormat(format!(
            "{bits}-bit PCM (supported depths: 16, 24, 32)"
        ))),
    }
}
