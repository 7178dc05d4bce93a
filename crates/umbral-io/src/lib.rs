//! WAV file I/O layer for the umbral noise gate.
//!
//! This crate moves audio between WAV files and the normalized `f32` sample
//! format the gate operates on:
//!
//! - **Loading**: [`read_wav`] returns mono `f32` samples (multi-channel files
//!   are mixed down by averaging)
//! - **Saving**: [`write_wav`] encodes samples as PCM 16/24/32 or 32-bit
//!   IEEE float
//! - **Inspection**: [`read_wav_info`] reads format metadata without loading
//!   sample data
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use umbral_io::{read_wav, write_wav};
//!
//! // Load audio file (any channel count, any supported encoding)
//! let (samples, spec) = read_wav("input.wav")?;
//!
//! // ... gate the samples ...
//!
//! // Save result with the same rate and encoding
//! write_wav("output.wav", &samples, spec)?;
//! ```

mod wav;

pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio file I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample encoding cannot be written.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio file I/O.
pub type Result<T> = std::result::Result<T, Error>;
