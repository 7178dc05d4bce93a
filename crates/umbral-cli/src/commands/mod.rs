//! CLI command implementations.

pub mod compare;
pub mod generate;
pub mod info;
pub mod process;

/// Root-mean-square level of a sample buffer.
pub(crate) fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

/// Peak absolute level of a sample buffer.
pub(crate) fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}
