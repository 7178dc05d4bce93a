//! Sample-by-sample comparison of two WAV files.
//!
//! Pure measurement: useful for checking a gated file against its original,
//! or two gated outputs against each other (e.g. different block sizes,
//! which must match exactly).

use clap::Args;
use std::path::PathBuf;
use umbral_core::linear_to_db;
use umbral_io::read_wav;

use super::{peak, rms};

#[derive(Args)]
pub struct CompareArgs {
    /// First audio file (e.g., the ungated original)
    #[arg(value_name = "FILE_A")]
    file_a: PathBuf,

    /// Second audio file (e.g., the gated output)
    #[arg(value_name = "FILE_B")]
    file_b: PathBuf,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let (a_samples, a_spec) = read_wav(&args.file_a)?;
    let (b_samples, b_spec) = read_wav(&args.file_b)?;

    if a_spec.sample_rate != b_spec.sample_rate {
        anyhow::bail!(
            "Sample rate mismatch: {} vs {}",
            a_spec.sample_rate,
            b_spec.sample_rate
        );
    }

    let len = a_samples.len().min(b_samples.len());
    if a_samples.len() != b_samples.len() {
        println!(
            "Lengths differ ({} vs {}); comparing the first {} samples",
            a_samples.len(),
            b_samples.len(),
            len
        );
    }
    let a = &a_samples[..len];
    let b = &b_samples[..len];

    println!(
        "Comparing {} samples ({:.2}s at {} Hz)",
        len,
        len as f32 / a_spec.sample_rate as f32,
        a_spec.sample_rate
    );
    println!();
    println!(
        "  A: RMS {:>7.1} dBFS, Peak {:>7.1} dBFS   {}",
        linear_to_db(rms(a)),
        linear_to_db(peak(a)),
        args.file_a.display()
    );
    println!(
        "  B: RMS {:>7.1} dBFS, Peak {:>7.1} dBFS   {}",
        linear_to_db(rms(b)),
        linear_to_db(peak(b)),
        args.file_b.display()
    );
    println!();

    let (max_diff, max_at) = max_abs_diff(a, b);
    println!("  Residual RMS:  {:.1} dBFS", linear_to_db(residual_rms(a, b)));
    println!("  Max |A - B|:   {:.6} at sample {}", max_diff, max_at);

    let verdict = if max_diff == 0.0 {
        "bit-identical"
    } else if max_diff < 1e-6 {
        "matching within float rounding"
    } else {
        "differing"
    };
    println!("\n  Files are {verdict}.");

    Ok(())
}

/// RMS of the difference signal `a - b`.
fn residual_rms(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() {
        return 0.0;
    }
    let sum: f32 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    (sum / a.len() as f32).sqrt()
}

/// Largest absolute sample difference and the index where it occurs.
fn max_abs_diff(a: &[f32], b: &[f32]) -> (f32, usize) {
    let mut max = 0.0f32;
    let mut at = 0;
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        let d = (x - y).abs();
        if d > max {
            max = d;
            at = i;
        }
    }
    (max, at)
}
