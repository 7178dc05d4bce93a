//! Test signal generation command.
//!
//! These signals are aimed at exercising the gate: `tone` and `silence` are
//! the two steady states, `burst` alternates them at a configurable period.

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use umbral_io::{WavSpec, write_wav};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate silence
    Silence {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,
    },

    /// Generate alternating tone and silence segments
    Burst {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Tone frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Length of each tone/silence segment in seconds
        #[arg(long, default_value = "0.5")]
        period: f32,

        /// Total duration in seconds
        #[arg(long, default_value = "2.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            println!("Generating sine tone...");
            println!("  {} Hz for {:.2}s", freq, duration);

            let num_samples = (duration * sample_rate as f32) as usize;
            let samples: Vec<f32> = (0..num_samples)
                .map(|i| sine_sample(freq, sample_rate, i) * amplitude)
                .collect();

            write_output(&output, &samples, sample_rate)?;
        }

        GenerateCommand::Silence {
            output,
            duration,
            sample_rate,
        } => {
            println!("Generating silence...");
            println!("  {:.2}s at {} Hz", duration, sample_rate);

            let num_samples = (duration * sample_rate as f32) as usize;
            let samples = vec![0.0; num_samples];

            write_output(&output, &samples, sample_rate)?;
        }

        GenerateCommand::Burst {
            output,
            freq,
            period,
            duration,
            sample_rate,
            amplitude,
        } => {
            println!("Generating tone bursts...");
            println!(
                "  {} Hz, {:.2}s on / {:.2}s off, {:.2}s total",
                freq, period, period, duration
            );

            let period_samples = (period * sample_rate as f32) as usize;
            anyhow::ensure!(period_samples > 0, "--period must span at least one sample");

            let num_samples = (duration * sample_rate as f32) as usize;
            let samples: Vec<f32> = (0..num_samples)
                .map(|i| {
                    // Even segments carry the tone, odd segments are silent.
                    if (i / period_samples) % 2 == 0 {
                        sine_sample(freq, sample_rate, i) * amplitude
                    } else {
                        0.0
                    }
                })
                .collect();

            write_output(&output, &samples, sample_rate)?;
        }
    }

    Ok(())
}

fn sine_sample(freq: f32, sample_rate: u32, index: usize) -> f32 {
    let t = index as f32 / sample_rate as f32;
    (2.0 * std::f32::consts::PI * freq * t).sin()
}

/// Write generated samples as 32-bit float and report the result.
fn write_output(output: &Path, samples: &[f32], sample_rate: u32) -> anyhow::Result<()> {
    let spec = WavSpec {
        sample_rate,
        ..WavSpec::default()
    };

    write_wav(output, samples, spec)?;
    println!("Wrote {} samples to {}", samples.len(), output.display());
    Ok(())
}
