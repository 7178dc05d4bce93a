//! File-based gating command.

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use umbral_core::{Effect, GateConfig, NoiseGate, linear_to_db};
use umbral_io::{WavFormat, WavSpec, read_wav, write_wav};

use super::{peak, rms};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Gate threshold in dBFS; -80 or below disables gating
    #[arg(long, allow_negative_numbers = true)]
    threshold_db: Option<f32>,

    /// Closing time in milliseconds, once the sustain period has elapsed
    #[arg(long)]
    attack_ms: Option<f32>,

    /// Grace period in milliseconds before the gate starts closing
    #[arg(long)]
    sustain_ms: Option<f32>,

    /// Opening time in milliseconds, once signal returns
    #[arg(long)]
    release_ms: Option<f32>,

    /// Preset file (TOML) with gate settings; explicit flags take precedence
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output PCM bit depth (16, 24, or 32); defaults to the input encoding
    #[arg(long)]
    bit_depth: Option<u16>,

    /// Write 32-bit IEEE float output
    #[arg(long, conflicts_with = "bit_depth")]
    float: bool,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.block_size > 0, "--block-size must be at least 1");

    // Read input file
    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav(&args.input)?;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f32 / sample_rate
    );

    let config = resolve_config(&args, spec.sample_rate)?;
    println!(
        "Gate: threshold {:.1} dB, attack {:.0} ms, sustain {:.0} ms, release {:.0} ms",
        config.threshold_db, config.attack_ms, config.sustain_ms, config.release_ms
    );

    // All configuration errors surface here, before any audio is touched.
    let mut gate = NoiseGate::new(config)?;

    // Process in blocks with a progress bar
    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut output = vec![0.0; samples.len()];
    let block_size = args.block_size;

    let start = Instant::now();
    for (i, (in_chunk, out_chunk)) in samples
        .chunks(block_size)
        .zip(output.chunks_mut(block_size))
        .enumerate()
    {
        gate.process_block(in_chunk, out_chunk);
        pb.set_position(((i + 1) * block_size).min(samples.len()) as u64);
    }
    let elapsed = start.elapsed();

    pb.finish_with_message("done");

    // Level stats
    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dBFS, Peak {:.1} dBFS",
        linear_to_db(rms(&samples)),
        linear_to_db(peak(&samples))
    );
    println!(
        "  Output: RMS {:.1} dBFS, Peak {:.1} dBFS",
        linear_to_db(rms(&output)),
        linear_to_db(peak(&output))
    );

    let audio_secs = samples.len() as f64 / f64::from(spec.sample_rate);
    println!(
        "\nProcessed {:.2}s of audio in {:.1} ms ({:.0}x realtime)",
        audio_secs,
        elapsed.as_secs_f64() * 1000.0,
        audio_secs / elapsed.as_secs_f64()
    );

    // Write output file
    let out_spec = output_spec(&args, spec);
    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &output, out_spec)?;
    println!("Done!");

    Ok(())
}

/// Merge defaults, preset file, and explicit flags into a gate config.
///
/// Precedence, lowest to highest: built-in defaults, preset values, flags.
fn resolve_config(args: &ProcessArgs, sample_rate: u32) -> anyhow::Result<GateConfig> {
    let preset = match &args.preset {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading preset {}", path.display()))?;
            let preset: Preset = toml::from_str(&content)
                .with_context(|| format!("parsing preset {}", path.display()))?;
            if let Some(name) = &preset.name {
                println!("Using preset: {name}");
            }
            preset
        }
        None => Preset::default(),
    };

    let mut config = GateConfig::new(sample_rate);
    if let Some(db) = args.threshold_db.or(preset.threshold_db) {
        config.threshold_db = db;
    }
    if let Some(ms) = args.attack_ms.or(preset.attack_ms) {
        config.attack_ms = ms;
    }
    if let Some(ms) = args.sustain_ms.or(preset.sustain_ms) {
        config.sustain_ms = ms;
    }
    if let Some(ms) = args.release_ms.or(preset.release_ms) {
        config.release_ms = ms;
    }

    Ok(config)
}

/// Output encoding: flags override, otherwise the input encoding is kept.
fn output_spec(args: &ProcessArgs, input: WavSpec) -> WavSpec {
    if args.float {
        WavSpec {
            bits_per_sample: 32,
            format: WavFormat::IeeeFloat,
            ..input
        }
    } else if let Some(bits) = args.bit_depth {
        WavSpec {
            bits_per_sample: bits,
            format: WavFormat::Pcm,
            ..input
        }
    } else {
        input
    }
}

/// Preset file format: gate settings as TOML, all optional.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct Preset {
    name: Option<String>,
    threshold_db: Option<f32>,
    attack_ms: Option<f32>,
    sustain_ms: Option<f32>,
    release_ms: Option<f32>,
}
