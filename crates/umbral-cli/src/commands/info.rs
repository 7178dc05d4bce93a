//! Display WAV file metadata.

use clap::Args;
use umbral_io::{WavFormat, read_wav_info};

/// Display WAV file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    let encoding = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:         {}", args.file.display());
    println!("Encoding:     {} {}-bit", encoding, info.bits_per_sample);
    println!("Channels:     {}", info.channels);
    println!("Sample rate:  {} Hz", info.sample_rate);
    println!(
        "Duration:     {:.3} s ({} frames)",
        info.duration_secs, info.num_frames
    );
    println!("Size:         {}", format_bytes(info.size_bytes));

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
