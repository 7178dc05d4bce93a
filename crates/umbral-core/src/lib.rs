//! Umbral Core - hysteresis noise gate DSP
//!
//! This crate implements the gating algorithm behind the `umbral` tools: a
//! time-domain noise gate that attenuates a signal once its magnitude has
//! stayed below a threshold for long enough, and restores it smoothly when
//! the signal returns. Designed for real-time use with zero allocation in
//! the audio path.
//!
//! # Core Abstractions
//!
//! - [`GateConfig`] - user-facing settings (dB, milliseconds), immutable
//!   once an engine is built
//! - [`GateParams`] - the same settings resolved to linear amplitude,
//!   sample counts, and per-sample smoothing factors
//! - [`NoiseGate`] - the stateful engine; one instance per audio stream
//! - [`Effect`] - object-safe processing trait (per-sample and block forms)
//!
//! # How the gate decides
//!
//! Each sample updates a binary control signal (at/above threshold → `1.0`,
//! below → `0.0`) and a counter of consecutive below-threshold samples. The
//! applied gain is a one-pole smoothed envelope chasing the control signal:
//! it only starts closing after the counter exceeds the sustain length, so
//! brief dips do not pump the gate, and it re-opens as soon as the signal
//! crosses back over the threshold.
//!
//! # Example
//!
//! ```rust
//! use umbral_core::{Effect, GateConfig, NoiseGate};
//!
//! let mut config = GateConfig::new(44100);
//! config.threshold_db = -40.0;
//!
//! let mut gate = NoiseGate::new(config)?;
//! let mut buffer = [0.5_f32; 256];
//! gate.process_block_inplace(&mut buffer);
//! # Ok::<(), umbral_core::ConfigError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded use. Disable the default
//! `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! umbral-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: no allocations in processing paths
//! - **No dependencies on std**: pure `no_std` with `libm` for math
//! - **Construction-time fallibility**: configuration errors surface when
//!   an engine is built, never during processing

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod effect;
pub mod gate;
pub mod math;

// Re-export main types at crate root
pub use config::{
    ConfigError, DEFAULT_ATTACK_MS, DEFAULT_RELEASE_MS, DEFAULT_SUSTAIN_MS, DEFAULT_THRESHOLD_DB,
    GateConfig, GateParams, THRESHOLD_FLOOR_DB,
};
pub use effect::Effect;
pub use gate::NoiseGate;
pub use math::{db_to_linear, flush_denormal, linear_to_db, ms_to_samples};
